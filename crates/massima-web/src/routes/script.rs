//! Script viewer route handler.
//!
//! Serves the bundled extraction script as a read-only page for manual
//! copy-paste. The script content is opaque to this system: displayed,
//! never parsed, never executed.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

const SCRAPER_SOURCE: &str = include_str!("../../assets/scraper.py");

#[derive(Template)]
#[template(path = "script.html")]
struct ScriptTemplate {
    source: &'static str,
}

/// GET /script - Serve the extraction-script page.
pub async fn index() -> Response {
    let template = ScriptTemplate {
        source: SCRAPER_SOURCE,
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("Template error: {}", e)),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_script_page_embeds_the_source() {
        let response = index().await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("from selenium import webdriver"));
        assert!(body.contains("Copia Script"));
    }
}
