//! Landing page route handlers.
//!
//! One page, three faces: the bundled example record, the submission form,
//! the fetched result. Which face renders is decided by the session screen;
//! the actions below only drive its transitions and redirect back to `/`.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::state::AppState;
use massima_core::analysis::Outcome;
use massima_core::session::{Record, Screen};

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate {
    record: Option<RecordView>,
    busy: bool,
    error: Option<String>,
}

/// View model for a judgment record (with computed fields).
struct RecordView {
    judge: String,
    badge: String,
    summary: String,
    outcome: String,
    outcome_class: &'static str,
    year: String,
    key_points: Vec<String>,
    legal_references: Vec<String>,
    bundled: bool,
}

impl RecordView {
    fn from_record(record: &Record) -> Self {
        let analysis = record.analysis();
        Self {
            judge: analysis.judge.clone(),
            badge: analysis.header_badge(),
            summary: analysis.summary.clone(),
            outcome: analysis.outcome.as_str().to_string(),
            outcome_class: outcome_class(analysis.outcome),
            year: analysis.year.clone(),
            key_points: analysis.key_points.clone(),
            legal_references: analysis.legal_references.clone(),
            bundled: record.is_bundled(),
        }
    }
}

fn outcome_class(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Favorevole => "favorable",
        Outcome::Sfavorevole => "unfavorable",
        Outcome::Parziale | Outcome::Rinvio | Outcome::Unknown => "partial",
    }
}

// ============================================================
// REQUEST TYPES
// ============================================================

#[derive(Deserialize)]
pub struct AnalyzeForm {
    pub text: String,
}

// ============================================================
// HANDLERS
// ============================================================

/// GET / - Render the landing page for the current session screen.
pub async fn index(State(state): State<AppState>) -> Response {
    let session = state.session.lock().await;
    let template = LandingTemplate {
        record: match session.screen() {
            Screen::Record(record) => Some(RecordView::from_record(record)),
            Screen::Input => None,
        },
        busy: session.is_busy(),
        error: session.error().map(str::to_string),
    };
    drop(session);

    render(template)
}

/// POST /analyze - Run one analysis over the submitted text.
///
/// Whitespace-only input and re-entrant submissions redirect back without
/// touching the analyzer; either way exactly one outbound call happens per
/// accepted submission.
pub async fn analyze(State(state): State<AppState>, Form(form): Form<AnalyzeForm>) -> Redirect {
    let text = form.text.trim().to_string();
    if text.is_empty() {
        return Redirect::to("/");
    }

    {
        let mut session = state.session.lock().await;
        if !session.begin_analysis() {
            return Redirect::to("/");
        }
    }

    // Lock released while the call is in flight; the busy flag gates re-entry.
    let outcome = state.analyzer.analyze(&text).await;
    if let Err(err) = &outcome {
        tracing::error!(error = %err, "analysis failed");
    }

    state.session.lock().await.finish_analysis(outcome);
    Redirect::to("/")
}

/// POST /reset - Clear the current record and show the empty form.
pub async fn reset(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.reset();
    Redirect::to("/")
}

/// POST /example - Back to the bundled example record.
pub async fn show_example(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.show_example();
    Redirect::to("/")
}

/// Fallback - Every unknown path goes home.
pub async fn not_found() -> Redirect {
    Redirect::to("/")
}

// ============================================================
// HELPERS
// ============================================================

fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("Template error: {}", e)),
        )
            .into_response(),
    }
}
