//! Analysis domain models.

use serde::{Deserialize, Serialize};

/// Structured analysis of a single tax-court judgment.
///
/// Field names on the wire are camelCase, matching the JSON payload the
/// model is asked to produce. `legal_references` and `key_points` default
/// to empty when the payload omits them; the remaining fields are required
/// and a payload missing any of them fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub summary: String,
    pub outcome: Outcome,
    pub judge: String,
    pub year: String,
    #[serde(default)]
    pub case_number: Option<String>,
    #[serde(default)]
    pub legal_references: Vec<String>,
    #[serde(default)]
    pub key_points: Vec<String>,
}

impl Analysis {
    /// Label shown in the document header: the case number when the
    /// judgment carries one, otherwise the year.
    pub fn header_badge(&self) -> String {
        match &self.case_number {
            Some(n) => n.clone(),
            None => format!("ANNO {}", self.year),
        }
    }
}

/// Outcome of a judgment for the taxpayer party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Favorevole,
    Sfavorevole,
    Parziale,
    Rinvio,
    Unknown,
}

impl Outcome {
    /// Wire/display form (the uppercase Italian label).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Favorevole => "FAVOREVOLE",
            Self::Sfavorevole => "SFAVOREVOLE",
            Self::Parziale => "PARZIALE",
            Self::Rinvio => "RINVIO",
            Self::Unknown => "UNKNOWN",
        }
    }
}
