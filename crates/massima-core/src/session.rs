//! Landing-page view model.
//!
//! Ports the screen flow of the analyzer page to an explicit state machine:
//! the bundled example first, the empty form after a reset, the fetched
//! result after a successful analysis. Submission is gated by a busy flag
//! so at most one analysis is in flight per session.

use crate::analysis::example;
use crate::analysis::Analysis;
use crate::error::AnalysisError;

/// Generic user-facing failure message. Sub-causes go to the logs only.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Errore durante l'analisi. Verifica la tua API Key o riprova più tardi.";

/// A judgment record on screen, tagged with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// The bundled demonstration judgment.
    Bundled(Analysis),
    /// A result returned by the analysis service.
    Fetched(Analysis),
}

impl Record {
    pub fn analysis(&self) -> &Analysis {
        match self {
            Self::Bundled(a) | Self::Fetched(a) => a,
        }
    }

    pub fn is_bundled(&self) -> bool {
        matches!(self, Self::Bundled(_))
    }
}

/// What the landing page is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Record(Record),
    Input,
}

/// Per-session state: current screen, in-flight flag, error annotation.
#[derive(Debug, Clone)]
pub struct Session {
    screen: Screen,
    busy: bool,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            screen: Screen::Record(Record::Bundled(example::bundled_judgment())),
            busy: false,
            error: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clear the current record and show the empty form. Covers both the
    /// "nuova ricerca" action on a result and the reset of the example.
    pub fn reset(&mut self) {
        self.screen = Screen::Input;
        self.error = None;
    }

    /// Back to the bundled example from the input form.
    pub fn show_example(&mut self) {
        self.screen = Screen::Record(Record::Bundled(example::bundled_judgment()));
        self.error = None;
    }

    /// Try to mark an analysis as in flight. Returns false without any
    /// state change when one already is, so repeated triggers produce a
    /// single outbound call.
    pub fn begin_analysis(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        true
    }

    /// Record the outcome of the in-flight analysis. On success the screen
    /// advances to the fetched record; on failure it stays where it was
    /// with an error annotation. The busy flag clears either way.
    pub fn finish_analysis(&mut self, outcome: Result<Analysis, AnalysisError>) {
        self.busy = false;
        match outcome {
            Ok(analysis) => {
                self.screen = Screen::Record(Record::Fetched(analysis));
                self.error = None;
            }
            Err(_) => {
                self.error = Some(ANALYSIS_FAILED_MESSAGE.to_string());
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Outcome;

    fn fetched_analysis() -> Analysis {
        Analysis {
            summary: "Ricorso accolto per difetto di motivazione.".to_string(),
            outcome: Outcome::Parziale,
            judge: "CGT I Grado di Palermo".to_string(),
            year: "2024".to_string(),
            case_number: None,
            legal_references: vec![],
            key_points: vec![],
        }
    }

    #[test]
    fn test_initial_screen_is_bundled_example() {
        let session = Session::new();
        match session.screen() {
            Screen::Record(record) => {
                assert!(record.is_bundled());
                assert_eq!(
                    record.analysis().judge,
                    "Corte di Giustizia Tributaria di II Grado della Sicilia"
                );
                assert_eq!(record.analysis().outcome, Outcome::Favorevole);
            }
            Screen::Input => panic!("expected the bundled record"),
        }
        assert!(!session.is_busy());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_reset_shows_empty_form() {
        let mut session = Session::new();
        session.reset();
        assert_eq!(*session.screen(), Screen::Input);
        assert!(session.error().is_none());
    }

    #[test]
    fn test_successful_analysis_shows_fetched_record() {
        let mut session = Session::new();
        session.reset();
        assert!(session.begin_analysis());
        session.finish_analysis(Ok(fetched_analysis()));

        assert!(!session.is_busy());
        match session.screen() {
            Screen::Record(Record::Fetched(a)) => {
                assert_eq!(a.summary, "Ricorso accolto per difetto di motivazione.");
                assert_eq!(a.outcome, Outcome::Parziale);
            }
            other => panic!("expected a fetched record, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_analysis_keeps_screen_and_annotates() {
        let mut session = Session::new();
        session.reset();
        assert!(session.begin_analysis());
        session.finish_analysis(Err(AnalysisError::EmptyResponse));

        assert!(!session.is_busy());
        assert_eq!(*session.screen(), Screen::Input);
        assert_eq!(session.error(), Some(ANALYSIS_FAILED_MESSAGE));
    }

    #[test]
    fn test_busy_flag_gates_resubmission() {
        let mut session = Session::new();
        assert!(session.begin_analysis());
        assert!(!session.begin_analysis());
        assert!(session.is_busy());

        session.finish_analysis(Ok(fetched_analysis()));
        assert!(session.begin_analysis());
    }

    #[test]
    fn test_new_search_from_result_returns_to_form() {
        let mut session = Session::new();
        session.begin_analysis();
        session.finish_analysis(Ok(fetched_analysis()));
        session.reset();
        assert_eq!(*session.screen(), Screen::Input);
    }

    #[test]
    fn test_show_example_restores_bundled_record() {
        let mut session = Session::new();
        session.reset();
        session.show_example();
        match session.screen() {
            Screen::Record(record) => assert!(record.is_bundled()),
            Screen::Input => panic!("expected the bundled record"),
        }
    }
}
