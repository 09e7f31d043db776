//! Bundled demonstration judgment.
//!
//! Shown on the landing page before any submission. Same shape as a real
//! result; provenance is carried by the session's `Record` variant, never
//! by inspecting fields.

use super::model::{Analysis, Outcome};

/// The CGT II grado Sicilia judgment used as the landing example.
pub fn bundled_judgment() -> Analysis {
    Analysis {
        judge: "Corte di Giustizia Tributaria di II Grado della Sicilia".to_string(),
        case_number: Some("Sentenza n. 6395/2025".to_string()),
        year: "2025".to_string(),
        outcome: Outcome::Favorevole,
        summary: "La Corte ha accolto l'appello del contribuente affermando il principio di \
                  diritto secondo cui l'Amministrazione finanziaria ha l'onere di provare la \
                  pretesa impositiva con elementi certi e precisi. In assenza di una motivazione \
                  adeguata nell'atto di accertamento riguardo ai presupposti impositivi, l'atto \
                  deve essere annullato per violazione del diritto di difesa e del principio di \
                  capacità contributiva."
            .to_string(),
        key_points: vec![
            "Onere della prova a carico dell'Ufficio".to_string(),
            "Carenza di motivazione dell'atto impositivo".to_string(),
            "Annullamento per vizio formale e sostanziale".to_string(),
        ],
        legal_references: vec![
            "D.Lgs 546/1992".to_string(),
            "Art. 7 Statuto del Contribuente".to_string(),
        ],
    }
}
