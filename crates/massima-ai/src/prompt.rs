//! Extraction prompt and response schema.
//!
//! The prompt carries the fixed instructions for the seven fields; the
//! schema constrains the model's reply to the `Analysis` wire shape via
//! the API's structured-output facility.

use serde_json::{json, Value};

/// Build the extraction prompt for one judgment text. The input is
/// embedded verbatim after the instructions.
pub fn build_prompt(text: &str) -> String {
    format!(
        "Analizza il seguente testo di una sentenza tributaria italiana.\n\
         Estrai le seguenti informazioni in formato JSON strutturato:\n\
         1. \"summary\": Una massima giuridica sintetica che spieghi esplicitamente i motivi \
         della decisione, evidenziando il principio di diritto applicato (max 4 frasi).\n\
         2. \"outcome\": L'esito finale per il contribuente (FAVOREVOLE, SFAVOREVOLE, PARZIALE, RINVIO).\n\
         3. \"judge\": Il nome dell'organo giudicante (es. \"Corte di Cassazione\", \"CGT Lombardia\").\n\
         4. \"caseNumber\": Il numero della sentenza (es. \"n. 1234/2025\") se presente nel testo.\n\
         5. \"year\": L'anno della sentenza.\n\
         6. \"legalReferences\": Una lista dei riferimenti normativi citati.\n\
         7. \"keyPoints\": 3-5 punti chiave del ragionamento giuridico.\n\
         \n\
         Testo della sentenza:\n\
         {text}"
    )
}

/// Response schema declared to the model. Mirrors `Analysis`: four required
/// fields, string arrays for references and key points.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "Massima giuridica con il principio di diritto applicato"
            },
            "outcome": {
                "type": "STRING",
                "enum": ["FAVOREVOLE", "SFAVOREVOLE", "PARZIALE", "RINVIO", "UNKNOWN"],
                "description": "Esito per il contribuente"
            },
            "judge": {
                "type": "STRING",
                "description": "Organo giudicante"
            },
            "caseNumber": {
                "type": "STRING",
                "description": "Numero della sentenza"
            },
            "year": {
                "type": "STRING",
                "description": "Anno della sentenza"
            },
            "legalReferences": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Leggi citate"
            },
            "keyPoints": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Punti chiave del ragionamento"
            }
        },
        "required": ["summary", "outcome", "judge", "year"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_text_verbatim() {
        let text = "Sentenza n. 42/2024.\nLa Commissione osserva che...";
        let prompt = build_prompt(text);
        assert!(prompt.contains(text));
        assert!(prompt.ends_with(text));
    }

    #[test]
    fn test_prompt_names_every_field() {
        let prompt = build_prompt("x");
        for field in [
            "summary",
            "outcome",
            "judge",
            "caseNumber",
            "year",
            "legalReferences",
            "keyPoints",
        ] {
            assert!(prompt.contains(field), "prompt misses {field}");
        }
        assert!(prompt.contains("FAVOREVOLE"));
        assert!(prompt.contains("RINVIO"));
    }

    #[test]
    fn test_schema_requires_the_four_core_fields() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, vec!["summary", "outcome", "judge", "year"]);
        assert!(schema["properties"]["caseNumber"].is_object());
    }
}
