use anyhow::*;
use serde::Serialize;

use crate::import::QuestionDraft;

/// Request body for the backend's bulk question creation endpoint. The
/// auth token is injected by the transport layer, not here.
#[derive(Debug, Serialize)]
pub struct BulkCreateRequest {
    pub topic_id: String,
    pub questions: Vec<QuestionDraft>,
}

impl BulkCreateRequest {
    pub fn new(topic_id: String, questions: Vec<QuestionDraft>) -> BulkCreateRequest {
        BulkCreateRequest {
            topic_id,
            questions,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    pub fn to_json_compact(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::parse_questions;
    use serde_json::json;

    #[test]
    fn serializes_backend_wire_shape() {
        let questions = parse_questions("Q: 2+2?\nA*: 4\nA: 5\n").unwrap();
        let request = BulkCreateRequest::new("topic-123".to_owned(), questions);
        let value: serde_json::Value =
            serde_json::from_str(&request.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "topic_id": "topic-123",
                "questions": [{
                    "title": "2+2?",
                    "sort_order": 1,
                    "options": [
                        { "text": "4", "is_correct": true },
                        { "text": "5", "is_correct": false },
                    ],
                }],
            })
        );
    }

    #[test]
    fn compact_and_pretty_agree() {
        let questions = parse_questions("Q: t\nA*: a\nA: b\n").unwrap();
        let request = BulkCreateRequest::new("topic-1".to_owned(), questions);
        let pretty: serde_json::Value =
            serde_json::from_str(&request.to_json().unwrap()).unwrap();
        let compact: serde_json::Value =
            serde_json::from_str(&request.to_json_compact().unwrap()).unwrap();
        assert_eq!(pretty, compact);
    }
}
