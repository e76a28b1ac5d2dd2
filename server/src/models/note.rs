use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

const MAX_FIELD_LEN: usize = 10_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Article this note was written for. Several notes may share one.
    pub article: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub body: String,
    pub article: Option<String>,
}

/// Form body of `POST /notes/{id}`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Form body of `POST /articles/{id}`. Every field is optional on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub title: Option<String>,
    pub body: Option<String>,
    pub article: Option<String>,
}

impl NotePayload {
    /// Check the payload and turn it into a note ready to insert.
    pub fn validate(self) -> Result<NewNote, AppError> {
        let title = self.title.unwrap_or_default();
        let body = self.body.unwrap_or_default();

        if title.trim().is_empty() && body.trim().is_empty() {
            return Err(AppError::InvalidNote(
                "a note needs a title or a body".to_string(),
            ));
        }
        if title.len() > MAX_FIELD_LEN || body.len() > MAX_FIELD_LEN {
            return Err(AppError::InvalidNote(format!(
                "title and body are limited to {MAX_FIELD_LEN} bytes"
            )));
        }

        Ok(NewNote {
            title,
            body,
            article: self.article.filter(|a| !a.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_with_title_only_is_accepted() {
        let payload = NotePayload {
            title: Some("Worth reading".into()),
            ..Default::default()
        };

        let note = payload.validate().unwrap();

        assert_eq!(note.title, "Worth reading");
        assert_eq!(note.body, "");
        assert_eq!(note.article, None);
    }

    #[test]
    fn blank_payload_is_rejected() {
        let payload = NotePayload {
            title: Some("   ".into()),
            body: None,
            article: Some("abc".into()),
        };

        assert!(matches!(payload.validate(), Err(AppError::InvalidNote(_))));
    }

    #[test]
    fn oversized_body_is_rejected() {
        let payload = NotePayload {
            title: Some("t".into()),
            body: Some("x".repeat(MAX_FIELD_LEN + 1)),
            article: None,
        };

        assert!(matches!(payload.validate(), Err(AppError::InvalidNote(_))));
    }

    #[test]
    fn article_reference_is_carried_through() {
        let payload = NotePayload {
            title: None,
            body: Some("b".into()),
            article: Some("a-1".into()),
        };

        assert_eq!(payload.validate().unwrap().article.as_deref(), Some("a-1"));
    }
}
