use std::collections::HashMap;

use axum::{extract::rejection::FormRejection, Form};
use tracing::warn;

use crate::error::AppError;

/// Raw urlencoded body, one value per field name.
pub type FormFields = HashMap<String, String>;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("field `{field}` is not a valid integer: {value:?}")]
    InvalidInteger { field: &'static str, value: String },
}

impl From<DecodeError> for AppError {
    fn from(e: DecodeError) -> Self {
        warn!(error = %e, "form decode failed");
        AppError::BadRequest
    }
}

/// Unwraps the body extractor, turning any rejection into a 400.
pub fn fields(body: Result<Form<FormFields>, FormRejection>) -> Result<FormFields, AppError> {
    match body {
        Ok(Form(fields)) => Ok(fields),
        Err(e) => {
            warn!(error = %e, "malformed form body");
            Err(AppError::BadRequest)
        }
    }
}

/// Missing fields decode as empty strings and are left to validation.
pub fn text(fields: &FormFields, key: &str) -> String {
    fields.get(key).cloned().unwrap_or_default()
}

/// Missing or empty fields decode as zero; anything else must parse.
pub fn integer(fields: &FormFields, key: &'static str) -> Result<i32, DecodeError> {
    match fields.get(key).map(|v| v.trim()) {
        None | Some("") => Ok(0),
        Some(v) => v.parse::<i32>().map_err(|_| DecodeError::InvalidInteger {
            field: key,
            value: v.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn text_defaults_to_empty() {
        let f = form(&[("title", "O snail")]);
        assert_eq!(text(&f, "title"), "O snail");
        assert_eq!(text(&f, "content"), "");
    }

    #[test]
    fn integer_parses_or_rejects() {
        let f = form(&[("expires", "7"), ("bad", "seven"), ("blank", "")]);
        assert_eq!(integer(&f, "expires").unwrap(), 7);
        assert_eq!(integer(&f, "blank").unwrap(), 0);
        assert_eq!(integer(&f, "missing").unwrap(), 0);
        let err = integer(&f, "bad").unwrap_err();
        assert!(err.to_string().contains("seven"));
    }
}
