use crate::forms::{self, DecodeError, FormFields};
use crate::validator::{lower_than_max_chars, not_blank, permitted_value, Validator};

/// Expiry choices offered by the create form, in days.
pub const PERMITTED_EXPIRES: [i32; 3] = [1, 7, 365];

#[derive(Debug, Clone)]
pub struct SnippetCreateForm {
    pub title: String,
    pub content: String,
    pub expires: i32,
    pub validator: Validator,
}

impl Default for SnippetCreateForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            expires: 365,
            validator: Validator::default(),
        }
    }
}

impl SnippetCreateForm {
    pub fn parse(fields: &FormFields) -> Result<Self, DecodeError> {
        Ok(Self {
            title: forms::text(fields, "title"),
            content: forms::text(fields, "content"),
            expires: forms::integer(fields, "expires")?,
            validator: Validator::default(),
        })
    }

    pub fn validate(&mut self) -> bool {
        let v = &mut self.validator;
        v.add_field_error(not_blank(&self.title), "title", "This field cannot be blank");
        v.add_field_error(
            lower_than_max_chars(&self.title, 100),
            "title",
            "This field cannot be more than 100 characters long",
        );
        v.add_field_error(not_blank(&self.content), "content", "This field cannot be blank");
        v.add_field_error(
            permitted_value(&self.expires, &PERMITTED_EXPIRES),
            "expires",
            "This field must equal 1, 7 or 365",
        );
        v.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, content: &str, expires: &str) -> FormFields {
        [("title", title), ("content", content), ("expires", expires)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn valid_form_passes() {
        let mut form = SnippetCreateForm::parse(&fields("O snail", "Climb Mount Fuji", "7")).unwrap();
        assert!(form.validate());
        assert_eq!(form.expires, 7);
    }

    #[test]
    fn long_title_is_rejected() {
        let title = "a".repeat(101);
        let mut form = SnippetCreateForm::parse(&fields(&title, "content", "1")).unwrap();
        assert!(!form.validate());
        assert_eq!(
            form.validator.field_error("title"),
            Some("This field cannot be more than 100 characters long")
        );
    }

    #[test]
    fn blank_fields_and_unknown_expiry_are_rejected() {
        let mut form = SnippetCreateForm::parse(&fields("  ", "", "30")).unwrap();
        assert!(!form.validate());
        assert_eq!(form.validator.field_error("title"), Some("This field cannot be blank"));
        assert_eq!(form.validator.field_error("content"), Some("This field cannot be blank"));
        assert!(form.validator.field_error("expires").is_some());
    }

    #[test]
    fn non_numeric_expiry_is_a_decode_error() {
        assert!(SnippetCreateForm::parse(&fields("t", "c", "week")).is_err());
    }
}
