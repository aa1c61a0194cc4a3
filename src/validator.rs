use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref EMAIL_RX: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .unwrap();
}

/// Error accumulator embedded in every form.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    pub field_errors: HashMap<String, String>,
    pub non_field_errors: Vec<String>,
}

impl Validator {
    /// Only field errors count; non-field errors are added after a form
    /// already passed field validation.
    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Records `message` under `key` unless `ok` holds. The first message for a
    /// field is kept.
    pub fn add_field_error(&mut self, ok: bool, key: &str, message: &str) {
        if ok {
            return;
        }
        self.field_errors
            .entry(key.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn add_non_field_error(&mut self, message: &str) {
        self.non_field_errors.push(message.to_string());
    }

    pub fn field_error(&self, key: &str) -> Option<&str> {
        self.field_errors.get(key).map(String::as_str)
    }
}

pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn min_chars(value: &str, n: usize) -> bool {
    value.chars().count() >= n
}

pub fn lower_than_max_chars(value: &str, n: usize) -> bool {
    value.chars().count() <= n
}

pub fn matches(value: &str, rx: &Regex) -> bool {
    rx.is_match(value)
}

pub fn permitted_value<T: PartialEq>(value: &T, permitted: &[T]) -> bool {
    permitted.contains(value)
}

pub fn is_equal(a: &str, b: &str) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_blank_trims_whitespace() {
        assert!(not_blank("hello"));
        assert!(not_blank("  x  "));
        assert!(!not_blank(""));
        assert!(!not_blank(" \t\n "));
    }

    #[test]
    fn char_bounds_count_code_points() {
        // five code points, fifteen bytes
        let s = "\u{65e5}\u{672c}\u{8a9e}\u{3067}\u{3059}";
        assert_eq!(s.len(), 15);
        assert!(lower_than_max_chars(s, 5));
        assert!(!lower_than_max_chars(s, 4));
        assert!(min_chars(s, 5));
        assert!(!min_chars(s, 6));
        assert!(lower_than_max_chars(&"a".repeat(100), 100));
        assert!(!lower_than_max_chars(&"a".repeat(101), 100));
    }

    #[test]
    fn email_regex() {
        assert!(matches("alice@example.com", &EMAIL_RX));
        assert!(matches("bob.smith+tag@mail.example.co.uk", &EMAIL_RX));
        assert!(!matches("alice@", &EMAIL_RX));
        assert!(!matches("alice example.com", &EMAIL_RX));
        assert!(!matches("alice@-example.com", &EMAIL_RX));
        assert!(!matches("", &EMAIL_RX));
    }

    #[test]
    fn permitted_value_checks_membership() {
        assert!(permitted_value(&7, &[1, 7, 365]));
        assert!(!permitted_value(&30, &[1, 7, 365]));
        assert!(!permitted_value(&1, &[]));
    }

    #[test]
    fn is_equal_is_exact() {
        assert!(is_equal("pa$$word", "pa$$word"));
        assert!(!is_equal("pa$$word", "pa$$word "));
    }

    #[test]
    fn first_field_error_wins() {
        let mut v = Validator::default();
        v.add_field_error(false, "title", "This field cannot be blank");
        v.add_field_error(false, "title", "This field cannot be more than 100 characters long");
        assert_eq!(v.field_error("title"), Some("This field cannot be blank"));
        assert!(!v.is_valid());
    }

    #[test]
    fn passing_checks_record_nothing() {
        let mut v = Validator::default();
        v.add_field_error(true, "title", "unused");
        assert!(v.is_valid());
        assert!(v.field_errors.is_empty());
    }

    #[test]
    fn non_field_errors_do_not_affect_validity() {
        let mut v = Validator::default();
        v.add_non_field_error("Email or password is incorrect");
        v.add_non_field_error("Email or password is incorrect");
        assert!(v.is_valid());
        assert_eq!(v.non_field_errors.len(), 2);
    }
}
