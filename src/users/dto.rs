use crate::forms::{self, FormFields};
use crate::validator::{
    is_equal, lower_than_max_chars, matches, min_chars, not_blank, Validator, EMAIL_RX,
};

const BLANK: &str = "This field cannot be blank";
const MIN_PASSWORD_CHARS: usize = 8;
/// Width of the `name` and `email` columns.
const MAX_COLUMN_CHARS: usize = 255;
const TOO_LONG: &str = "This field cannot be more than 255 characters long";

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub validator: Validator,
}

impl SignupForm {
    pub fn parse(fields: &FormFields) -> Self {
        Self {
            name: forms::text(fields, "name"),
            email: forms::text(fields, "email"),
            password: forms::text(fields, "password"),
            validator: Validator::default(),
        }
    }

    pub fn validate(&mut self) -> bool {
        let v = &mut self.validator;
        v.add_field_error(not_blank(&self.name), "name", BLANK);
        v.add_field_error(
            lower_than_max_chars(&self.name, MAX_COLUMN_CHARS),
            "name",
            TOO_LONG,
        );
        v.add_field_error(not_blank(&self.email), "email", BLANK);
        v.add_field_error(
            lower_than_max_chars(&self.email, MAX_COLUMN_CHARS),
            "email",
            TOO_LONG,
        );
        v.add_field_error(
            matches(&self.email, &EMAIL_RX),
            "email",
            "This field must be a valid email address",
        );
        v.add_field_error(not_blank(&self.password), "password", BLANK);
        v.add_field_error(
            min_chars(&self.password, MIN_PASSWORD_CHARS),
            "password",
            "This field must be at least 8 characters long",
        );
        v.is_valid()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub validator: Validator,
}

impl LoginForm {
    pub fn parse(fields: &FormFields) -> Self {
        Self {
            email: forms::text(fields, "email"),
            password: forms::text(fields, "password"),
            validator: Validator::default(),
        }
    }

    pub fn validate(&mut self) -> bool {
        let v = &mut self.validator;
        v.add_field_error(not_blank(&self.email), "email", BLANK);
        v.add_field_error(
            matches(&self.email, &EMAIL_RX),
            "email",
            "This field must be a valid email address",
        );
        v.add_field_error(not_blank(&self.password), "password", BLANK);
        v.is_valid()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PasswordUpdateForm {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
    pub validator: Validator,
}

impl PasswordUpdateForm {
    pub fn parse(fields: &FormFields) -> Self {
        Self {
            current_password: forms::text(fields, "currentPassword"),
            new_password: forms::text(fields, "newPassword"),
            new_password_confirmation: forms::text(fields, "newPasswordConfirmation"),
            validator: Validator::default(),
        }
    }

    pub fn validate(&mut self) -> bool {
        let v = &mut self.validator;
        v.add_field_error(not_blank(&self.current_password), "currentPassword", BLANK);
        v.add_field_error(not_blank(&self.new_password), "newPassword", BLANK);
        v.add_field_error(
            min_chars(&self.new_password, MIN_PASSWORD_CHARS),
            "newPassword",
            "This field must be at least 8 characters long",
        );
        v.add_field_error(
            not_blank(&self.new_password_confirmation),
            "newPasswordConfirmation",
            BLANK,
        );
        v.add_field_error(
            is_equal(&self.new_password, &self.new_password_confirmation),
            "newPasswordConfirmation",
            "Passwords do not match",
        );
        v.is_valid()
    }
}
