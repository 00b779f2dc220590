use serde::Deserialize;
use utoipa::ToSchema;

use crate::shared::form::{check_max_chars, clean_required_text, FormErrors, REQUIRED_MESSAGE};

pub const USERNAME_MAX_CHARS: usize = 150;
pub const PASSWORD_MIN_CHARS: usize = 8;

pub const USERNAME_TAKEN_MESSAGE: &str = "A user with that username already exists.";

/// Sign-up fields as submitted.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RegistrationForm {
    #[schema(example = "ada")]
    #[serde(default)]
    pub username: String,
    #[schema(example = "correct-horse-battery")]
    #[serde(default)]
    pub password1: String,
    #[schema(example = "correct-horse-battery")]
    #[serde(default)]
    pub password2: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub username: String,
    pub password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<ValidRegistration, FormErrors> {
        let mut errors = FormErrors::new();

        let username = clean_required_text("username", &self.username, &mut errors);
        if !username.is_empty() {
            check_max_chars("username", &username, USERNAME_MAX_CHARS, &mut errors);
            if !username.chars().all(is_username_char) {
                errors.add(
                    "username",
                    "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
                );
            }
        }

        if self.password1.is_empty() {
            errors.add("password1", REQUIRED_MESSAGE);
        } else {
            check_password_policy(&self.password1, &username, &mut errors);
        }

        if self.password2.is_empty() {
            errors.add("password2", REQUIRED_MESSAGE);
        } else if !self.password1.is_empty() && self.password1 != self.password2 {
            errors.add("password2", "The two password fields didn’t match.");
        }

        errors.into_result(ValidRegistration {
            username,
            password: self.password1.clone(),
        })
    }
}

fn is_username_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_')
}

fn check_password_policy(password: &str, username: &str, errors: &mut FormErrors) {
    if password.chars().count() < PASSWORD_MIN_CHARS {
        errors.add(
            "password1",
            format!(
                "This password is too short. It must contain at least {PASSWORD_MIN_CHARS} characters."
            ),
        );
    }

    if password.chars().all(|c| c.is_ascii_digit()) {
        errors.add("password1", "This password is entirely numeric.");
    }

    if !username.is_empty() && password.to_lowercase() == username.to_lowercase() {
        errors.add("password1", "The password is too similar to the username.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password1: &str, password2: &str) -> RegistrationForm {
        RegistrationForm {
            username: username.to_string(),
            password1: password1.to_string(),
            password2: password2.to_string(),
        }
    }

    #[test]
    fn accepts_valid_registration_and_trims_username() {
        let valid = form("  ada.l+1  ", "analytical-engine", "analytical-engine")
            .validate()
            .unwrap();

        assert_eq!(valid.username, "ada.l+1");
        assert_eq!(valid.password, "analytical-engine");
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = form("", "", "").validate().unwrap_err();

        assert_eq!(errors.field("username"), [REQUIRED_MESSAGE.to_string()]);
        assert_eq!(errors.field("password1"), [REQUIRED_MESSAGE.to_string()]);
        assert_eq!(errors.field("password2"), [REQUIRED_MESSAGE.to_string()]);
    }

    #[test]
    fn rejects_username_with_spaces_or_symbols() {
        let errors = form("ada lovelace!", "analytical-engine", "analytical-engine")
            .validate()
            .unwrap_err();

        assert_eq!(errors.field("username").len(), 1);
        assert!(errors.field("password1").is_empty());
    }

    #[test]
    fn rejects_overlong_username() {
        let name = "a".repeat(USERNAME_MAX_CHARS + 1);
        let errors = form(&name, "analytical-engine", "analytical-engine")
            .validate()
            .unwrap_err();

        assert!(errors.field("username")[0].contains("at most 150"));
    }

    #[test]
    fn rejects_short_and_numeric_passwords() {
        let errors = form("ada", "1234", "1234").validate().unwrap_err();
        let messages = errors.field("password1");

        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("too short"));
        assert!(messages[1].contains("entirely numeric"));
    }

    #[test]
    fn rejects_password_equal_to_username() {
        let errors = form("Babbage1791", "babbage1791", "babbage1791")
            .validate()
            .unwrap_err();

        assert!(errors.field("password1")[0].contains("too similar"));
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        let errors = form("ada", "analytical-engine", "difference-engine")
            .validate()
            .unwrap_err();

        assert!(errors.field("password1").is_empty());
        assert_eq!(
            errors.field("password2"),
            ["The two password fields didn’t match.".to_string()]
        );
    }
}
