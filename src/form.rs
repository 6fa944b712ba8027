//! Contact form state and validation.
//!
//! Validation is wholesale: every submit recomputes the full error set from
//! the current field values. The email check is a permissive structural
//! match, not full RFC validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern should compile"));

/// Live values of the contact form's input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} is invalid")]
    InvalidFormat(&'static str),
}

/// Per-field validation failures, present only for fields currently failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub subject: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

pub fn validate(form: &ContactForm) -> FormErrors {
    let mut errors = FormErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some(FieldError::Required("Name"));
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.email = Some(FieldError::Required("Email"));
    } else if !EMAIL_RE.is_match(email) {
        errors.email = Some(FieldError::InvalidFormat("Email"));
    }

    if form.subject.trim().is_empty() {
        errors.subject = Some(FieldError::Required("Subject"));
    }

    if form.message.trim().is_empty() {
        errors.message = Some(FieldError::Required("Message"));
    }

    errors
}

/// Form values, per-field errors, and the success notice for the contact
/// page, advanced only by `edit` and `submit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormModel {
    pub form: ContactForm,
    pub errors: FormErrors,
    pub sent: bool,
}

impl ContactFormModel {
    /// Record a keystroke. Editing any field dismisses the success notice.
    pub fn edit(&mut self, apply: impl FnOnce(&mut ContactForm)) {
        apply(&mut self.form);
        self.sent = false;
    }

    /// Validate the current values. On success the form is cleared and the
    /// submitted snapshot returned; on failure the values are left untouched
    /// and the per-field errors populated.
    pub fn submit(&mut self) -> Option<ContactForm> {
        self.errors = validate(&self.form);
        if self.errors.is_empty() {
            self.sent = true;
            Some(std::mem::take(&mut self.form))
        } else {
            self.sent = false;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: "x".to_string(),
            message: "y".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = validate(&filled());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_form_fails_every_field() {
        let errors = validate(&ContactForm::default());
        assert_eq!(errors.name, Some(FieldError::Required("Name")));
        assert_eq!(errors.email, Some(FieldError::Required("Email")));
        assert_eq!(errors.subject, Some(FieldError::Required("Subject")));
        assert_eq!(errors.message, Some(FieldError::Required("Message")));
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_missing_name_and_bad_email() {
        let form = ContactForm {
            name: String::new(),
            email: "a@b".to_string(),
            ..filled()
        };
        let errors = validate(&form);
        assert_eq!(errors.name, Some(FieldError::Required("Name")));
        assert_eq!(errors.email, Some(FieldError::InvalidFormat("Email")));
        assert_eq!(errors.subject, None);
        assert_eq!(errors.message, None);
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let form = ContactForm {
            name: "   ".to_string(),
            ..filled()
        };
        let errors = validate(&form);
        assert_eq!(errors.name, Some(FieldError::Required("Name")));
    }

    #[test]
    fn test_email_structural_check() {
        let cases = [
            ("a@b.com", true),
            ("first.last@sub.example.org", true),
            ("a@b", false),
            ("plainaddress", false),
            ("@no-local.com", false),
        ];
        for (email, ok) in cases {
            let form = ContactForm {
                email: email.to_string(),
                ..filled()
            };
            let errors = validate(&form);
            assert_eq!(errors.email.is_none(), ok, "email case {email:?}");
        }
    }

    #[test]
    fn test_valid_submit_resets_form_and_sets_notice() {
        let mut model = ContactFormModel {
            form: filled(),
            ..Default::default()
        };
        let snapshot = model.submit();
        assert_eq!(snapshot, Some(filled()));
        assert_eq!(model.form, ContactForm::default());
        assert!(model.errors.is_empty());
        assert!(model.sent);
    }

    #[test]
    fn test_invalid_submit_leaves_form_untouched() {
        let form = ContactForm {
            email: "not-an-email".to_string(),
            ..filled()
        };
        let mut model = ContactFormModel {
            form: form.clone(),
            ..Default::default()
        };
        assert_eq!(model.submit(), None);
        assert_eq!(model.form, form);
        assert_eq!(model.errors.email, Some(FieldError::InvalidFormat("Email")));
        assert!(!model.sent);
    }

    #[test]
    fn test_editing_dismisses_success_notice() {
        let mut model = ContactFormModel {
            form: filled(),
            ..Default::default()
        };
        model.submit();
        assert!(model.sent);

        model.edit(|f| f.name = "B".to_string());
        assert!(!model.sent);
        assert_eq!(model.form.name, "B");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::Required("Name").to_string(),
            "Name is required"
        );
        assert_eq!(
            FieldError::InvalidFormat("Email").to_string(),
            "Email is invalid"
        );
    }
}
