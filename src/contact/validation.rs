use thiserror::Error;

/// Why a contact-form field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Required field left blank.
    #[error("this field is required")]
    Required,
    /// Email field not shaped like `name@domain.tld`.
    #[error("enter a valid email address")]
    InvalidEmail,
}

/// Why a submission did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Some fields failed validation.
    #[error("{count} field(s) need attention")]
    Invalid {
        /// Number of rejected fields.
        count: usize,
    },
    /// A previous submission has not finished.
    #[error("a message is already being sent")]
    Busy,
}

/// Validation verdict for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    /// Not validated, or blank and optional.
    #[default]
    Neutral,
    /// Passed validation.
    Valid,
    /// Failed validation.
    Invalid(FieldError),
}

/// Validate a raw field value.
pub fn validate_field(value: &str, required: bool, email: bool) -> FieldState {
    let value = value.trim();
    if value.is_empty() {
        return if required {
            FieldState::Invalid(FieldError::Required)
        } else {
            FieldState::Neutral
        };
    }
    if email && !is_valid_email(value) {
        return FieldState::Invalid(FieldError::InvalidEmail);
    }
    FieldState::Valid
}

/// Loose `local@domain.tld` check: no whitespace, exactly one `@`, an inner dot in the domain.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let clean = |part: &str| !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '@');
    if !clean(local) || !clean(domain) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        for good in ["a@b.co", "first.last@mail.example.org", "x@y.z"] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in ["", "plain", "@b.co", "a@", "a@b", "a@.co", "a@b.", "a b@c.de", "a@b@c.de"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn required_and_optional_blanks() {
        assert_eq!(
            validate_field("   ", true, false),
            FieldState::Invalid(FieldError::Required)
        );
        assert_eq!(validate_field("", false, false), FieldState::Neutral);
        assert_eq!(validate_field(" Ada ", true, false), FieldState::Valid);
    }

    #[test]
    fn email_field_checks_shape_only_when_filled() {
        assert_eq!(
            validate_field("nope", true, true),
            FieldState::Invalid(FieldError::InvalidEmail)
        );
        assert_eq!(validate_field(" ada@lovelace.dev ", true, true), FieldState::Valid);
    }

    #[test]
    fn errors_render_for_display() {
        assert_eq!(FieldError::Required.to_string(), "this field is required");
        assert_eq!(
            SubmitError::Invalid { count: 2 }.to_string(),
            "2 field(s) need attention"
        );
    }
}
