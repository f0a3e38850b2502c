//! Field validation rules.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::fields::{Field, FormErrors, FormFields};

/// Minimum trimmed length of the name, in characters.
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum trimmed length of the message, in characters.
pub const MESSAGE_MIN_CHARS: usize = 10;

// Printable ASCII minus space and '@' on both sides, and a dot somewhere
// after the '@' with text on either side of it.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\x21-\x3F\x41-\x7E]+@[\x21-\x3F\x41-\x7E]+\.[\x21-\x3F\x41-\x7E]+$")
        .expect("email pattern is valid")
});

/// Validates every field and returns the failing ones.
pub fn validate(fields: &FormFields) -> FormErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, fields.get(field)).map(|error| (field, error)))
        .collect()
}

/// Validates a single raw value.
pub fn validate_field(field: Field, value: &str) -> Option<ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(ValidationError::Required);
    }
    match field {
        Field::Name => min_chars(trimmed, NAME_MIN_CHARS),
        Field::Email => (!is_email(value)).then_some(ValidationError::InvalidFormat),
        Field::Message => min_chars(trimmed, MESSAGE_MIN_CHARS),
    }
}

/// `local@domain.tld` check on the raw, untrimmed value.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn min_chars(trimmed: &str, min: usize) -> Option<ValidationError> {
    (trimmed.chars().count() < min).then_some(ValidationError::TooShort { min })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(name: &str, email: &str, message: &str) -> FormFields {
        FormFields {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn minimal_valid_form_has_no_errors() {
        let errors = validate(&fields("Al", "a@b.co", "1234567890"));
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn every_failing_field_is_reported() {
        let errors = validate(&fields("", "bad", "short"));

        let expected: FormErrors = [
            (Field::Name, ValidationError::Required),
            (Field::Email, ValidationError::InvalidFormat),
            (Field::Message, ValidationError::TooShort { min: 10 }),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn only_the_short_message_is_reported() {
        let errors = validate(&fields("Ana", "ana@site.org", "short"));

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::Message),
            Some(ValidationError::TooShort { min: 10 })
        );
    }

    #[test]
    fn whitespace_only_values_are_required() {
        assert_eq!(validate_field(Field::Name, "   "), Some(ValidationError::Required));
        assert_eq!(validate_field(Field::Email, "\t"), Some(ValidationError::Required));
        assert_eq!(validate_field(Field::Message, "\n \n"), Some(ValidationError::Required));
    }

    #[test]
    fn lengths_are_measured_after_trimming() {
        assert_eq!(
            validate_field(Field::Name, " A "),
            Some(ValidationError::TooShort { min: 2 })
        );
        assert_eq!(validate_field(Field::Name, " Al "), None);
        assert_eq!(
            validate_field(Field::Message, "   123456789   "),
            Some(ValidationError::TooShort { min: 10 })
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        assert_eq!(validate_field(Field::Name, "Ös"), None);
        assert_eq!(
            validate_field(Field::Name, "Ö"),
            Some(ValidationError::TooShort { min: 2 })
        );
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "ana@site.org", "first.last+tag@mail.example.de"] {
            assert!(is_email(ok), "{ok} should pass");
        }
        for bad in [
            "bad",
            "a@b",
            "@b.co",
            "a@.co",
            "a@b.",
            "a@@b.co",
            "a@b@c.de",
            "a b@c.de",
            " a@b.co",
            "jürgen@salon.de",
        ] {
            assert!(!is_email(bad), "{bad} should fail");
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let input = fields("X", "nope@", "");
        assert_eq!(validate(&input), validate(&input));
    }
}
