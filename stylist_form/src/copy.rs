//! User-facing text of the contact form, one catalogue per locale.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, ValidationError};
use crate::fields::Field;
use crate::state::SubmissionStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    De,
    En,
}

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "de" | "de-de" => Ok(Locale::De),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            _ => Err(ConfigError::UnknownLocale(s.to_owned())),
        }
    }
}

/// Label and placeholder of one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCopy {
    pub label: &'static str,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormCopy {
    pub locale: Locale,
    pub name: FieldCopy,
    pub email: FieldCopy,
    pub message: FieldCopy,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub retry: &'static str,
    pub failure: &'static str,
    pub success_heading: &'static str,
    pub success_body: &'static str,
    pub send_another: &'static str,
}

const DE: FormCopy = FormCopy {
    locale: Locale::De,
    name: FieldCopy {
        label: "Name",
        placeholder: "Ihr vollständiger Name",
    },
    email: FieldCopy {
        label: "E-Mail-Adresse",
        placeholder: "ihre.email@beispiel.de",
    },
    message: FieldCopy {
        label: "Nachricht",
        placeholder: "Erzählen Sie uns mehr über Ihren Salon und warum Sie Partner werden möchten...",
    },
    submit: "Partnerstatus-Anfrage senden",
    submitting: "Wird gesendet...",
    retry: "Erneut senden",
    failure: "Ihre Anfrage konnte nicht gesendet werden. Bitte versuchen Sie es erneut.",
    success_heading: "Vielen Dank für Ihre Anfrage!",
    success_body: "Wir haben Ihre Partnerstatus-Anfrage erhalten und werden uns so schnell wie möglich bei Ihnen melden. \
        Unser Team wird Ihre Informationen prüfen und Ihnen weitere Details zum Beitritt als Partner zukommen lassen.",
    send_another: "Weitere Anfrage senden",
};

const EN: FormCopy = FormCopy {
    locale: Locale::En,
    name: FieldCopy {
        label: "Name",
        placeholder: "Your full name",
    },
    email: FieldCopy {
        label: "E-Mail",
        placeholder: "your.email@example.com",
    },
    message: FieldCopy {
        label: "Message",
        placeholder: "Tell us about your salon and why you would like to become a partner...",
    },
    submit: "Send request",
    submitting: "Sending...",
    retry: "Try again",
    failure: "Your request could not be sent. Please try again.",
    success_heading: "Thank you for your request!",
    success_body: "We have received your partner request and will get back to you as soon as possible. \
        Our team will review your details and send you everything you need to join as a partner.",
    send_another: "Send another request",
};

impl FormCopy {
    pub fn for_locale(locale: Locale) -> &'static FormCopy {
        match locale {
            Locale::De => &DE,
            Locale::En => &EN,
        }
    }

    pub fn field(&self, field: Field) -> &FieldCopy {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Caption of the submit button for the given status.
    pub fn submit_label(&self, status: &SubmissionStatus) -> &'static str {
        match status {
            SubmissionStatus::Submitting => self.submitting,
            SubmissionStatus::Failed { .. } => self.retry,
            SubmissionStatus::Idle | SubmissionStatus::Submitted => self.submit,
        }
    }

    /// Inline message shown under a failing field.
    pub fn error_message(&self, field: Field, error: ValidationError) -> &'static str {
        use ValidationError::*;

        match (self.locale, field, error) {
            (Locale::De, Field::Name, Required) => "Name ist erforderlich",
            (Locale::De, Field::Name, TooShort { .. }) => "Name muss mindestens 2 Zeichen lang sein",
            (Locale::De, Field::Email, Required) => "E-Mail ist erforderlich",
            (Locale::De, Field::Message, Required) => "Nachricht ist erforderlich",
            (Locale::De, Field::Message, TooShort { .. }) => {
                "Nachricht muss mindestens 10 Zeichen lang sein"
            }
            (Locale::De, _, _) => "Bitte geben Sie eine gültige E-Mail-Adresse ein",

            (Locale::En, Field::Name, Required) => "Name is required",
            (Locale::En, Field::Name, TooShort { .. }) => "Name must be at least 2 characters long",
            (Locale::En, Field::Email, Required) => "E-Mail is required",
            (Locale::En, Field::Message, Required) => "Message is required",
            (Locale::En, Field::Message, TooShort { .. }) => {
                "Message must be at least 10 characters long"
            }
            (Locale::En, _, _) => "Please enter a valid e-mail address",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn locale_parsing_is_lenient_about_case_and_region() {
        assert_eq!("DE".parse::<Locale>(), Ok(Locale::De));
        assert_eq!(" en-GB ".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(
            "fr".parse::<Locale>(),
            Err(ConfigError::UnknownLocale("fr".into()))
        );
    }

    #[test]
    fn submit_label_follows_status() {
        let copy = FormCopy::for_locale(Locale::De);
        assert_eq!(copy.submit_label(&SubmissionStatus::Idle), "Partnerstatus-Anfrage senden");
        assert_eq!(copy.submit_label(&SubmissionStatus::Submitting), "Wird gesendet...");
        assert_eq!(
            copy.submit_label(&SubmissionStatus::Failed {
                reason: "timeout".into()
            }),
            "Erneut senden"
        );
    }

    #[test]
    fn german_messages_match_the_rules() {
        let copy = FormCopy::for_locale(Locale::De);
        assert_eq!(
            copy.error_message(Field::Email, ValidationError::InvalidFormat),
            "Bitte geben Sie eine gültige E-Mail-Adresse ein"
        );
        assert_eq!(
            copy.error_message(Field::Message, ValidationError::TooShort { min: 10 }),
            "Nachricht muss mindestens 10 Zeichen lang sein"
        );
    }

    #[test]
    fn english_labels_are_accessible_names() {
        let copy = FormCopy::for_locale(Locale::En);
        let labels: Vec<&str> = Field::ALL.iter().map(|f| copy.field(*f).label).collect();
        assert_eq!(labels, vec!["Name", "E-Mail", "Message"]);
    }
}
