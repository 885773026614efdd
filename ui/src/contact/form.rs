//! Contact form fields and client-side validation.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::delivery::EmailPayload;

/// Stand-in sent when the optional company field is left blank.
pub const COMPANY_PLACEHOLDER: &str = "N/A";

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Company, Field::Message];

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Company)
    }

    /// DOM id of the matching input.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "contact-name",
            Field::Email => "contact-email",
            Field::Company => "contact-company",
            Field::Message => "contact-message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0:?} is required")]
    Missing(Field),
    #[error("email address is malformed")]
    MalformedEmail,
}

impl ValidationError {
    /// Field the inline message belongs to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing(field) => *field,
            ValidationError::MalformedEmail => Field::Email,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// First problem in field order (name, email, message). Whitespace-only
    /// counts as blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in Field::ALL.into_iter().filter(|f| f.is_required()) {
            if self.get(field).trim().is_empty() {
                return Err(ValidationError::Missing(field));
            }
            if field == Field::Email && !is_plausible_email(&self.email) {
                return Err(ValidationError::MalformedEmail);
            }
        }
        Ok(())
    }

    /// Template parameters for the delivery call.
    pub fn payload(&self) -> EmailPayload {
        let email = self.email.trim().to_string();
        let company = match self.company.trim() {
            "" => COMPANY_PLACEHOLDER.to_string(),
            company => company.to_string(),
        };
        EmailPayload {
            from_name: self.name.trim().to_string(),
            from_email: email.clone(),
            company,
            message: self.message.clone(),
            reply_to: email,
        }
    }
}

/// Basic `local@domain.tld` shape check; not RFC 5322.
pub fn is_plausible_email(raw: &str) -> bool {
    EMAIL_SHAPE.is_match(raw.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Amal Saleh".into(),
            email: "amal@example.com".into(),
            company: String::new(),
            message: "We'd like a campaign for our new product line.".into(),
        }
    }

    #[test]
    fn complete_form_validates() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn each_required_field_is_enforced() {
        for field in [Field::Name, Field::Email, Field::Message] {
            let mut form = filled();
            form.set(field, "   ".into());
            assert_eq!(form.validate(), Err(ValidationError::Missing(field)));
        }
    }

    #[test]
    fn company_is_optional() {
        let mut form = filled();
        form.set(Field::Company, String::new());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in [
            "amal",
            "amal@",
            "@example.com",
            "amal@example",
            "amal@example.",
            "amal @example.com",
            "amal@@example.com",
        ] {
            let mut form = filled();
            form.set(Field::Email, bad.into());
            assert_eq!(
                form.validate(),
                Err(ValidationError::MalformedEmail),
                "accepted `{bad}`"
            );
        }
    }

    #[test]
    fn payload_defaults_company_and_sets_reply_to() {
        let payload = filled().payload();
        assert_eq!(payload.company, COMPANY_PLACEHOLDER);
        assert_eq!(payload.reply_to, "amal@example.com");
        assert_eq!(payload.from_email, payload.reply_to);

        let mut form = filled();
        form.set(Field::Company, " Yemen Trading Co. ".into());
        assert_eq!(form.payload().company, "Yemen Trading Co.");
    }

    #[test]
    fn validation_error_points_at_its_field() {
        assert_eq!(ValidationError::MalformedEmail.field(), Field::Email);
        assert_eq!(ValidationError::Missing(Field::Message).field(), Field::Message);
    }
}
