//! Contact inquiries.
//!
//! There is no inquiry endpoint yet, so `submit_inquiry` validates, logs the
//! payload and resolves after a fixed delay.

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;

use crate::config;

pub const SUCCESS_MESSAGE: &str = "Thank you for your inquiry. Our team will contact you shortly.";

#[derive(Debug, Error)]
pub enum ContactFormError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("'{0}' is not a valid phone number")]
    InvalidPhone(String),
    #[error("failed to encode inquiry: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactInquiry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactInquiry {
    /// Trims every field and turns an empty company into `None`.
    pub fn normalized(self) -> Self {
        let company = self
            .company
            .map(|company| company.trim().to_string())
            .filter(|company| !company.is_empty());
        Self {
            name: self.name.trim().to_string(),
            company,
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactFormError> {
        let required = [
            ("Full name", &self.name),
            ("Email address", &self.email),
            ("Phone number", &self.phone),
            ("Subject", &self.subject),
            ("Message", &self.message),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ContactFormError::MissingField(*field));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactFormError::InvalidEmail(self.email.clone()));
        }
        if !is_valid_phone(self.phone.trim()) {
            return Err(ContactFormError::InvalidPhone(self.phone.clone()));
        }
        Ok(())
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

/// Accepts the usual human formatting (`+254 700 000-000`, `(0)20 ...`),
/// with 7 to 15 digits.
fn is_valid_phone(phone: &str) -> bool {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    allowed && (7..=15).contains(&digits)
}

pub async fn submit_inquiry(inquiry: &ContactInquiry) -> Result<(), ContactFormError> {
    inquiry.validate()?;
    let payload = serde_json::to_string(inquiry)?;
    log::debug!("Contact inquiry payload: {}", payload);
    TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
    log::info!("Contact inquiry from {} accepted", inquiry.email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry() -> ContactInquiry {
        ContactInquiry {
            name: "John Smith".into(),
            company: Some("Your Company Ltd".into()),
            email: "john@company.com".into(),
            phone: "+254 700 000 000".into(),
            subject: "Chiller quote".into(),
            message: "We need a quote for two chillers.".into(),
        }
    }

    #[test]
    fn complete_inquiry_is_valid() {
        assert!(inquiry().validate().is_ok());
    }

    #[test]
    fn company_is_optional() {
        let inquiry = ContactInquiry { company: Some("   ".into()), ..inquiry() }.normalized();
        assert_eq!(inquiry.company, None);
        assert!(inquiry.validate().is_ok());
    }

    #[test]
    fn reports_first_missing_field() {
        let err = ContactInquiry { email: " ".into(), subject: String::new(), ..inquiry() }
            .validate()
            .unwrap_err();
        assert!(matches!(err, ContactFormError::MissingField("Email address")));
        assert_eq!(err.to_string(), "Email address is required");
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["john", "john@", "@company.com", "john@company", "jo hn@company.com", "a@b@c.com"] {
            let err = ContactInquiry { email: email.into(), ..inquiry() }.validate().unwrap_err();
            assert!(matches!(err, ContactFormError::InvalidEmail(_)), "{email}");
        }
    }

    #[test]
    fn phone_allows_common_formatting() {
        assert!(is_valid_phone("+254 700 000 000"));
        assert!(is_valid_phone("(020) 555-1234"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("call me maybe"));
        assert!(!is_valid_phone("+1234567890123456"));
    }

    #[test]
    fn serializes_without_empty_company() {
        let inquiry = ContactInquiry { company: None, ..inquiry() };
        let json = serde_json::to_value(&inquiry).unwrap();
        assert!(json.get("company").is_none());
        assert_eq!(json["email"], "john@company.com");
    }
}
