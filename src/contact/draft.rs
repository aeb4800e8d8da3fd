use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

// 10+ digits, spaces, dashes, plus signs or parentheses
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\d\s\-\+\(\)]{10,}$").expect("phone pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    PhoneNumber,
    Company,
    Message,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DraftField::Name => "Name",
            DraftField::Email => "Email",
            DraftField::PhoneNumber => "Phone number",
            DraftField::Company => "Company",
            DraftField::Message => "Message",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(DraftField),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number (at least 10 digits)")]
    InvalidPhoneNumber,
}

impl ValidationError {
    pub fn field(&self) -> DraftField {
        match self {
            ValidationError::MissingField(field) => *field,
            ValidationError::InvalidEmail => DraftField::Email,
            ValidationError::InvalidPhoneNumber => DraftField::PhoneNumber,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub company: String,
    pub message: String,
}

impl ContactFormDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Email => &self.email,
            DraftField::PhoneNumber => &self.phone_number,
            DraftField::Company => &self.company,
            DraftField::Message => &self.message,
        }
    }

    pub fn with(mut self, field: DraftField, value: String) -> Self {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Email => &mut self.email,
            DraftField::PhoneNumber => &mut self.phone_number,
            DraftField::Company => &mut self.company,
            DraftField::Message => &mut self.message,
        };
        *slot = value;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in [DraftField::Name, DraftField::Email, DraftField::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        let phone = self.phone_number.trim();
        if !phone.is_empty() && !is_valid_phone_number(phone) {
            return Err(ValidationError::InvalidPhoneNumber);
        }
        Ok(())
    }
}

/// Lifecycle of a stored submission. The site only ever writes `New`; the
/// later states are set on the stored document by whoever answers it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    New,
    #[allow(dead_code)]
    Read,
    #[allow(dead_code)]
    Responded,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::New => "new",
            SubmissionStatus::Read => "read",
            SubmissionStatus::Responded => "responded",
        }
    }
}

/// What actually gets written to the document store.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactSubmission {
    pub draft: ContactFormDraft,
    pub timestamp: DateTime<Utc>,
    pub status: SubmissionStatus,
}

impl ContactSubmission {
    pub fn new(draft: ContactFormDraft, submitted_at_ms: i64) -> Self {
        let timestamp = Utc
            .timestamp_millis_opt(submitted_at_ms)
            .single()
            .unwrap_or_else(Utc::now);
        Self {
            draft,
            timestamp,
            status: SubmissionStatus::New,
        }
    }

    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormDraft {
        ContactFormDraft {
            name: "A".into(),
            email: "a@b.com".into(),
            phone_number: "1234567890".into(),
            company: String::new(),
            message: "hi".into(),
        }
    }

    #[test]
    fn complete_draft_passes_without_company() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn required_fields_are_checked_in_form_order() {
        let draft = ContactFormDraft::default();
        assert_eq!(draft.validate(), Err(ValidationError::MissingField(DraftField::Name)));

        let draft = filled().with(DraftField::Message, "   ".into());
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field(), DraftField::Message);
        assert_eq!(err.to_string(), "Message is required");
    }

    #[test]
    fn email_and_phone_formats() {
        assert!(is_valid_email("someone@agency.co.in"));
        assert!(!is_valid_email("someone@agency"));
        assert!(!is_valid_email("some one@agency.com"));

        assert!(is_valid_phone_number("+91 (981) 106-6616"));
        assert!(!is_valid_phone_number("12345"));
        assert!(!is_valid_phone_number("call me maybe"));

        assert_eq!(
            filled().with(DraftField::Email, "nope".into()).validate(),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            filled().with(DraftField::PhoneNumber, "123".into()).validate(),
            Err(ValidationError::InvalidPhoneNumber)
        );
        assert_eq!(filled().with(DraftField::PhoneNumber, String::new()).validate(), Ok(()));
    }

    #[test]
    fn submission_is_stamped_new_with_millisecond_utc_timestamp() {
        let submission = ContactSubmission::new(filled(), 1_700_000_000_123);
        assert_eq!(submission.status, SubmissionStatus::New);
        assert_eq!(submission.timestamp_rfc3339(), "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn with_replaces_one_field_only() {
        let draft = ContactFormDraft::default().with(DraftField::Company, "Boop".into());
        assert_eq!(draft.get(DraftField::Company), "Boop");
        assert_eq!(draft.get(DraftField::Name), "");
    }

    #[test]
    fn status_names_match_stored_schema() {
        assert_eq!(SubmissionStatus::New.as_str(), "new");
        assert_eq!(SubmissionStatus::Read.as_str(), "read");
        assert_eq!(SubmissionStatus::Responded.as_str(), "responded");
    }
}
