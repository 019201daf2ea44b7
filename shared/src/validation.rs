//! Validation for the two donation entry forms.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::donation::{Donation, DonationInput, FormKind};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]+$").unwrap());

/// Inputs of the donation forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    FirstName,
    LastName,
    Amount,
    DedicationMessage,
    Phone,
    Email,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::Amount => "Amount",
            FormField::DedicationMessage => "Dedication Message",
            FormField::Phone => "Phone",
            FormField::Email => "Email",
        }
    }

    /// Fields that must be filled in for a form kind
    pub fn required_for(kind: FormKind) -> &'static [FormField] {
        match kind {
            FormKind::WithContact => &[
                FormField::FirstName,
                FormField::LastName,
                FormField::Amount,
                FormField::DedicationMessage,
                FormField::Phone,
                FormField::Email,
            ],
            FormKind::WithoutContact => &[
                FormField::FirstName,
                FormField::LastName,
                FormField::Amount,
                FormField::DedicationMessage,
            ],
        }
    }
}

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(FormField),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Amount must be a positive number")]
    AmountNotPositive,
}

/// Per-field validation outcome for a draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValidation {
    pub errors: BTreeMap<FormField, FieldError>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: FormField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Drop the error of a field the user is editing
    pub fn clear(&mut self, field: FormField) {
        self.errors.remove(&field);
    }
}

/// Raw text of a donation form as the user typed it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationDraft {
    pub first_name: String,
    pub last_name: String,
    pub amount: String,
    pub anonymous: bool,
    pub dedication_message: String,
    pub phone: String,
    pub email: String,
}

impl DonationDraft {
    /// Pre-fill a draft from an existing donation for editing
    pub fn from_donation(donation: &Donation) -> Self {
        Self {
            first_name: donation.first_name.clone(),
            last_name: donation.last_name.clone(),
            amount: donation.amount_input(),
            anonymous: donation.anonymous,
            dedication_message: donation.dedication_message.clone(),
            phone: donation.phone.clone().unwrap_or_default(),
            email: donation.email.clone().unwrap_or_default(),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Amount => &self.amount,
            FormField::DedicationMessage => &self.dedication_message,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Amount => self.amount = value,
            FormField::DedicationMessage => self.dedication_message = value,
            FormField::Phone => self.phone = value,
            FormField::Email => self.email = value,
        }
    }

    pub fn validate(&self, kind: FormKind) -> FormValidation {
        let mut validation = FormValidation::default();

        for &field in FormField::required_for(kind) {
            if self.value(field).trim().is_empty() {
                validation.errors.insert(field, FieldError::Required(field));
            }
        }

        if !self.email.is_empty() && !EMAIL_PATTERN.is_match(&self.email) {
            validation.errors.insert(FormField::Email, FieldError::InvalidEmail);
        }

        if !self.phone.is_empty() && !PHONE_PATTERN.is_match(&self.phone) {
            validation.errors.insert(FormField::Phone, FieldError::InvalidPhone);
        }

        if !self.amount.trim().is_empty() && self.parsed_amount().is_none() {
            validation
                .errors
                .insert(FormField::Amount, FieldError::AmountNotPositive);
        }

        validation
    }

    /// Validate and build the API payload, tagged with the form kind
    pub fn into_input(self, kind: FormKind) -> Result<DonationInput, FormValidation> {
        let validation = self.validate(kind);
        if !validation.is_valid() {
            return Err(validation);
        }

        let amount = self.parsed_amount().unwrap_or_default();
        let (phone, email) = if kind.requires_contact() {
            (Some(self.phone), Some(self.email))
        } else {
            (None, None)
        };

        Ok(DonationInput {
            first_name: self.first_name,
            last_name: self.last_name,
            amount,
            anonymous: self.anonymous,
            dedication_message: self.dedication_message,
            phone,
            email,
            tags: Some(kind.tag().to_string()),
        })
    }

    fn parsed_amount(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite() && *amount > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> DonationDraft {
        DonationDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            amount: "25".to_string(),
            anonymous: false,
            dedication_message: "In memory of Charles".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_empty_draft_reports_required_fields() {
        let validation = DonationDraft::default().validate(FormKind::WithContact);
        assert_eq!(validation.errors.len(), 6);
        assert_eq!(
            validation.error_for(FormField::DedicationMessage).unwrap().to_string(),
            "Dedication Message is required"
        );

        let without = DonationDraft::default().validate(FormKind::WithoutContact);
        assert_eq!(without.errors.len(), 4);
        assert!(without.error_for(FormField::Email).is_none());
    }

    #[test]
    fn test_invalid_contact_details() {
        let mut draft = filled();
        draft.email = "not-an-email".to_string();
        draft.phone = "call me".to_string();

        let validation = draft.validate(FormKind::WithContact);
        assert_eq!(validation.error_for(FormField::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(validation.error_for(FormField::Phone), Some(&FieldError::InvalidPhone));
        assert_eq!(
            FieldError::InvalidPhone.to_string(),
            "Please enter a valid phone number"
        );
    }

    #[test]
    fn test_amount_must_be_positive() {
        for bad in ["0", "-3", "abc", "NaN"] {
            let mut draft = filled();
            draft.amount = bad.to_string();
            let validation = draft.validate(FormKind::WithoutContact);
            assert_eq!(
                validation.error_for(FormField::Amount),
                Some(&FieldError::AmountNotPositive),
                "amount {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_into_input_tags_and_strips_contact() {
        let with = filled().into_input(FormKind::WithContact).unwrap();
        assert_eq!(with.amount, 25.0);
        assert_eq!(with.tags.as_deref(), Some("form_with_contact"));
        assert_eq!(with.email.as_deref(), Some("ada@example.com"));

        let without = filled().into_input(FormKind::WithoutContact).unwrap();
        assert_eq!(without.tags.as_deref(), Some("form_without_contact"));
        assert_eq!(without.phone, None);
        assert_eq!(without.email, None);
    }

    #[test]
    fn test_into_input_rejects_invalid_draft() {
        let err = DonationDraft::default()
            .into_input(FormKind::WithoutContact)
            .unwrap_err();
        assert!(!err.is_valid());
    }

    #[test]
    fn test_clear_field_error() {
        let mut validation = DonationDraft::default().validate(FormKind::WithoutContact);
        validation.clear(FormField::FirstName);
        assert!(validation.error_for(FormField::FirstName).is_none());
        assert_eq!(validation.errors.len(), 3);
    }

    #[test]
    fn test_draft_from_donation() {
        let donation: Donation = serde_json::from_value(json!({
            "_id": "1",
            "firstName": "Grace",
            "lastName": "Hopper",
            "amount": 75,
            "anonymous": true,
            "dedicationMessage": "Navy",
            "email": "grace@example.com"
        }))
        .unwrap();

        let draft = DonationDraft::from_donation(&donation);
        assert_eq!(draft.amount, "75");
        assert!(draft.anonymous);
        assert_eq!(draft.phone, "");
        assert_eq!(draft.value(FormField::Email), "grace@example.com");
    }
}
