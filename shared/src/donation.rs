//! Donation records as served by the remote contact API.
//!
//! The API stores whatever the donation forms submitted, so `amount` can
//! arrive as a number, a numeric string, or garbage. Records keep the raw
//! JSON value and coerce it on read through [`to_number`].

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Anything the aggregator can total up.
pub trait Record {
    /// Stable unique identifier of the record
    fn record_id(&self) -> &str;
    /// Numeric amount, already coerced (never NaN)
    fn amount(&self) -> f64;
}

/// Which donation form produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    WithContact,
    WithoutContact,
}

impl FormKind {
    /// Tag stored on the record by the API
    pub fn tag(&self) -> &'static str {
        match self {
            FormKind::WithContact => "form_with_contact",
            FormKind::WithoutContact => "form_without_contact",
        }
    }

    /// Form used to edit a record carrying `tag`
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("form_with_contact") => FormKind::WithContact,
            _ => FormKind::WithoutContact,
        }
    }

    pub fn requires_contact(&self) -> bool {
        matches!(self, FormKind::WithContact)
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormKind::WithContact => "Form with Contact Info",
            FormKind::WithoutContact => "Form without Contact Info",
        }
    }
}

/// A single donation entry.
///
/// `_id` must be a non-empty scalar. Other fields are read leniently: `null`
/// becomes the default and other scalars are converted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(rename = "_id", deserialize_with = "record_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: String,
    /// Raw amount as stored by the API, see [`to_number`]
    #[serde(default)]
    pub amount: Value,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub anonymous: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dedication_message: String,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Whether the donation is shown on public outputs
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_show: bool,
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn record_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    scalar_to_string(Value::deserialize(deserializer)?)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| serde::de::Error::custom("record has no usable _id"))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(scalar_to_string(Value::deserialize(deserializer)?))
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    })
}

/// Decode each record on its own, dropping the ones without a usable shape
fn skip_invalid_records<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Donation>, D::Error> {
    let raw = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            warn!("donation list is not an array: {}", other);
            return Ok(Vec::new());
        }
    };

    Ok(raw
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Donation>(item) {
            Ok(donation) => Some(donation),
            Err(e) => {
                warn!("skipping unreadable donation record: {}", e);
                None
            }
        })
        .collect())
}

impl Donation {
    pub fn donor_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn form_kind(&self) -> FormKind {
        FormKind::from_tag(self.tags.as_deref())
    }

    /// Amount as the edit form should display it
    pub fn amount_input(&self) -> String {
        match &self.amount {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            _ => String::new(),
        }
    }
}

impl Record for Donation {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn amount(&self) -> f64 {
        to_number(&self.amount)
    }
}

/// Coerce a loosely typed JSON amount into a finite number.
///
/// Unparseable, missing and non-finite values become 0; this never fails.
pub fn to_number(value: &Value) -> f64 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(0.0)
            }
        }
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };

    if number.is_finite() {
        number
    } else {
        0.0
    }
}

/// Copy of `donations` where the record `id` has its visibility set to `is_show`.
///
/// Length and order are preserved, so a paginator watching the collection
/// keeps its current page.
pub fn with_visibility(donations: &[Donation], id: &str, is_show: bool) -> Vec<Donation> {
    donations
        .iter()
        .map(|donation| {
            if donation.id == id {
                Donation {
                    is_show,
                    ..donation.clone()
                }
            } else {
                donation.clone()
            }
        })
        .collect()
}

/// Format an amount in dollars the way `en-US` locale formatting does:
/// thousands separators and at most three decimals without trailing zeros,
/// e.g. `$1,234.5`.
pub fn format_currency(amount: f64) -> String {
    let thousandths = (amount.abs() * 1000.0).round() as u64;
    let dollars = thousandths / 1000;
    let fraction = thousandths % 1000;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && thousandths > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{}${}", sign, grouped)
    } else {
        let decimals = format!("{:03}", fraction);
        format!("{}${}.{}", sign, grouped, decimals.trim_end_matches('0'))
    }
}

/// Payload for creating or fully updating a donation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationInput {
    pub first_name: String,
    pub last_name: String,
    pub amount: f64,
    pub anonymous: bool,
    pub dedication_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// Partial update flipping a donation's visibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityUpdate {
    pub is_show: bool,
}

/// Response of `GET /contact`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationListResponse {
    #[serde(default, deserialize_with = "skip_invalid_records")]
    pub data: Vec<Donation>,
}

/// Response of `POST /contact`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitDonationResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_number_coercion() {
        assert_eq!(to_number(&json!(100)), 100.0);
        assert_eq!(to_number(&json!(12.5)), 12.5);
        assert_eq!(to_number(&json!(" 42 ")), 42.0);
        assert_eq!(to_number(&json!("bad")), 0.0);
        assert_eq!(to_number(&json!("")), 0.0);
        assert_eq!(to_number(&json!(null)), 0.0);
        assert_eq!(to_number(&json!(true)), 1.0);
        assert_eq!(to_number(&json!([1, 2])), 0.0);
        assert_eq!(to_number(&json!({"value": 3})), 0.0);
        assert_eq!(to_number(&json!("NaN")), 0.0);
        assert_eq!(to_number(&json!("inf")), 0.0);
    }

    #[test]
    fn test_deserialize_api_record() {
        let raw = json!({
            "_id": "65f1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "amount": "250",
            "dedicationMessage": "For the library",
            "tags": "form_with_contact",
            "isShow": true
        });

        let donation: Donation = serde_json::from_value(raw).unwrap();
        assert_eq!(donation.id, "65f1");
        assert_eq!(donation.donor_name(), "Ada Lovelace");
        assert_eq!(Record::amount(&donation), 250.0);
        assert_eq!(donation.form_kind(), FormKind::WithContact);
        assert!(donation.is_show);
        assert!(!donation.anonymous);
        assert_eq!(donation.email, None);
    }

    #[test]
    fn test_missing_amount_defaults_to_zero() {
        let donation: Donation = serde_json::from_value(json!({ "_id": "x" })).unwrap();
        assert_eq!(donation.amount, Value::Null);
        assert_eq!(Record::amount(&donation), 0.0);
        assert_eq!(donation.amount_input(), "");
        assert!(!donation.is_show);
    }

    #[test]
    fn test_list_response_without_data() {
        let response: DonationListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_list_keeps_records_around_sloppy_ones() {
        let response: DonationListResponse = serde_json::from_value(json!({
            "data": [
                { "_id": "a", "amount": 100, "isShow": true },
                { "_id": "b", "amount": 50, "lastName": null, "isShow": null },
                { "_id": "c", "phone": 5551234, "email": null, "anonymous": "true" },
                { "_id": 42, "firstName": "Num" },
                { "amount": 10 },
                { "_id": null, "amount": 10 },
                "not a record"
            ]
        }))
        .unwrap();

        let ids: Vec<&str> = response.data.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "42"]);

        let b = &response.data[1];
        assert_eq!(b.last_name, "");
        assert!(!b.is_show);
        assert_eq!(Record::amount(b), 50.0);

        let c = &response.data[2];
        assert_eq!(c.phone.as_deref(), Some("5551234"));
        assert_eq!(c.email, None);
        assert!(c.anonymous);
    }

    #[test]
    fn test_list_with_null_data() {
        let response: DonationListResponse =
            serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_form_kind_from_tag() {
        assert_eq!(FormKind::from_tag(Some("form_with_contact")), FormKind::WithContact);
        assert_eq!(FormKind::from_tag(Some("form_without_contact")), FormKind::WithoutContact);
        assert_eq!(FormKind::from_tag(Some("legacy")), FormKind::WithoutContact);
        assert_eq!(FormKind::from_tag(None), FormKind::WithoutContact);
    }

    #[test]
    fn test_with_visibility_keeps_order_and_length() {
        let donations: Vec<Donation> = ["a", "b", "c"]
            .iter()
            .map(|id| serde_json::from_value(json!({ "_id": id, "isShow": true })).unwrap())
            .collect();

        let updated = with_visibility(&donations, "b", false);
        assert_eq!(updated.len(), 3);
        assert_eq!(
            updated.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert!(updated[0].is_show);
        assert!(!updated[1].is_show);
        assert!(updated[2].is_show);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(150.0), "$150");
        assert_eq!(format_currency(1234.5), "$1,234.5");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000");
        assert_eq!(format_currency(-25.75), "-$25.75");
        assert_eq!(format_currency(0.1234), "$0.123");
        assert_eq!(format_currency(19.999_9), "$20");
    }

    #[test]
    fn test_input_omits_missing_contact_fields() {
        let input = DonationInput {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            amount: 50.0,
            anonymous: true,
            dedication_message: "Thanks".to_string(),
            phone: None,
            email: None,
            tags: Some(FormKind::WithoutContact.tag().to_string()),
        };

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["firstName"], "Grace");
        assert_eq!(value["tags"], "form_without_contact");
        assert!(value.get("phone").is_none());
        assert!(value.get("email").is_none());
    }
}
