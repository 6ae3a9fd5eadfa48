use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::CustomerFields;

/// # Documentation
/// - Payload accepted when a customer is created
/// - Carries no identifier and no timestamps; both are assigned by the service
/// - Unknown JSON members (`id`, `createdDate`, ...) are ignored
/// - `name` and `age` are wider than what may be stored so that a null name
///   or an oversized age reaches validation instead of failing to parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForCreation {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// # Documentation
/// - Full replacement payload for an existing customer
/// - The identifier comes from the request path, never from the body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForUpdate {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// # Documentation
/// - Outbound representation of a stored customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForDisplay {
    pub id: Uuid,
    pub name: String,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_date: Option<DateTime<Utc>>,
}

impl CustomerForCreation {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

impl CustomerForUpdate {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

impl From<CustomerForDisplay> for CustomerForUpdate {
    fn from(display: CustomerForDisplay) -> Self {
        Self {
            name: Some(display.name),
            age: display.age.map(i64::from),
            address: display.address,
            email: display.email,
            phone: display.phone,
        }
    }
}

impl CustomerFields for CustomerForCreation {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    fn age(&self) -> Option<i64> {
        self.age
    }

    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

impl CustomerFields for CustomerForUpdate {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    fn age(&self) -> Option<i64> {
        self.age
    }

    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_ignores_identifier_and_timestamps() {
        let json = r#"{
            "id": "82c98f0c-2093-4ef7-8bd4-a13e00c4d02e",
            "name": "Darryl",
            "createdDate": "2021-04-15T13:00:00Z",
            "age": 28
        }"#;

        let candidate: CustomerForCreation = serde_json::from_str(json).unwrap();

        assert_eq!(candidate.name.as_deref(), Some("Darryl"));
        assert_eq!(candidate.age, Some(28));
        assert_eq!(candidate.email, None);
    }

    #[test]
    fn test_missing_name_deserializes_as_empty() {
        let candidate: CustomerForUpdate = serde_json::from_str(r#"{"age": 40}"#).unwrap();

        assert_eq!(candidate.name, None);
        assert_eq!(CustomerFields::name(&candidate), "");
        assert_eq!(candidate.age, Some(40));
    }

    #[test]
    fn test_null_name_and_oversized_age_still_deserialize() {
        let candidate: CustomerForUpdate =
            serde_json::from_str(r#"{"name": null, "age": 5000000000}"#).unwrap();

        assert_eq!(candidate.name, None);
        assert_eq!(candidate.age, Some(5_000_000_000));
    }

    #[test]
    fn test_display_uses_camel_case() {
        let display = CustomerForDisplay {
            id: Uuid::new_v4(),
            name: "Sandy".to_string(),
            age: Some(64),
            address: None,
            email: Some("sandy@gmail.com".to_string()),
            phone: None,
            created_date: Utc::now(),
            updated_date: None,
        };

        let value = serde_json::to_value(&display).unwrap();

        assert!(value.get("createdDate").is_some());
        assert!(value.get("updatedDate").is_some());
        assert!(value.get("created_date").is_none());
    }

    #[test]
    fn test_update_from_display_keeps_mutable_fields() {
        let display = CustomerForDisplay {
            id: Uuid::new_v4(),
            name: "Sandra".to_string(),
            age: Some(44),
            address: Some("444 Oxford St West".to_string()),
            email: Some("sandra@gmail.com".to_string()),
            phone: Some("519-232-9877".to_string()),
            created_date: Utc::now(),
            updated_date: None,
        };

        let update = CustomerForUpdate::from(display.clone());

        assert_eq!(update.name, Some(display.name.clone()));
        assert_eq!(update.age, Some(44));
        assert_eq!(update.address, display.address);
        assert_eq!(update.email, display.email);
        assert_eq!(update.phone, display.phone);
    }
}
