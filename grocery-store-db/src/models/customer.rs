use chrono::{DateTime, Utc};
use grocery_store_api::domain::customer::{
    CustomerForCreation, CustomerForDisplay, CustomerForUpdate,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Identifiable;

/// # Documentation
/// - Persisted customer record
/// - `id` and `created_date` are fixed at creation and never rewritten
/// - `updated_date` is only set by a successful update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CustomerModel {
    pub id: Uuid,
    pub name: String,
    pub age: Option<i32>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_date: Option<DateTime<Utc>>,
}

impl CustomerModel {
    /// Builds a fresh record from a validated creation payload.
    pub fn from_creation(
        candidate: CustomerForCreation,
        id: Uuid,
        created_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: candidate.name.unwrap_or_default(),
            age: stored_age(candidate.age),
            address: non_blank(candidate.address),
            email: non_blank(candidate.email),
            phone: non_blank(candidate.phone),
            created_date,
            updated_date: None,
        }
    }

    /// Replaces every mutable field with the values of `update`.
    ///
    /// The stamp never precedes `created_date`, even if the clock moved back.
    pub fn with_update(self, update: CustomerForUpdate, updated_date: DateTime<Utc>) -> Self {
        let updated_date = updated_date.max(self.created_date);
        Self {
            id: self.id,
            name: update.name.unwrap_or_default(),
            age: stored_age(update.age),
            address: non_blank(update.address),
            email: non_blank(update.email),
            phone: non_blank(update.phone),
            created_date: self.created_date,
            updated_date: Some(updated_date),
        }
    }
}

impl Identifiable for CustomerModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl From<CustomerModel> for CustomerForDisplay {
    fn from(model: CustomerModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            age: model.age,
            address: model.address,
            email: model.email,
            phone: model.phone,
            created_date: model.created_date,
            updated_date: model.updated_date,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// Validation has already bounded the age to the column's range
fn stored_age(age: Option<i64>) -> Option<i32> {
    age.and_then(|age| i32::try_from(age).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn stored_customer() -> CustomerModel {
        CustomerModel::from_creation(
            CustomerForCreation {
                name: Some("Michelle".to_string()),
                age: Some(38),
                address: Some("433 Dufferin Ave., London ON N6L 1Z7".to_string()),
                email: Some("michelle@gmail.com".to_string()),
                phone: Some("226-268-6611".to_string()),
            },
            Uuid::new_v4(),
            Utc::now(),
        )
    }

    #[test]
    fn test_from_creation_has_no_updated_date() {
        let customer = stored_customer();
        assert_eq!(customer.updated_date, None);
        assert_eq!(customer.name, "Michelle");
    }

    #[test]
    fn test_from_creation_drops_blank_optional_text() {
        let customer = CustomerModel::from_creation(
            CustomerForCreation {
                name: Some("Darryl".to_string()),
                age: None,
                address: Some("  ".to_string()),
                email: Some(String::new()),
                phone: None,
            },
            Uuid::new_v4(),
            Utc::now(),
        );

        assert_eq!(customer.address, None);
        assert_eq!(customer.email, None);
    }

    #[test]
    fn test_with_update_replaces_every_mutable_field() {
        let customer = stored_customer();
        let id = customer.id;
        let created_date = customer.created_date;

        let updated = customer.with_update(
            CustomerForUpdate {
                name: Some("Shelly".to_string()),
                age: None,
                address: None,
                email: None,
                phone: None,
            },
            created_date + Duration::seconds(5),
        );

        assert_eq!(updated.id, id);
        assert_eq!(updated.created_date, created_date);
        assert_eq!(updated.name, "Shelly");
        assert_eq!(updated.age, None);
        assert_eq!(updated.address, None);
        assert_eq!(updated.email, None);
        assert_eq!(updated.phone, None);
        assert_eq!(updated.updated_date, Some(created_date + Duration::seconds(5)));
    }

    #[test]
    fn test_with_update_never_stamps_before_creation() {
        let customer = stored_customer();
        let created_date = customer.created_date;

        let updated = customer.with_update(
            CustomerForUpdate {
                name: Some("Michelle".to_string()),
                ..Default::default()
            },
            created_date - Duration::hours(1),
        );

        assert_eq!(updated.updated_date, Some(created_date));
    }

    #[test]
    fn test_display_conversion_keeps_all_fields() {
        let customer = stored_customer();
        let display = CustomerForDisplay::from(customer.clone());

        assert_eq!(display.id, customer.id);
        assert_eq!(display.email, customer.email);
        assert_eq!(display.created_date, customer.created_date);
        assert_eq!(display.updated_date, None);
    }
}
