#[cfg(test)]
pub mod test_utils {
    use chrono::{DateTime, SubsecRound, Utc};
    use grocery_store_db::models::customer::CustomerModel;
    use uuid::Uuid;

    /// Postgres keeps microseconds; truncate so round trips compare equal.
    pub fn now_micros() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }

    pub fn create_test_customer(name: &str) -> CustomerModel {
        CustomerModel {
            id: Uuid::new_v4(),
            name: name.to_string(),
            age: Some(42),
            address: Some("1 Test Street".to_string()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            phone: Some("519-555-0100".to_string()),
            created_date: now_micros(),
            updated_date: None,
        }
    }
}
