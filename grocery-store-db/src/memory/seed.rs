use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::models::customer::CustomerModel;

/// Store opening customers, identical to the rows inserted by the
/// PostgreSQL seed script.
pub fn seed_customers() -> Vec<CustomerModel> {
    [
        (
            Uuid::from_u128(0x82c98f0c_2093_4ef7_8bd4_a13e00c4d02e),
            "Darryl",
            28,
            "449 Simcoe St., London ON N6L 1Z7",
            "darryl.gollan@gmail.com",
            "226-268-4611",
        ),
        (
            Uuid::from_u128(0xef0c4d03_12b4_4677_8eed_801ce18fc883),
            "Michelle",
            38,
            "433 Dufferin Ave., London ON N6L 1Z7",
            "michelle@gmail.com",
            "226-268-6611",
        ),
        (
            Uuid::from_u128(0x38d93d92_b202_41c1_a441_66e283d50f25),
            "Sandy",
            64,
            "523 Brringer St., Belleville ON N6L 1Z7",
            "sandy@gmail.com",
            "613-233-9811",
        ),
        (
            Uuid::from_u128(0x641f530d_dd74_4d57_91a8_66ff7443669b),
            "Sandra",
            44,
            "444 Oxford St West, London ON N6L 1Z7",
            "sandra@gmail.com",
            "519-232-9877",
        ),
        (
            Uuid::from_u128(0x286abd03_f3d8_49d4_aef3_35cf3a9d66d4),
            "Raichel",
            54,
            "923 Oxford St West, London ON N6L 1Z7",
            "raichel@gmail.com",
            "519-232-8823",
        ),
    ]
    .into_iter()
    .map(|(id, name, age, address, email, phone)| CustomerModel {
        id,
        name: name.to_string(),
        age: Some(age),
        address: Some(address.to_string()),
        email: Some(email.to_string()),
        phone: Some(phone.to_string()),
        created_date: seed_created_date(),
        updated_date: None,
    })
    .collect()
}

// 2021-04-15 09:00 at UTC-4
fn seed_created_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 4, 15, 13, 0, 0)
        .single()
        .unwrap_or_default()
}
