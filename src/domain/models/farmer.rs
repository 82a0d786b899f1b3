use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::models::form::Field;

pub type FarmerId = u64;

/// A farmer record as stored by the upstream backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farmer {
    pub id: FarmerId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub farm_size: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_of_birth: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Farmer {
    /// Case-insensitive match of `query` against the identifying columns.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();

        if query.is_empty() {
            return true;
        }

        [
            &self.username,
            &self.email,
            &self.first_name,
            &self.last_name,
        ]
        .iter()
        .any(|value| value.to_lowercase().contains(&query))
    }
}

/// The editable account record behind the multi-step farmer form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FarmerFields {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub location: String,
    pub farm_size: String,
    pub date_of_birth: String,
    pub gender: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl FarmerFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Username => &self.username,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::PhoneNumber => &self.phone_number,
            Field::Location => &self.location,
            Field::FarmSize => &self.farm_size,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Gender => &self.gender,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Username => &mut self.username,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Location => &mut self.location,
            Field::FarmSize => &mut self.farm_size,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Gender => &mut self.gender,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }
}

impl From<Farmer> for FarmerFields {
    fn from(farmer: Farmer) -> Self {
        FarmerFields {
            email: farmer.email,
            username: farmer.username,
            first_name: farmer.first_name,
            last_name: farmer.last_name,
            phone_number: farmer.phone_number,
            location: farmer.location,
            farm_size: farmer.farm_size,
            date_of_birth: farmer.date_of_birth,
            gender: farmer.gender,
            password: String::new(),
            confirm_password: String::new(),
            role: farmer.role,
        }
    }
}

/// Edit payload: the account fields minus email, role and both passwords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FarmerUpdate {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub location: String,
    pub farm_size: String,
    pub date_of_birth: String,
    pub gender: String,
}

impl From<FarmerFields> for FarmerUpdate {
    fn from(fields: FarmerFields) -> Self {
        FarmerUpdate {
            username: fields.username,
            first_name: fields.first_name,
            last_name: fields.last_name,
            phone_number: fields.phone_number,
            location: fields.location,
            farm_size: fields.farm_size,
            date_of_birth: fields.date_of_birth,
            gender: fields.gender,
        }
    }
}

/// Accepts null, strings, numbers and booleans for columns the backend does not
/// serialize consistently.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(value) => value,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_farmer_tolerates_loose_columns() {
        let farmer: Farmer = serde_json::from_value(json!({
            "id": 4,
            "email": "ana@farm.io",
            "username": "ana",
            "first_name": "Ana",
            "last_name": null,
            "farm_size": 12.5,
            "role": "farmer"
        }))
        .unwrap();

        assert_eq!(farmer.last_name, "");
        assert_eq!(farmer.farm_size, "12.5");
        assert_eq!(farmer.phone_number, "");
        assert_eq!(farmer.role.as_deref(), Some("farmer"));
    }

    #[test]
    fn test_search_matches_identifying_columns() {
        let farmer = Farmer {
            id: 1,
            email: "ana@farm.io".to_string(),
            username: "ana.k".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Kowalski".to_string(),
            phone_number: String::new(),
            location: "Kampala".to_string(),
            farm_size: String::new(),
            date_of_birth: String::new(),
            gender: String::new(),
            role: None,
        };

        assert!(farmer.matches("KOWAL"));
        assert!(farmer.matches("farm.io"));
        assert!(farmer.matches("  "));
        assert!(!farmer.matches("kampala"));
    }

    #[test]
    fn test_edit_seed_drops_passwords() {
        let mut fields = FarmerFields {
            password: "secret123".to_string(),
            ..Default::default()
        };
        fields.set(Field::Gender, "other".to_string());

        assert_eq!(fields.get(Field::Gender), "other");

        let update = serde_json::to_value(FarmerUpdate::from(fields)).unwrap();
        let keys = update.as_object().unwrap();

        for key in ["email", "role", "password", "confirm_password"] {
            assert!(!keys.contains_key(key));
        }
    }
}
