use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::models::farmer::lenient_string;

pub type CropId = u64;

/// Crop owner: a bare key in farmer-scope listings, an object in admin listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CropOwner {
    Id(u64),
    Profile {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
        #[serde(default, deserialize_with = "lenient_string")]
        username: String,
    },
}

impl CropOwner {
    pub fn username(&self) -> Option<&str> {
        match self {
            CropOwner::Id(_) => None,
            CropOwner::Profile { username, .. } => Some(username),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub id: CropId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub planted_date: String,
    #[serde(default)]
    pub harvested: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farmer: Option<CropOwner>,
}

impl Crop {
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();

        if query.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&query)
            || self.kind.to_lowercase().contains(&query)
            || self
                .farmer
                .as_ref()
                .and_then(CropOwner::username)
                .is_some_and(|username| username.to_lowercase().contains(&query))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quantity: f64,
    pub planted_date: String,
    pub harvested: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer: Option<CropOwner>,
}

impl From<Crop> for CropPayload {
    fn from(crop: Crop) -> Self {
        CropPayload {
            name: crop.name,
            kind: crop.kind,
            quantity: crop.quantity,
            planted_date: crop.planted_date,
            harvested: crop.harvested,
            farmer: crop.farmer,
        }
    }
}

/// Decimal columns arrive as numbers or strings; anything unparsable counts as zero.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64().unwrap_or_default(),
        Value::String(value) => value.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}
