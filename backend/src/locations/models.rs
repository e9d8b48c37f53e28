use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use shared::{LocationDetails, LocationReport};

// The materials API serializes numbers inconsistently across endpoints
// (sometimes quoted, sometimes not); accept both forms.
fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("number out of range")),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid float string: {e}"))),
        _ => Err(serde::de::Error::custom("expected number or string")),
    }
}

fn deserialize_lenient_f64_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) => Ok(s.trim().parse::<f64>().ok()),
        _ => Err(serde::de::Error::custom("expected number, string or null")),
    }
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(serde::de::Error::custom("expected string or number")),
    }
}

fn deserialize_lenient_string_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(serde::de::Error::custom("expected string, number or null")),
    }
}

#[derive(Debug, Deserialize)]
pub struct MaterialResponse {
    #[serde(default)]
    pub result: Vec<MaterialRecord>,
}

#[derive(Debug, Deserialize)]
pub struct MaterialRecord {
    #[serde(default, deserialize_with = "deserialize_lenient_string_opt")]
    pub material_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostalResponse {
    #[serde(default)]
    pub result: Option<PostalRecord>,
}

#[derive(Debug, Deserialize)]
pub struct PostalRecord {
    #[serde(default, deserialize_with = "deserialize_lenient_f64_opt")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64_opt")]
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct LocationSearchApiResponse {
    #[serde(default)]
    pub result: Vec<LocationRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationRecord {
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub latitude: f64,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub longitude: f64,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub location_id: String,
}

impl LocationRecord {
    pub fn into_report(self) -> LocationReport {
        LocationReport {
            latitude: self.latitude,
            longitude: self.longitude,
            description: self.description,
            location_id: self.location_id,
            details: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    #[serde(default)]
    pub result: HashMap<String, DetailRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetailRecord {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl DetailRecord {
    pub fn into_details(self) -> LocationDetails {
        LocationDetails {
            address: self.address.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            hours: self.hours.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_accept_quoted_and_bare_numbers() {
        let body = r#"{"result": [
            {"latitude": "40.71", "longitude": -74.0, "description": "Depot", "location_id": 1742}
        ]}"#;
        let parsed: LocationSearchApiResponse = serde_json::from_str(body).unwrap();
        let record = &parsed.result[0];
        assert_eq!(record.latitude, 40.71);
        assert_eq!(record.longitude, -74.0);
        assert_eq!(record.location_id, "1742");
    }

    #[test]
    fn postal_record_tolerates_missing_coordinates() {
        let parsed: PostalResponse = serde_json::from_str(r#"{"result": {}}"#).unwrap();
        let record = parsed.result.unwrap();
        assert!(record.latitude.is_none());
        assert!(record.longitude.is_none());
    }

    #[test]
    fn material_without_id_is_representable() {
        let parsed: MaterialResponse =
            serde_json::from_str(r#"{"result": [{"description": "Mystery"}]}"#).unwrap();
        assert!(parsed.result[0].material_id.is_none());
    }

    #[test]
    fn detail_record_fills_missing_fields_with_empty_strings() {
        let record: DetailRecord =
            serde_json::from_str(r#"{"address": "1 Main St", "phone": null}"#).unwrap();
        let details = record.into_details();
        assert_eq!(details.address, "1 Main St");
        assert_eq!(details.phone, "");
        assert_eq!(details.url, "");
    }
}
