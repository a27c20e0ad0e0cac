use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const THANK_YOU: &str =
    "Thank you for your recommendation! Since this is a prototype, your data is printed in the console.";

pub const LOCATION_FAILED: &str = "Unable to retrieve your location.";
pub const LOCATION_UNSUPPORTED: &str = "Geolocation is not supported by your browser.";

/// Raw form fields, by name.
pub type Recommendation = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgment {
    pub message: &'static str,
    /// Number of fields received.
    pub fields: usize,
}

/// Flattens a JSON body into form fields. Strings are taken as they are, `null` becomes
/// empty and any other value keeps its JSON text.
pub fn form_from_json(fields: BTreeMap<String, Value>) -> Recommendation {
    fields
        .into_iter()
        .map(|(name, value)| {
            let value = match value {
                Value::String(text) => text,
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (name, value)
        })
        .collect()
}

pub fn submit(form: &Recommendation) -> Acknowledgment {
    tracing::info!(?form, "submitted recommendation");
    Acknowledgment {
        message: THANK_YOU,
        fields: form.len(),
    }
}

/// Outcome of the browser's location request, as reported by the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LocationReport {
    /// `latitude,longitude`.
    Captured { coords: String },
    Failed,
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationStatus {
    pub message: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationStatus {
    fn failed(message: &str) -> Self {
        Self {
            message: message.to_string(),
            latitude: None,
            longitude: None,
        }
    }
}

pub fn location_status(report: &LocationReport) -> LocationStatus {
    match report {
        LocationReport::Captured { coords } => match parse_coords(coords) {
            Some((latitude, longitude)) => {
                tracing::info!(latitude, longitude, "user location");
                LocationStatus {
                    message: format!(
                        "Location captured at latitude {latitude:.5}, longitude {longitude:.5}"
                    ),
                    latitude: Some(latitude),
                    longitude: Some(longitude),
                }
            }
            None => {
                tracing::warn!("unreadable coordinates {coords:?}");
                LocationStatus::failed(LOCATION_FAILED)
            }
        },
        LocationReport::Failed => LocationStatus::failed(LOCATION_FAILED),
        LocationReport::Unsupported => LocationStatus::failed(LOCATION_UNSUPPORTED),
    }
}

fn parse_coords(coords: &str) -> Option<(f64, f64)> {
    let (lat, lon) = coords.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;
    ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)).then_some((lat, lon))
}
