use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// Multi-line text art.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtPiece {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Greeting {
    pub fn hello_world() -> Self {
        Self { message: "Hello World from Go API!".to_string() }
    }
}

/// `{"status": "success", "data": ...}` wrapper used by the catalog endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self { status: "success".to_string(), data }
    }
}

/// A validated request for current weather. The city is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    pub fn from_param(city: Option<&str>) -> Result<Self, ApiError> {
        match city {
            Some(city) if !city.is_empty() => Ok(Self { city: city.to_string() }),
            _ => Err(ApiError::MissingParameter("city")),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Current conditions for one location.
///
/// Deserialized from the WeatherAPI.com `current.json` payload (only the fields
/// listed here are kept) and serialized back as this service's response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: WeatherLocation,
    pub current: CurrentConditions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherLocation {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_f: f64,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_query_requires_non_empty_city() {
        assert!(matches!(
            WeatherQuery::from_param(None),
            Err(ApiError::MissingParameter("city"))
        ));
        assert!(WeatherQuery::from_param(Some("")).is_err());

        let query = WeatherQuery::from_param(Some("Paris")).expect("city is present");
        assert_eq!(query.city(), "Paris");
    }

    #[test]
    fn report_ignores_unknown_fields_and_defaults_region() {
        let body = r#"{
            "location": {"name": "TestCity", "lat": 1.0},
            "current": {"temp_f": 15.0, "temp_c": -9.4, "condition": {"text": "Partly cloudy", "code": 1003}}
        }"#;

        let report: WeatherReport = serde_json::from_str(body).expect("valid payload");
        assert_eq!(report.location.name, "TestCity");
        assert_eq!(report.location.region, "");
        assert_eq!(report.current.temp_f, 15.0);
        assert_eq!(report.current.condition.text, "Partly cloudy");
    }

    #[test]
    fn report_requires_temperature() {
        let body = r#"{"location": {"name": "X"}, "current": {"condition": {"text": "Sunny"}}}"#;
        assert!(serde_json::from_str::<WeatherReport>(body).is_err());
    }

    #[test]
    fn envelope_serializes_with_success_status() {
        let json = serde_json::to_value(Envelope::success(Greeting::hello_world())).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["message"], "Hello World from Go API!");
    }
}
