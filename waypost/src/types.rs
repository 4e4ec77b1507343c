use serde::{Deserialize, Serialize};

/// Placeholder sent when no device identifier has been captured.
pub const DEFAULT_DEVICE_ID: &str = "defaultId";

/// Raw text of the input fields, captured at the moment of submission.
/// Each submission gets its own snapshot; nothing is shared with a
/// request already in flight.
#[derive(Debug, Clone, Default)]
pub struct FieldSnapshot {
    pub device_id: String,
    pub latitude: String,
    pub longitude: String,
}

/// Wire payload for the ingestion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    #[serde(rename = "deviceID")]
    pub device_id: String,
    pub lat: f64,
    pub long: f64,
}

impl TelemetryRecord {
    pub fn from_snapshot(snapshot: &FieldSnapshot) -> Self {
        Self {
            device_id: if snapshot.device_id.trim().is_empty() {
                DEFAULT_DEVICE_ID.to_string()
            } else {
                snapshot.device_id.clone()
            },
            lat: parse_coordinate(&snapshot.latitude),
            long: parse_coordinate(&snapshot.longitude),
        }
    }
}

// Coordinates must stay finite numbers; anything else collapses to 0.0
// instead of surfacing a parse error.
fn parse_coordinate(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(device_id: &str, latitude: &str, longitude: &str) -> FieldSnapshot {
        FieldSnapshot {
            device_id: device_id.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    #[test]
    fn non_numeric_coordinates_fall_back_to_zero() {
        for text in ["", "abc", "12,5", "12.5.6", "--3"] {
            let record = TelemetryRecord::from_snapshot(&snapshot("dev", text, text));
            assert_eq!(record.lat, 0.0, "latitude text {text:?}");
            assert_eq!(record.long, 0.0, "longitude text {text:?}");
        }
    }

    #[test]
    fn non_finite_coordinates_fall_back_to_zero() {
        for text in ["NaN", "inf", "-inf", "infinity"] {
            let record = TelemetryRecord::from_snapshot(&snapshot("dev", text, "1.0"));
            assert_eq!(record.lat, 0.0, "latitude text {text:?}");
        }
    }

    #[test]
    fn numeric_text_is_parsed_with_whitespace_tolerated() {
        let record = TelemetryRecord::from_snapshot(&snapshot("dev", " 12.5 ", "-0.3"));
        assert_eq!(record.lat, 12.5);
        assert_eq!(record.long, -0.3);
    }

    #[test]
    fn empty_device_id_uses_placeholder() {
        for text in ["", "   "] {
            let record = TelemetryRecord::from_snapshot(&snapshot(text, "1.0", "2.0"));
            assert_eq!(record.device_id, DEFAULT_DEVICE_ID);
        }
    }

    #[test]
    fn wire_shape_is_exact() {
        let record = TelemetryRecord::from_snapshot(&snapshot("abc123", "12.5", "-0.3"));
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"deviceID": "abc123", "lat": 12.5, "long": -0.3})
        );
    }
}
