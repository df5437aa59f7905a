use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BloodGroup;

/// Body of `POST /requests/donors`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBloodRequest {
    pub blood_group: BloodGroup,
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestStatus {
    Pending,
    Completed,
    Other(String),
}

impl RequestStatus {
    pub fn label(&self) -> &str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Completed => "Completed",
            RequestStatus::Other(label) => label,
        }
    }

    /// CSS modifier for the history badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            RequestStatus::Completed => "badge badge-green",
            RequestStatus::Pending => "badge badge-yellow",
            RequestStatus::Other(_) => "badge badge-gray",
        }
    }
}

impl From<String> for RequestStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Pending" => RequestStatus::Pending,
            "Completed" => RequestStatus::Completed,
            _ => RequestStatus::Other(label),
        }
    }
}

impl From<RequestStatus> for String {
    fn from(status: RequestStatus) -> Self {
        status.label().to_string()
    }
}

/// Locally recorded request shown in the hospital history
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequest {
    pub id: String,
    pub blood_group: BloodGroup,
    pub quantity: u32,
    pub requested_at: String,
    pub status: RequestStatus,
}

impl BloodRequest {
    /// Record for a request the backend just accepted
    pub fn pending(request: &NewBloodRequest, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis().to_string(),
            blood_group: request.blood_group,
            quantity: request.quantity,
            requested_at: now.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            status: RequestStatus::Pending,
        }
    }

    /// Local date of the request, falls back to the raw text
    pub fn requested_on(&self) -> String {
        DateTime::parse_from_rfc3339(&self.requested_at)
            .map(|at| at.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|_| self.requested_at.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn pending_record_uses_clock_for_id_and_timestamp() {
        let now = Utc.with_ymd_and_hms(2025, 6, 14, 9, 30, 0).unwrap();
        let request = NewBloodRequest { blood_group: BloodGroup::AbPositive, quantity: 3 };
        let record = BloodRequest::pending(&request, now);
        assert_eq!(record.id, now.timestamp_millis().to_string());
        assert_eq!(record.requested_at, "2025-06-14T09:30:00.000Z");
        assert_eq!(record.status, RequestStatus::Pending);
        assert_eq!(record.requested_on(), "Jun 14, 2025");
    }

    #[test]
    fn unknown_statuses_are_kept_verbatim() {
        let json = r#"{"id":"1","bloodGroup":"O-","quantity":2,"requestedAt":"x","status":"Cancelled"}"#;
        let record: BloodRequest = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, RequestStatus::Other("Cancelled".into()));
        assert_eq!(record.status.badge_class(), "badge badge-gray");
        assert_eq!(record.requested_on(), "x");
        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["status"], "Cancelled");
    }

    #[test]
    fn request_body_sends_numeric_quantity() {
        let body = NewBloodRequest { blood_group: BloodGroup::APositive, quantity: 4 };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "bloodGroup": "A+", "quantity": 4 })
        );
    }
}
