use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /hospital/register`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalRegistration {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub license_number: String,
    pub password: String,
    pub location: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Verified,
    #[default]
    Pending,
}

impl VerificationStatus {
    /// Anything other than `verified` is still waiting on an administrator
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("verified") {
            VerificationStatus::Verified
        } else {
            VerificationStatus::Pending
        }
    }

    pub fn badge_text(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "Verified",
            VerificationStatus::Pending => "Pending Verification",
        }
    }
}

/// Hospital view derived from the opaque backend response
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalProfile {
    pub id: String,
    pub hospital_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub license_number: String,
    pub registered_at: String,
    pub status: String,
    pub verification_status: VerificationStatus,
}

impl HospitalProfile {
    pub fn from_response(response: &Value) -> Self {
        let record = hospital_record(response);
        Self {
            id: text_field(record, &["id", "_id"]),
            hospital_name: text_field(record, &["hospitalName", "name"]),
            email: text_field(record, &["email"]),
            phone: text_field(record, &["phone", "contactNumber"]),
            address: text_field(record, &["address", "location"]),
            license_number: text_field(record, &["licenseNumber"]),
            registered_at: text_field(record, &["registeredAt", "createdAt"]),
            status: text_field(record, &["status"]),
            verification_status: VerificationStatus::from_label(&text_field(
                record,
                &["verificationStatus"],
            )),
        }
    }
}

/// Bearer token carried by a hospital registration/login response, if any
pub fn hospital_token(response: &Value) -> Option<String> {
    let record = hospital_record(response);
    [record, response]
        .iter()
        .find_map(|v| v.get("token").and_then(Value::as_str))
        .or_else(|| response.pointer("/message/token").and_then(Value::as_str))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

fn hospital_record(response: &Value) -> &Value {
    response
        .pointer("/message/hospital")
        .or_else(|| response.get("hospital"))
        .filter(|v| v.is_object())
        .unwrap_or(response)
}

fn text_field(record: &Value, names: &[&str]) -> String {
    names
        .iter()
        .find_map(|name| match record.get(*name) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_reads_nested_backend_names() {
        let response = json!({
            "message": {
                "hospital": {
                    "_id": "h-1",
                    "name": "City General",
                    "email": "admin@citygeneral.org",
                    "contactNumber": "+1 555 123 4567",
                    "location": "12 Main St",
                    "licenseNumber": "LIC-88",
                    "createdAt": "2025-02-01",
                    "verificationStatus": "verified",
                    "token": "hosp-token"
                }
            }
        });
        let profile = HospitalProfile::from_response(&response);
        assert_eq!(profile.id, "h-1");
        assert_eq!(profile.hospital_name, "City General");
        assert_eq!(profile.phone, "+1 555 123 4567");
        assert_eq!(profile.address, "12 Main St");
        assert_eq!(profile.verification_status, VerificationStatus::Verified);
        assert_eq!(hospital_token(&response).as_deref(), Some("hosp-token"));
    }

    #[test]
    fn profile_reads_flat_dashboard_names() {
        let response = json!({
            "id": "h-2",
            "hospitalName": "Red Cross Center",
            "phone": "9876543210",
            "address": "Ring Road",
            "registeredAt": "2025-01-01",
            "verificationStatus": "in review"
        });
        let profile = HospitalProfile::from_response(&response);
        assert_eq!(profile.hospital_name, "Red Cross Center");
        assert_eq!(profile.verification_status, VerificationStatus::Pending);
        assert_eq!(hospital_token(&response), None);
    }

    #[test]
    fn token_found_beside_nested_record() {
        let response = json!({ "message": { "token": "t-9", "hospital": { "name": "X" } } });
        assert_eq!(hospital_token(&response).as_deref(), Some("t-9"));
    }

    #[test]
    fn verification_badges() {
        assert_eq!(VerificationStatus::from_label("VERIFIED"), VerificationStatus::Verified);
        assert_eq!(VerificationStatus::Pending.badge_text(), "Pending Verification");
    }
}
