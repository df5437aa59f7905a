use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::BloodGroup;

/// Body of `POST /donor/register`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorRegistration {
    pub name: String,
    pub age: String,
    #[serde(default)]
    pub gender: String,
    pub blood_group: BloodGroup,
    pub email: String,
    pub contact_number: String,
    pub location: String,
    pub password: String,
}

/// Donor record returned by `POST /donor/login` under `message.donor`.
/// Fields are kept as the backend sent them; absent ones read as empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorProfile {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub age: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub email: String,
    /// Raw label; not restricted to the eight canonical groups
    #[serde(default, deserialize_with = "string_or_number")]
    pub blood_group: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub contact_number: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub token: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub created_at: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DonorLoginResponse {
    pub message: DonorLoginMessage,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DonorLoginMessage {
    pub donor: DonorProfile,
}

/// One row of the donation history table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    pub date: NaiveDate,
    pub location: String,
    pub status: String,
}

/// Scalars come back as numbers from some backends and as text from others
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_accepts_numeric_age() {
        let body = serde_json::json!({
            "message": {
                "donor": {
                    "_id": "d-17",
                    "name": "Asha Rao",
                    "age": 29,
                    "email": "asha@example.com",
                    "bloodGroup": "B+",
                    "contactNumber": "9876543210",
                    "token": "jwt-token",
                    "createdAt": "2025-03-01T10:00:00.000Z",
                    "location": "Pune"
                }
            }
        });
        let response: DonorLoginResponse = serde_json::from_value(body).unwrap();
        let donor = response.message.donor;
        assert_eq!(donor.id.as_deref(), Some("d-17"));
        assert_eq!(donor.age, "29");
        assert_eq!(donor.blood_group, "B+");
        assert_eq!(donor.created_at, "2025-03-01T10:00:00.000Z");
    }

    #[test]
    fn loosely_shaped_login_body_still_yields_a_profile() {
        let body = serde_json::json!({
            "message": {
                "donor": {
                    "email": "ravi@example.com",
                    "bloodGroup": "a+",
                    "contactNumber": 9876543210u64,
                    "location": null
                }
            }
        });
        let response: DonorLoginResponse = serde_json::from_value(body).unwrap();
        let donor = response.message.donor;
        assert_eq!(donor.name, "");
        assert_eq!(donor.email, "ravi@example.com");
        assert_eq!(donor.blood_group, "a+");
        assert_eq!(donor.contact_number, "9876543210");
        assert_eq!(donor.location, "");

        let stored = serde_json::to_string(&donor).unwrap();
        let reloaded: DonorProfile = serde_json::from_str(&stored).unwrap();
        assert_eq!(reloaded, donor);
    }

    #[test]
    fn missing_blood_group_reads_as_empty() {
        let body = serde_json::json!({ "message": { "donor": { "name": "Asha" } } });
        let response: DonorLoginResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.message.donor.blood_group, "");
    }

    #[test]
    fn registration_serializes_backend_field_names() {
        let registration = DonorRegistration {
            name: "Asha".into(),
            age: "29".into(),
            gender: String::new(),
            blood_group: BloodGroup::ONegative,
            email: "asha@example.com".into(),
            contact_number: "9876543210".into(),
            location: "Pune".into(),
            password: "secret1".into(),
        };
        let json = serde_json::to_value(&registration).unwrap();
        assert_eq!(json["bloodGroup"], "O-");
        assert_eq!(json["contactNumber"], "9876543210");
        assert_eq!(json["age"], "29");
    }
}
