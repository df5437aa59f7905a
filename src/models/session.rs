use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{DonorProfile, HospitalProfile};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Donor,
    Hospital,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Donor => "donor",
            UserType::Hospital => "hospital",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "donor" => Some(UserType::Donor),
            "hospital" => Some(UserType::Hospital),
            _ => None,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hospital half of the session: the verbatim response plus what we read from it
#[derive(Clone, Debug, PartialEq)]
pub struct HospitalSession {
    pub raw: Value,
    pub profile: HospitalProfile,
    pub token: Option<String>,
}

impl HospitalSession {
    pub fn from_response(raw: Value) -> Self {
        let profile = HospitalProfile::from_response(&raw);
        let token = super::hospital_token(&raw);
        Self { raw, profile, token }
    }
}

/// Everything the dashboards need to know about who is signed in
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub logged_in: bool,
    pub user_type: Option<UserType>,
    pub donor: Option<DonorProfile>,
    pub hospital: Option<HospitalSession>,
}

impl Session {
    pub fn is_authenticated_as(&self, role: UserType) -> bool {
        self.logged_in && self.user_type == Some(role)
    }

    pub fn hospital_token(&self) -> Option<&str> {
        self.hospital.as_ref()?.token.as_deref()
    }
}
