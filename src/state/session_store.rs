// ============================================================================
// SESSION STORE - Sesión tipada persistida sobre un KeyValueStore
// ============================================================================
// Única puerta de lectura/escritura para las claves de sesión. Los
// componentes nunca tocan localStorage directamente.
// ============================================================================

use serde_json::Value;

use crate::models::{BloodRequest, DonorProfile, HospitalSession, Session, UserType};
use crate::utils::constants::*;
use crate::utils::{load_json, save_json, KeyValueStore, LocalStorage, StorageError};

#[derive(Clone, Debug, PartialEq)]
pub struct SessionStore<S: KeyValueStore = LocalStorage> {
    storage: S,
}

impl SessionStore<LocalStorage> {
    pub fn browser() -> Self {
        Self::new(LocalStorage)
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Current session as persisted; missing or unreadable keys read as empty
    pub fn load(&self) -> Session {
        let logged_in = self.storage.get_item(STORAGE_KEY_LOGGED_IN).as_deref() == Some("true");
        let user_type = self
            .storage
            .get_item(STORAGE_KEY_USER_TYPE)
            .and_then(|label| UserType::from_label(&label));

        Session {
            logged_in,
            user_type,
            donor: self.donor_profile(),
            hospital: self.hospital_session(),
        }
    }

    pub fn donor_profile(&self) -> Option<DonorProfile> {
        load_json(&self.storage, STORAGE_KEY_DONOR_DATA)
    }

    pub fn hospital_session(&self) -> Option<HospitalSession> {
        load_json::<_, Value>(&self.storage, STORAGE_KEY_HOSPITAL_DATA)
            .map(HospitalSession::from_response)
    }

    /// Profile is written before the flags so a failed write never leaves a
    /// logged-in flag without data behind it
    pub fn save_donor_login(&self, profile: &DonorProfile) -> Result<(), StorageError> {
        save_json(&self.storage, STORAGE_KEY_DONOR_DATA, profile)?;
        self.set_flags(UserType::Donor)?;
        log::info!("💾 [SESSION] Donor session saved for {}", profile.email);
        Ok(())
    }

    /// Hospital responses are opaque and kept exactly as received
    pub fn save_hospital_login(&self, response: &Value) -> Result<(), StorageError> {
        save_json(&self.storage, STORAGE_KEY_HOSPITAL_DATA, response)?;
        self.set_flags(UserType::Hospital)?;
        log::info!("💾 [SESSION] Hospital session saved");
        Ok(())
    }

    fn set_flags(&self, user_type: UserType) -> Result<(), StorageError> {
        self.storage.set_item(STORAGE_KEY_LOGGED_IN, "true")?;
        self.storage.set_item(STORAGE_KEY_USER_TYPE, user_type.as_str())
    }

    /// Drops identity and profile data; the request history survives
    pub fn logout(&self) -> Result<(), StorageError> {
        for key in [
            STORAGE_KEY_LOGGED_IN,
            STORAGE_KEY_USER_TYPE,
            STORAGE_KEY_DONOR_DATA,
            STORAGE_KEY_HOSPITAL_DATA,
        ] {
            self.storage.remove_item(key)?;
        }
        log::info!("🚪 [SESSION] Session cleared");
        Ok(())
    }

    /// Persisted requests, newest first
    pub fn blood_requests(&self) -> Vec<BloodRequest> {
        load_json(&self.storage, STORAGE_KEY_BLOOD_REQUESTS).unwrap_or_default()
    }

    pub fn save_blood_requests(&self, requests: &[BloodRequest]) -> Result<(), StorageError> {
        save_json(&self.storage, STORAGE_KEY_BLOOD_REQUESTS, requests)
    }

    /// Puts `request` at the front of the persisted list and returns the new list
    pub fn prepend_blood_request(
        &self,
        current: &[BloodRequest],
        request: BloodRequest,
    ) -> Result<Vec<BloodRequest>, StorageError> {
        let mut updated = Vec::with_capacity(current.len() + 1);
        updated.push(request);
        updated.extend_from_slice(current);
        self.save_blood_requests(&updated)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::blood_request::RequestStatus;
    use crate::models::{BloodGroup, NewBloodRequest};
    use crate::utils::MemoryStorage;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn donor() -> DonorProfile {
        DonorProfile {
            id: None,
            name: "Asha Rao".into(),
            age: "29".into(),
            email: "asha@example.com".into(),
            blood_group: "B+".into(),
            contact_number: "9876543210".into(),
            token: "jwt".into(),
            created_at: "2025-03-01".into(),
            location: "Pune".into(),
            gender: None,
            status: None,
        }
    }

    fn request(minute: u32) -> BloodRequest {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, minute, 0).unwrap();
        BloodRequest::pending(&NewBloodRequest { blood_group: BloodGroup::OPositive, quantity: 1 }, at)
    }

    #[test]
    fn empty_storage_is_logged_out() {
        let store = SessionStore::new(MemoryStorage::new());
        assert_eq!(store.load(), Session::default());
        assert!(store.blood_requests().is_empty());
    }

    #[test]
    fn donor_login_round_trips_verbatim() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.save_donor_login(&donor()).unwrap();

        assert_eq!(storage.get_item("isLoggedIn").as_deref(), Some("true"));
        assert_eq!(storage.get_item("userType").as_deref(), Some("donor"));
        let session = store.load();
        assert!(session.is_authenticated_as(UserType::Donor));
        assert_eq!(session.donor, Some(donor()));
    }

    #[test]
    fn hospital_response_is_stored_as_received() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        let response = json!({ "message": { "hospital": { "name": "City General", "token": "t" } }, "extra": [1, 2] });
        store.save_hospital_login(&response).unwrap();

        let stored: Value = serde_json::from_str(&storage.get_item("hospitalData").unwrap()).unwrap();
        assert_eq!(stored, response);
        let session = store.load();
        assert!(session.is_authenticated_as(UserType::Hospital));
        assert_eq!(session.hospital_token(), Some("t"));
        assert_eq!(session.hospital.unwrap().profile.hospital_name, "City General");
    }

    #[test]
    fn logout_keeps_request_history() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.save_donor_login(&donor()).unwrap();
        store.save_blood_requests(&[request(1)]).unwrap();
        store.logout().unwrap();

        assert_eq!(store.load(), Session::default());
        assert_eq!(store.blood_requests().len(), 1);
        assert!(!storage.contains_key("donorData"));
    }

    #[test]
    fn prepend_puts_newest_first_and_persists() {
        let store = SessionStore::new(MemoryStorage::new());
        let first = store.prepend_blood_request(&[], request(1)).unwrap();
        let second = store.prepend_blood_request(&first, request(2)).unwrap();
        assert_eq!(second[0], request(2));
        assert_eq!(second[1], request(1));
        assert_eq!(store.blood_requests(), second);
        assert_eq!(second[0].status, RequestStatus::Pending);
    }

    #[test]
    fn unknown_user_type_is_ignored() {
        let storage = MemoryStorage::new();
        storage.set_item("isLoggedIn", "true").unwrap();
        storage.set_item("userType", "admin").unwrap();
        let session = SessionStore::new(storage).load();
        assert!(session.logged_in);
        assert_eq!(session.user_type, None);
    }
}
