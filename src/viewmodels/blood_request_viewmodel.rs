// ============================================================================
// BLOOD REQUEST VIEWMODEL - Formulario de solicitud del hospital
// ============================================================================

use chrono::{DateTime, Utc};

use crate::models::{BloodGroup, BloodRequest, NewBloodRequest};
use crate::services::{ApiClient, BloodBankApi};
use crate::state::SessionStore;
use crate::utils::{KeyValueStore, LocalStorage};

pub const MSG_MISSING_FIELDS: &str = "Please select blood group and quantity";
pub const MSG_INVALID_QUANTITY: &str = "Quantity must be a whole number of at least 1";
pub const MSG_REQUEST_FAILED: &str = "Failed to submit blood request.";
pub const MSG_REQUEST_SUBMITTED: &str = "Blood request submitted successfully!";

/// Parses the two form inputs into a request body
pub fn parse_request_form(blood_group: &str, quantity: &str) -> Result<NewBloodRequest, &'static str> {
    let quantity = quantity.trim();
    if blood_group.is_empty() || quantity.is_empty() {
        return Err(MSG_MISSING_FIELDS);
    }
    let blood_group = blood_group
        .parse::<BloodGroup>()
        .map_err(|_| MSG_MISSING_FIELDS)?;
    let quantity = quantity
        .parse::<u32>()
        .ok()
        .filter(|units| *units > 0)
        .ok_or(MSG_INVALID_QUANTITY)?;
    Ok(NewBloodRequest { blood_group, quantity })
}

pub struct BloodRequestViewModel<A: BloodBankApi = ApiClient, S: KeyValueStore = LocalStorage> {
    api: A,
    store: SessionStore<S>,
}

impl BloodRequestViewModel {
    pub fn new() -> Self {
        Self::with(ApiClient::new(), SessionStore::browser())
    }
}

impl Default for BloodRequestViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: BloodBankApi, S: KeyValueStore> BloodRequestViewModel<A, S> {
    pub fn with(api: A, store: SessionStore<S>) -> Self {
        Self { api, store }
    }

    /// Persisted history, newest first
    pub fn history(&self) -> Vec<BloodRequest> {
        self.store.blood_requests()
    }

    /// Sends the request; only an accepted request is recorded, at index 0
    pub async fn submit(
        &self,
        current: &[BloodRequest],
        request: &NewBloodRequest,
        token: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Vec<BloodRequest>, &'static str> {
        if let Err(e) = self.api.submit_blood_request(token, request).await {
            log::error!("❌ [REQUEST] Blood request not accepted: {}", e);
            return Err(MSG_REQUEST_FAILED);
        }

        let record = BloodRequest::pending(request, now);
        log::info!("✅ [REQUEST] Blood request {} recorded", record.id);
        match self.store.prepend_blood_request(current, record.clone()) {
            Ok(updated) => Ok(updated),
            Err(e) => {
                // Backend already has it; keep showing it for this page view
                log::error!("❌ [REQUEST] Could not persist request history: {}", e);
                let mut updated = Vec::with_capacity(current.len() + 1);
                updated.push(record);
                updated.extend_from_slice(current);
                Ok(updated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::blood_request::RequestStatus;
    use crate::services::ApiError;
    use crate::utils::MemoryStorage;
    use crate::viewmodels::testing::MockApi;
    use chrono::TimeZone;
    use futures::executor::block_on;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn form_requires_group_and_positive_quantity() {
        assert_eq!(parse_request_form("", "2"), Err(MSG_MISSING_FIELDS));
        assert_eq!(parse_request_form("A+", " "), Err(MSG_MISSING_FIELDS));
        assert_eq!(parse_request_form("A+", "0"), Err(MSG_INVALID_QUANTITY));
        assert_eq!(parse_request_form("A+", "-2"), Err(MSG_INVALID_QUANTITY));
        assert_eq!(parse_request_form("A+", "1.5"), Err(MSG_INVALID_QUANTITY));
        assert_eq!(
            parse_request_form("AB-", "4"),
            Ok(NewBloodRequest { blood_group: BloodGroup::AbNegative, quantity: 4 })
        );
    }

    #[test]
    fn accepted_request_is_prepended_as_pending() {
        let api = MockApi::default();
        let storage = MemoryStorage::new();
        let vm = BloodRequestViewModel::with(api.clone(), SessionStore::new(storage.clone()));
        let request = NewBloodRequest { blood_group: BloodGroup::OPositive, quantity: 2 };

        let first = block_on(vm.submit(&[], &request, Some("h-token"), now())).unwrap();
        let second = block_on(vm.submit(&first, &request, Some("h-token"), now() + chrono::Duration::minutes(1))).unwrap();

        assert_eq!(second.len(), 2);
        assert_eq!(second[0].status, RequestStatus::Pending);
        assert_eq!(second[1], first[0]);
        assert_eq!(vm.history(), second);
        assert_eq!(api.last_token().as_deref(), Some("h-token"));
        assert_eq!(api.last_blood_request(), Some(request));
    }

    #[test]
    fn failed_request_leaves_history_unchanged() {
        let api = MockApi::default().with_blood_request(Err(ApiError::Rejected {
            status: 500,
            message: "Internal Server Error".into(),
        }));
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        let existing = vec![BloodRequest::pending(
            &NewBloodRequest { blood_group: BloodGroup::APositive, quantity: 1 },
            now(),
        )];
        store.save_blood_requests(&existing).unwrap();
        let vm = BloodRequestViewModel::with(api, store);

        let result = block_on(vm.submit(
            &existing,
            &NewBloodRequest { blood_group: BloodGroup::BNegative, quantity: 5 },
            None,
            now(),
        ));
        assert_eq!(result, Err(MSG_REQUEST_FAILED));
        assert_eq!(vm.history(), existing);
        assert_eq!(SessionStore::new(storage).blood_requests(), existing);
    }

    #[test]
    fn history_is_empty_before_any_request() {
        let vm = BloodRequestViewModel::with(MockApi::default(), SessionStore::new(MemoryStorage::new()));
        assert!(vm.history().is_empty());
    }
}
