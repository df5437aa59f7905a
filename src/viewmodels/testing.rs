//! Scripted backend for view model tests.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{json, Value};

use crate::models::{
    DonorLoginResponse, DonorRegistration, HospitalRegistration, LoginRequest, NewBloodRequest,
};
use crate::services::{ApiError, BloodBankApi};

#[derive(Default)]
struct Script {
    donor_register: Option<Result<(), ApiError>>,
    donor_login: Option<Result<DonorLoginResponse, ApiError>>,
    hospital_register: Option<Result<Value, ApiError>>,
    hospital_login: Option<Result<Value, ApiError>>,
    blood_request: Option<Result<(), ApiError>>,
    calls: Vec<&'static str>,
    last_token: Option<String>,
    last_blood_request: Option<NewBloodRequest>,
}

/// Unscripted calls succeed with an empty body
#[derive(Clone, Default)]
pub struct MockApi {
    script: Rc<RefCell<Script>>,
}

impl MockApi {
    pub fn with_donor_register(self, result: Result<(), ApiError>) -> Self {
        self.script.borrow_mut().donor_register = Some(result);
        self
    }

    pub fn with_donor_login(self, result: Result<DonorLoginResponse, ApiError>) -> Self {
        self.script.borrow_mut().donor_login = Some(result);
        self
    }

    pub fn with_hospital_register(self, result: Result<Value, ApiError>) -> Self {
        self.script.borrow_mut().hospital_register = Some(result);
        self
    }

    pub fn with_hospital_login(self, result: Result<Value, ApiError>) -> Self {
        self.script.borrow_mut().hospital_login = Some(result);
        self
    }

    pub fn with_blood_request(self, result: Result<(), ApiError>) -> Self {
        self.script.borrow_mut().blood_request = Some(result);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.script.borrow().calls.clone()
    }

    pub fn last_token(&self) -> Option<String> {
        self.script.borrow().last_token.clone()
    }

    pub fn last_blood_request(&self) -> Option<NewBloodRequest> {
        self.script.borrow().last_blood_request.clone()
    }

    fn record(&self, call: &'static str) {
        self.script.borrow_mut().calls.push(call);
    }
}

impl BloodBankApi for MockApi {
    async fn register_donor(&self, _registration: &DonorRegistration) -> Result<(), ApiError> {
        self.record("register_donor");
        self.script.borrow().donor_register.clone().unwrap_or(Ok(()))
    }

    async fn login_donor(&self, _credentials: &LoginRequest) -> Result<DonorLoginResponse, ApiError> {
        self.record("login_donor");
        self.script
            .borrow()
            .donor_login
            .clone()
            .unwrap_or_else(|| Ok(donor_login_body()))
    }

    async fn register_hospital(&self, _registration: &HospitalRegistration) -> Result<Value, ApiError> {
        self.record("register_hospital");
        self.script
            .borrow()
            .hospital_register
            .clone()
            .unwrap_or_else(|| Ok(json!({})))
    }

    async fn login_hospital(&self, _credentials: &LoginRequest) -> Result<Value, ApiError> {
        self.record("login_hospital");
        self.script
            .borrow()
            .hospital_login
            .clone()
            .unwrap_or_else(|| Ok(json!({})))
    }

    async fn submit_blood_request(
        &self,
        token: Option<&str>,
        request: &NewBloodRequest,
    ) -> Result<(), ApiError> {
        self.record("submit_blood_request");
        let mut script = self.script.borrow_mut();
        script.last_token = token.map(str::to_string);
        script.last_blood_request = Some(request.clone());
        script.blood_request.clone().unwrap_or(Ok(()))
    }
}

pub fn donor_login_body() -> DonorLoginResponse {
    serde_json::from_value(json!({
        "message": {
            "donor": {
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
    }))
    .expect("valid donor login body")
}
