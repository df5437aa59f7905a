// ============================================================================
// AUTH VIEWMODEL - Registro y login de donantes y hospitales
// ============================================================================
// Valida, llama al backend y escribe la sesión. Devuelve valores; los
// componentes deciden alertas y navegación.
// ============================================================================

use crate::models::{
    BloodGroup, DonorProfile, DonorRegistration, HospitalRegistration, HospitalSession,
    LoginRequest,
};
use crate::services::{ApiClient, ApiError, BloodBankApi};
use crate::state::SessionStore;
use crate::utils::validation::*;
use crate::utils::{KeyValueStore, LocalStorage};

pub const MSG_INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const MSG_SERVER_ERROR: &str = "Server error. Please try again.";
pub const MSG_REGISTRATION_FAILED: &str = "Registration failed. Please try again.";
pub const MSG_UNEXPECTED_ERROR: &str = "An error occurred. Please try again.";
pub const MSG_FILL_ALL_FIELDS: &str = "Please fill in all required fields.";

/// Raw donor registration inputs, as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DonorRegisterForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub blood_group: String,
    pub email: String,
    pub password: String,
    pub contact_number: String,
    pub location: String,
}

impl DonorRegisterForm {
    /// Required-field check only; the form carries no format validation
    pub fn to_registration(&self) -> Result<DonorRegistration, &'static str> {
        let required = [
            &self.name,
            &self.age,
            &self.email,
            &self.password,
            &self.contact_number,
            &self.location,
        ];
        if required.iter().any(|value| value.trim().is_empty()) {
            return Err(MSG_FILL_ALL_FIELDS);
        }
        if self.age.trim().parse::<u32>().is_err() {
            return Err("Age must be a number.");
        }
        let blood_group = self
            .blood_group
            .parse::<BloodGroup>()
            .map_err(|_| "Please select a blood group.")?;

        Ok(DonorRegistration {
            name: self.name.clone(),
            age: self.age.trim().to_string(),
            gender: self.gender.clone(),
            blood_group,
            email: self.email.clone(),
            contact_number: self.contact_number.clone(),
            location: self.location.clone(),
            password: self.password.clone(),
        })
    }
}

pub fn validate_login(credentials: &LoginRequest) -> Result<(), FormErrors> {
    let mut errors = FormErrors::new();
    if !is_valid_email(&credentials.email) {
        errors.set("email", MSG_EMAIL_REQUIRED);
    }
    if !is_valid_password(&credentials.password) {
        errors.set("password", MSG_PASSWORD_TOO_SHORT);
    }
    errors.into_result()
}

/// License number and password are optional on hospital sign-up
pub fn validate_hospital_registration(form: &HospitalRegistration) -> Result<(), FormErrors> {
    let mut errors = FormErrors::new();
    if form.name.trim().is_empty() {
        errors.set("name", MSG_HOSPITAL_NAME_REQUIRED);
    }
    if !is_valid_email(&form.email) {
        errors.set("email", MSG_EMAIL_REQUIRED);
    }
    if !is_valid_phone(&form.contact_number) {
        errors.set("contactNumber", MSG_PHONE_REQUIRED);
    }
    if form.location.trim().is_empty() {
        errors.set("location", MSG_ADDRESS_REQUIRED);
    }
    errors.into_result()
}

fn email_error(error: &ApiError, rejected_message: &'static str) -> FormErrors {
    let message = if error.is_rejection() {
        rejected_message
    } else {
        MSG_SERVER_ERROR
    };
    FormErrors::single("email", message)
}

pub struct AuthViewModel<A: BloodBankApi = ApiClient, S: KeyValueStore = LocalStorage> {
    api: A,
    store: SessionStore<S>,
}

impl AuthViewModel {
    pub fn new() -> Self {
        Self::with(ApiClient::new(), SessionStore::browser())
    }
}

impl Default for AuthViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: BloodBankApi, S: KeyValueStore> AuthViewModel<A, S> {
    pub fn with(api: A, store: SessionStore<S>) -> Self {
        Self { api, store }
    }

    /// Submits a donor sign-up. The session is not written: the caller
    /// forwards the returned registration as navigation state only.
    pub async fn register_donor(
        &self,
        form: &DonorRegisterForm,
    ) -> Result<DonorRegistration, &'static str> {
        let registration = form.to_registration()?;
        match self.api.register_donor(&registration).await {
            Ok(()) => {
                log::info!("✅ [AUTH] Donor registered: {}", registration.email);
                Ok(registration)
            }
            Err(e) if e.is_rejection() => {
                log::warn!("⚠️ [AUTH] Donor registration rejected: {}", e);
                Err(MSG_REGISTRATION_FAILED)
            }
            Err(e) => {
                log::error!("❌ [AUTH] Donor registration failed: {}", e);
                Err(MSG_UNEXPECTED_ERROR)
            }
        }
    }

    /// Validates first; invalid credentials never reach the network
    pub async fn login_donor(&self, credentials: &LoginRequest) -> Result<DonorProfile, FormErrors> {
        validate_login(credentials)?;

        let response = self.api.login_donor(credentials).await.map_err(|e| {
            log::warn!("⚠️ [AUTH] Donor login failed: {}", e);
            email_error(&e, MSG_INVALID_CREDENTIALS)
        })?;

        let profile = response.message.donor;
        self.store.save_donor_login(&profile).map_err(|e| {
            log::error!("❌ [AUTH] Could not persist donor session: {}", e);
            FormErrors::single("email", MSG_SERVER_ERROR)
        })?;

        log::info!("✅ [AUTH] Donor logged in: {}", profile.email);
        Ok(profile)
    }

    pub async fn register_hospital(
        &self,
        registration: &HospitalRegistration,
    ) -> Result<HospitalSession, FormErrors> {
        validate_hospital_registration(registration)?;

        let response = self.api.register_hospital(registration).await.map_err(|e| {
            log::warn!("⚠️ [AUTH] Hospital registration failed: {}", e);
            email_error(&e, MSG_REGISTRATION_FAILED)
        })?;

        self.persist_hospital(response)
    }

    pub async fn login_hospital(&self, credentials: &LoginRequest) -> Result<HospitalSession, FormErrors> {
        validate_login(credentials)?;

        let response = self.api.login_hospital(credentials).await.map_err(|e| {
            log::warn!("⚠️ [AUTH] Hospital login failed: {}", e);
            email_error(&e, MSG_INVALID_CREDENTIALS)
        })?;

        self.persist_hospital(response)
    }

    fn persist_hospital(&self, response: serde_json::Value) -> Result<HospitalSession, FormErrors> {
        self.store.save_hospital_login(&response).map_err(|e| {
            log::error!("❌ [AUTH] Could not persist hospital session: {}", e);
            FormErrors::single("email", MSG_SERVER_ERROR)
        })?;
        let session = HospitalSession::from_response(response);
        log::info!("✅ [AUTH] Hospital signed in: {}", session.profile.hospital_name);
        Ok(session)
    }

    pub fn logout(&self) {
        if let Err(e) = self.store.logout() {
            log::error!("❌ [AUTH] Error clearing session: {}", e);
        }
    }
}
