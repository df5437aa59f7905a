// Persisted localStorage keys
pub const STORAGE_KEY_LOGGED_IN: &str = "isLoggedIn";
pub const STORAGE_KEY_USER_TYPE: &str = "userType";
pub const STORAGE_KEY_DONOR_DATA: &str = "donorData";
pub const STORAGE_KEY_HOSPITAL_DATA: &str = "hospitalData";
pub const STORAGE_KEY_BLOOD_REQUESTS: &str = "bloodRequests";

// Backend endpoints (relative to CONFIG.backend_url())
pub const ENDPOINT_DONOR_REGISTER: &str = "/donor/register";
pub const ENDPOINT_DONOR_LOGIN: &str = "/donor/login";
pub const ENDPOINT_HOSPITAL_REGISTER: &str = "/hospital/register";
pub const ENDPOINT_HOSPITAL_LOGIN: &str = "/hospital/login";
pub const ENDPOINT_BLOOD_REQUESTS: &str = "/requests/donors";

pub const APP_NAME: &str = "BloodLink";
