pub mod auth;
pub mod blood_group;
pub mod blood_request;
pub mod donor;
pub mod hospital;
pub mod session;

pub use auth::LoginRequest;
pub use blood_group::BloodGroup;
pub use blood_request::{BloodRequest, NewBloodRequest};
pub use donor::{DonationRecord, DonorLoginResponse, DonorProfile, DonorRegistration};
pub use hospital::{hospital_token, HospitalProfile, HospitalRegistration, VerificationStatus};
pub use session::{HospitalSession, Session, UserType};
