pub mod auth_viewmodel;
pub mod blood_request_viewmodel;
pub mod dashboard_viewmodel;

#[cfg(test)]
pub(crate) mod testing;

pub use auth_viewmodel::{AuthViewModel, DonorRegisterForm};
pub use blood_request_viewmodel::BloodRequestViewModel;
pub use dashboard_viewmodel::{gate, Gate};
