pub mod donor_dashboard;
pub mod donor_register;
pub mod field_error;
pub mod footer;
pub mod home_page;
pub mod hospital_dashboard;
pub mod hospital_register;
pub mod link;
pub mod login_page;
pub mod navbar;

pub use donor_dashboard::DonorDashboard;
pub use donor_register::DonorRegister;
pub use field_error::FieldError;
pub use footer::Footer;
pub use home_page::{HomePage, NotFound};
pub use hospital_dashboard::HospitalDashboard;
pub use hospital_register::HospitalRegister;
pub use link::Link;
pub use login_page::LoginPage;
pub use navbar::Navbar;
