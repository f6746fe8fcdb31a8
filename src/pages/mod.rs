//! Pages
//!
//! One module per routed view.

mod admin;
mod doctor;
mod doctors;
mod intake;
mod landing;
mod login;
mod overview;
mod patient;
mod recipient;

pub use admin::AdminDashboard;
pub use doctor::DoctorDashboard;
pub use doctors::DoctorsPage;
pub use intake::IntakePage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use overview::OverviewPage;
pub use patient::PatientDashboard;
pub use recipient::RecipientDashboard;
