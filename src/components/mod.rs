//! UI Components
//!
//! Reusable Leptos components.

mod chip_picker;
mod connection_badge;
mod navbar;
mod risk_badge;
mod stat_card;
mod toast;

pub use chip_picker::ChipPicker;
pub use connection_badge::ConnectionBadge;
pub use navbar::Navbar;
pub use risk_badge::RiskBadge;
pub use stat_card::StatCard;
pub use toast::Toast;
