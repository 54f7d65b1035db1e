//! Command facade.
//!
//! One async function per operation the presentation layer can invoke. Every
//! command logs its outcome through `utils::logging` with a stable
//! `area::name` identifier.

pub mod credentials;
pub mod dashboard;
pub mod monitoring;
pub mod settings;

pub use credentials::{set_credential_email, set_credential_password, validate_credentials};
pub use dashboard::{get_dashboard, list_countries, CountryView, DashboardSnapshot};
pub use monitoring::{start_monitoring, stop_monitoring, test_sound};
pub use settings::{select_country, set_scan_interval, toggle_office, update_notifications};
