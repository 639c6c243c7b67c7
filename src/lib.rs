pub mod deep_link;
pub mod domain;
pub mod error;
pub mod host;
pub mod login_manager;
pub mod providers;
pub mod settings;
pub mod surface;
pub mod telemetry;
pub mod utils;
