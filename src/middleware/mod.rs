pub mod auth;
pub mod cors;
pub mod profile;

pub use auth::require;
pub use cors::cors_layer;
pub use profile::profile_time;
