//! Users and the registry that keeps their ids unique.

pub mod profile;
pub mod registry;

pub use profile::User;
pub use registry::UserRegistry;
