//! Domain types.

mod record;

pub use record::{Algorithm, SecretRecord};
