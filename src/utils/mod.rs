pub mod envelope;
pub mod error;
pub mod fallback;
pub mod guard;
pub mod id;
pub mod store;
pub mod validation;
