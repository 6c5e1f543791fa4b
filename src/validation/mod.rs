mod client;
mod controller;
mod error;

pub use client::{decode_validation_body, HttpValidationClient, ValidationTransport};
pub use controller::{ValidationController, DEFAULT_DEBOUNCE};
pub use error::ValidationError;
