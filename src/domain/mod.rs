//! # Domain Layer
//!
//! Learning preferences, history records, prompt templates and the error
//! taxonomy. Independent of HTTP clients and the terminal front-end.

pub mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
