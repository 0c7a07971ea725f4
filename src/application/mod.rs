//! # Application Layer
//!
//! Client and store interfaces, the per-session context, and the use cases
//! that coordinate them.

pub mod interfaces;
pub mod session;
pub mod use_cases;

pub use interfaces::*;
pub use session::*;
pub use use_cases::*;
