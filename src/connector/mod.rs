//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completions (OpenRouter) and image search (Pexels) over HTTP
//! - In-memory history storage
//! - Offline mock clients
//! - The terminal front-end (container, controllers, router, interactive shell)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
