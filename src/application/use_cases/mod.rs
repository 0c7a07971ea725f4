mod clear_history;
mod request_recommendation;

pub use clear_history::*;
pub use request_recommendation::*;
