mod history_entry;
mod image_lookup;
mod preference;

pub use history_entry::*;
pub use image_lookup::*;
pub use preference::*;
