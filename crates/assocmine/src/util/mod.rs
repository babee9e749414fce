pub mod format;
pub mod progress;

pub use format::{format_percent, format_timestamp, parse_fraction};
pub use progress::{create_spinner, hidden_spinner};
