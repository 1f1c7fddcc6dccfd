pub mod dates;
pub mod lang;

pub use dates::format_event_date;
pub use lang::{Lang, UnsupportedLang};
