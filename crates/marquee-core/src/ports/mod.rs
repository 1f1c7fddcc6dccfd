pub mod clock;
pub mod data_source;
pub mod document;
pub mod preferences;

pub use clock::{Clock, ManualClock, SystemClock};
pub use data_source::{DataSource, FetchError, MemoryDataSource, Resource};
pub use document::Document;
pub use preferences::{LANG_KEY, MemoryPreferenceStore, PreferenceError, PreferenceStore};
