pub mod controller;
pub mod countdown;
pub mod loader;

pub use controller::{LOAD_ERROR_MESSAGE, SiteController, SiteState};
pub use countdown::{
  CountdownHandle, CountdownRegistry, Remaining, SlotRef, countdown_text, start_countdown,
};
pub use loader::{LoadError, load_all};
