pub mod band;
pub mod discography;
pub mod event;
pub mod labels;
pub mod links;
pub mod localized;
pub mod model;
pub mod page;

pub use band::{Band, Photo};
pub use discography::{Discography, Release};
pub use event::{EventDate, Events, NextEvent, UpcomingItem};
pub use labels::Labels;
pub use links::{Links, StreamingLinks};
pub use localized::Localized;
pub use model::SiteModel;
pub use page::PageId;
