//! Identificadores fijos de los slots del marcado.

pub const BRAND_TEXT: &str = "brand-text";
pub const FOOTER_BAND: &str = "footer-band";

pub const BAND_NAME: &str = "band-name";
pub const BAND_TAGLINE: &str = "band-tagline";
pub const NEXT_EVENT: &str = "next-event";
pub const COUNTDOWN_HOME: &str = "countdown-home";
pub const HOME_PHOTOS: &str = "home-photos";
pub const LATEST_DROP_LINKS: &str = "latest-drop-links";
pub const LATEST_DROP_ART: &str = "latest-drop-art";

pub const BAND_BIO: &str = "band-bio";
pub const ABOUT_PHOTOS: &str = "about-photos";

pub const STREAMING_LINKS: &str = "streaming-links";
pub const DISCOGRAPHY: &str = "discography";

pub const UPCOMING_TITLE: &str = "upcoming-title";
pub const UPCOMING_META: &str = "upcoming-meta";
pub const COUNTDOWN_HERO: &str = "countdown-hero";
pub const UPCOMING_LIST: &str = "upcoming-list";

/// Número de fotos que muestra la portada.
pub const HOME_PHOTO_LIMIT: usize = 3;
