pub mod document;
pub mod domain;
pub mod errors;
pub mod i18n;
pub mod ports;
pub mod render;
pub mod services;
pub mod view;

pub use errors::CoreError;
pub use i18n::Lang;
