mod backend;
mod model;
mod paths;
mod preferences;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use model::SiteConfig;
pub use paths::{ConfigError, MarqueePaths};
pub use preferences::TomlPreferenceStore;
