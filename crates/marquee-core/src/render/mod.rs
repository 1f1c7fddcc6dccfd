//! Renderizadores de página.
//!
//! Cada uno es una función pura `(modelo, idioma) -> PageView`: no tocan el
//! documento, no arrancan temporizadores y nunca fallan por datos opcionales
//! ausentes (simplemente omiten el fragmento correspondiente).

mod about;
mod chrome;
mod fragments;
mod home;
mod music;
pub mod slots;
mod upcoming;

pub use about::render_about;
pub use chrome::render_chrome;
pub use home::render_home;
pub use music::render_music;
pub use upcoming::render_upcoming;

use crate::domain::{PageId, SiteModel};
use crate::i18n::Lang;
use crate::view::PageView;

/// Despacha al renderizador de `page`.
pub fn render_page(page: PageId, model: &SiteModel, lang: Lang) -> PageView {
  match page {
    PageId::Home => render_home(model, lang),
    PageId::About => render_about(model, lang),
    PageId::Music => render_music(model, lang),
    PageId::Upcoming => render_upcoming(model, lang),
  }
}
