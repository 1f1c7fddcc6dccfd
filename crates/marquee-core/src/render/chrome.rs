use super::slots;
use crate::domain::SiteModel;
use crate::view::PageView;

/// Partes comunes a todas las páginas: marca de cabecera y pie.
pub fn render_chrome(model: &SiteModel) -> PageView {
  let mut view = PageView::new();
  view.text(slots::BRAND_TEXT, model.band.name.as_str());
  view.text(slots::FOOTER_BAND, model.band.name.as_str());
  view
}
