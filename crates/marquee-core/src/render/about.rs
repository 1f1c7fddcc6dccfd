use super::{fragments, slots};
use crate::domain::SiteModel;
use crate::i18n::Lang;
use crate::view::PageView;

pub fn render_about(model: &SiteModel, lang: Lang) -> PageView {
  let mut view = PageView::new();
  view.text(slots::BAND_BIO, model.band.bio.resolve(lang));
  view.nodes(slots::ABOUT_PHOTOS, fragments::photo_grid(&model.band.photos, lang));
  view
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::render::fixtures;
  use crate::view::SlotContent;

  #[test]
  fn shows_bio_and_every_photo() {
    let view = render_about(&fixtures::model(), Lang::Es);

    let bio = SlotContent::Text("Formados en 2015.".into());
    assert_eq!(view.write_for(slots::BAND_BIO), Some(&bio));
    match view.write_for(slots::ABOUT_PHOTOS) {
      Some(SlotContent::Nodes(photos)) => assert_eq!(photos.len(), 5),
      other => panic!("unexpected {other:?}"),
    }
    assert!(view.countdowns.is_empty());
  }
}
