use super::{fragments, slots};
use crate::domain::SiteModel;
use crate::i18n::Lang;
use crate::view::PageView;

/// Portada: nombre y lema, próximo evento con cuenta atrás, tres fotos,
/// enlaces de streaming y el último lanzamiento.
pub fn render_home(model: &SiteModel, lang: Lang) -> PageView {
  let mut view = PageView::new();
  let band = &model.band;

  view.text(slots::BAND_NAME, band.name.as_str());
  view.text(slots::BAND_TAGLINE, band.tagline.resolve(lang));

  if let Some(event) = &model.events.next_event {
    view.nodes(slots::NEXT_EVENT, vec![fragments::next_event_card(event, lang)]);
    view.countdown(slots::COUNTDOWN_HOME, event.date);
  }

  let photos = band.photos.iter().take(slots::HOME_PHOTO_LIMIT);
  view.nodes(slots::HOME_PHOTOS, fragments::photo_grid(photos, lang));
  view.nodes(slots::LATEST_DROP_LINKS, fragments::stream_buttons(&model.links.streaming));

  let art = model
    .discography
    .latest()
    .map(|release| fragments::latest_release(release, lang))
    .unwrap_or_default();
  view.nodes(slots::LATEST_DROP_ART, art);

  view
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::render::fixtures;
  use crate::view::SlotContent;

  fn nodes<'a>(view: &'a PageView, slot: &str) -> &'a [crate::view::Node] {
    match view.write_for(slot) {
      Some(SlotContent::Nodes(nodes)) => nodes,
      other => panic!("expected nodes in {slot}, got {other:?}"),
    }
  }

  #[test]
  fn shows_only_three_photos() {
    let model = fixtures::model();
    assert_eq!(model.band.photos.len(), 5);

    let view = render_home(&model, Lang::En);
    assert_eq!(nodes(&view, slots::HOME_PHOTOS).len(), 3);
  }

  #[test]
  fn next_event_card_carries_countdown_slot() {
    let view = render_home(&fixtures::model(), Lang::Es);

    let card = nodes(&view, slots::NEXT_EVENT)[0].as_element().unwrap();
    assert!(card.find_by_id(slots::COUNTDOWN_HOME).is_some());
    assert!(card.children[1].text_content().contains("Gira de primavera"));
    assert_eq!(card.children[3].text_content(), "15 mar 2025, 20:00");

    assert_eq!(view.countdowns.len(), 1);
    assert_eq!(view.countdowns[0].slot, slots::COUNTDOWN_HOME);
  }

  #[test]
  fn missing_next_event_omits_card_and_countdown() {
    let mut model = fixtures::model();
    model.events.next_event = None;

    let view = render_home(&model, Lang::En);
    assert!(view.write_for(slots::NEXT_EVENT).is_none());
    assert!(view.countdowns.is_empty());
  }

  #[test]
  fn latest_release_is_first_in_discography() {
    let view = render_home(&fixtures::model(), Lang::En);
    let art = nodes(&view, slots::LATEST_DROP_ART);
    assert_eq!(art[0].text_content(), "Tormenta • 2024");

    let mut model = fixtures::model();
    model.discography.releases.clear();
    let view = render_home(&model, Lang::En);
    assert!(nodes(&view, slots::LATEST_DROP_ART).is_empty());
  }

  #[test]
  fn streaming_buttons_skip_missing_urls() {
    let mut model = fixtures::model();
    model.links.streaming.apple_music = None;

    let view = render_home(&model, Lang::En);
    let links = nodes(&view, slots::LATEST_DROP_LINKS);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].text_content(), "Spotify");
  }
}
