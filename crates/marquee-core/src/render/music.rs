use super::{fragments, slots};
use crate::domain::SiteModel;
use crate::i18n::Lang;
use crate::view::PageView;

/// Página de música: enlaces de streaming y discografía completa en el
/// orden editorial.
pub fn render_music(model: &SiteModel, lang: Lang) -> PageView {
  let mut view = PageView::new();
  view.nodes(slots::STREAMING_LINKS, vec![fragments::inline_links(&model.links.streaming)]);

  let cards = model
    .discography
    .releases
    .iter()
    .map(|release| fragments::release_card(release, lang))
    .collect();
  view.nodes(slots::DISCOGRAPHY, cards);
  view
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::render::fixtures;
  use crate::view::SlotContent;

  #[test]
  fn keeps_discography_order() {
    let view = render_music(&fixtures::model(), Lang::Es);

    let Some(SlotContent::Nodes(cards)) = view.write_for(slots::DISCOGRAPHY) else {
      panic!("discography not written");
    };
    assert_eq!(cards.len(), 2);
    let first = cards[0].as_element().unwrap();
    assert_eq!(first.children[2].text_content(), "Tormenta");
    assert_eq!(first.children[3].text_content(), "2024 · Álbum");
    assert_eq!(cards[1].as_element().unwrap().children[4].text_content(), "Debut EP");
  }

  #[test]
  fn inline_links_put_apple_music_first() {
    let view = render_music(&fixtures::model(), Lang::En);

    let Some(SlotContent::Nodes(nodes)) = view.write_for(slots::STREAMING_LINKS) else {
      panic!("links not written");
    };
    let wrap = nodes[0].as_element().unwrap();
    assert_eq!(wrap.children[0].text_content(), "Apple Music");
    assert_eq!(wrap.children[1].text_content(), "Spotify");
  }

  #[test]
  fn empty_discography_renders_empty_list() {
    let mut model = fixtures::model();
    model.discography.releases.clear();

    let view = render_music(&model, Lang::En);
    assert_eq!(view.write_for(slots::DISCOGRAPHY), Some(&SlotContent::Nodes(vec![])));
  }
}
