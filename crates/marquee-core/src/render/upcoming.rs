use super::{fragments, slots};
use crate::domain::SiteModel;
use crate::i18n::{Lang, format_event_date};
use crate::view::PageView;

pub fn render_upcoming(model: &SiteModel, lang: Lang) -> PageView {
  let mut view = PageView::new();

  if let Some(event) = &model.events.next_event {
    view.text(slots::UPCOMING_TITLE, event.title.resolve(lang));
    view.text(
      slots::UPCOMING_META,
      format!("{} · {}", event.location.resolve(lang), format_event_date(&event.date, lang)),
    );
    view.countdown(slots::COUNTDOWN_HERO, event.date);
  }

  let cards = model
    .events
    .upcoming_releases
    .iter()
    .map(|item| fragments::upcoming_card(item, lang))
    .collect();
  view.nodes(slots::UPCOMING_LIST, cards);
  view
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::render::fixtures;
  use crate::view::SlotContent;

  #[test]
  fn hero_block_and_list() {
    let view = render_upcoming(&fixtures::model(), Lang::En);

    assert_eq!(
      view.write_for(slots::UPCOMING_META),
      Some(&SlotContent::Text("Sala Apolo, Barcelona · Mar 15, 2025, 8:00 PM".into()))
    );
    assert_eq!(view.countdowns.len(), 1);
    assert_eq!(view.countdowns[0].slot, slots::COUNTDOWN_HERO);

    let Some(SlotContent::Nodes(cards)) = view.write_for(slots::UPCOMING_LIST) else {
      panic!("list not written");
    };
    assert_eq!(cards.len(), 1);
    assert!(cards[0].text_content().contains("New single"));
  }

  #[test]
  fn without_next_event_only_the_list_is_written() {
    let mut model = fixtures::model();
    model.events.next_event = None;
    model.events.upcoming_releases.clear();

    let view = render_upcoming(&model, Lang::En);
    assert_eq!(view.writes.len(), 1);
    assert!(view.write_for(slots::UPCOMING_TITLE).is_none());
    assert!(view.countdowns.is_empty());
  }
}
