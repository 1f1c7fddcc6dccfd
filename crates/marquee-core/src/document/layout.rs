use crate::domain::PageId;
use crate::i18n::Lang;
use crate::render::slots;

/// Marcado fijo de cada página: qué slots, etiquetas y selectores de idioma
/// contiene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
  pub page: PageId,
  pub slots: Vec<&'static str>,
  pub labels: Vec<&'static str>,
  pub langs: Vec<Lang>,
}

const NAV_LABELS: [&str; 4] = ["nav.home", "nav.about", "nav.music", "nav.upcoming"];

impl PageLayout {
  pub fn for_page(page: PageId) -> Self {
    let (page_slots, page_labels): (&[&'static str], &[&'static str]) = match page {
      PageId::Home => (
        &[
          slots::BAND_NAME,
          slots::BAND_TAGLINE,
          slots::NEXT_EVENT,
          slots::HOME_PHOTOS,
          slots::LATEST_DROP_LINKS,
          slots::LATEST_DROP_ART,
        ],
        &["home.nextEvent", "home.latestDrop", "home.gallery"],
      ),
      PageId::About => (&[slots::BAND_BIO, slots::ABOUT_PHOTOS], &["about.title", "about.gallery"]),
      PageId::Music => {
        (&[slots::STREAMING_LINKS, slots::DISCOGRAPHY], &["music.title", "music.listen"])
      }
      PageId::Upcoming => (
        &[slots::UPCOMING_TITLE, slots::UPCOMING_META, slots::COUNTDOWN_HERO, slots::UPCOMING_LIST],
        &["upcoming.title", "upcoming.countdown"],
      ),
    };

    let mut all_slots = vec![slots::BRAND_TEXT];
    all_slots.extend_from_slice(page_slots);
    all_slots.push(slots::FOOTER_BAND);

    let mut labels = NAV_LABELS.to_vec();
    labels.extend_from_slice(page_labels);
    labels.push("footer.rights");

    Self { page, slots: all_slots, labels, langs: Lang::ALL.to_vec() }
  }
}
