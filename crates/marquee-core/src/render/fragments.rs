use crate::domain::{NextEvent, Photo, Release, StreamingLinks, UpcomingItem};
use crate::i18n::{Lang, format_event_date};
use crate::view::{Element, Node};

use super::slots;

const SPOTIFY: &str = "Spotify";
const APPLE_MUSIC: &str = "Apple Music";

pub(super) fn divider() -> Node {
  Element::new("div").class("divider-line").into()
}

pub(super) fn photo_grid<'a>(photos: impl IntoIterator<Item = &'a Photo>, lang: Lang) -> Vec<Node> {
  photos
    .into_iter()
    .map(|photo| {
      Node::from(
        Element::new("div")
          .class("photo")
          .child(
            Element::new("img")
              .attr("src", photo.src.as_str())
              .attr("alt", photo.alt.resolve(lang)),
          )
          .child(Element::new("div").class("photo-caption").text(photo.caption.resolve(lang))),
      )
    })
    .collect()
}

/// Tarjeta del próximo evento con el slot anidado de la cuenta atrás.
pub(super) fn next_event_card(event: &NextEvent, lang: Lang) -> Node {
  Element::new("div")
    .class("card")
    .child(Element::new("div").class("badge").text(event.kind.resolve(lang)))
    .child(Element::new("h3").text(event.title.resolve(lang)))
    .child(Element::new("p").text(event.location.resolve(lang)))
    .child(Element::new("p").text(format_event_date(&event.date, lang)))
    .child(divider())
    .child(Element::new("div").class("countdown").id(slots::COUNTDOWN_HOME))
    .into()
}

fn external_link(href: &str, label: &'static str) -> Element {
  Element::new("a").attr("href", href).attr("target", "_blank").attr("rel", "noopener").text(label)
}

/// Botones de la portada: Spotify primero.
pub(super) fn stream_buttons(links: &StreamingLinks) -> Vec<Node> {
  [(links.spotify.as_deref(), SPOTIFY), (links.apple_music.as_deref(), APPLE_MUSIC)]
    .into_iter()
    .filter_map(|(href, label)| {
      href.map(|href| Node::from(external_link(href, label).class("btn")))
    })
    .collect()
}

/// Enlaces en línea de la página de música: Apple Music primero.
pub(super) fn inline_links(links: &StreamingLinks) -> Node {
  let anchors = [(links.apple_music.as_deref(), APPLE_MUSIC), (links.spotify.as_deref(), SPOTIFY)]
    .into_iter()
    .filter_map(|(href, label)| href.map(|href| Node::from(external_link(href, label))));

  let mut wrap = Element::new("div").class("inline-links");
  wrap.children.extend(anchors);
  wrap.into()
}

pub(super) fn latest_release(release: &Release, lang: Lang) -> Vec<Node> {
  let title = release.title.resolve(lang);
  vec![
    Element::new("div")
      .class("latest-release")
      .child(Element::new("img").attr("src", release.cover.as_str()).attr("alt", title))
      .child(
        Element::new("div").class("photo-caption").text(format!("{title} • {}", release.year)),
      )
      .into(),
    divider(),
  ]
}

pub(super) fn release_card(release: &Release, lang: Lang) -> Node {
  let title = release.title.resolve(lang);
  Element::new("div")
    .class("card")
    .child(Element::new("img").attr("src", release.cover.as_str()).attr("alt", title))
    .child(divider())
    .child(Element::new("h3").text(title))
    .child(Element::new("p").text(format!("{} · {}", release.year, release.kind.resolve(lang))))
    .child(Element::new("p").text(release.description.resolve(lang)))
    .into()
}

pub(super) fn upcoming_card(item: &UpcomingItem, lang: Lang) -> Node {
  let title = item.title.resolve(lang);
  Element::new("div")
    .class("card")
    .child(Element::new("img").attr("src", item.image.as_str()).attr("alt", title))
    .child(divider())
    .child(Element::new("h3").text(title))
    .child(Element::new("p").text(item.location.resolve(lang)))
    .child(Element::new("p").text(format_event_date(&item.date, lang)))
    .child(Element::new("p").text(item.description.resolve(lang)))
    .into()
}
