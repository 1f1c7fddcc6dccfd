use std::fmt::Write;
use std::sync::{Mutex, MutexGuard};

use super::PageLayout;
use crate::i18n::Lang;
use crate::ports::Document;
use crate::view::node::{find_in, find_in_mut};
use crate::view::{Node, escape_html};

#[derive(Debug, Clone)]
struct LabelElement {
  key: String,
  text: String,
}

#[derive(Debug, Clone)]
struct LangButton {
  code: String,
  active: bool,
}

#[derive(Debug, Default)]
struct Inner {
  page: Option<String>,
  lang: Lang,
  slots: Vec<(String, Vec<Node>)>,
  labels: Vec<LabelElement>,
  buttons: Vec<LangButton>,
}

impl Inner {
  fn slot_mut(&mut self, id: &str) -> Option<&mut Vec<Node>> {
    if let Some(index) = self.slots.iter().position(|(slot, _)| slot == id) {
      return Some(&mut self.slots[index].1);
    }
    self.slots.iter_mut().find_map(|(_, nodes)| find_in_mut(nodes, id)).map(|el| &mut el.children)
  }

  fn slot(&self, id: &str) -> Option<&[Node]> {
    if let Some((_, nodes)) = self.slots.iter().find(|(slot, _)| slot == id) {
      return Some(nodes.as_slice());
    }
    self.slots.iter().find_map(|(_, nodes)| find_in(nodes, id)).map(|el| el.children.as_slice())
  }
}

/// Documento en memoria: la representación del marcado de una página.
///
/// Se usa como destino de render en la CLI (se serializa a HTML) y en los
/// tests. Es seguro compartirlo entre tareas.
#[derive(Debug, Default)]
pub struct MemoryDocument {
  inner: Mutex<Inner>,
}

impl MemoryDocument {
  pub fn new(page: Option<&str>) -> Self {
    let inner = Inner { page: page.map(str::to_string), ..Inner::default() };
    Self { inner: Mutex::new(inner) }
  }

  pub fn from_layout(layout: &PageLayout) -> Self {
    let doc = Self::new(Some(layout.page.as_str()));
    let doc = layout.slots.iter().fold(doc, |doc, slot| doc.with_slot(slot));
    let doc = layout.labels.iter().fold(doc, |doc, key| doc.with_label(key));
    layout.langs.iter().fold(doc, |doc, lang| doc.with_lang_button(lang.code()))
  }

  pub fn with_slot(self, id: &str) -> Self {
    self.lock().slots.push((id.to_string(), Vec::new()));
    self
  }

  pub fn with_label(self, key: &str) -> Self {
    self.lock().labels.push(LabelElement { key: key.to_string(), text: String::new() });
    self
  }

  pub fn with_lang_button(self, code: &str) -> Self {
    self.lock().buttons.push(LangButton { code: code.to_string(), active: false });
    self
  }

  fn lock(&self) -> MutexGuard<'_, Inner> {
    // Un panic en otra tarea no invalida el contenido del documento.
    self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }

  /// Texto visible de un slot (incluidos slots anidados).
  pub fn slot_text(&self, id: &str) -> Option<String> {
    let inner = self.lock();
    inner.slot(id).map(|nodes| nodes.iter().map(Node::text_content).collect())
  }

  pub fn slot_nodes(&self, id: &str) -> Option<Vec<Node>> {
    self.lock().slot(id).map(<[Node]>::to_vec)
  }

  /// Texto de los elementos etiquetados con `key`.
  pub fn label_text(&self, key: &str) -> Vec<String> {
    self.lock().labels.iter().filter(|l| l.key == key).map(|l| l.text.clone()).collect()
  }

  pub fn lang(&self) -> Lang {
    self.lock().lang
  }

  pub fn active_lang(&self) -> Option<String> {
    self.lock().buttons.iter().find(|b| b.active).map(|b| b.code.clone())
  }

  pub fn to_html(&self) -> String {
    let inner = self.lock();
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(out, "<html lang=\"{}\">", inner.lang.code());
    match &inner.page {
      Some(page) => {
        let _ = writeln!(out, "<body data-page=\"{}\">", escape_html(page));
      }
      None => out.push_str("<body>\n"),
    }

    out.push_str("<nav>\n");
    for label in &inner.labels {
      let _ = writeln!(
        out,
        "  <span data-i18n=\"{}\">{}</span>",
        escape_html(&label.key),
        escape_html(&label.text)
      );
    }
    for button in &inner.buttons {
      let class = if button.active { " class=\"active\"" } else { "" };
      let _ = writeln!(
        out,
        "  <button data-lang=\"{code}\"{class}>{label}</button>",
        code = escape_html(&button.code),
        label = escape_html(&button.code.to_uppercase())
      );
    }
    out.push_str("</nav>\n<main>\n");

    for (id, nodes) in &inner.slots {
      let _ = write!(out, "  <div id=\"{}\">", escape_html(id));
      for node in nodes {
        node.write_html(&mut out);
      }
      out.push_str("</div>\n");
    }

    out.push_str("</main>\n</body>\n</html>\n");
    out
  }
}

impl Document for MemoryDocument {
  fn page_id(&self) -> Option<String> {
    self.lock().page.clone()
  }

  fn has_slot(&self, slot: &str) -> bool {
    self.lock().slot(slot).is_some()
  }

  fn set_text(&self, slot: &str, text: &str) -> bool {
    self.set_nodes(slot, vec![Node::text(text)])
  }

  fn set_nodes(&self, slot: &str, nodes: Vec<Node>) -> bool {
    let mut inner = self.lock();
    match inner.slot_mut(slot) {
      Some(children) => {
        *children = nodes;
        true
      }
      None => false,
    }
  }

  fn label_keys(&self) -> Vec<String> {
    self.lock().labels.iter().map(|l| l.key.clone()).collect()
  }

  fn set_label(&self, key: &str, text: &str) {
    for label in self.lock().labels.iter_mut().filter(|l| l.key == key) {
      label.text = text.to_string();
    }
  }

  fn set_lang(&self, lang: Lang) {
    self.lock().lang = lang;
  }

  fn mark_active_lang(&self, lang: Lang) {
    for button in self.lock().buttons.iter_mut() {
      button.active = button.code == lang.code();
    }
  }
}
