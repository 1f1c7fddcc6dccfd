use std::fmt::Write;

/// Nodo del árbol de render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  Element(Element),
  Text(String),
}

impl Node {
  pub fn text(text: impl Into<String>) -> Self {
    Node::Text(text.into())
  }

  pub fn as_element(&self) -> Option<&Element> {
    match self {
      Node::Element(el) => Some(el),
      Node::Text(_) => None,
    }
  }

  /// Texto visible concatenado de este nodo y sus descendientes.
  pub fn text_content(&self) -> String {
    let mut out = String::new();
    self.collect_text(&mut out);
    out
  }

  fn collect_text(&self, out: &mut String) {
    match self {
      Node::Text(text) => out.push_str(text),
      Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
    }
  }

  pub fn write_html(&self, out: &mut String) {
    match self {
      Node::Text(text) => out.push_str(&escape_html(text)),
      Node::Element(el) => el.write_html(out),
    }
  }

  pub fn to_html(&self) -> String {
    let mut out = String::new();
    self.write_html(&mut out);
    out
  }
}

impl From<Element> for Node {
  fn from(el: Element) -> Self {
    Node::Element(el)
  }
}

/// Elemento con etiqueta, atributos e hijos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
  pub tag: &'static str,
  pub id: Option<String>,
  pub classes: Vec<&'static str>,
  pub attrs: Vec<(&'static str, String)>,
  pub children: Vec<Node>,
}

const VOID_TAGS: [&str; 3] = ["img", "br", "hr"];

impl Element {
  pub fn new(tag: &'static str) -> Self {
    Self { tag, id: None, classes: Vec::new(), attrs: Vec::new(), children: Vec::new() }
  }

  pub fn id(mut self, id: impl Into<String>) -> Self {
    self.id = Some(id.into());
    self
  }

  pub fn class(mut self, class: &'static str) -> Self {
    self.classes.push(class);
    self
  }

  pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
    self.attrs.push((name, value.into()));
    self
  }

  pub fn child(mut self, node: impl Into<Node>) -> Self {
    self.children.push(node.into());
    self
  }

  pub fn text(self, text: impl Into<String>) -> Self {
    self.child(Node::Text(text.into()))
  }

  /// Busca en profundidad el elemento con el `id` dado.
  pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
    if self.id.as_deref() == Some(id) {
      return Some(self);
    }
    find_in_mut(&mut self.children, id)
  }

  pub fn find_by_id(&self, id: &str) -> Option<&Element> {
    if self.id.as_deref() == Some(id) {
      return Some(self);
    }
    find_in(&self.children, id)
  }

  fn write_html(&self, out: &mut String) {
    out.push('<');
    out.push_str(self.tag);
    if let Some(id) = &self.id {
      let _ = write!(out, " id=\"{}\"", escape_html(id));
    }
    if !self.classes.is_empty() {
      let _ = write!(out, " class=\"{}\"", self.classes.join(" "));
    }
    for (name, value) in &self.attrs {
      let _ = write!(out, " {name}=\"{}\"", escape_html(value));
    }
    out.push('>');

    if VOID_TAGS.contains(&self.tag) {
      return;
    }

    for child in &self.children {
      child.write_html(out);
    }
    let _ = write!(out, "</{}>", self.tag);
  }
}

pub(crate) fn find_in_mut<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut Element> {
  nodes.iter_mut().find_map(|node| match node {
    Node::Element(el) => el.find_by_id_mut(id),
    Node::Text(_) => None,
  })
}

pub(crate) fn find_in<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Element> {
  nodes.iter().find_map(|node| match node {
    Node::Element(el) => el.find_by_id(id),
    Node::Text(_) => None,
  })
}

/// Escapa texto para HTML (contenido y valores de atributo).
pub fn escape_html(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(ch),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_with_escaping() {
    let card = Element::new("div")
      .class("card")
      .child(Element::new("img").attr("src", "a.jpg").attr("alt", "\"Rock\" & roll"))
      .child(Element::new("h3").text("<b>Tour</b>"));

    assert_eq!(
      Node::from(card).to_html(),
      concat!(
        r#"<div class="card"><img src="a.jpg" alt="&quot;Rock&quot; &amp; roll">"#,
        r#"<h3>&lt;b&gt;Tour&lt;/b&gt;</h3></div>"#,
      )
    );
  }

  #[test]
  fn finds_nested_ids() {
    let inner = Element::new("div").child(Element::new("span").id("clock"));
    let mut card = Element::new("div").child(inner);
    assert!(card.find_by_id("clock").is_some());
    card.find_by_id_mut("clock").unwrap().children.push(Node::text("1d"));
    assert_eq!(Node::from(card).text_content(), "1d");
  }
}
