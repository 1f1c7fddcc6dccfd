use super::Node;
use crate::domain::EventDate;

/// Contenido que se escribe en un slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotContent {
  Text(String),
  Nodes(Vec<Node>),
}

impl SlotContent {
  pub fn empty() -> Self {
    SlotContent::Nodes(Vec::new())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotWrite {
  pub slot: &'static str,
  pub content: SlotContent,
}

/// Petición de cuenta atrás hacia `target` dentro de `slot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownRequest {
  pub slot: &'static str,
  pub target: EventDate,
}

/// Resultado de un renderizador: escrituras en orden + cuentas atrás.
///
/// Las cuentas atrás se arrancan después de aplicar las escrituras, de modo
/// que un slot creado por un fragmento ya existe cuando se le pide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
  pub writes: Vec<SlotWrite>,
  pub countdowns: Vec<CountdownRequest>,
}

impl PageView {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn text(&mut self, slot: &'static str, text: impl Into<String>) -> &mut Self {
    self.writes.push(SlotWrite { slot, content: SlotContent::Text(text.into()) });
    self
  }

  pub fn nodes(&mut self, slot: &'static str, nodes: Vec<Node>) -> &mut Self {
    self.writes.push(SlotWrite { slot, content: SlotContent::Nodes(nodes) });
    self
  }

  pub fn countdown(&mut self, slot: &'static str, target: EventDate) -> &mut Self {
    self.countdowns.push(CountdownRequest { slot, target });
    self
  }

  /// Última escritura dirigida a `slot`, si la hay.
  pub fn write_for(&self, slot: &str) -> Option<&SlotContent> {
    self.writes.iter().rev().find(|w| w.slot == slot).map(|w| &w.content)
  }
}
