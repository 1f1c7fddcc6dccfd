//! Árbol de render independiente del documento.
//!
//! Los renderizadores construyen nodos; serializarlos a HTML (o aplicarlos
//! a cualquier otro [`crate::ports::Document`]) es problema de otra capa.

pub(crate) mod node;
mod page_view;

pub use node::{Element, Node, escape_html};
pub use page_view::{CountdownRequest, PageView, SlotContent, SlotWrite};
