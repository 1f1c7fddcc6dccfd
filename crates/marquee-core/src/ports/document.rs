use crate::i18n::Lang;
use crate::view::Node;

/// Port hacia el documento que se está mostrando (el "DOM").
///
/// Los renderizadores nunca lo tocan directamente: producen un
/// [`crate::view::PageView`] y el controlador lo aplica aquí. Todas las
/// escrituras sobre un slot inexistente son no-ops y devuelven `false`.
///
/// Los métodos reciben `&self` porque las cuentas atrás escriben desde
/// tareas en segundo plano; la implementación gestiona su propia
/// mutabilidad interior.
pub trait Document: Send + Sync {
  /// Identificador de página declarado por el marcado (`home`, `about`...).
  fn page_id(&self) -> Option<String>;

  fn has_slot(&self, slot: &str) -> bool;

  /// Sustituye el contenido del slot por texto plano.
  fn set_text(&self, slot: &str, text: &str) -> bool;

  /// Sustituye el contenido del slot por un fragmento. Los elementos del
  /// fragmento con `id` pasan a ser slots direccionables.
  fn set_nodes(&self, slot: &str, nodes: Vec<Node>) -> bool;

  /// Claves de todos los elementos etiquetados para traducción.
  fn label_keys(&self) -> Vec<String>;

  /// Cambia el texto de todos los elementos etiquetados con `key`.
  fn set_label(&self, key: &str, text: &str);

  /// Idioma declarado del documento.
  fn set_lang(&self, lang: Lang);

  /// Marca como activo el selector de `lang` y desmarca los demás.
  fn mark_active_lang(&self, lang: Lang);
}
