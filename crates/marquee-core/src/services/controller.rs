use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::countdown::{CountdownRegistry, SlotRef, start_countdown};
use super::loader::load_all;
use crate::domain::{Labels, PageId, SiteModel};
use crate::errors::CoreError;
use crate::i18n::Lang;
use crate::ports::{Clock, DataSource, Document, LANG_KEY, PreferenceStore};
use crate::render::{self, slots};
use crate::view::{PageView, SlotContent};

/// Mensaje fijo (sin traducir) que sustituye al nombre de la banda si la
/// carga falla.
pub const LOAD_ERROR_MESSAGE: &str = "Data load error";

/// Estado del controlador de página.
#[derive(Debug, Clone)]
pub enum SiteState {
  Loading,
  Ready(Arc<SiteModel>),
  Failed,
}

impl SiteState {
  pub fn is_ready(&self) -> bool {
    matches!(self, SiteState::Ready(_))
  }
}

/// Controlador de una página cargada.
///
/// Carga los datos una vez, guarda el idioma activo y vuelve a renderizar
/// la página (sin recargar datos) cada vez que cambia el idioma. Todas las
/// dependencias externas llegan inyectadas:
/// - `S`: de dónde salen los documentos JSON,
/// - `P`: dónde se persiste el idioma,
/// - `D`: el documento sobre el que se escribe,
/// - `C`: el reloj de las cuentas atrás.
pub struct SiteController<S, P, D, C>
where
  S: DataSource,
  P: PreferenceStore,
  D: Document + 'static,
  C: Clock + 'static,
{
  source: S,
  prefs: P,
  document: Arc<D>,
  clock: Arc<C>,
  lang: Lang,
  page: Option<PageId>,
  state: SiteState,
  countdowns: CountdownRegistry,
}

impl<S, P, D, C> SiteController<S, P, D, C>
where
  S: DataSource,
  P: PreferenceStore,
  D: Document + 'static,
  C: Clock + 'static,
{
  pub fn new(source: S, prefs: P, document: Arc<D>, clock: Arc<C>) -> Self {
    Self::with_default_lang(source, prefs, document, clock, Lang::default())
  }

  /// Como [`SiteController::new`], con otro idioma para cuando no hay
  /// preferencia guardada.
  pub fn with_default_lang(
    source: S,
    prefs: P,
    document: Arc<D>,
    clock: Arc<C>,
    default_lang: Lang,
  ) -> Self {
    let lang = initial_lang(&prefs, default_lang);

    let page = document.page_id().and_then(|raw| match raw.parse::<PageId>() {
      Ok(page) => Some(page),
      Err(err) => {
        warn!(error = %err, "document declares an unknown page, only shared parts will render");
        None
      }
    });

    Self {
      source,
      prefs,
      document,
      clock,
      lang,
      page,
      state: SiteState::Loading,
      countdowns: CountdownRegistry::new(),
    }
  }

  pub fn lang(&self) -> Lang {
    self.lang
  }

  pub fn page(&self) -> Option<PageId> {
    self.page
  }

  pub fn state(&self) -> &SiteState {
    &self.state
  }

  pub fn model(&self) -> Option<&SiteModel> {
    match &self.state {
      SiteState::Ready(model) => Some(model.as_ref()),
      _ => None,
    }
  }

  pub fn document(&self) -> &Arc<D> {
    &self.document
  }

  pub fn active_countdowns(&self) -> usize {
    self.countdowns.len()
  }

  /// Carga todos los datos y renderiza la página.
  ///
  /// Si cualquier documento falla, escribe [`LOAD_ERROR_MESSAGE`] en el
  /// slot del nombre de la banda, no renderiza nada más y devuelve el error.
  /// No hay reintentos.
  pub async fn start(&mut self) -> Result<(), CoreError> {
    self.state = SiteState::Loading;
    info!(page = ?self.page, lang = %self.lang, "loading site data");

    match load_all(&self.source).await {
      Ok(model) => {
        self.state = SiteState::Ready(Arc::new(model));
        info!("site data ready");
        self.render();
        Ok(())
      }
      Err(err) => {
        error!(error = %err, resource = %err.resource(), "site data failed to load");
        self.state = SiteState::Failed;
        self.document.set_text(slots::BAND_NAME, LOAD_ERROR_MESSAGE);
        Err(err.into())
      }
    }
  }

  /// Cambia el idioma, lo persiste y vuelve a renderizar la página actual.
  ///
  /// Un fallo al persistir solo se registra. Antes de que cargue el modelo
  /// el idioma se guarda y se aplica en el primer render.
  pub fn set_language(&mut self, lang: Lang) {
    self.lang = lang;

    if let Err(err) = self.prefs.set(LANG_KEY, lang.code()) {
      warn!(error = %err, %lang, "could not persist language preference");
    }

    if self.state.is_ready() {
      self.render();
    }
  }

  /// Entrada desde un selector de idioma (`data-lang="es"`).
  pub fn select_language(&mut self, code: &str) -> Result<(), CoreError> {
    let lang = code.parse::<Lang>().map_err(|_| CoreError::UnsupportedLanguage(code.to_string()))?;
    self.set_language(lang);
    Ok(())
  }

  /// Vuelve a aplicar etiquetas y a renderizar la página con el idioma actual.
  pub fn rerender(&mut self) -> Result<(), CoreError> {
    if !self.state.is_ready() {
      return Err(CoreError::NotReady);
    }
    self.render();
    Ok(())
  }

  /// Cancela todas las cuentas atrás activas.
  pub fn shutdown(&mut self) {
    self.countdowns.cancel_all();
  }

  fn render(&mut self) {
    let SiteState::Ready(model) = &self.state else {
      return;
    };
    let model = Arc::clone(model);
    let lang = self.lang;

    // Los temporizadores viejos apuntan a nodos que el render va a reemplazar.
    self.countdowns.cancel_all();

    self.apply_labels(&model.labels);
    self.document.mark_active_lang(lang);

    self.apply(render::render_chrome(&model));
    if let Some(page) = self.page {
      debug!(%page, %lang, "rendering page");
      self.apply(render::render_page(page, &model, lang));
    }
  }

  fn apply_labels(&self, labels: &Labels) {
    self.document.set_lang(self.lang);

    let keys: HashSet<String> = self.document.label_keys().into_iter().collect();
    for key in keys {
      if let Some(text) = labels.text(&key, self.lang) {
        self.document.set_label(&key, text);
      }
    }
  }

  fn apply(&mut self, view: PageView) {
    for write in view.writes {
      let written = match write.content {
        SlotContent::Text(text) => self.document.set_text(write.slot, &text),
        SlotContent::Nodes(nodes) => self.document.set_nodes(write.slot, nodes),
      };
      if !written {
        debug!(slot = write.slot, "slot not present in document, skipped");
      }
    }

    for request in view.countdowns {
      let slot = SlotRef::find(&self.document, request.slot);
      let handle = start_countdown(Some(request.target), slot, self.lang, Arc::clone(&self.clock));
      self.countdowns.track(request.slot, handle);
    }
  }
}

fn initial_lang<P: PreferenceStore>(prefs: &P, default_lang: Lang) -> Lang {
  match prefs.get(LANG_KEY) {
    Some(code) => code.parse::<Lang>().unwrap_or_else(|err| {
      warn!(error = %err, "ignoring stored language preference");
      default_lang
    }),
    None => default_lang,
  }
}
