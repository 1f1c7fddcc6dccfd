use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, warn};

use crate::domain::EventDate;
use crate::i18n::Lang;
use crate::ports::{Clock, Document};

/// Periodo de refresco de una cuenta atrás.
pub const TICK: Duration = Duration::from_secs(1);

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Tiempo restante descompuesto en días, horas, minutos y segundos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
  pub days: i64,
  pub hours: i64,
  pub minutes: i64,
  pub seconds: i64,
}

impl Remaining {
  /// `None` cuando el objetivo ya pasó (`diff <= 0`).
  pub fn from_millis(diff: i64) -> Option<Self> {
    if diff <= 0 {
      return None;
    }

    Some(Self {
      days: diff / MS_PER_DAY,
      hours: (diff / MS_PER_HOUR) % 24,
      minutes: (diff / MS_PER_MINUTE) % 60,
      seconds: (diff / MS_PER_SECOND) % 60,
    })
  }

  pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Option<Self> {
    Self::from_millis((target - now).num_milliseconds())
  }
}

impl fmt::Display for Remaining {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}d {}h {}m {}s", self.days, self.hours, self.minutes, self.seconds)
  }
}

/// Texto que muestra la cuenta atrás en el instante `now`.
pub fn countdown_text(target: DateTime<Utc>, now: DateTime<Utc>, lang: Lang) -> String {
  match Remaining::between(target, now) {
    Some(remaining) => remaining.to_string(),
    None => lang.live_message().to_string(),
  }
}

/// Referencia a un slot existente de un documento compartido.
pub struct SlotRef<D: ?Sized> {
  document: Arc<D>,
  id: String,
}

impl<D: Document + ?Sized> SlotRef<D> {
  /// `None` si el documento no tiene ese slot.
  pub fn find(document: &Arc<D>, id: &str) -> Option<Self> {
    document.has_slot(id).then(|| Self { document: Arc::clone(document), id: id.to_string() })
  }

  fn write(&self, text: &str) -> bool {
    self.document.set_text(&self.id, text)
  }
}

/// Permiso de escritura compartido entre un handle y su tarea.
///
/// La tarea escribe con el lock tomado y `close` toma el mismo lock: al
/// volver de `close` no queda ninguna escritura a medias ni puede empezar
/// otra, aunque la tarea abortada siga viva un instante en otro hilo.
#[derive(Debug, Default)]
struct WriteGate {
  closed: Mutex<bool>,
}

impl WriteGate {
  fn lock(&self) -> MutexGuard<'_, bool> {
    self.closed.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }

  fn run(&self, write: impl FnOnce()) {
    let closed = self.lock();
    if !*closed {
      write();
    }
  }

  fn close(&self) {
    *self.lock() = true;
  }
}

/// Handle de cancelación de una cuenta atrás.
///
/// El refresco periódico solo se detiene al llamar a [`CountdownHandle::cancel`];
/// soltar el handle no lo para.
#[derive(Debug, Default)]
pub struct CountdownHandle {
  task: Option<JoinHandle<()>>,
  gate: Arc<WriteGate>,
}

impl CountdownHandle {
  /// Handle sin temporizador detrás.
  pub fn inert() -> Self {
    Self::default()
  }

  pub fn is_active(&self) -> bool {
    self.task.as_ref().is_some_and(|task| !task.is_finished())
  }

  /// Detiene el refresco. Después de volver, la tarea ya no escribe en el slot.
  pub fn cancel(mut self) {
    self.gate.close();
    if let Some(task) = self.task.take() {
      task.abort();
    }
  }
}

/// Arranca una cuenta atrás hacia `target` escribiendo en `slot`.
///
/// Escribe una vez de inmediato y luego cada [`TICK`]. Cuando el objetivo
/// pasa, muestra el mensaje "en vivo" de `lang` y lo sigue reescribiendo;
/// no se cancela sola. Sin slot o sin objetivo devuelve un handle inerte.
pub fn start_countdown<D, C>(
  target: Option<EventDate>,
  slot: Option<SlotRef<D>>,
  lang: Lang,
  clock: Arc<C>,
) -> CountdownHandle
where
  D: Document + ?Sized + 'static,
  C: Clock + ?Sized + 'static,
{
  let (Some(target), Some(slot)) = (target, slot) else {
    return CountdownHandle::inert();
  };
  let target = target.to_utc();
  let gate = Arc::new(WriteGate::default());

  let task_gate = Arc::clone(&gate);
  let update = move || {
    task_gate.run(|| {
      slot.write(&countdown_text(target, clock.now(), lang));
    });
  };
  update();

  let runtime = match tokio::runtime::Handle::try_current() {
    Ok(runtime) => runtime,
    Err(err) => {
      warn!(error = %err, "no async runtime, countdown will not refresh");
      return CountdownHandle::inert();
    }
  };

  debug!(%target, %lang, "countdown started");
  let task = runtime.spawn(async move {
    let mut ticker = interval_at(Instant::now() + TICK, TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
      ticker.tick().await;
      update();
    }
  });

  CountdownHandle { task: Some(task), gate }
}

/// Cuentas atrás activas, una por slot.
///
/// Registrar un handle nuevo en un slot cancela el anterior, así que un
/// re-render nunca deja dos temporizadores escribiendo en el mismo sitio.
#[derive(Debug, Default)]
pub struct CountdownRegistry {
  active: HashMap<String, CountdownHandle>,
}

impl CountdownRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn track(&mut self, slot: &str, handle: CountdownHandle) {
    if let Some(previous) = self.active.remove(slot) {
      previous.cancel();
    }
    if handle.is_active() {
      self.active.insert(slot.to_string(), handle);
    }
  }

  pub fn cancel_all(&mut self) {
    for (_, handle) in self.active.drain() {
      handle.cancel();
    }
  }

  pub fn len(&self) -> usize {
    self.active.len()
  }

  pub fn is_empty(&self) -> bool {
    self.active.is_empty()
  }
}

impl Drop for CountdownRegistry {
  fn drop(&mut self) {
    self.cancel_all();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::document::MemoryDocument;
  use crate::ports::ManualClock;
  use chrono::TimeZone;
  use std::sync::mpsc;
  use std::thread;

  fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
  }

  fn setup() -> (Arc<MemoryDocument>, Arc<ManualClock>) {
    (Arc::new(MemoryDocument::new(None).with_slot("clock")), Arc::new(ManualClock::new(now())))
  }

  fn start_in(
    doc: &Arc<MemoryDocument>,
    clock: &Arc<ManualClock>,
    slot: &str,
    target: Option<EventDate>,
    lang: Lang,
  ) -> CountdownHandle {
    start_countdown(target, SlotRef::find(doc, slot), lang, Arc::clone(clock))
  }

  fn in_secs(secs: i64) -> Option<EventDate> {
    Some(EventDate::from(now() + chrono::Duration::seconds(secs)))
  }

  #[test]
  fn decomposes_with_floor_division() {
    let r = Remaining::from_millis(90_061_000).unwrap();
    assert_eq!(r, Remaining { days: 1, hours: 1, minutes: 1, seconds: 1 });
    assert_eq!(r.to_string(), "1d 1h 1m 1s");

    assert_eq!(Remaining::from_millis(999).unwrap().to_string(), "0d 0h 0m 0s");
    assert!(Remaining::from_millis(0).is_none());
    assert!(Remaining::from_millis(-5).is_none());
  }

  #[tokio::test(start_paused = true)]
  async fn renders_immediately_at_tick_zero() {
    let (doc, clock) = setup();

    let handle = start_in(&doc, &clock, "clock", in_secs(90_061), Lang::En);
    assert_eq!(doc.slot_text("clock").as_deref(), Some("1d 1h 1m 1s"));
    assert!(handle.is_active());
    handle.cancel();
  }

  #[tokio::test(start_paused = true)]
  async fn refreshes_every_second() {
    let (doc, clock) = setup();

    let handle = start_in(&doc, &clock, "clock", in_secs(10), Lang::En);
    assert_eq!(doc.slot_text("clock").as_deref(), Some("0d 0h 0m 10s"));

    clock.advance(chrono::Duration::seconds(3));
    tokio::time::sleep(TICK + Duration::from_millis(10)).await;
    assert_eq!(doc.slot_text("clock").as_deref(), Some("0d 0h 0m 7s"));
    handle.cancel();
  }

  #[tokio::test(start_paused = true)]
  async fn past_target_stays_live() {
    let (doc, clock) = setup();

    let handle = start_in(&doc, &clock, "clock", in_secs(-300), Lang::Es);
    assert_eq!(doc.slot_text("clock").as_deref(), Some("En curso / Nos vemos ahí"));

    clock.advance(chrono::Duration::seconds(5));
    tokio::time::sleep(TICK * 3 + Duration::from_millis(10)).await;
    assert_eq!(doc.slot_text("clock").as_deref(), Some("En curso / Nos vemos ahí"));
    assert!(handle.is_active());
    handle.cancel();
  }

  #[tokio::test(start_paused = true)]
  async fn cancel_stops_refreshing() {
    let (doc, clock) = setup();

    let handle = start_in(&doc, &clock, "clock", in_secs(3_600), Lang::En);
    handle.cancel();

    doc.set_text("clock", "replaced");
    clock.advance(chrono::Duration::seconds(2));
    tokio::time::sleep(TICK * 2 + Duration::from_millis(10)).await;
    assert_eq!(doc.slot_text("clock").as_deref(), Some("replaced"));
  }

  #[test]
  fn closed_gate_waits_for_the_write_in_flight_and_blocks_later_ones() {
    let gate = Arc::new(WriteGate::default());
    let log = Arc::new(Mutex::new(Vec::new()));
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel::<()>();

    let writer = {
      let (gate, log) = (Arc::clone(&gate), Arc::clone(&log));
      thread::spawn(move || {
        gate.run(|| {
          entered_tx.send(()).unwrap();
          release_rx.recv().unwrap();
          log.lock().unwrap().push("old tick");
        });
      })
    };
    entered_rx.recv().unwrap();

    let closer = {
      let (gate, log) = (Arc::clone(&gate), Arc::clone(&log));
      thread::spawn(move || {
        gate.close();
        log.lock().unwrap().push("closed");
      })
    };
    release_tx.send(()).unwrap();
    writer.join().unwrap();
    closer.join().unwrap();

    gate.run(|| log.lock().unwrap().push("late tick"));
    assert_eq!(*log.lock().unwrap(), vec!["old tick", "closed"]);
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
  async fn cancelled_handle_never_writes_again_on_a_worker_thread() {
    let (doc, clock) = setup();

    let handle = start_in(&doc, &clock, "clock", in_secs(3_600), Lang::En);
    handle.cancel();
    doc.set_text("clock", "fresh render");

    tokio::time::sleep(TICK + Duration::from_millis(100)).await;
    assert_eq!(doc.slot_text("clock").as_deref(), Some("fresh render"));
  }

  #[tokio::test]
  async fn missing_slot_or_target_is_inert() {
    let (doc, clock) = setup();

    let no_slot = start_in(&doc, &clock, "absent", in_secs(0), Lang::En);
    assert!(!no_slot.is_active());

    let no_target = start_in(&doc, &clock, "clock", None, Lang::En);
    assert!(!no_target.is_active());
    assert_eq!(doc.slot_text("clock").as_deref(), Some(""));
  }

  #[tokio::test(start_paused = true)]
  async fn registry_replaces_handle_per_slot() {
    let (doc, clock) = setup();
    let mut registry = CountdownRegistry::new();

    registry.track("clock", start_in(&doc, &clock, "clock", in_secs(3_600), Lang::En));
    registry.track("clock", start_in(&doc, &clock, "clock", in_secs(3_600), Lang::Es));
    assert_eq!(registry.len(), 1);

    registry.cancel_all();
    assert!(registry.is_empty());
  }
}
