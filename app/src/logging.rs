use log::LevelFilter;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt};

/// Inicializa el logging del proceso.
///
/// Todo va a stderr para que stdout quede libre para el HTML renderizado.
/// El nivel se controla con `RUST_LOG`.
pub fn init_logger() -> anyhow::Result<()> {
  // Los registros de la crate `log` (dependencias) también pasan por tracing.
  let _ = LogTracer::builder().with_max_level(LevelFilter::Trace).init();

  let stderr_layer = fmt::layer()
    .with_writer(std::io::stderr)
    .with_target(true)
    .with_ansi(true)
    .with_filter(default_filter());

  let subscriber = Registry::default().with(stderr_layer);
  tracing::subscriber::set_global_default(subscriber)
    .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

  tracing::debug!(
    version = env!("CARGO_PKG_VERSION"),
    profile = if cfg!(debug_assertions) { "Debug" } else { "Release" },
    "logger initialized"
  );

  Ok(())
}

fn default_filter() -> EnvFilter {
  let default_level =
    if cfg!(debug_assertions) { "info,marquee=debug,marquee_core=debug" } else { "info" };

  EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(default_level))
    .unwrap_or_else(|_| EnvFilter::new("info"))
}
