mod logging;
mod source;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use marquee_config::{MarqueePaths, SiteConfig, TomlConfigBackend, TomlPreferenceStore};
use marquee_core::Lang;
use marquee_core::document::{MemoryDocument, PageLayout};
use marquee_core::domain::PageId;
use marquee_core::ports::{LANG_KEY, PreferenceStore, SystemClock};
use marquee_core::render::slots;
use marquee_core::services::SiteController;
use tracing::info;

use crate::source::SiteSource;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(version)]
#[command(about = "Render a band's promotional site pages from static JSON data")]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Render one page and print it as HTML
  Render {
    /// Page to render
    #[arg(short, long, value_enum, default_value = "home")]
    page: PageArg,

    /// Language to switch to (remembered for next runs)
    #[arg(short, long)]
    lang: Option<String>,

    /// Site root: base URL or local directory containing data/
    #[arg(short, long)]
    source: Option<String>,

    /// Keep the countdown running and print it every second for this many seconds
    #[arg(short, long, value_name = "SECONDS")]
    watch: Option<u64>,
  },

  /// Show or change the remembered language
  Lang {
    /// Language code (en, es)
    code: Option<String>,
  },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PageArg {
  Home,
  About,
  Music,
  Upcoming,
}

impl From<PageArg> for PageId {
  fn from(arg: PageArg) -> Self {
    match arg {
      PageArg::Home => PageId::Home,
      PageArg::About => PageId::About,
      PageArg::Music => PageId::Music,
      PageArg::Upcoming => PageId::Upcoming,
    }
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  logging::init_logger()?;
  let cli = Cli::parse();

  let paths = MarqueePaths::new().context("Failed to resolve config directories")?;

  match cli.command {
    Commands::Render { page, lang, source, watch } => {
      render(paths, page.into(), lang, source, watch).await
    }
    Commands::Lang { code } => language(paths, code),
  }
}

async fn render(
  paths: MarqueePaths,
  page: PageId,
  lang: Option<String>,
  source: Option<String>,
  watch: Option<u64>,
) -> Result<()> {
  let mut config = SiteConfig::load_from(&TomlConfigBackend::new(paths.clone()))
    .context("Failed to read site config")?;
  if let Some(source) = source {
    config.source = source;
  }
  let source = SiteSource::from_config(&config)
    .with_context(|| format!("Invalid site source {:?}", config.source))?;
  info!(source = %source.describe(), %page, "rendering");

  let prefs = TomlPreferenceStore::new(TomlConfigBackend::new(paths));
  let document = Arc::new(MemoryDocument::from_layout(&PageLayout::for_page(page)));
  let mut site = SiteController::with_default_lang(
    source,
    prefs,
    Arc::clone(&document),
    Arc::new(SystemClock),
    config.default_lang(),
  );

  if let Some(code) = lang {
    site.select_language(&code)?;
  }

  let loaded = site.start().await;
  print!("{}", document.to_html());
  loaded.context("Site data failed to load")?;

  if let Some(seconds) = watch {
    let slot = match page {
      PageId::Home => Some(slots::COUNTDOWN_HOME),
      PageId::Upcoming => Some(slots::COUNTDOWN_HERO),
      PageId::About | PageId::Music => None,
    };

    if let Some(slot) = slot.filter(|_| site.active_countdowns() > 0) {
      for _ in 0..seconds {
        tokio::time::sleep(Duration::from_secs(1)).await;
        if let Some(text) = document.slot_text(slot) {
          println!("{text}");
        }
      }
    }
  }

  site.shutdown();
  Ok(())
}

fn language(paths: MarqueePaths, code: Option<String>) -> Result<()> {
  let config = SiteConfig::load_from(&TomlConfigBackend::new(paths.clone()))
    .context("Failed to read site config")?;
  let prefs = TomlPreferenceStore::new(TomlConfigBackend::new(paths));

  match code {
    Some(code) => {
      let lang: Lang = code.parse()?;
      prefs.set(LANG_KEY, lang.code())?;
      println!("{lang}");
    }
    None => {
      let current = prefs
        .get(LANG_KEY)
        .and_then(|c| c.parse::<Lang>().ok())
        .unwrap_or_else(|| config.default_lang());
      println!("{current}");
    }
  }

  Ok(())
}
