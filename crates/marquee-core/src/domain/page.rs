use std::{fmt, str::FromStr};

/// Identificador de página, fijado por el marcado cargado.
///
/// No es un router: cada documento declara qué página es y se queda así.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
  Home,
  About,
  Music,
  Upcoming,
}

impl PageId {
  pub fn as_str(&self) -> &'static str {
    match self {
      PageId::Home => "home",
      PageId::About => "about",
      PageId::Music => "music",
      PageId::Upcoming => "upcoming",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for PageId {
  type Err = UnknownPage;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim() {
      "home" => Ok(PageId::Home),
      "about" => Ok(PageId::About),
      "music" => Ok(PageId::Music),
      "upcoming" => Ok(PageId::Upcoming),
      other => Err(UnknownPage(other.to_string())),
    }
  }
}

impl fmt::Display for PageId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
