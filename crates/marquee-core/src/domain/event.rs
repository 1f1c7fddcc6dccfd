use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::localized::Localized;

/// Instante de un evento tal como viene en los datos.
///
/// Se conserva el desplazamiento UTC original para formatear la fecha
/// en la hora local del lugar. Valores sin zona se interpretan como UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventDate(DateTime<FixedOffset>);

impl EventDate {
  pub fn as_datetime(&self) -> DateTime<FixedOffset> {
    self.0
  }

  pub fn to_utc(&self) -> DateTime<Utc> {
    self.0.with_timezone(&Utc)
  }
}

impl From<DateTime<Utc>> for EventDate {
  fn from(at: DateTime<Utc>) -> Self {
    EventDate(at.fixed_offset())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid event date: {0:?}")]
pub struct InvalidDate(pub String);

impl FromStr for EventDate {
  type Err = InvalidDate;

  /// Acepta RFC 3339 (`2025-03-15T20:00:00-05:00`), fecha y hora sin zona
  /// (`2025-03-15T20:00`, `2025-03-15T20:00:00`) o solo fecha (`2025-03-15`).
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(s) {
      return Ok(EventDate(at));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
      if let Ok(naive) = NaiveDateTime::parse_from_str(s, pattern) {
        return Ok(EventDate(naive.and_utc().fixed_offset()));
      }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
      .ok()
      .and_then(|d| d.and_hms_opt(0, 0, 0))
      .map(|naive| EventDate(naive.and_utc().fixed_offset()))
      .ok_or_else(|| InvalidDate(s.to_string()))
  }
}

impl fmt::Display for EventDate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.to_rfc3339())
  }
}

impl<'de> Deserialize<'de> for EventDate {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}

/// El próximo evento destacado (portada y página "upcoming").
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NextEvent {
  /// Tipo de evento ("Concierto", "Lanzamiento"...).
  #[serde(rename = "type", default)]
  pub kind: Localized,
  #[serde(default)]
  pub title: Localized,
  #[serde(default)]
  pub location: Localized,
  pub date: EventDate,
}

/// Un elemento de la lista de próximos lanzamientos o conciertos.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpcomingItem {
  #[serde(default)]
  pub title: Localized,
  #[serde(default)]
  pub location: Localized,
  #[serde(default)]
  pub description: Localized,
  /// URL de la imagen.
  #[serde(default)]
  pub image: String,
  pub date: EventDate,
}

/// Contenido de `events.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Events {
  pub next_event: Option<NextEvent>,
  pub upcoming_releases: Vec<UpcomingItem>,
}
