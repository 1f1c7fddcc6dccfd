use serde::{Deserialize, Deserializer};

use super::localized::Localized;

/// Un lanzamiento de la discografía.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Release {
  pub title: Localized,
  pub description: Localized,
  /// Tipo de lanzamiento (Álbum, EP, Single...), traducible.
  #[serde(rename = "type")]
  pub kind: Localized,
  /// URL de la portada.
  pub cover: String,
  /// Año tal como aparece en los datos; puede venir como número o cadena.
  #[serde(deserialize_with = "plain_text")]
  pub year: String,
}

/// Contenido de `discography.json`.
///
/// El orden es el editorial: el primer elemento es el lanzamiento más reciente.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Discography {
  pub releases: Vec<Release>,
}

impl Discography {
  pub fn latest(&self) -> Option<&Release> {
    self.releases.first()
  }
}

fn plain_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  let value = serde_json::Value::deserialize(deserializer)?;
  Ok(match value {
    serde_json::Value::Null => String::new(),
    serde_json::Value::String(s) => s,
    other => other.to_string(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn year_accepts_numbers_and_strings() {
    let json = r#"{"releases":[{"title":"Uno","year":2024},{"title":"Dos","year":"2021"}]}"#;
    let disco: Discography = serde_json::from_str(json).unwrap();
    assert_eq!(disco.releases[0].year, "2024");
    assert_eq!(disco.releases[1].year, "2021");
    assert_eq!(disco.latest().map(|r| r.year.as_str()), Some("2024"));
  }
}
