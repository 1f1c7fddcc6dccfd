use crate::domain::EventDate;
use crate::i18n::Lang;

/// Fecha media + hora corta según la convención del idioma.
///
/// Se formatea en el desplazamiento propio del evento, no en la zona del
/// proceso, para que el resultado sea estable entre máquinas.
pub fn format_event_date(date: &EventDate, lang: Lang) -> String {
  let pattern = match lang {
    Lang::En => "%b %-d, %Y, %-I:%M %p",
    Lang::Es => "%-d %b %Y, %H:%M",
  };

  date.as_datetime().format_localized(pattern, lang.locale()).to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn formats_medium_date_short_time() {
    let date: EventDate = "2025-03-15T20:00:00-05:00".parse().unwrap();
    assert_eq!(format_event_date(&date, Lang::En), "Mar 15, 2025, 8:00 PM");
    assert_eq!(format_event_date(&date, Lang::Es), "15 mar 2025, 20:00");
  }

  #[test]
  fn format_follows_language_switch() {
    let date: EventDate = "2025-11-02T09:05:00Z".parse().unwrap();
    let en = format_event_date(&date, Lang::En);
    let es = format_event_date(&date, Lang::Es);
    assert_ne!(en, es);
    assert_eq!(en, "Nov 2, 2025, 9:05 AM");
    assert_eq!(format_event_date(&date, Lang::En), en);
  }
}
