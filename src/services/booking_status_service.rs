//! Resolución de estado de bookings
//!
//! Este módulo deriva el estado visible de una reserva a partir del estado
//! almacenado y la fecha de fin, comparada contra una fecha de referencia
//! inyectable. Toda la lógica es pura para poder testearla sin base de datos.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Estado canónico almacenado de una reserva
///
/// La normalización acepta la grafía legacy `cancelled` en la frontera con
/// el store y con la API; el resto del código solo trabaja con este enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Confirmed,
    Pending,
    Completed,
    Canceled,
}

impl BookingStatus {
    /// Normalizar un estado tal como viene del store o de un request.
    ///
    /// Valores desconocidos o vacíos se tratan como `upcoming`; en datos
    /// históricos hay bookings sin estado persistido.
    pub fn from_store(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "confirmed" => BookingStatus::Confirmed,
            "pending" => BookingStatus::Pending,
            "completed" => BookingStatus::Completed,
            // Ambas grafías aparecen en datos históricos
            "canceled" | "cancelled" => BookingStatus::Canceled,
            _ => BookingStatus::Upcoming,
        }
    }

    /// Representación canónica que se persiste
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "upcoming",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Completed => "completed",
            BookingStatus::Canceled => "canceled",
        }
    }

    /// Estados terminales: no admiten más transiciones
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Canceled)
    }

    /// Verificar si una transición de estado es válida
    ///
    /// pending → confirmed | canceled
    /// upcoming → confirmed | completed | canceled
    /// confirmed → completed | canceled
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        match (self, next) {
            (BookingStatus::Pending, BookingStatus::Confirmed)
            | (BookingStatus::Pending, BookingStatus::Canceled)
            | (BookingStatus::Upcoming, BookingStatus::Confirmed)
            | (BookingStatus::Upcoming, BookingStatus::Completed)
            | (BookingStatus::Upcoming, BookingStatus::Canceled)
            | (BookingStatus::Confirmed, BookingStatus::Completed)
            | (BookingStatus::Confirmed, BookingStatus::Canceled) => true,
            _ => false,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Estado visible en el dashboard
///
/// Política documentada: una reserva no cancelada y no pasada se muestra
/// siempre como `upcoming`, aunque internamente esté `confirmed` o `pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStatus {
    Upcoming,
    Completed,
    Canceled,
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            DisplayStatus::Upcoming => "upcoming",
            DisplayStatus::Completed => "completed",
            DisplayStatus::Canceled => "canceled",
        };
        write!(f, "{}", status)
    }
}

/// Resultado de resolver el estado de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusResolution {
    pub display_status: DisplayStatus,
    pub is_past: bool,
}

/// Fecha de sustitución para bookings sin end_date: epoch
///
/// Un registro malformado se resuelve como pasado (completed) en lugar de
/// abortar el batch. Se loguea y se sigue procesando.
fn fallback_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Resolver el estado visible de una reserva
///
/// Reglas:
/// - estado almacenado canceled → canceled (is_past solo informativo)
/// - end_date estrictamente anterior a today → completed
/// - en otro caso → upcoming
pub fn resolve_status(
    stored: BookingStatus,
    end_date: Option<NaiveDate>,
    today: NaiveDate,
) -> StatusResolution {
    let end_date = match end_date {
        Some(date) => date,
        None => {
            log::warn!("Booking sin end_date, usando epoch como fallback");
            fallback_end_date()
        }
    };

    let is_past = end_date < today;

    let display_status = if stored == BookingStatus::Canceled {
        DisplayStatus::Canceled
    } else if is_past {
        DisplayStatus::Completed
    } else {
        DisplayStatus::Upcoming
    };

    StatusResolution {
        display_status,
        is_past,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_normalize_both_cancel_spellings() {
        assert_eq!(BookingStatus::from_store("canceled"), BookingStatus::Canceled);
        assert_eq!(BookingStatus::from_store("cancelled"), BookingStatus::Canceled);
        assert_eq!(BookingStatus::from_store("CANCELLED"), BookingStatus::Canceled);
    }

    #[test]
    fn test_normalize_unknown_defaults_to_upcoming() {
        assert_eq!(BookingStatus::from_store(""), BookingStatus::Upcoming);
        assert_eq!(BookingStatus::from_store("garbage"), BookingStatus::Upcoming);
    }

    #[test]
    fn test_canceled_wins_regardless_of_date() {
        // Fecha futura
        let next_week = today() + Duration::days(7);
        let resolution = resolve_status(BookingStatus::Canceled, Some(next_week), today());
        assert_eq!(resolution.display_status, DisplayStatus::Canceled);
        assert!(!resolution.is_past);

        // Fecha pasada
        let last_week = today() - Duration::days(7);
        let resolution = resolve_status(BookingStatus::Canceled, Some(last_week), today());
        assert_eq!(resolution.display_status, DisplayStatus::Canceled);
        assert!(resolution.is_past);
    }

    #[test]
    fn test_past_end_date_displays_completed() {
        let yesterday = today() - Duration::days(1);
        for stored in [
            BookingStatus::Upcoming,
            BookingStatus::Confirmed,
            BookingStatus::Pending,
            BookingStatus::Completed,
        ] {
            let resolution = resolve_status(stored, Some(yesterday), today());
            assert_eq!(resolution.display_status, DisplayStatus::Completed);
            assert!(resolution.is_past);
        }
    }

    #[test]
    fn test_active_booking_displays_upcoming() {
        // end_date == today no es estrictamente pasado
        for stored in [
            BookingStatus::Upcoming,
            BookingStatus::Confirmed,
            BookingStatus::Pending,
        ] {
            let resolution = resolve_status(stored, Some(today()), today());
            assert_eq!(resolution.display_status, DisplayStatus::Upcoming);
            assert!(!resolution.is_past);
        }
    }

    #[test]
    fn test_missing_end_date_falls_back_to_epoch() {
        let resolution = resolve_status(BookingStatus::Upcoming, None, today());
        assert_eq!(resolution.display_status, DisplayStatus::Completed);
        assert!(resolution.is_past);
    }

    #[test]
    fn test_transitions() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
        assert!(BookingStatus::Upcoming.can_transition_to(BookingStatus::Canceled));
        assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::Canceled));
        assert!(!BookingStatus::Canceled.can_transition_to(BookingStatus::Upcoming));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Completed));
    }
}
