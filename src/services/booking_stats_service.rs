//! Agregación de estadísticas de reservas
//!
//! Este módulo calcula en una sola pasada los contadores del dashboard y las
//! cifras del reporte de administración. Las funciones son puras: reciben la
//! colección ya cargada y la fecha de referencia, sin estado oculto.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::booking::Booking;
use crate::models::stats::BookingStatsSummary;
use crate::services::booking_status_service::{resolve_status, BookingStatus, DisplayStatus};

/// Contar reservas por estado visible
///
/// Aplica el resolver por registro y acumula por bucket. Una entrada vacía
/// produce todos los contadores en cero. Registros con fecha malformada se
/// resuelven con el fallback del resolver, nunca abortan la pasada.
pub fn summarize_bookings(bookings: &[Booking], today: NaiveDate) -> BookingStatsSummary {
    let mut summary = BookingStatsSummary::default();

    for booking in bookings {
        let resolution = resolve_status(booking.stored_status(), booking.end_date, today);
        summary.total += 1;
        match resolution.display_status {
            DisplayStatus::Upcoming => summary.upcoming += 1,
            DisplayStatus::Completed => summary.completed += 1,
            DisplayStatus::Canceled => summary.canceled += 1,
        }
    }

    summary
}

/// Ingresos totales: suma de total_price de reservas completed o confirmed
///
/// Las canceladas y las que siguen pending quedan fuera del revenue.
pub fn total_revenue(bookings: &[Booking]) -> Decimal {
    bookings
        .iter()
        .filter(|b| {
            matches!(
                b.stored_status(),
                BookingStatus::Completed | BookingStatus::Confirmed
            )
        })
        .map(|b| b.total_price)
        .sum()
}

/// Reservas activas: estado almacenado confirmed o pending
pub fn active_bookings(bookings: &[Booking]) -> i64 {
    bookings
        .iter()
        .filter(|b| {
            matches!(
                b.stored_status(),
                BookingStatus::Confirmed | BookingStatus::Pending
            )
        })
        .count() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn booking(status: &str, end_date: Option<NaiveDate>, total_price: Decimal) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            vehicle_name: "Toyota Corolla".to_string(),
            vehicle_type: "sedan".to_string(),
            image_url: None,
            price_per_day: Decimal::from(50),
            start_date: today() - Duration::days(10),
            end_date,
            days: 3,
            total_price,
            status: status.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_empty_input_all_zero() {
        let summary = summarize_bookings(&[], today());
        assert_eq!(summary, BookingStatsSummary::default());
        assert_eq!(total_revenue(&[]), Decimal::ZERO);
        assert_eq!(active_bookings(&[]), 0);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let yesterday = today() - Duration::days(1);
        let next_week = today() + Duration::days(7);
        let bookings = vec![
            booking("upcoming", Some(next_week), Decimal::from(100)),
            booking("upcoming", Some(yesterday), Decimal::from(80)),
            booking("confirmed", Some(next_week), Decimal::from(50)),
            booking("pending", Some(next_week), Decimal::from(60)),
            booking("canceled", Some(next_week), Decimal::from(75)),
            booking("cancelled", Some(yesterday), Decimal::from(40)),
            booking("completed", Some(yesterday), Decimal::from(90)),
            // Registro malformado: sin end_date, cuenta como completed
            booking("upcoming", None, Decimal::from(30)),
        ];

        let summary = summarize_bookings(&bookings, today());
        assert_eq!(summary.total, 8);
        assert_eq!(
            summary.upcoming + summary.completed + summary.canceled,
            summary.total
        );
        assert_eq!(summary.upcoming, 3);
        assert_eq!(summary.completed, 3);
        assert_eq!(summary.canceled, 2);
    }

    #[test]
    fn test_revenue_excludes_canceled_and_pending() {
        let next_week = today() + Duration::days(7);
        let yesterday = today() - Duration::days(1);
        let bookings = vec![
            booking("completed", Some(yesterday), Decimal::from(100)),
            booking("confirmed", Some(next_week), Decimal::from(50)),
            booking("canceled", Some(next_week), Decimal::from(75)),
            booking("pending", Some(next_week), Decimal::from(25)),
        ];

        assert_eq!(total_revenue(&bookings), Decimal::from(150));

        let summary = summarize_bookings(&bookings, today());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.canceled, 1);
    }

    #[test]
    fn test_active_bookings_counts_confirmed_and_pending() {
        let next_week = today() + Duration::days(7);
        let bookings = vec![
            booking("confirmed", Some(next_week), Decimal::from(50)),
            booking("pending", Some(next_week), Decimal::from(25)),
            booking("upcoming", Some(next_week), Decimal::from(25)),
            booking("canceled", Some(next_week), Decimal::from(25)),
        ];
        assert_eq!(active_bookings(&bookings), 2);
    }

    #[test]
    fn test_determinism() {
        let bookings = vec![
            booking("upcoming", Some(today() + Duration::days(2)), Decimal::from(10)),
            booking("canceled", Some(today() - Duration::days(2)), Decimal::from(20)),
        ];
        let first = summarize_bookings(&bookings, today());
        let second = summarize_bookings(&bookings, today());
        assert_eq!(first, second);
    }
}
