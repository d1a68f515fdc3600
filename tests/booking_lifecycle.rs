//! Tests de integración del ciclo de vida de reservas
//!
//! Ejercitan el núcleo puro de punta a punta: derivación de estados,
//! contadores del dashboard, selección de reconciliación y reporte admin,
//! todo con un reloj fijo y sin base de datos.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use vehicle_rental::dto::booking_dto::BookingResponse;
use vehicle_rental::models::booking::{rental_days, Booking};
use vehicle_rental::services::booking_stats_service::{
    active_bookings, summarize_bookings, total_revenue,
};
use vehicle_rental::services::booking_status_service::{
    resolve_status, BookingStatus, DisplayStatus,
};
use vehicle_rental::services::reconciliation_service::expired_upcoming_ids;
use vehicle_rental::services::report_service;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn booking(status: &str, end_date: Option<NaiveDate>, total: i64) -> Booking {
    let start = end_date
        .map(|d| d - Duration::days(1))
        .unwrap_or_else(|| today() - Duration::days(10));
    Booking {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        vehicle_id: Uuid::new_v4(),
        vehicle_name: "Toyota Corolla".to_string(),
        vehicle_type: "sedan".to_string(),
        image_url: None,
        price_per_day: Decimal::from(total / 2),
        start_date: start,
        end_date,
        days: 2,
        total_price: Decimal::from(total),
        status: status.to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn lifecycle_from_creation_to_completion() {
    // Una reserva recién creada con fechas futuras se ve upcoming
    let end = today() + Duration::days(3);
    let mut b = booking("upcoming", Some(end), 90);

    let resolution = resolve_status(b.stored_status(), b.end_date, today());
    assert_eq!(resolution.display_status, DisplayStatus::Upcoming);
    assert!(!resolution.is_past);

    // Un admin la confirma; sigue mostrándose upcoming mientras no venza
    assert!(b.stored_status().can_transition_to(BookingStatus::Confirmed));
    b.status = "confirmed".to_string();
    let resolution = resolve_status(b.stored_status(), b.end_date, today());
    assert_eq!(resolution.display_status, DisplayStatus::Upcoming);

    // Pasado el fin del alquiler se ve completed aunque nadie la haya tocado
    let later = end + Duration::days(1);
    let resolution = resolve_status(b.stored_status(), b.end_date, later);
    assert_eq!(resolution.display_status, DisplayStatus::Completed);
    assert!(resolution.is_past);

    // Y una vez completed, no hay vuelta atrás
    b.status = "completed".to_string();
    assert!(!b.stored_status().can_transition_to(BookingStatus::Upcoming));
    assert!(!b.stored_status().can_transition_to(BookingStatus::Canceled));
}

#[test]
fn cancellation_is_terminal_and_wins_over_dates() {
    let past = today() - Duration::days(5);
    let b = booking("cancelled", Some(past), 100);

    // La grafía legacy se normaliza y la cancelación domina sobre la fecha
    assert_eq!(b.stored_status(), BookingStatus::Canceled);
    let resolution = resolve_status(b.stored_status(), b.end_date, today());
    assert_eq!(resolution.display_status, DisplayStatus::Canceled);
    assert!(resolution.is_past);

    assert!(!b.stored_status().can_transition_to(BookingStatus::Confirmed));
}

#[test]
fn dashboard_counters_match_displayed_statuses() {
    let past = today() - Duration::days(2);
    let future = today() + Duration::days(2);
    let bookings = vec![
        booking("upcoming", Some(future), 80),
        booking("confirmed", Some(future), 120),
        booking("completed", Some(past), 60),
        booking("upcoming", Some(past), 40), // vencida, cuenta como completed
        booking("canceled", Some(future), 200),
        booking("upcoming", None, 50), // malformada: fallback a completed
    ];

    let stats = summarize_bookings(&bookings, today());
    assert_eq!(stats.total, 6);
    assert_eq!(stats.upcoming, 2);
    assert_eq!(stats.completed, 3);
    assert_eq!(stats.canceled, 1);
    assert_eq!(stats.upcoming + stats.completed + stats.canceled, stats.total);

    // Los contadores coinciden con lo que se renderiza reserva por reserva
    let rendered: Vec<BookingResponse> = bookings
        .into_iter()
        .map(|b| BookingResponse::from_booking(b, today()))
        .collect();
    let upcoming = rendered
        .iter()
        .filter(|r| r.display_status == DisplayStatus::Upcoming)
        .count() as i64;
    assert_eq!(upcoming, stats.upcoming);
}

#[test]
fn reconciliation_converges_and_is_idempotent() {
    let past = today() - Duration::days(1);
    let future = today() + Duration::days(1);
    let mut bookings = vec![
        booking("upcoming", Some(past), 50),
        booking("upcoming", Some(past), 70),
        booking("upcoming", Some(future), 90),
        booking("upcoming", None, 30), // sin fecha real: nunca se persiste
        booking("confirmed", Some(past), 110),
    ];

    let stats_before = summarize_bookings(&bookings, today());

    let expired = expired_upcoming_ids(&bookings, today());
    assert_eq!(expired.len(), 2);

    for b in &mut bookings {
        if expired.contains(&b.id) {
            b.status = "completed".to_string();
        }
    }

    // La reconciliación no cambia lo que ve el usuario
    let stats_after = summarize_bookings(&bookings, today());
    assert_eq!(stats_before, stats_after);

    // Segunda pasada con el mismo reloj: nada que escribir
    assert!(expired_upcoming_ids(&bookings, today()).is_empty());
}

#[test]
fn revenue_and_active_counts_use_stored_statuses() {
    let future = today() + Duration::days(3);
    let bookings = vec![
        booking("completed", Some(today() - Duration::days(2)), 100),
        booking("confirmed", Some(future), 50),
        booking("pending", Some(future), 500),
        booking("canceled", Some(future), 900),
        booking("upcoming", Some(future), 70),
    ];

    // Revenue: completed + confirmed; pending y canceled no cuentan
    assert_eq!(total_revenue(&bookings), Decimal::from(150));
    // Activas: confirmed + pending
    assert_eq!(active_bookings(&bookings), 2);
}

#[test]
fn admin_report_is_deterministic() {
    let bookings = vec![
        booking("confirmed", Some(today() + Duration::days(1)), 80),
        booking("completed", Some(today() - Duration::days(1)), 40),
    ];

    let first = report_service::monthly_breakdown(&bookings, today());
    let second = report_service::monthly_breakdown(&bookings, today());
    assert_eq!(first, second);
    assert_eq!(first.len(), 6);

    let top_first = report_service::popular_vehicles(&bookings);
    let top_second = report_service::popular_vehicles(&bookings);
    assert_eq!(top_first.len(), top_second.len());
    for (a, b) in top_first.iter().zip(top_second.iter()) {
        assert_eq!(a.vehicle_name, b.vehicle_name);
        assert_eq!(a.bookings, b.bookings);
    }
}

#[test]
fn booking_price_uses_inclusive_days() {
    let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 7, 3).unwrap();
    let days = rental_days(start, end);
    assert_eq!(days, 3);

    let price_per_day = Decimal::from(45);
    assert_eq!(price_per_day * Decimal::from(days), Decimal::from(135));
}
