//! Reportes del panel de administración
//!
//! Este módulo arma el resumen del dashboard admin: revenue, reservas
//! activas, vehículos disponibles, desglose mensual y top de vehículos más
//! reservados. Todo opera sobre colecciones ya cargadas y una fecha de
//! referencia inyectada.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::models::booking::Booking;
use crate::models::stats::{AdminReportSummary, MonthlyBookingCounts, VehicleBookingCount};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::services::booking_stats_service::{active_bookings, total_revenue};
use crate::services::booking_status_service::BookingStatus;

/// Cantidad de meses que muestra el desglose mensual
const REPORT_MONTHS: u32 = 6;

/// Cantidad de vehículos en el top de populares
const TOP_VEHICLES: usize = 5;

/// Resumen principal del reporte
pub fn build_summary(
    bookings: &[Booking],
    vehicles: &[Vehicle],
    total_users: i64,
) -> AdminReportSummary {
    let available_vehicles = vehicles
        .iter()
        .filter(|v| v.availability() == VehicleStatus::Available)
        .count() as i64;

    AdminReportSummary {
        total_revenue: total_revenue(bookings),
        active_bookings: active_bookings(bookings),
        available_vehicles,
        total_users,
    }
}

/// Desglose de reservas por mes calendario, últimos seis meses
///
/// Cada reserva se bucketiza por su timestamp de creación y se cuenta según
/// su estado almacenado (confirmed / completed / canceled).
pub fn monthly_breakdown(bookings: &[Booking], today: NaiveDate) -> Vec<MonthlyBookingCounts> {
    let mut months = Vec::with_capacity(REPORT_MONTHS as usize);

    for offset in (0..REPORT_MONTHS).rev() {
        let (year, month) = shift_month(today.year(), today.month(), offset);
        let mut counts = MonthlyBookingCounts {
            month: month_label(year, month),
            confirmed: 0,
            completed: 0,
            canceled: 0,
        };

        for booking in bookings {
            let created = booking.created_at.date_naive();
            if created.year() != year || created.month() != month {
                continue;
            }
            match booking.stored_status() {
                BookingStatus::Confirmed => counts.confirmed += 1,
                BookingStatus::Completed => counts.completed += 1,
                BookingStatus::Canceled => counts.canceled += 1,
                _ => {}
            }
        }

        months.push(counts);
    }

    months
}

/// Top de vehículos por cantidad de reservas
///
/// Empates se resuelven por nombre para que el resultado sea determinista.
pub fn popular_vehicles(bookings: &[Booking]) -> Vec<VehicleBookingCount> {
    let mut by_vehicle: HashMap<Uuid, (String, i64)> = HashMap::new();

    for booking in bookings {
        let entry = by_vehicle
            .entry(booking.vehicle_id)
            .or_insert_with(|| (booking.vehicle_name.clone(), 0));
        entry.1 += 1;
    }

    let mut counts: Vec<VehicleBookingCount> = by_vehicle
        .into_values()
        .map(|(vehicle_name, bookings)| VehicleBookingCount {
            vehicle_name,
            bookings,
        })
        .collect();

    counts.sort_by(|a, b| {
        b.bookings
            .cmp(&a.bookings)
            .then_with(|| a.vehicle_name.cmp(&b.vehicle_name))
    });
    counts.truncate(TOP_VEHICLES);
    counts
}

/// Retroceder `offset` meses desde (year, month)
fn shift_month(year: i32, month: u32, offset: u32) -> (i32, u32) {
    let zero_based = year * 12 + month as i32 - 1 - offset as i32;
    (zero_based.div_euclid(12), (zero_based.rem_euclid(12) + 1) as u32)
}

/// Etiqueta "Jun 25" para el eje del chart
fn month_label(year: i32, month: u32) -> String {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    format!("{} {:02}", NAMES[(month - 1) as usize], year.rem_euclid(100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn booking_at(status: &str, vehicle_id: Uuid, name: &str, created_at: DateTime<Utc>) -> Booking {
        Booking {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            vehicle_id,
            vehicle_name: name.to_string(),
            vehicle_type: "suv".to_string(),
            image_url: None,
            price_per_day: Decimal::from(40),
            start_date: today(),
            end_date: Some(today()),
            days: 1,
            total_price: Decimal::from(40),
            status: status.to_string(),
            created_at,
        }
    }

    fn vehicle(status: &str) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            vehicle_name: "Ford Focus".to_string(),
            vehicle_type: "sedan".to_string(),
            price_per_day: Decimal::from(35),
            seats: 5,
            features: vec![],
            image_url: None,
            status: status.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_shift_month_wraps_year() {
        assert_eq!(shift_month(2025, 2, 3), (2024, 11));
        assert_eq!(shift_month(2025, 6, 0), (2025, 6));
        assert_eq!(shift_month(2025, 6, 5), (2025, 1));
    }

    #[test]
    fn test_monthly_breakdown_window_and_buckets() {
        let vehicle_id = Uuid::new_v4();
        let bookings = vec![
            booking_at(
                "confirmed",
                vehicle_id,
                "A",
                Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap(),
            ),
            booking_at(
                "completed",
                vehicle_id,
                "A",
                Utc.with_ymd_and_hms(2025, 5, 20, 10, 0, 0).unwrap(),
            ),
            booking_at(
                "canceled",
                vehicle_id,
                "A",
                Utc.with_ymd_and_hms(2025, 5, 21, 10, 0, 0).unwrap(),
            ),
            // Fuera de la ventana de seis meses
            booking_at(
                "confirmed",
                vehicle_id,
                "A",
                Utc.with_ymd_and_hms(2024, 11, 1, 10, 0, 0).unwrap(),
            ),
            // upcoming no aparece en el desglose
            booking_at(
                "upcoming",
                vehicle_id,
                "A",
                Utc.with_ymd_and_hms(2025, 6, 3, 10, 0, 0).unwrap(),
            ),
        ];

        let breakdown = monthly_breakdown(&bookings, today());
        assert_eq!(breakdown.len(), 6);
        assert_eq!(breakdown[0].month, "Jan 25");
        assert_eq!(breakdown[5].month, "Jun 25");
        assert_eq!(breakdown[5].confirmed, 1);
        assert_eq!(breakdown[4].completed, 1);
        assert_eq!(breakdown[4].canceled, 1);
        let total: i64 = breakdown
            .iter()
            .map(|m| m.confirmed + m.completed + m.canceled)
            .sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_popular_vehicles_top_five() {
        let created = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let mut bookings = Vec::new();
        for (index, count) in [4_i64, 1, 3, 2, 5, 6].iter().enumerate() {
            let id = Uuid::new_v4();
            for _ in 0..*count {
                bookings.push(booking_at(
                    "confirmed",
                    id,
                    &format!("Vehicle {}", index),
                    created,
                ));
            }
        }

        let top = popular_vehicles(&bookings);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].vehicle_name, "Vehicle 5");
        assert_eq!(top[0].bookings, 6);
        // El de una sola reserva queda fuera del top 5
        assert!(top.iter().all(|v| v.vehicle_name != "Vehicle 1"));
    }

    #[test]
    fn test_build_summary_counts_available_vehicles() {
        let vehicles = vec![vehicle("available"), vehicle("rented"), vehicle("available")];
        let summary = build_summary(&[], &vehicles, 7);
        assert_eq!(summary.available_vehicles, 2);
        assert_eq!(summary.total_users, 7);
        assert_eq!(summary.total_revenue, Decimal::ZERO);
        assert_eq!(summary.active_bookings, 0);
    }
}
