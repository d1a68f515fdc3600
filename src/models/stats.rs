//! Modelos de estadísticas
//!
//! Este módulo contiene las formas agregadas que consumen el dashboard de
//! usuario y los reportes del panel de administración.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Contadores de reservas de un usuario para el dashboard
///
/// Invariante: upcoming + completed + canceled == total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingStatsSummary {
    pub total: i64,
    pub upcoming: i64,
    pub completed: i64,
    pub canceled: i64,
}

/// Resumen del reporte de administración
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminReportSummary {
    pub total_revenue: Decimal,
    pub active_bookings: i64,
    pub available_vehicles: i64,
    pub total_users: i64,
}

/// Contadores de reservas de un mes calendario, por estado almacenado
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyBookingCounts {
    /// Etiqueta "Jun 25" para el eje del chart
    pub month: String,
    pub confirmed: i64,
    pub completed: i64,
    pub canceled: i64,
}

/// Vehículo con su número de reservas, para el top de populares
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleBookingCount {
    pub vehicle_name: String,
    pub bookings: i64,
}
