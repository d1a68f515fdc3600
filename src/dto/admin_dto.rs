//! DTOs del panel de administración

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::stats::{AdminReportSummary, MonthlyBookingCounts, VehicleBookingCount};

/// Request para cambiar el rol de un usuario
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRoleRequest {
    #[validate(length(min = 1))]
    pub role: String,
}

/// Reporte completo del dashboard admin
#[derive(Debug, Serialize)]
pub struct AdminReportResponse {
    pub summary: AdminReportSummary,
    pub monthly_bookings: Vec<MonthlyBookingCounts>,
    pub popular_vehicles: Vec<VehicleBookingCount>,
}
