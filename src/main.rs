use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use vehicle_rental::config::environment::EnvironmentConfig;
use vehicle_rental::database;
use vehicle_rental::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use vehicle_rental::middleware::rate_limit::{rate_limit_middleware, RateLimitState};
use vehicle_rental::routes;
use vehicle_rental::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging: DEBUG fuera de producción
    let log_level = if config.is_production() {
        tracing::Level::INFO
    } else {
        tracing::Level::DEBUG
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("🚗 Vehicle Rental - API del storefront");
    info!("======================================");

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => {
            info!("✅ Base de datos conectada exitosamente");
            pool
        }
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let rate_limit = RateLimitState::new(&config);
    let cors = if config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest(
            "/api/auth",
            routes::auth_routes::create_auth_router(state.clone(), rate_limit.clone()),
        )
        .nest(
            "/api/vehicles",
            routes::vehicle_routes::create_vehicle_router(state.clone()),
        )
        .nest(
            "/api/bookings",
            routes::booking_routes::create_booking_router(state.clone()),
        )
        .nest(
            "/api/reviews",
            routes::review_routes::create_review_router(state.clone()),
        )
        .nest(
            "/api/admin",
            routes::admin_routes::create_admin_router(state.clone()),
        )
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            rate_limit_middleware,
        ))
        .layer(cors)
        .with_state(state.clone());

    let addr: SocketAddr = state.config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Registrar cuenta");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Perfil actual");
    info!("   DELETE /api/auth/me - Eliminar cuenta");
    info!("🚗 Vehículos:");
    info!("   GET  /api/vehicles - Catálogo con filtros");
    info!("   GET  /api/vehicles/:id - Detalle con ratings");
    info!("   POST /api/vehicles - Crear vehículo (admin)");
    info!("   PUT  /api/vehicles/:id - Actualizar vehículo (admin)");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo (admin)");
    info!("📅 Reservas:");
    info!("   POST /api/bookings - Crear reserva");
    info!("   GET  /api/bookings/me - Mis reservas con contadores");
    info!("   POST /api/bookings/:id/cancel - Cancelar reserva");
    info!("   GET  /api/bookings/admin - Todas las reservas (admin)");
    info!("   PATCH /api/bookings/admin/:id/status - Cambiar estado (admin)");
    info!("⭐ Reviews:");
    info!("   POST /api/reviews - Publicar review");
    info!("   GET  /api/reviews/vehicle/:id - Reviews de un vehículo");
    info!("📊 Admin:");
    info!("   GET  /api/admin/report - Reporte del dashboard");
    info!("   GET  /api/admin/users - Listar usuarios");
    info!("   PATCH /api/admin/users/:id/role - Cambiar rol");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
