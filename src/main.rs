use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use driver_marketplace::config::environment::EnvironmentConfig;
use driver_marketplace::create_app;
use driver_marketplace::database::Database;
use driver_marketplace::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Driver Marketplace API");
    info!("=========================");
    info!("🌍 Entorno: {}", config.environment);
    if config.is_development() {
        warn!("🧪 Modo desarrollo: se acepta el JWT_SECRET por defecto");
    }

    let db = if config.seed_fixtures {
        Database::seeded(config.bcrypt_cost)?
    } else {
        warn!("⚠️ SEED_FIXTURES=false, arrancando con el store vacío");
        Database::empty()
    };

    let addr = config.server_url();
    let app = create_app(AppState::new(config, db));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles bajo /api:");
    info!("   GET  /api/health");
    info!("   POST /api/auth/register | /login | /firebase, GET /api/auth/me");
    info!("   GET  /api/drivers/search | /:id, PUT /profile, POST /documents");
    info!("   POST /api/bookings, GET /api/bookings, PUT /:id/status, POST /:id/complete");
    info!("   POST /api/payments/process, GET /api/payments/history");
    info!("   POST /api/ratings, GET /api/ratings/driver/:id");
    info!("   GET  /api/admin/dashboard | /drivers | /users | /payments");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
