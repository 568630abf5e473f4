pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod routes;
pub mod utils;

use config::CatalogConfig;
use database::db;
use error::AppError;
use routes::{AppState, build_router};
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

/// 初始化日志
///
/// `log` 宏的输出由 tracing-subscriber 接管；订阅器放开到 `RUST_LOG`（默认 debug），
/// 实际输出级别由 `log::set_max_level` 控制，可在运行时调整。
fn init_logging(config: &CatalogConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    log::set_max_level(config.log_level);
    Ok(())
}

pub async fn run() -> Result<(), AppError> {
    let config = CatalogConfig::from_env()?;
    init_logging(&config)?;

    let conn = match db::establish_connection(&config).await {
        Ok(conn) => {
            log::info!("数据库连接建立成功");
            conn
        }
        Err(e) => {
            log::error!("无法建立数据库连接: {}", e);
            return Err(e.into());
        }
    };

    let app = build_router(AppState { db: conn.clone() });

    let listener = TcpListener::bind(&config.bind_addr).await?;
    log::info!("服务已启动: {}", config.bind_addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // 无论服务如何退出都关闭连接池
    match db::close_connection(conn).await {
        Ok(_) => log::info!("数据库连接已成功关闭"),
        Err(e) => log::error!("关闭数据库连接时出错: {}", e),
    }

    served.map_err(AppError::from)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("无法监听 Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        log::info!("收到 Ctrl+C，准备退出");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                log::info!("收到终止信号，准备退出");
            }
            Err(e) => {
                log::error!("无法监听终止信号: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
