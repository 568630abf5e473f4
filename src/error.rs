use sea_orm::DbErr;
use thiserror::Error;

/// 启动阶段的错误
///
/// 请求处理阶段的数据库错误不会走到这里，而是在 service 中转换为页面提示。
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
