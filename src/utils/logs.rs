use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl From<log::LevelFilter> for LogLevel {
    fn from(level: log::LevelFilter) -> Self {
        match level {
            log::LevelFilter::Error => LogLevel::Error,
            log::LevelFilter::Warn => LogLevel::Warn,
            log::LevelFilter::Info => LogLevel::Info,
            log::LevelFilter::Debug => LogLevel::Debug,
            log::LevelFilter::Trace => LogLevel::Trace,
            log::LevelFilter::Off => LogLevel::Off,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LogLevelBody {
    pub level: String,
}

/// 解析日志级别字符串
pub fn parse_level(level: &str) -> Result<log::LevelFilter, String> {
    match level.trim().to_lowercase().as_str() {
        "error" => Ok(log::LevelFilter::Error),
        "warn" => Ok(log::LevelFilter::Warn),
        "info" => Ok(log::LevelFilter::Info),
        "debug" => Ok(log::LevelFilter::Debug),
        "trace" => Ok(log::LevelFilter::Trace),
        "off" => Ok(log::LevelFilter::Off),
        other => Err(format!("Invalid log level: {}", other)),
    }
}

/// 动态设置日志输出级别（不持久化）
///
/// 只能在启动时 `RUST_LOG` 允许的范围内调整。
pub async fn set_log_level(Json(body): Json<LogLevelBody>) -> impl IntoResponse {
    match parse_level(&body.level) {
        Ok(level) => {
            log::set_max_level(level);
            log::info!("日志级别已调整为 {}", level);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(message) => (StatusCode::BAD_REQUEST, message).into_response(),
    }
}

/// 获取当前日志级别
pub async fn get_log_level() -> Json<LogLevel> {
    Json(log::max_level().into())
}
