use std::{collections::HashMap, env, fmt::Display, str::FromStr, time::Duration};

use url::Url;

use crate::error::AppError;

/// 默认监听地址
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 8;

/// 服务配置
///
/// 启动时从环境变量读取一次，之后作为普通值传给需要的组件。
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub database_url: String,
    /// Postgres search_path，为空时使用数据库默认值
    pub schema: Option<String>,
    pub bind_addr: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
    pub log_level: log::LevelFilter,
}

impl CatalogConfig {
    /// 从进程环境变量加载配置
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(&env::vars().collect())
    }

    /// 从给定的变量表加载配置
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, AppError> {
        let database_url = match non_blank(vars, "DATABASE_URL") {
            Some(url) => url.to_string(),
            None => postgres_url_from_parts(vars)?,
        };

        let log_level = match non_blank(vars, "CATALOG_LOG_LEVEL") {
            Some(level) => level.parse().map_err(|_| {
                AppError::Config(format!("Invalid CATALOG_LOG_LEVEL value: {level}"))
            })?,
            None => log::LevelFilter::Info,
        };

        Ok(Self {
            database_url,
            schema: non_blank(vars, "DB_SCHEMA").map(str::to_string),
            bind_addr: non_blank(vars, "CATALOG_BIND")
                .unwrap_or(DEFAULT_BIND_ADDR)
                .to_string(),
            max_connections: try_load(vars, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            connect_timeout: Duration::from_secs(try_load(
                vars,
                "DB_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?),
            log_level,
        })
    }
}

fn non_blank<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn try_load<T>(vars: &HashMap<String, String>, key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match non_blank(vars, key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid {key} value: {e}"))),
        None => {
            log::debug!("{key} 未设置，使用默认值: {default}");
            Ok(default)
        }
    }
}

/// 使用 `url` crate 安全地拼接 Postgres 连接字符串，密码中的特殊字符会被转义
fn postgres_url_from_parts(vars: &HashMap<String, String>) -> Result<String, AppError> {
    let require = |key: &str| {
        non_blank(vars, key).ok_or_else(|| {
            AppError::Config(format!("Neither DATABASE_URL nor {key} is set"))
        })
    };

    let user = require("DB_USER")?;
    let host = require("DB_HOST")?;
    let database = require("DB_NAME")?;
    let port = try_load(vars, "DB_PORT", DEFAULT_DB_PORT)?;

    let mut url = Url::parse("postgres://localhost")
        .map_err(|e| AppError::Config(format!("Invalid database url: {e}")))?;
    url.set_host(Some(host))
        .map_err(|e| AppError::Config(format!("Invalid DB_HOST value: {e}")))?;
    url.set_port(Some(port)).map_err(invalid_credentials)?;
    url.set_username(user).map_err(invalid_credentials)?;
    url.set_password(vars.get("DB_PASSWORD").map(String::as_str))
        .map_err(invalid_credentials)?;
    url.set_path(database);

    Ok(url.to_string())
}

fn invalid_credentials(_: ()) -> AppError {
    AppError::Config("Invalid database credentials".to_string())
}
