use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::CatalogConfig;

// ==================== 数据库连接管理 ====================

/// Establish a SeaORM database connection.
///
/// 返回的是连接池：每条语句执行时借出一个连接，语句结束（成功、出错或被取消）后自动归还。
pub async fn establish_connection(config: &CatalogConfig) -> Result<DatabaseConnection, DbErr> {
    // 1. 设置连接选项
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(config.connect_timeout)
        .sqlx_logging(false);

    // 2. 指定 schema（对应 Postgres 的 search_path）
    if let Some(schema) = &config.schema {
        options.set_schema_search_path(schema.clone());
        log::info!("使用数据库 schema: {}", schema);
    }

    // 3. 连接数据库
    let conn = Database::connect(options).await?;
    conn.ping().await?;
    Ok(conn)
}

/// 关闭数据库连接
pub async fn close_connection(conn: DatabaseConnection) -> Result<(), DbErr> {
    conn.close().await?;
    Ok(())
}
