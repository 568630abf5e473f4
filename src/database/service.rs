//! 游戏目录服务
//!
//! 每个操作执行一条语句并返回完整的 [`CatalogView`]。数据库错误在这里被捕获，
//! 转换为错误提示和空视图，不会继续向 HTTP 层传播。

use sea_orm::{DatabaseConnection, DbErr};

use crate::database::dto::{CatalogView, Notice, ReportAction};
use crate::database::repository::games_repository::{CatalogQuery, GamesRepository, RatingField};

/// 数据库错误统一转换为错误提示
fn database_error(operation: &str, e: DbErr) -> Notice {
    log::error!("{}失败: {}", operation, e);
    Notice::error(format!("Database error: {}", e))
}

// ==================== 浏览 ====================

/// 获取全部游戏（按 appid 排序）
pub async fn list_games(db: &DatabaseConnection) -> CatalogView {
    match GamesRepository::find(db, &CatalogQuery::all()).await {
        Ok(games) => CatalogView::with_games(games),
        Err(e) => CatalogView::notice(database_error("获取游戏列表", e)),
    }
}

/// 按名称子串搜索游戏（不区分大小写）
///
/// 空白的搜索词直接返回提示，不执行查询。
pub async fn search_games(db: &DatabaseConnection, term: &str) -> CatalogView {
    let term = term.trim();
    if term.is_empty() {
        return CatalogView::notice(Notice::warning("Please enter the name of a game"));
    }

    let query = CatalogQuery::matching(Some(term));
    match GamesRepository::find(db, &query).await {
        Ok(games) if games.is_empty() => {
            CatalogView::notice(Notice::info(format!("No game found with name: {}", term)))
                .search_term(Some(term.to_string()))
        }
        Ok(games) => CatalogView::with_games(games).search_term(Some(term.to_string())),
        Err(e) => CatalogView::notice(database_error("搜索游戏", e))
            .search_term(Some(term.to_string())),
    }
}

// ==================== 排序与统计 ====================

/// 执行排序或统计动作，`filter` 为空白时视为不筛选
pub async fn run_report(db: &DatabaseConnection, action: &str, filter: Option<&str>) -> CatalogView {
    let action = match action.parse::<ReportAction>() {
        Ok(action) => action,
        Err(unknown) => {
            log::debug!("未知的统计动作: {:?}", unknown);
            return CatalogView::notice(Notice::warning(format!("Unknown action: {}", unknown)));
        }
    };

    let query = CatalogQuery::matching(filter);
    let search_term = query.filter().map(str::to_string);

    match action {
        ReportAction::Count => match GamesRepository::count(db, &query).await {
            Ok(count) => {
                let message = match query.filter() {
                    Some(term) => format!("Games matching '{}': {}", term, count),
                    None => format!("Total games in database: {}", count),
                };
                CatalogView {
                    count: Some(count),
                    ..CatalogView::notice(Notice::info(message))
                }
                .search_term(search_term)
            }
            Err(e) => CatalogView::notice(database_error("统计游戏数量", e)).search_term(search_term),
        },
        ReportAction::Sorted(order) => {
            match GamesRepository::find(db, &query.order_by(order)).await {
                Ok(games) if games.is_empty() => {
                    CatalogView::notice(Notice::info("No games found")).search_term(search_term)
                }
                Ok(games) => CatalogView::with_games(games).search_term(search_term),
                Err(e) => {
                    CatalogView::notice(database_error("排序游戏列表", e)).search_term(search_term)
                }
            }
        }
    }
}

// ==================== 评价调整 ====================

/// 调整名称完全匹配的游戏的评价计数
///
/// 名称没有匹配到任何游戏时同样视为成功。
pub async fn update_rating(db: &DatabaseConnection, game_name: &str, field: &str) -> Notice {
    let field = match field.parse::<RatingField>() {
        Ok(field) => field,
        Err(message) => return Notice::warning(message),
    };

    match GamesRepository::adjust_rating(db, game_name, field).await {
        Ok(rows) => {
            log::debug!("调整评价 {:?} -> {}，影响 {} 行", field, game_name, rows);
            Notice::success(format!(
                "Updated {} rating for {}",
                field.category(),
                game_name
            ))
        }
        Err(e) => database_error("调整评价", e),
    }
}
