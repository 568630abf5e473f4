//! 游戏数据仓库
//!
//! 所有 SELECT 都由 [`CatalogQuery`] 生成：可选的名称筛选 + 一种排序方式。
//! 唯一的写操作是 [`GamesRepository::adjust_rating`]。

use crate::entity::games;
use crate::entity::prelude::*;
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 好评率排序表达式，好评与差评都为 0 时按 0 处理
const REVIEW_SCORE_SQL: &str = "COALESCE(positive_ratings * 100.0 / NULLIF(positive_ratings + negative_ratings, 0), 0)";

/// LIKE 模式中的转义字符，选用各数据库都无需再转义的字符
const LIKE_ESCAPE: char = '!';

/// 游戏列表排序选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogOrder {
    /// 按 appid 升序（默认）
    AppId,
    /// 按发行日期降序
    Newest,
    /// 按好评率降序
    Rating,
    /// 按价格升序
    Price,
    /// 按玩家数量降序
    PlayerCount,
    /// 按名称升序
    Name,
}

/// 评价计数调整方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingField {
    PositiveAdd,
    PositiveRemove,
    NegativeAdd,
    NegativeRemove,
}

impl RatingField {
    /// 被调整的列
    pub fn column(self) -> games::Column {
        match self {
            RatingField::PositiveAdd | RatingField::PositiveRemove => {
                games::Column::PositiveRatings
            }
            RatingField::NegativeAdd | RatingField::NegativeRemove => {
                games::Column::NegativeRatings
            }
        }
    }

    pub fn delta(self) -> i32 {
        match self {
            RatingField::PositiveAdd | RatingField::NegativeAdd => 1,
            RatingField::PositiveRemove | RatingField::NegativeRemove => -1,
        }
    }

    /// 用于提示信息的评价类别
    pub fn category(self) -> &'static str {
        match self {
            RatingField::PositiveAdd | RatingField::PositiveRemove => "positive",
            RatingField::NegativeAdd | RatingField::NegativeRemove => "negative",
        }
    }
}

impl FromStr for RatingField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "positive_add" => Ok(RatingField::PositiveAdd),
            "positive_remove" => Ok(RatingField::PositiveRemove),
            "negative_add" => Ok(RatingField::NegativeAdd),
            "negative_remove" => Ok(RatingField::NegativeRemove),
            other => Err(format!("Unknown rating field: {}", other)),
        }
    }
}

/// 目录查询：可选的名称子串筛选（不区分大小写）+ 排序方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    filter: Option<String>,
    order: CatalogOrder,
}

impl CatalogQuery {
    /// 全部游戏，按 appid 排序
    pub fn all() -> Self {
        Self {
            filter: None,
            order: CatalogOrder::AppId,
        }
    }

    /// 名称包含 `term` 的游戏；空白的 `term` 视为不筛选
    pub fn matching(term: Option<&str>) -> Self {
        let filter = term
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Self {
            filter,
            order: CatalogOrder::AppId,
        }
    }

    pub fn order_by(mut self, order: CatalogOrder) -> Self {
        self.order = order;
        self
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn order(&self) -> CatalogOrder {
        self.order
    }

    /// 只应用筛选条件，不排序（用于计数）
    fn build_base_query(&self) -> Select<Games> {
        let query = Games::find();
        match &self.filter {
            Some(term) => query.filter(name_contains(term)),
            None => query,
        }
    }

    /// 生成完整的 SELECT 语句
    pub fn select(&self) -> Select<Games> {
        let query = self.build_base_query();
        match self.order {
            CatalogOrder::AppId => query.order_by_asc(games::Column::Appid),
            CatalogOrder::Newest => query.order_by_desc(games::Column::ReleaseDate),
            CatalogOrder::Rating => query.order_by(Expr::cust(REVIEW_SCORE_SQL), Order::Desc),
            CatalogOrder::Price => query.order_by_asc(games::Column::Price),
            CatalogOrder::PlayerCount => query.order_by_desc(games::Column::Owners),
            CatalogOrder::Name => query.order_by_asc(games::Column::Name),
        }
    }
}

/// 名称子串匹配，`%` `_` 等通配符按字面量处理
fn name_contains(term: &str) -> SimpleExpr {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    Expr::expr(Func::lower(Expr::col(games::Column::Name)))
        .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

/// 游戏数据仓库
pub struct GamesRepository;

impl GamesRepository {
    // ==================== 查询操作 ====================

    /// 按查询条件获取游戏列表
    pub async fn find(
        db: &DatabaseConnection,
        query: &CatalogQuery,
    ) -> Result<Vec<games::Model>, DbErr> {
        query.select().all(db).await
    }

    /// 获取满足筛选条件的游戏数量（无筛选时为总数）
    pub async fn count(db: &DatabaseConnection, query: &CatalogQuery) -> Result<u64, DbErr> {
        query.build_base_query().count(db).await
    }

    // ==================== 写操作 ====================

    /// 对名称完全相同的所有游戏调整一次评价计数
    ///
    /// 在事务中执行单条 UPDATE，出错时事务随 drop 回滚。返回受影响的行数。
    pub async fn adjust_rating(
        db: &DatabaseConnection,
        name: &str,
        field: RatingField,
    ) -> Result<u64, DbErr> {
        let txn = db.begin().await?;

        let column = field.column();
        let result = Games::update_many()
            .col_expr(column, Expr::col(column).add(field.delta()))
            .filter(games::Column::Name.eq(name))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(result.rows_affected)
    }
}
