//! 游戏数据实体
//!
//! steam 表由外部数据导入预先填充，本服务只读取记录并调整评价计数。

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "steam")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub appid: i32,

    // === 基础信息 ===
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub release_date: Date,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,

    // === 评价计数（唯一可写字段）===
    pub positive_ratings: i32,
    pub negative_ratings: i32,

    // === 玩家数量估计 ===
    pub owners: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 好评率（百分比，保留两位小数）
    ///
    /// 好评与差评都为 0 时返回 0.0，与排序时使用的 SQL 表达式保持一致。
    pub fn review_score(&self) -> f64 {
        let total = i64::from(self.positive_ratings) + i64::from(self.negative_ratings);
        if total == 0 {
            return 0.0;
        }
        let ratio = self.positive_ratings as f64 / total as f64 * 100.0;
        (ratio * 100.0).round() / 100.0
    }
}
