//! 数据传输对象 (DTO)
//!
//! 表单/查询参数的反序列化结构，以及返回给前端的视图结构。

use crate::database::repository::games_repository::CatalogOrder;
use crate::entity::games;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ==================== 请求参数 ====================

/// 搜索表单（/search 与 /modify）
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub game_name: String,
}

/// 排序/统计表单（/result）
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReportForm {
    #[serde(default)]
    pub action: String,
    pub game_name: Option<String>,
}

/// 评价调整表单（/update_rating）
///
/// 缺失的字段按空串处理，交给服务层校验并以提示返回
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RatingForm {
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub field: String,
    pub search_term: Option<String>,
}

/// 编辑页面的查询参数，重定向时用于恢复搜索词和提示信息
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ModifyParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<NoticeLevel>,
}

/// 排序/统计动作
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportAction {
    Count,
    Sorted(CatalogOrder),
}

impl FromStr for ReportAction {
    type Err = String;

    /// 接受页面上的按钮文字（如 `By Newest`），也接受简写（如 `newest`），不区分大小写
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let key = normalized.strip_prefix("by ").unwrap_or(normalized.as_str());
        match key {
            "count" => Ok(ReportAction::Count),
            "newest" => Ok(ReportAction::Sorted(CatalogOrder::Newest)),
            "rating" => Ok(ReportAction::Sorted(CatalogOrder::Rating)),
            "price" => Ok(ReportAction::Sorted(CatalogOrder::Price)),
            "player count" | "player_count" => {
                Ok(ReportAction::Sorted(CatalogOrder::PlayerCount))
            }
            "name" => Ok(ReportAction::Sorted(CatalogOrder::Name)),
            _ => Err(s.trim().to_string()),
        }
    }
}

// ==================== 视图 ====================

/// 单条游戏记录的展示数据，包含计算出的好评率
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub appid: i32,
    pub name: String,
    pub release_date: NaiveDate,
    pub price: Decimal,
    pub positive_ratings: i32,
    pub negative_ratings: i32,
    pub owners: i64,
    pub reviews: f64,
}

impl From<games::Model> for GameView {
    fn from(game: games::Model) -> Self {
        let reviews = game.review_score();
        Self {
            appid: game.appid,
            name: game.name,
            release_date: game.release_date,
            price: game.price,
            positive_ratings: game.positive_ratings,
            negative_ratings: game.negative_ratings,
            owners: game.owners,
            reviews,
        }
    }
}

/// 提示级别
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

/// 页面提示信息
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

/// 一次请求的完整视图
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogView {
    pub notices: Vec<Notice>,
    pub games: Vec<GameView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl CatalogView {
    pub fn with_games(games: Vec<games::Model>) -> Self {
        Self {
            games: games.into_iter().map(GameView::from).collect(),
            ..Default::default()
        }
    }

    /// 只有一条提示、没有数据的视图
    pub fn notice(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
            ..Default::default()
        }
    }

    pub fn search_term(mut self, term: Option<String>) -> Self {
        self.search_term = term;
        self
    }
}
