use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
};
use sea_orm::DatabaseConnection;

use crate::database::dto::{CatalogView, ModifyParams, Notice, RatingForm, ReportForm, SearchForm};
use crate::database::{list_games, run_report, search_games, update_rating};
use crate::utils::logs::{get_log_level, set_log_level};

/// 路由共享状态，只有数据库连接池
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/search", get(empty_search_handler).post(search_handler))
        .route("/result", post(result_handler))
        .route("/modify", get(modify_page_handler).post(search_handler))
        .route("/update_rating", post(update_rating_handler))
        .route("/log_level", get(get_log_level).put(set_log_level))
        .fallback(not_found_handler)
        .with_state(state)
}

// ==================== 浏览与搜索 ====================

pub async fn home_handler(State(state): State<AppState>) -> Json<CatalogView> {
    Json(list_games(&state.db).await)
}

pub async fn empty_search_handler() -> Json<CatalogView> {
    Json(CatalogView::default())
}

pub async fn search_handler(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Json<CatalogView> {
    Json(search_games(&state.db, &form.game_name).await)
}

pub async fn result_handler(
    State(state): State<AppState>,
    Form(form): Form<ReportForm>,
) -> Json<CatalogView> {
    Json(run_report(&state.db, &form.action, form.game_name.as_deref()).await)
}

// ==================== 编辑 ====================

/// 编辑页面：重定向回来时恢复搜索词，并带上上一步的提示
pub async fn modify_page_handler(
    State(state): State<AppState>,
    Query(params): Query<ModifyParams>,
) -> Json<CatalogView> {
    let mut view = match params.search_term.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => search_games(&state.db, term).await,
        _ => CatalogView::default(),
    };

    if let Some(message) = params.notice {
        let notice = Notice::new(params.level.unwrap_or_default(), message);
        view.notices.insert(0, notice);
    }
    Json(view)
}

pub async fn update_rating_handler(
    State(state): State<AppState>,
    Form(form): Form<RatingForm>,
) -> Redirect {
    let notice = update_rating(&state.db, &form.game_name, &form.field).await;
    Redirect::to(&modify_location(form.search_term, notice))
}

/// 拼接 /modify 的重定向地址
pub fn modify_location(search_term: Option<String>, notice: Notice) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(term) = search_term.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        query.append_pair("search_term", term);
    }
    query.append_pair("notice", &notice.message);
    query.append_pair("level", notice.level.as_str());
    format!("/modify?{}", query.finish())
}

pub async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(CatalogView::notice(Notice::error("Page not found"))),
    )
}
