//! # quizcards
//!
//! Renders self-quiz question records into interactive, gradable cards and
//! serves them as an htmx web application.
//!
//! The engine is pure: [`card::build`] turns a [`models::QuestionRecord`]
//! into a [`card::Card`], and [`card::Card::answer`] runs the selection
//! state machine on it. The web layer loads records from a
//! [`source::DataSource`], renders cards with maud and answers clicks.

rust_i18n::i18n!("locales", fallback = "zh-CN");

pub mod card;
pub mod decode;
pub mod extractors;
pub mod grading;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod source;
pub mod statics;
pub mod typeset;
pub mod views;

use std::sync::Arc;

use axum::{
    extract::Request,
    http::Method,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};

use crate::{rejections::AppError, source::DataSource};

#[derive(Clone)]
pub struct AppState {
    pub source: DataSource,
    /// Levels offered in the level bar, in display order.
    pub levels: Arc<[String]>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::quiz::routes())
        .layer(middleware::from_fn(htmx_only_answers))
        .nest("/static", statics::routes())
        .with_state(state)
}

/// Answers are only accepted from the page's own htmx requests. A plain
/// cross-site form post carries no `HX-Request` header.
async fn htmx_only_answers(req: Request, next: Next) -> Response {
    if req.method() == Method::POST && !extractors::is_htmx_request(req.headers()) {
        tracing::warn!("rejected {} {} without HX-Request", req.method(), req.uri());
        return AppError::Forbidden("answers must come from the quiz page").into_response();
    }

    next.run(req).await
}
