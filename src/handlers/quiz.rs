use axum::{
    extract::{Form, Path, Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use rust_i18n::t;
use serde::Deserialize;

use crate::{
    card,
    extractors::IsHtmx,
    grading::Scope,
    names,
    rejections::{AppError, ResultExt},
    typeset::{TypesetRequest, HX_TRIGGER_AFTER_SETTLE},
    views::{
        self,
        card::QuizContext,
        quiz::{LevelView, Results},
    },
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/level/{level}", get(level_page))
        .route(names::ANSWER_URL, post(answer))
}

#[derive(Deserialize)]
struct LevelQuery {
    #[serde(default)]
    knowledge: Option<String>,
}

#[derive(Deserialize)]
struct AnswerForm {
    level: String,
    knowledge: String,
    card: String,
    #[serde(default)]
    sub: Option<usize>,
    key: String,
}

async fn level_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(level): Path<String>,
    Query(query): Query<LevelQuery>,
) -> Response {
    level_response(&state, is_htmx, &level, query.knowledge.as_deref()).await
}

/// Render a level: its knowledge points and the questions of the requested
/// knowledge point, or of the first one when none (or an unknown one) is
/// asked for.
pub(crate) async fn level_response(
    state: &AppState,
    is_htmx: bool,
    level: &str,
    knowledge: Option<&str>,
) -> Response {
    let points = state.source.knowledge_points(level).await;
    let active = knowledge
        .filter(|k| points.iter().any(|p| p.as_str() == *k))
        .or_else(|| points.first().map(String::as_str));

    let results = match active {
        Some(knowledge) => load_results(state, level, knowledge).await,
        None => Results::Placeholder(t!("quiz.no_questions").to_string()),
    };

    let view = LevelView {
        levels: &state.levels,
        level,
        knowledge_points: &points,
        active,
        results,
    };
    let body = if is_htmx {
        views::quiz::quiz_body(&view)
    } else {
        views::quiz::quiz_page(&view)
    };
    let title = active.unwrap_or(level);

    (
        [(HX_TRIGGER_AFTER_SETTLE, TypesetRequest::global().header_value())],
        views::render(is_htmx, title, body),
    )
        .into_response()
}

async fn load_results(state: &AppState, level: &str, knowledge: &str) -> Results {
    match state.source.questions(level, knowledge).await {
        Ok(records) if records.is_empty() => {
            Results::Placeholder(t!("quiz.empty_knowledge_point").to_string())
        }
        Ok(records) => {
            tracing::info!("rendering {} questions for {level}/{knowledge}", records.len());
            Results::Cards(records.iter().map(card::build).collect())
        }
        Err(e) => {
            tracing::error!("could not load questions for {level}/{knowledge}: {e}");
            Results::Placeholder(t!("quiz.load_failed").to_string())
        }
    }
}

/// Grade one click. The card is rebuilt from its record, the state machine
/// runs for the chosen key, and the locked list plus the revealed
/// explanation go back to the page.
async fn answer(
    State(state): State<AppState>,
    Form(form): Form<AnswerForm>,
) -> Result<impl IntoResponse, AppError> {
    let records = state
        .source
        .questions(&form.level, &form.knowledge)
        .await
        .reject("could not load questions")?;

    let record = records
        .iter()
        .find(|r| r.id == form.card)
        .ok_or(AppError::NotFound("question not found"))?;

    let scope = form.sub.map_or(Scope::Card, Scope::Sub);
    let mut card = card::build(record);
    let answered = card
        .answer(scope, &form.key)
        .reject_input("answer not accepted")?;

    tracing::debug!(
        "graded {}/{} card={} scope={scope:?} key={} correct={}",
        form.level,
        form.knowledge,
        card.id,
        form.key,
        answered.correct
    );

    let (list, region) = card
        .target(scope)
        .ok_or(AppError::Internal("answered list is missing"))?;
    let ctx = QuizContext {
        level: &form.level,
        knowledge: &form.knowledge,
    };

    Ok((
        [(HX_TRIGGER_AFTER_SETTLE, answered.typeset.header_value())],
        views::card::answered(&card.id, list, region, &ctx),
    ))
}
