use maud::{html, Markup};
use rust_i18n::t;

use super::card::{self, QuizContext};
use crate::{card::Card, names};

/// What the results panel shows for one knowledge point.
pub enum Results {
    Cards(Vec<Card>),
    Placeholder(String),
}

pub struct LevelView<'a> {
    pub levels: &'a [String],
    pub level: &'a str,
    pub knowledge_points: &'a [String],
    pub active: Option<&'a str>,
    pub results: Results,
}

/// Full page body: the swappable quiz body wrapped in its stable container.
pub fn quiz_page(view: &LevelView) -> Markup {
    html! {
        div id=(names::QUIZ_BODY_ID) {
            (quiz_body(view))
        }
    }
}

/// Contents of the quiz body, swapped wholesale on every level or
/// knowledge-point switch.
pub fn quiz_body(view: &LevelView) -> Markup {
    let ctx = QuizContext {
        level: view.level,
        knowledge: view.active.unwrap_or_default(),
    };

    html! {
        (level_bar(view.levels, view.level))
        div.quiz-layout {
            (knowledge_list(view.level, view.knowledge_points, view.active))
            section id=(names::RESULTS_PANEL_ID) {
                (results(&view.results, &ctx))
            }
        }
    }
}

pub fn results(results: &Results, ctx: &QuizContext) -> Markup {
    match results {
        Results::Cards(cards) => html! {
            @for c in cards {
                (card::card(c, ctx))
            }
        },
        Results::Placeholder(message) => html! {
            div.placeholder { (message) }
        },
    }
}

fn quiz_body_target() -> String {
    format!("#{}", names::QUIZ_BODY_ID)
}

/// Requests from the level bar and the knowledge list all sync on the quiz
/// body, so a newer switch aborts an older one still in flight.
fn quiz_body_sync() -> String {
    format!("#{}:replace", names::QUIZ_BODY_ID)
}

fn level_bar(levels: &[String], active: &str) -> Markup {
    html! {
        nav.level-bar aria-label=(t!("app.levels")) {
            @for level in levels {
                @if level == active {
                    button.level-btn.active type="button" data-level=(level) { (level) }
                } @else {
                    button.level-btn type="button" data-level=(level)
                        hx-get=(names::level_url(level))
                        hx-target=(quiz_body_target())
                        hx-swap="innerHTML"
                        hx-sync=(quiz_body_sync())
                        hx-push-url="true" {
                        (level)
                    }
                }
            }
        }
    }
}

fn knowledge_list(level: &str, points: &[String], active: Option<&str>) -> Markup {
    html! {
        ul id="knowledge-list" aria-label=(t!("app.knowledge_points")) {
            @if points.is_empty() {
                li { (t!("quiz.no_knowledge_points")) }
            }
            @for point in points {
                @if Some(point.as_str()) == active {
                    li.knowledge-item.active data-knowledge=(point) { (point) }
                } @else {
                    li.knowledge-item data-knowledge=(point)
                        hx-get=(names::knowledge_url(level, point))
                        hx-target=(quiz_body_target())
                        hx-swap="innerHTML"
                        hx-sync=(quiz_body_sync())
                        hx-push-url="true" {
                        (point)
                    }
                }
            }
        }
    }
}
