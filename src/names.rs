pub const HOME_URL: &str = "/";
pub const ANSWER_URL: &str = "/answer";

pub const RESULTS_PANEL_ID: &str = "right-panel";
pub const QUIZ_BODY_ID: &str = "quiz-body";

pub const DEFAULT_LEVELS: &str = "level1,level2,level3,level4";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn level_url(level: &str) -> String {
    format!("/level/{}", urlencoding::encode(level))
}

pub fn knowledge_url(level: &str, knowledge: &str) -> String {
    format!(
        "/level/{}?knowledge={}",
        urlencoding::encode(level),
        urlencoding::encode(knowledge)
    )
}
