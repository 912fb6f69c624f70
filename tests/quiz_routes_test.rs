mod common;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
};
use quizcards::grading::INCORRECT_STYLE;
use tower::ServiceExt;

fn get(uri: &str, htmx: bool) -> Request<Body> {
    let mut req = Request::builder().method(Method::GET).uri(uri);
    if htmx {
        req = req.header("HX-Request", "true");
    }
    req.body(Body::empty()).expect("request build should succeed")
}

fn post_answer(form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/answer")
        .header("HX-Request", "true")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .expect("request build should succeed")
}

#[tokio::test]
async fn homepage_opens_the_first_level_and_knowledge_point() {
    let resp = common::app()
        .oneshot(get("/", false))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()["hx-trigger-after-settle"],
        "{\"quiz:typeset\":{}}"
    );
    let body = common::body_string(resp).await;
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains(r#"<div id="quiz-body">"#));
    assert!(body.contains(r#"<li class="knowledge-item active" data-knowledge="basics">"#));
    assert!(body.contains(r#"<div class="question-card" id="Q1">"#));
    assert!(body.contains(r#"<div class="question-card" id="Q2">"#));
    assert!(body.contains(r#"A. <pre><code class="language-cpp">int x=1;</code></pre>"#));
}

#[tokio::test]
async fn htmx_level_switch_returns_a_fragment_for_the_chosen_knowledge_point() {
    let resp = common::app()
        .oneshot(get("/level/level1?knowledge=reading", true))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_string(resp).await;
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains(r#"data-knowledge="reading">reading</li>"#));
    assert!(body.contains(r#"<div class="question-card" id="R1">"#));
    assert!(body.contains("<h5>R1.1 It compiles.</h5>"));
    assert!(!body.contains(r#"id="Q1""#));
}

#[tokio::test]
async fn unknown_knowledge_point_falls_back_to_the_first_one() {
    let resp = common::app()
        .oneshot(get("/level/level1?knowledge=nope", true))
        .await
        .expect("router should respond");

    let body = common::body_string(resp).await;
    assert!(body.contains(r#"<div class="question-card" id="Q1">"#));
}

#[tokio::test]
async fn level_without_index_shows_placeholders() {
    let resp = common::app()
        .oneshot(get("/level/level2", true))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_string(resp).await;
    assert!(body.contains("<li>该级别暂无知识点</li>"));
    assert!(body.contains(r#"<div class="placeholder">暂无题目</div>"#));
    assert!(body.contains(r#"<button class="level-btn active" type="button" data-level="level2">"#));
}

#[tokio::test]
async fn results_panel_placeholders() {
    let app = common::app();
    let cases = [
        ("/level/level1?knowledge=empty", "当前知识点暂无题目"),
        ("/level/level1?knowledge=broken", "加载题目失败，请稍后重试"),
        ("/level/level1?knowledge=missing", "加载题目失败，请稍后重试"),
    ];

    for (uri, message) in cases {
        let resp = app
            .clone()
            .oneshot(get(uri, true))
            .await
            .expect("router should respond");

        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let body = common::body_string(resp).await;
        let panel = format!(
            r#"<section id="right-panel"><div class="placeholder">{message}</div></section>"#
        );
        assert!(body.contains(&panel), "{uri}");
    }
}

#[tokio::test]
async fn answer_requires_an_htmx_request() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/answer")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("level=level1&knowledge=basics&card=Q1&key=true"))
        .expect("request build should succeed");

    let resp = common::app().oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn correct_answer_locks_the_list_without_error_styling() {
    let resp = common::app()
        .oneshot(post_answer("level=level1&knowledge=basics&card=Q1&key=true"))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()["hx-trigger-after-settle"],
        "{\"quiz:typeset\":{\"targets\":[\"Q1-options\",\"Q1-explanation-text\"]}}"
    );
    let body = common::body_string(resp).await;
    assert!(body.starts_with(r#"<ul class="options locked" id="Q1-options" style="pointer-events: none;">"#));
    assert!(body.contains(r#"<li class="selected" data-option="true">A. 对</li>"#));
    assert!(body.contains(r#"<span class="answer-text">对</span>"#));
    assert!(body.contains("<b>ok</b>"));
    assert!(body.contains(r#"hx-swap-oob="true""#));
    assert!(!body.contains(INCORRECT_STYLE));
    assert!(!body.contains("hx-post"));
}

#[tokio::test]
async fn wrong_answer_is_marked_and_shows_the_correct_one() {
    let resp = common::app()
        .oneshot(post_answer("level=level1&knowledge=basics&card=Q1&key=false"))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_string(resp).await;
    assert!(body.contains(&format!(
        r#"<li class="selected" data-option="false" style="{INCORRECT_STYLE}">B. 错</li>"#
    )));
    assert!(body.contains(r#"<span class="answer-text">对</span>"#));
}

#[tokio::test]
async fn sub_question_answer_only_touches_its_own_region() {
    let resp = common::app()
        .oneshot(post_answer("level=level1&knowledge=reading&card=R1&sub=0&key=true"))
        .await
        .expect("router should respond");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()["hx-trigger-after-settle"],
        "{\"quiz:typeset\":{\"targets\":[\"R1-options-0\",\"R1-sub-explanation-0-text\"]}}"
    );
    let body = common::body_string(resp).await;
    assert!(body.contains(r#"id="R1-options-0""#));
    assert!(body.contains(r#"<div class="sub-explanation sub-0" id="R1-sub-explanation-0" hx-swap-oob="true">"#));
    assert!(body.contains("sub zero"));
    assert!(!body.contains("sub-1"));
    assert!(!body.contains("sub one"));
    assert!(!body.contains("出处："));
}

#[tokio::test]
async fn answers_that_cannot_be_graded_are_rejected() {
    let app = common::app();
    let cases = [
        ("level=level1&knowledge=basics&card=Q9&key=A", StatusCode::NOT_FOUND),
        ("level=level1&knowledge=basics&card=Q2&key=Z", StatusCode::BAD_REQUEST),
        ("level=level1&knowledge=basics&card=Q2&sub=0&key=A", StatusCode::BAD_REQUEST),
        ("level=level1&knowledge=broken&card=Q1&key=A", StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (form, status) in cases {
        let resp = app
            .clone()
            .oneshot(post_answer(form))
            .await
            .expect("router should respond");

        assert_eq!(resp.status(), status, "{form}");
    }
}

#[tokio::test]
async fn static_assets_are_served_with_their_content_type() {
    let app = common::app();

    let resp = app
        .clone()
        .oneshot(get("/static/quiz.js", false))
        .await
        .expect("router should respond");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[CONTENT_TYPE], "text/javascript");

    let resp = app
        .oneshot(get("/static/missing.css", false))
        .await
        .expect("router should respond");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
