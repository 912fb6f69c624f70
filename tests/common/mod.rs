#![allow(dead_code)]

use std::path::PathBuf;

use axum::{body::Body, http::Response, Router};
use quizcards::{router, source::DataSource, AppState};

const BASICS: &str = r#"[
    {
        "id": "Q1",
        "type": "truefalse",
        "question": "1 + 1 = 2",
        "correct": "对",
        "explanation": "<b>ok</b>",
        "source": "p1"
    },
    {
        "id": "Q2",
        "type": "single",
        "question": "Which declaration compiles?",
        "options": ["A. <pre><code>int x=1;</code></pre>", "B. int = x;"],
        "correct": "A",
        "explanation": "only A names a variable",
        "source": "p2"
    }
]"#;

const READING: &str = r#"[
    {
        "id": "R1",
        "type": "reading",
        "question": "Read the program",
        "code": "int main() { return 0; }",
        "source": "2024 exam",
        "sub_questions": [
            {"type": "truefalse", "question": "It compiles.", "correct": "√", "explanation": "sub zero"},
            {"type": "single", "question": "It returns", "options": ["A. 0", "B. 1"], "correct": "A",
             "explanation": "sub one"}
        ]
    }
]"#;

/// Write a fresh data directory: `level1` indexes five knowledge points, one
/// of which (`missing`) has no question file; `level2` has no index at all.
pub fn create_test_data() -> PathBuf {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let root =
        std::env::temp_dir().join(format!("quizcards_test_{}_{}", std::process::id(), id));
    // Clean up leftovers from previous runs
    let _ = std::fs::remove_dir_all(&root);

    let level1 = root.join("level1");
    std::fs::create_dir_all(&level1).expect("create level dir");
    std::fs::create_dir_all(root.join("level2")).expect("create level dir");

    let files = [
        ("index.json", r#"["basics", "reading", "empty", "broken", "missing"]"#),
        ("basics.json", BASICS),
        ("reading.json", READING),
        ("empty.json", "[]"),
        ("broken.json", "[{"),
    ];
    for (name, contents) in files {
        std::fs::write(level1.join(name), contents).expect("write fixture");
    }

    root
}

pub fn app_with_source(source: DataSource) -> Router {
    router(AppState {
        source,
        levels: vec!["level1".to_string(), "level2".to_string()].into(),
    })
}

pub fn app() -> Router {
    app_with_source(DataSource::from_dir(create_test_data()))
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}
