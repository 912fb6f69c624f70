use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::names;

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/highlight.js@11/styles/github.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
        script src="https://cdn.jsdelivr.net/npm/highlight.js@11/lib/highlight.min.js" {}
        script src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js" async {}
        script src="/static/quiz.js" {}
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                a href=(names::HOME_URL) {
                    strong { (t!("app.title")) }
                }
                small { " " (names::VERSION) }
            }
        }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="zh-CN" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";

                (css())
                (js())

                title { (format!("{title} - {}", t!("app.title"))) }
            }

            body {
                (header())
                main { (body) }
            }
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - " (t!("app.title")) }
        (body)
    }
}
