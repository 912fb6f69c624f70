use maud::{html, Markup, PreEscaped};
use rust_i18n::t;

use crate::{
    card::{Card, CardBody, CodeBlock, ExplanationRegion, IoPanels, Language, SubCard},
    grading::{OptionLabel, OptionsList, Scope, INCORRECT_STYLE},
    names,
};

/// Level and knowledge point a card was loaded from, carried by every
/// answer request so the server can find the record again.
#[derive(Debug, Clone, Copy)]
pub struct QuizContext<'a> {
    pub level: &'a str,
    pub knowledge: &'a str,
}

pub fn card(card: &Card, ctx: &QuizContext) -> Markup {
    html! {
        div.question-card id=(card.id) {
            h4 { (card.header) }
            @if let Some(trailing) = &card.trailing {
                div.question-trailing { (PreEscaped(trailing)) }
            }
            @if let Some(image) = &card.image {
                img.question-image src=(image) alt=(t!("quiz.image_alt"));
            }
            @if let Some(code) = &card.code {
                (code_block(code))
            }
            (body(card, ctx))
            (explanation(&card.id, &card.explanation, false))
        }
    }
}

/// Response to an accepted answer: the locked list replaces the clicked one
/// and the revealed region is swapped in out of band.
pub fn answered(
    card_id: &str,
    list: &OptionsList,
    region: &ExplanationRegion,
    ctx: &QuizContext,
) -> Markup {
    html! {
        (options_list(card_id, list, ctx))
        (explanation(card_id, region, true))
    }
}

fn body(card: &Card, ctx: &QuizContext) -> Markup {
    match &card.body {
        CardBody::Options(list) => options_list(&card.id, list, ctx),
        CardBody::Reading { code, subs } => html! {
            @if let Some(code) = code {
                (code_block(code))
            }
            @for sub in subs {
                (sub_question(&card.id, sub, ctx))
            }
        },
        CardBody::Programming { panels, options } => html! {
            (io_panels(panels))
            @if let Some(list) = options {
                (options_list(&card.id, list, ctx))
            }
        },
        CardBody::Empty => html! {},
    }
}

fn sub_question(card_id: &str, sub: &SubCard, ctx: &QuizContext) -> Markup {
    html! {
        div.sub-question {
            h5 { (sub.number) " " (PreEscaped(&sub.question)) }
            (options_list(card_id, &sub.options, ctx))
            (explanation(card_id, &sub.explanation, false))
        }
    }
}

fn io_panels(panels: &IoPanels) -> Markup {
    html! {
        div.input-output {
            p { strong { (t!("quiz.input_format")) } (PreEscaped(&panels.input)) }
        }
        div.input-output {
            p { strong { (t!("quiz.output_format")) } (PreEscaped(&panels.output)) }
        }
        div.input-output {
            p { strong { (t!("quiz.sample_input")) } }
            (code_block(&panels.sample_input))
        }
        div.input-output {
            p { strong { (t!("quiz.sample_output")) } }
            (code_block(&panels.sample_output))
        }
    }
}

fn code_block(code: &CodeBlock) -> Markup {
    html! {
        pre { code class=(code.language.class()) { (code.text) } }
    }
}

/// An unanswered list posts the clicked key and drops further clicks while
/// that post is in flight; a locked one carries no request wiring at all and
/// ignores pointer events.
fn options_list(card_id: &str, list: &OptionsList, ctx: &QuizContext) -> Markup {
    let locked = list.is_locked();
    let vals = (!locked).then(|| list_vals(card_id, list.scope, ctx));

    html! {
        ul.options.locked[locked]
            id=(list.scope.options_id(card_id))
            style=[locked.then_some("pointer-events: none;")]
            hx-target=[(!locked).then_some("this")]
            hx-swap=[(!locked).then_some("outerHTML")]
            hx-sync=[(!locked).then_some("this:drop")]
            hx-vals=[vals] {
            @for (index, item) in list.items.iter().enumerate() {
                li class=[list.is_selected(index).then_some("selected")]
                    data-option=(item.key)
                    style=[list.is_marked_incorrect(index).then_some(INCORRECT_STYLE)]
                    hx-post=[(!locked).then_some(names::ANSWER_URL)]
                    hx-vals=[(!locked).then(|| serde_json::json!({ "key": item.key }).to_string())] {
                    (option_label(&item.label))
                }
            }
        }
    }
}

fn list_vals(card_id: &str, scope: Scope, ctx: &QuizContext) -> String {
    let mut vals = serde_json::json!({
        "level": ctx.level,
        "knowledge": ctx.knowledge,
        "card": card_id,
    });
    if let Scope::Sub(index) = scope {
        vals["sub"] = index.into();
    }
    vals.to_string()
}

fn option_label(label: &OptionLabel) -> Markup {
    match label {
        OptionLabel::Markup(markup) => html! { (PreEscaped(markup)) },
        OptionLabel::Text(text) => html! { (text) },
        OptionLabel::WithCode { prefix, code } => html! {
            (prefix)
            pre { code class=(Language::Cpp.class()) { (code) } }
        },
    }
}

fn explanation(card_id: &str, region: &ExplanationRegion, oob: bool) -> Markup {
    let class = match region.scope {
        Scope::Card => "explanation".to_string(),
        Scope::Sub(index) => format!("sub-explanation sub-{index}"),
    };
    let revealed = region.is_revealed();

    html! {
        div class=(class)
            id=(region.scope.explanation_id(card_id))
            style=[(!revealed).then_some("display: none;")]
            hx-swap-oob=[oob.then_some("true")] {
            p {
                strong { (t!("quiz.correct_answer")) }
                span.answer-text {
                    @if revealed { (region.answer_text) }
                }
            }
            p {
                strong { (t!("quiz.explanation")) }
                span.explanation-text id=(region.scope.explanation_text_id(card_id)) {
                    @if revealed { (PreEscaped(&region.explanation)) }
                }
            }
            @if let Some(source) = &region.source {
                p.source { strong { (t!("quiz.source")) } " " (source) }
            }
        }
    }
}
