//! Per-kind body rendering.

use super::{CardBody, CodeBlock, ExplanationRegion, IoPanels, SubCard};
use crate::{
    decode::{decode, extract_code_block},
    grading::{
        normalize, Grading, OptionItem, OptionLabel, OptionsList, Scope, FALSE_OPTION, TRUE_OPTION,
    },
    models::{QuestionKind, QuestionRecord, SubKind, SubQuestion},
};

pub(super) struct Rendered {
    pub body: CardBody,
    /// Answer text for the card-level explanation region.
    pub answer_text: String,
}

pub(super) fn render(record: &QuestionRecord) -> Rendered {
    match &record.kind {
        QuestionKind::Single { options, correct } => {
            let list = single_choice(Scope::Card, options, correct);
            Rendered {
                answer_text: list.grading.answer_text().to_string(),
                body: CardBody::Options(list),
            }
        }
        QuestionKind::TrueFalse { correct } => {
            let list = true_false(Scope::Card, correct);
            Rendered {
                answer_text: list.grading.answer_text().to_string(),
                body: CardBody::Options(list),
            }
        }
        QuestionKind::Reading {
            code,
            sub_questions,
        } => Rendered {
            body: CardBody::Reading {
                code: code.as_deref().map(CodeBlock::cpp),
                subs: sub_questions
                    .iter()
                    .enumerate()
                    .map(|(index, sub)| sub_card(&record.id, index, sub))
                    .collect(),
            },
            answer_text: String::new(),
        },
        QuestionKind::Programming {
            input,
            output,
            sample_input,
            sample_output,
            options,
            correct,
        } => Rendered {
            body: CardBody::Programming {
                panels: IoPanels {
                    input: input.clone(),
                    output: output.clone(),
                    sample_input: CodeBlock::plaintext(decode(sample_input)),
                    sample_output: CodeBlock::plaintext(decode(sample_output)),
                },
                options: options
                    .as_deref()
                    .map(|options| single_choice(Scope::Card, options, correct)),
            },
            answer_text: correct.clone(),
        },
        QuestionKind::Unknown => {
            tracing::warn!("question {} has an unknown type, rendering it without a body", record.id);
            Rendered {
                body: CardBody::Empty,
                answer_text: String::new(),
            }
        }
    }
}

fn sub_card(card_id: &str, index: usize, sub: &SubQuestion) -> SubCard {
    let scope = Scope::Sub(index);
    let options = match sub.kind {
        SubKind::TrueFalse => true_false(scope, &sub.correct),
        SubKind::Single => single_choice(scope, &sub.options, &sub.correct),
    };
    let explanation =
        ExplanationRegion::new(scope, options.grading.answer_text(), &sub.explanation, None);

    SubCard {
        number: format!("{card_id}.{}", index + 1),
        question: sub.question.clone(),
        options,
        explanation,
    }
}

fn single_choice(scope: Scope, options: &[String], correct: &str) -> OptionsList {
    let items = options.iter().map(|option| option_item(option)).collect();
    OptionsList::new(
        scope,
        Grading::Single {
            correct: correct.to_string(),
        },
        items,
    )
}

fn true_false(scope: Scope, correct: &str) -> OptionsList {
    let correct = normalize(correct);
    let items = [(TRUE_OPTION, "true"), (FALSE_OPTION, "false")]
        .into_iter()
        .map(|(text, key)| OptionItem {
            key: key.to_string(),
            label: OptionLabel::Text(text.to_string()),
        })
        .collect();
    OptionsList::new(scope, Grading::TrueFalse { correct }, items)
}

/// Key is the first non-space character. An embedded code block splits the
/// option into a text prefix and a nested block; otherwise the option is
/// trusted markup.
fn option_item(option: &str) -> OptionItem {
    let key = option
        .trim_start()
        .chars()
        .next()
        .map(String::from)
        .unwrap_or_default();

    let split = extract_code_block(option);
    let label = match split.code {
        Some(code) => OptionLabel::WithCode {
            prefix: split.before.to_string(),
            code,
        },
        None => OptionLabel::Markup(option.to_string()),
    };

    OptionItem { key, label }
}
