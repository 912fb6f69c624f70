//! Building a renderable card from one question record and applying answers
//! to it.
//!
//! [`build`] is a pure transformation: it decodes the question text, pulls
//! out the embedded code block and hands the body to the variant renderer.
//! Rendering to markup lives in `views::card`.

mod variant;

use thiserror::Error;

use crate::{
    decode::{decode, extract_code_block},
    grading::{OptionsList, Scope, SelectError},
    models::QuestionRecord,
    typeset::TypesetRequest,
};

/// Highlighting class of a code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Cpp,
    Plaintext,
}

impl Language {
    pub fn class(self) -> &'static str {
        match self {
            Language::Cpp => "language-cpp",
            Language::Plaintext => "language-plaintext",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: Language,
    /// Decoded text, escaped again on output.
    pub text: String,
}

impl CodeBlock {
    pub fn cpp(text: impl Into<String>) -> Self {
        Self {
            language: Language::Cpp,
            text: text.into(),
        }
    }

    pub fn plaintext(text: impl Into<String>) -> Self {
        Self {
            language: Language::Plaintext,
            text: text.into(),
        }
    }
}

/// The answer/explanation panel of a question or sub-question. Hidden until
/// its options list is answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationRegion {
    pub scope: Scope,
    pub answer_text: String,
    /// Decoded explanation, inserted as markup once revealed.
    pub explanation: String,
    /// Citation line; only the card-level region carries one.
    pub source: Option<String>,
    revealed: bool,
}

impl ExplanationRegion {
    pub(crate) fn new(
        scope: Scope,
        answer_text: &str,
        explanation: &str,
        source: Option<&str>,
    ) -> Self {
        Self {
            scope,
            answer_text: answer_text.to_string(),
            explanation: decode(explanation),
            source: source.map(str::to_string),
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    fn reveal(&mut self) {
        self.revealed = true;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCard {
    /// `"<id>.<n>"`, one-based.
    pub number: String,
    /// Sub-question text, inserted as markup.
    pub question: String,
    pub options: OptionsList,
    pub explanation: ExplanationRegion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoPanels {
    pub input: String,
    pub output: String,
    pub sample_input: CodeBlock,
    pub sample_output: CodeBlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardBody {
    Options(OptionsList),
    Reading {
        code: Option<CodeBlock>,
        subs: Vec<SubCard>,
    },
    Programming {
        panels: IoPanels,
        options: Option<OptionsList>,
    },
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    /// `"<id>. <decoded leading text>"`, shown as text.
    pub header: String,
    /// Decoded markup following the extracted code block, if any.
    pub trailing: Option<String>,
    pub image: Option<String>,
    pub code: Option<CodeBlock>,
    pub body: CardBody,
    pub explanation: ExplanationRegion,
}

/// What an accepted answer changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answered {
    pub scope: Scope,
    pub correct: bool,
    pub typeset: TypesetRequest,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnswerError {
    #[error("card {card} has no options list for {scope:?}")]
    NoSuchList { card: String, scope: Scope },
    #[error(transparent)]
    Select(#[from] SelectError),
}

/// Turn one question record into a card.
pub fn build(record: &QuestionRecord) -> Card {
    let split = extract_code_block(&record.question);
    let header = format!("{}. {}", record.id, decode(split.before.trim()));
    let trailing = split
        .code
        .as_ref()
        .map(|_| split.after.trim())
        .filter(|after| !after.is_empty())
        .map(decode);

    let rendered = variant::render(record);

    Card {
        id: record.id.clone(),
        header,
        trailing,
        image: record.image.clone(),
        code: split.code.map(CodeBlock::cpp),
        body: rendered.body,
        explanation: ExplanationRegion::new(
            Scope::Card,
            &rendered.answer_text,
            &record.explanation,
            Some(&record.source),
        ),
    }
}

impl Card {
    /// Select `key` in the list addressed by `scope` and reveal that list's
    /// explanation region. Sibling lists and regions are left untouched.
    pub fn answer(&mut self, scope: Scope, key: &str) -> Result<Answered, AnswerError> {
        let typeset = TypesetRequest::nodes([
            scope.options_id(&self.id),
            scope.explanation_text_id(&self.id),
        ]);
        let card = self.id.clone();
        let (list, region) = self
            .target_mut(scope)
            .ok_or(AnswerError::NoSuchList { card, scope })?;

        let selection = list.select(key)?;
        region.reveal();

        Ok(Answered {
            scope,
            correct: selection.correct,
            typeset,
        })
    }

    /// The options list and explanation region a scope resolves to.
    pub fn target(&self, scope: Scope) -> Option<(&OptionsList, &ExplanationRegion)> {
        match (scope, &self.body) {
            (Scope::Card, CardBody::Options(list))
            | (Scope::Card, CardBody::Programming { options: Some(list), .. }) => {
                Some((list, &self.explanation))
            }
            (Scope::Sub(i), CardBody::Reading { subs, .. }) => {
                subs.get(i).map(|sub| (&sub.options, &sub.explanation))
            }
            _ => None,
        }
    }

    fn target_mut(&mut self, scope: Scope) -> Option<(&mut OptionsList, &mut ExplanationRegion)> {
        match (scope, &mut self.body) {
            (Scope::Card, CardBody::Options(list))
            | (Scope::Card, CardBody::Programming { options: Some(list), .. }) => {
                Some((list, &mut self.explanation))
            }
            (Scope::Sub(i), CardBody::Reading { subs, .. }) => subs
                .get_mut(i)
                .map(|sub| (&mut sub.options, &mut sub.explanation)),
            _ => None,
        }
    }
}
