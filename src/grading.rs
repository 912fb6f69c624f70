//! Selection and grading of a single options list.
//!
//! A list starts `Unanswered` and moves to `Locked` on its first accepted
//! selection. There is no way back: a locked list rejects every further
//! selection and renders without any request wiring.

use thiserror::Error;

/// Display text of the two fixed true/false options.
pub const TRUE_OPTION: &str = "A. 对";
pub const FALSE_OPTION: &str = "B. 错";

/// Background and border applied to a wrongly chosen option.
pub const INCORRECT_STYLE: &str = "background-color: #f8d7da; border-color: #f5c6cb;";

/// Which options list inside a card a selection is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The card-level list of a single, true/false or programming question.
    Card,
    /// The list of the sub-question at this zero-based index.
    Sub(usize),
}

impl Scope {
    pub fn options_id(self, card_id: &str) -> String {
        match self {
            Scope::Card => format!("{card_id}-options"),
            Scope::Sub(i) => format!("{card_id}-options-{i}"),
        }
    }

    pub fn explanation_id(self, card_id: &str) -> String {
        match self {
            Scope::Card => format!("{card_id}-explanation"),
            Scope::Sub(i) => format!("{card_id}-sub-explanation-{i}"),
        }
    }

    /// Id of the slot receiving the explanation markup, handed to the math
    /// typesetter after an answer together with the options list.
    pub fn explanation_text_id(self, card_id: &str) -> String {
        format!("{}-text", self.explanation_id(card_id))
    }
}

/// Canonical truth value of a true/false question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truth {
    True,
    False,
}

impl Truth {
    /// Selectable key of the matching fixed option.
    pub fn as_key(self) -> &'static str {
        match self {
            Truth::True => "true",
            Truth::False => "false",
        }
    }

    /// Text shown in the answer slot.
    pub fn display(self) -> &'static str {
        match self {
            Truth::True => "对",
            Truth::False => "错",
        }
    }
}

/// Map an authored true/false marker onto [`Truth`].
///
/// `true`, `对` and `√` mean true; `false`, `错` and `×` mean false. Anything
/// else is logged as a data problem and read as false.
pub fn normalize(value: &str) -> Truth {
    match value.trim() {
        "true" | "对" | "√" => Truth::True,
        "false" | "错" | "×" => Truth::False,
        other => {
            tracing::warn!("unrecognised true/false answer marker {other:?}, treating it as false");
            Truth::False
        }
    }
}

/// How a list decides whether a chosen key is right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grading {
    /// Correct when the key equals the authored answer verbatim.
    Single { correct: String },
    TrueFalse { correct: Truth },
}

impl Grading {
    pub fn correct_key(&self) -> &str {
        match self {
            Grading::Single { correct } => correct,
            Grading::TrueFalse { correct } => correct.as_key(),
        }
    }

    /// What the answer slot shows once the list is answered, whatever was
    /// picked.
    pub fn answer_text(&self) -> &str {
        match self {
            Grading::Single { correct } => correct,
            Grading::TrueFalse { correct } => correct.display(),
        }
    }

    pub fn is_correct(&self, key: &str) -> bool {
        key == self.correct_key()
    }
}

/// How an option displays itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionLabel {
    /// Author-controlled markup, inserted as is.
    Markup(String),
    /// Plain text, escaped on output.
    Text(String),
    /// A text prefix followed by a decoded code block.
    WithCode { prefix: String, code: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    pub key: String,
    pub label: OptionLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Unanswered,
    Locked { selected: usize, correct: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub correct: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("options list is already answered")]
    Locked,
    #[error("no option with key {0:?}")]
    UnknownKey(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsList {
    pub scope: Scope,
    pub grading: Grading,
    pub items: Vec<OptionItem>,
    state: ListState,
}

impl OptionsList {
    pub fn new(scope: Scope, grading: Grading, items: Vec<OptionItem>) -> Self {
        Self {
            scope,
            grading,
            items,
            state: ListState::Unanswered,
        }
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.state, ListState::Locked { .. })
    }

    pub fn is_selected(&self, index: usize) -> bool {
        matches!(self.state, ListState::Locked { selected, .. } if selected == index)
    }

    /// True only for the chosen option of a wrongly answered list.
    pub fn is_marked_incorrect(&self, index: usize) -> bool {
        matches!(self.state, ListState::Locked { selected, correct: false } if selected == index)
    }

    /// Choose the first option carrying `key` and lock the list.
    pub fn select(&mut self, key: &str) -> Result<Selection, SelectError> {
        if self.is_locked() {
            return Err(SelectError::Locked);
        }
        let index = self
            .items
            .iter()
            .position(|item| item.key == key)
            .ok_or_else(|| SelectError::UnknownKey(key.to_string()))?;

        let correct = self.grading.is_correct(key);
        self.state = ListState::Locked {
            selected: index,
            correct,
        };
        Ok(Selection { index, correct })
    }
}
