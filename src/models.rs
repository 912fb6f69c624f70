use serde::{Deserialize, Deserializer};

pub type Questions = Vec<QuestionRecord>;

/// One quiz item as stored in the data files.
///
/// Everything except `type` may be missing; absent fields simply render as
/// nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub id: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub source: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionKind {
    Single {
        #[serde(default)]
        options: Vec<String>,
        #[serde(default, deserialize_with = "deserialize_loose_string")]
        correct: String,
    },
    TrueFalse {
        #[serde(default, deserialize_with = "deserialize_loose_string")]
        correct: String,
    },
    Reading {
        #[serde(default)]
        code: Option<String>,
        #[serde(default)]
        sub_questions: Vec<SubQuestion>,
    },
    Programming {
        #[serde(default)]
        input: String,
        #[serde(default)]
        output: String,
        #[serde(default)]
        sample_input: String,
        #[serde(default)]
        sample_output: String,
        #[serde(default)]
        options: Option<Vec<String>>,
        #[serde(default, deserialize_with = "deserialize_loose_string")]
        correct: String,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubQuestion {
    #[serde(rename = "type", default)]
    pub kind: SubKind,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_loose_string")]
    pub correct: String,
    #[serde(default)]
    pub explanation: String,
}

/// Sub-questions are single choice unless they say `truefalse`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubKind {
    TrueFalse,
    #[default]
    #[serde(other)]
    Single,
}

/// Accepts a JSON string, number, boolean or null and yields its text form.
/// Authored data writes ids and answers in whatever shape was handy.
fn deserialize_loose_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = String;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("string, number or boolean")
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }
        fn visit_string<E: serde::de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }
        fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }
        fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }
        fn visit_unit<E: serde::de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
        fn visit_none<E: serde::de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }
    d.deserialize_any(Vis)
}
