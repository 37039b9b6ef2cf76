//! Conversion payload normalization
//!
//! The conversion service returns a loosely shaped JSON paper: any field
//! may be missing or null, and scalar fields sometimes arrive as numbers.
//! `RawPaper` accepts all of that and `into_document` fills the gaps.
//! Numbering is taken as given; nothing is repaired or deduplicated.

use exam_model::{Document, ElementOrder, Header, ImageRef, Question, Section, SubQuestion};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Marks of a sub-question the service left unscored
pub const DEFAULT_SUB_QUESTION_MARKS: &str = "1";

/// Accept a string, a number or a bool as text; null as absent
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected text, found {other}"
        ))),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawHeader {
    #[serde(deserialize_with = "lenient_text")]
    pub school: Option<String>,
    #[serde(rename = "examName", deserialize_with = "lenient_text")]
    pub exam_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub time: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub marks: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub instructions: Option<String>,
}

impl RawHeader {
    /// Overlay the provided fields on `defaults`
    pub fn merge_onto(self, defaults: &Header) -> Header {
        Header {
            school: self.school.unwrap_or_else(|| defaults.school.clone()),
            exam_name: self.exam_name.unwrap_or_else(|| defaults.exam_name.clone()),
            time: self.time.unwrap_or_else(|| defaults.time.clone()),
            marks: self.marks.unwrap_or_else(|| defaults.marks.clone()),
            instructions: self.instructions.or_else(|| defaults.instructions.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSubQuestion {
    #[serde(deserialize_with = "lenient_text")]
    pub number: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub marks: Option<String>,
    pub options: Option<Vec<String>>,
}

impl From<RawSubQuestion> for SubQuestion {
    fn from(raw: RawSubQuestion) -> Self {
        SubQuestion {
            number: raw.number.unwrap_or_default(),
            text: raw.text.unwrap_or_default(),
            marks: raw
                .marks
                .unwrap_or_else(|| DEFAULT_SUB_QUESTION_MARKS.to_string()),
            options: raw.options,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawQuestion {
    #[serde(deserialize_with = "lenient_text")]
    pub number: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub marks: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub context: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub image: Option<String>,
    pub options: Option<Vec<String>>,
    pub sub_questions: Option<Vec<RawSubQuestion>>,
    /// Kept raw so one bad order does not reject the whole paper
    pub order: Option<Value>,
}

impl RawQuestion {
    fn order(&self) -> Option<ElementOrder> {
        let value = self.order.as_ref().filter(|v| !v.is_null())?;
        match serde_json::from_value(value.clone()) {
            Ok(order) => Some(order),
            Err(e) => {
                tracing::warn!(
                    "Ignoring invalid element order on question {:?}: {}",
                    self.number,
                    e
                );
                None
            }
        }
    }
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        let order = raw.order();
        Question {
            number: raw.number.unwrap_or_default(),
            text: raw.text.unwrap_or_default(),
            marks: raw.marks.unwrap_or_default(),
            context: raw.context.filter(|s| !s.is_empty()),
            image: raw.image.filter(|s| !s.is_empty()).map(ImageRef::new),
            options: raw.options.unwrap_or_default(),
            sub_questions: raw
                .sub_questions
                .unwrap_or_default()
                .into_iter()
                .map(SubQuestion::from)
                .collect(),
            order,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSection {
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    pub questions: Option<Vec<RawQuestion>>,
}

impl From<RawSection> for Section {
    fn from(raw: RawSection) -> Self {
        Section {
            title: raw.title.unwrap_or_default(),
            questions: raw
                .questions
                .unwrap_or_default()
                .into_iter()
                .map(Question::from)
                .collect(),
        }
    }
}

/// A paper as returned by the conversion service
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPaper {
    pub header: Option<RawHeader>,
    pub sections: Option<Vec<RawSection>>,
}

impl RawPaper {
    /// Parse a service response body
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Normalize using the built-in header defaults
    pub fn into_document(self) -> Document {
        self.into_document_with(&Header::default())
    }

    /// Normalize, filling missing header fields from `defaults`
    pub fn into_document_with(self, defaults: &Header) -> Document {
        let header = self.header.unwrap_or_default().merge_onto(defaults);
        let sections = self
            .sections
            .unwrap_or_default()
            .into_iter()
            .map(Section::from)
            .collect();
        Document { header, sections }
    }
}
