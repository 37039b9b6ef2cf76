//! Document root and header

use crate::{
    ModelError, OptionOwner, Question, QuestionPath, Result, Section, SubQuestion,
    SubQuestionPath,
};
use serde::{Deserialize, Serialize};

/// Default school line when the source paper does not provide one
pub const DEFAULT_SCHOOL: &str = "SCHOOL NAME";
/// Default exam title
pub const DEFAULT_EXAM_NAME: &str = "EXAMINATION";
/// Default duration
pub const DEFAULT_TIME: &str = "3 Hours";
/// Default maximum marks
pub const DEFAULT_MARKS: &str = "80";
/// Instructions inserted by "add general instructions"
pub const DEFAULT_INSTRUCTIONS: &str = "1. Read all questions carefully.\n2. Write your answers in the provided space.\n3. All questions are compulsory.";

/// Paper header. All fields are display strings; nothing here is parsed as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub school: String,
    #[serde(rename = "examName")]
    pub exam_name: String,
    pub time: String,
    pub marks: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl Header {
    /// Whether a general-instructions block should be shown
    pub fn has_instructions(&self) -> bool {
        self.instructions.as_deref().is_some_and(|s| !s.is_empty())
    }
}

impl Default for Header {
    fn default() -> Self {
        Self {
            school: DEFAULT_SCHOOL.to_string(),
            exam_name: DEFAULT_EXAM_NAME.to_string(),
            time: DEFAULT_TIME.to_string(),
            marks: DEFAULT_MARKS.to_string(),
            instructions: Some(String::new()),
        }
    }
}

/// Header fields addressable by the field-update operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderField {
    School,
    ExamName,
    Time,
    Marks,
    Instructions,
}

/// An exam paper: header plus ordered sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub header: Header,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a document with the given header and no sections
    pub fn new(header: Header) -> Self {
        Self {
            header,
            sections: Vec::new(),
        }
    }

    /// Get a section by index
    pub fn section(&self, index: usize) -> Result<&Section> {
        self.sections.get(index).ok_or(ModelError::SectionOutOfRange {
            index,
            len: self.sections.len(),
        })
    }

    /// Get a mutable section by index
    pub fn section_mut(&mut self, index: usize) -> Result<&mut Section> {
        let len = self.sections.len();
        self.sections
            .get_mut(index)
            .ok_or(ModelError::SectionOutOfRange { index, len })
    }

    /// Get a question by path
    pub fn question(&self, path: QuestionPath) -> Result<&Question> {
        self.section(path.section)?.question(path.question)
    }

    /// Get a mutable question by path
    pub fn question_mut(&mut self, path: QuestionPath) -> Result<&mut Question> {
        self.section_mut(path.section)?.question_mut(path.question)
    }

    /// Get a sub-question by path
    pub fn sub_question(&self, path: SubQuestionPath) -> Result<&SubQuestion> {
        let question = self.question(path.question)?;
        question
            .sub_questions
            .get(path.sub_question)
            .ok_or(ModelError::SubQuestionOutOfRange {
                index: path.sub_question,
                len: question.sub_questions.len(),
            })
    }

    /// Get a mutable sub-question by path
    pub fn sub_question_mut(&mut self, path: SubQuestionPath) -> Result<&mut SubQuestion> {
        let question = self.question_mut(path.question)?;
        let len = question.sub_questions.len();
        question
            .sub_questions
            .get_mut(path.sub_question)
            .ok_or(ModelError::SubQuestionOutOfRange {
                index: path.sub_question,
                len,
            })
    }

    /// Options owned by a question or sub-question; an absent list reads as empty
    pub fn options(&self, owner: OptionOwner) -> Result<&[String]> {
        match owner {
            OptionOwner::Question(path) => Ok(&self.question(path)?.options),
            OptionOwner::SubQuestion(path) => Ok(self.sub_question(path)?.options()),
        }
    }

    /// Total number of questions across all sections
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }

    /// Iterate over every question with its path
    pub fn questions(&self) -> impl Iterator<Item = (QuestionPath, &Question)> + '_ {
        self.sections.iter().enumerate().flat_map(|(s, section)| {
            section
                .questions
                .iter()
                .enumerate()
                .map(move |(q, question)| (QuestionPath::new(s, q), question))
        })
    }
}
