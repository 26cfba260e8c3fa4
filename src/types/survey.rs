use crate::error::{Result, SurveyError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    A,
    B,
    C,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::A, Category::B, Category::C];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            _ => Err(SurveyError::InvalidCategory(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerValue {
    Yes,
    No,
}

impl AnswerValue {
    pub fn negate(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }

    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => f.write_str("yes"),
            Self::No => f.write_str("no"),
        }
    }
}

impl FromStr for AnswerValue {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            _ => Err(SurveyError::InvalidAnswerValue(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub category: Category,
    #[serde(default)]
    pub reverse_scored: bool,
}

/// One yes/no response. `category` is the question's category copied at
/// answer time; scoring resolves the category from the catalog instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "questionId")]
    pub question_id: u32,
    pub category: Category,
    #[serde(rename = "answer")]
    pub value: AnswerValue,
}

impl Answer {
    pub fn new(question_id: u32, category: Category, value: AnswerValue) -> Self {
        Self {
            question_id,
            category,
            value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Respondent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(default, rename = "userInfo")]
    pub respondent: Respondent,
    pub answers: Vec<Answer>,
}

/// A validated submission that has not yet been assigned an id by a store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    pub respondent: Respondent,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Default)]
pub struct QuestionCatalog {
    questions: BTreeMap<u32, Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for question in questions {
            let id = question.id;
            if map.insert(id, question).is_some() {
                return Err(SurveyError::DuplicateQuestion(id));
            }
        }
        Ok(Self { questions: map })
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.get(&id)
    }

    /// Questions in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.questions.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.iter()
            .filter(|question| question.category == category)
            .count()
    }
}
