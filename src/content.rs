use crate::error::{Result, SurveyError};
use crate::types::scoring::DominantResult;
use crate::types::survey::{Category, Question, QuestionCatalog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const BUILTIN_CONTENT: &str = include_str!("../content/survey.toml");

const MISSING_DESCRIPTION: &str = "אין תיאור זמין";

/// Canned text shown for a dominant category or tie set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleMessage {
    pub id: String,
    pub title: String,
    pub message: String,
    pub style: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ContentFile {
    questions: Vec<Question>,
    #[serde(default)]
    descriptions: BTreeMap<String, String>,
    #[serde(default)]
    messages: Vec<StyleMessage>,
}

#[derive(Debug, Clone)]
pub struct SurveyContent {
    pub catalog: QuestionCatalog,
    pub descriptions: BTreeMap<Category, String>,
    pub messages: Vec<StyleMessage>,
}

impl SurveyContent {
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_CONTENT, "built-in content")
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SurveyError::PathNotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw, &path.display().to_string())
    }

    fn parse(raw: &str, origin: &str) -> Result<Self> {
        let file: ContentFile = toml::from_str(raw)
            .map_err(|e| SurveyError::ContentParse(format!("{origin}: {e}")))?;
        if let Some(blank) = file.questions.iter().find(|q| q.text.trim().is_empty()) {
            return Err(SurveyError::ContentParse(format!(
                "{origin}: question {} has empty text",
                blank.id
            )));
        }
        let catalog = QuestionCatalog::new(file.questions)?;
        if catalog.is_empty() {
            return Err(SurveyError::ContentParse(format!(
                "{origin}: at least one question is required"
            )));
        }
        let descriptions = file
            .descriptions
            .into_iter()
            .map(|(key, text)| key.parse::<Category>().map(|category| (category, text)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self {
            catalog,
            descriptions,
            messages: file.messages,
        })
    }

    pub fn description(&self, category: Category) -> &str {
        self.descriptions
            .get(&category)
            .map(String::as_str)
            .unwrap_or(MISSING_DESCRIPTION)
    }

    /// One description per category, placeholders filling any gaps.
    pub fn category_descriptions(&self) -> BTreeMap<Category, String> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.description(category).to_string()))
            .collect()
    }

    /// Message for the respondent's dominant set, looked up by its key
    /// ("A", "AC", "ABC", ...). Falls back to a generic mixed-style message.
    pub fn message_for(&self, result: &DominantResult) -> StyleMessage {
        let key = result.key();
        self.messages
            .iter()
            .find(|message| message.id == key)
            .cloned()
            .unwrap_or_else(|| {
                let joined = result
                    .dominant
                    .iter()
                    .map(|category| category.as_str())
                    .collect::<Vec<_>>()
                    .join(" + ");
                StyleMessage {
                    id: key,
                    title: format!("סגנון התקשרות דומיננטי: {joined}"),
                    message: "לא נמצאה הגדרה ספציפית לסגנון ההתקשרות שלך.".to_string(),
                    style: "מעורב".to_string(),
                }
            })
    }
}
