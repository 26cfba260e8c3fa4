use crate::types::survey::{AnswerValue, Category};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Share of `part` in `total` as a percentage rounded to one decimal.
pub fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 1000.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTally {
    pub yes: u64,
    pub no: u64,
    pub total: u64,
}

impl CategoryTally {
    pub fn record(&mut self, value: AnswerValue) {
        match value {
            AnswerValue::Yes => self.yes += 1,
            AnswerValue::No => self.no += 1,
        }
        self.total += 1;
    }

    pub fn yes_percentage(&self) -> f64 {
        percentage(self.yes, self.total)
    }

    pub fn no_percentage(&self) -> f64 {
        percentage(self.no, self.total)
    }
}

/// Per-category tallies. Always holds an entry for every category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTallies {
    tallies: [CategoryTally; 3],
}

impl CategoryTallies {
    pub fn get(&self, category: Category) -> &CategoryTally {
        &self.tallies[index(category)]
    }

    pub fn get_mut(&mut self, category: Category) -> &mut CategoryTally {
        &mut self.tallies[index(category)]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryTally)> {
        Category::ALL.into_iter().zip(self.tallies.iter())
    }
}

impl Serialize for CategoryTallies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        for (category, tally) in self.iter() {
            map.serialize_entry(category.as_str(), tally)?;
        }
        map.end()
    }
}

/// Affirmative (effective "yes") counts for one respondent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    #[serde(rename = "A")]
    pub a: u32,
    #[serde(rename = "B")]
    pub b: u32,
    #[serde(rename = "C")]
    pub c: u32,
}

impl CategoryScores {
    #[cfg(test)]
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::A => self.a,
            Category::B => self.b,
            Category::C => self.c,
        }
    }

    pub fn increment(&mut self, category: Category) {
        match category {
            Category::A => self.a += 1,
            Category::B => self.b += 1,
            Category::C => self.c += 1,
        }
    }

    pub fn max(&self) -> u32 {
        self.a.max(self.b).max(self.c)
    }

    pub fn total(&self) -> u32 {
        self.a + self.b + self.c
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DominantResult {
    pub scores: CategoryScores,
    pub dominant: BTreeSet<Category>,
    #[serde(rename = "maxScore")]
    pub max_score: u32,
}

impl DominantResult {
    pub fn from_scores(scores: CategoryScores) -> Self {
        let max_score = scores.max();
        let dominant = Category::ALL
            .into_iter()
            .filter(|category| scores.get(*category) == max_score)
            .collect();
        Self {
            scores,
            dominant,
            max_score,
        }
    }

    pub fn is_tie(&self) -> bool {
        self.dominant.len() > 1
    }

    /// Sorted category letters, e.g. "A", "AC" or "ABC".
    pub fn key(&self) -> String {
        self.dominant.iter().map(|category| category.as_str()).collect()
    }
}

fn index(category: Category) -> usize {
    match category {
        Category::A => 0,
        Category::B => 1,
        Category::C => 2,
    }
}
