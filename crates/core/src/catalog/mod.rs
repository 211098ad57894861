//! Read-only reference data: sign categories, signs and quiz questions.

use std::collections::HashSet;
use std::sync::LazyLock;

use thiserror::Error;

use crate::model::{
    CategoryId, Question, QuestionError, QuestionId, SearchFilters, SignCategory, SignId,
    TrafficSign,
};

mod data;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("sign {sign} references unknown category {category}")]
    UnknownCategory { sign: SignId, category: CategoryId },

    #[error("question {question} references unknown sign {sign}")]
    UnknownSign { question: QuestionId, sign: SignId },

    #[error("duplicate id in catalog: {0}")]
    DuplicateId(String),

    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Fixed catalog the quiz and the browsing views read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<SignCategory>,
    signs: Vec<TrafficSign>,
    questions: Vec<Question>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    data::builtin_catalog().expect("builtin catalog data should be consistent")
});

impl Catalog {
    /// Build a catalog, checking that every reference resolves.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for duplicate ids or dangling category/sign
    /// references.
    pub fn new(
        categories: Vec<SignCategory>,
        signs: Vec<TrafficSign>,
        questions: Vec<Question>,
    ) -> Result<Self, CatalogError> {
        let mut category_ids = HashSet::new();
        for category in &categories {
            if !category_ids.insert(&category.id) {
                return Err(CatalogError::DuplicateId(category.id.to_string()));
            }
        }

        let mut sign_ids = HashSet::new();
        for sign in &signs {
            if !sign_ids.insert(&sign.id) {
                return Err(CatalogError::DuplicateId(sign.id.to_string()));
            }
            if !category_ids.contains(&sign.category_id) {
                return Err(CatalogError::UnknownCategory {
                    sign: sign.id.clone(),
                    category: sign.category_id.clone(),
                });
            }
        }

        let mut question_ids = HashSet::new();
        for question in &questions {
            if !question_ids.insert(question.id()) {
                return Err(CatalogError::DuplicateId(question.id().to_string()));
            }
            if !sign_ids.contains(question.sign_id()) {
                return Err(CatalogError::UnknownSign {
                    question: question.id().clone(),
                    sign: question.sign_id().clone(),
                });
            }
        }

        Ok(Self {
            categories,
            signs,
            questions,
        })
    }

    /// The catalog shipped with the application.
    ///
    /// # Panics
    ///
    /// Panics on first use if the embedded data is inconsistent; covered by tests.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    #[must_use]
    pub fn categories(&self) -> &[SignCategory] {
        &self.categories
    }

    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&SignCategory> {
        self.categories.iter().find(|c| c.id == *id)
    }

    #[must_use]
    pub fn signs(&self) -> &[TrafficSign] {
        &self.signs
    }

    #[must_use]
    pub fn sign(&self, id: &SignId) -> Option<&TrafficSign> {
        self.signs.iter().find(|s| s.id == *id)
    }

    pub fn signs_in_category<'a>(
        &'a self,
        id: &'a CategoryId,
    ) -> impl Iterator<Item = &'a TrafficSign> + 'a {
        self.signs.iter().filter(move |s| s.category_id == *id)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Questions whose sign belongs to the given category.
    #[must_use]
    pub fn questions_in_category(&self, id: &CategoryId) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| self.sign(q.sign_id()).is_some_and(|s| s.category_id == *id))
            .cloned()
            .collect()
    }

    /// Case-insensitive keyword search. A blank query returns every sign.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&TrafficSign> {
        self.filter(&SearchFilters::default().with_query(query))
    }

    #[must_use]
    pub fn filter(&self, filters: &SearchFilters) -> Vec<&TrafficSign> {
        self.signs.iter().filter(|s| filters.matches(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SignColor, SignShape};

    #[test]
    fn builtin_catalog_is_consistent() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.categories().len(), 4);
        assert_eq!(catalog.signs().len(), 20);
        assert_eq!(catalog.questions().len(), 5);

        let rebuilt = Catalog::new(
            catalog.categories().to_vec(),
            catalog.signs().to_vec(),
            catalog.questions().to_vec(),
        );
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn every_category_has_signs() {
        let catalog = Catalog::builtin();
        for category in catalog.categories() {
            assert!(catalog.signs_in_category(&category.id).count() >= 4);
        }
    }

    #[test]
    fn search_is_case_insensitive_over_keywords() {
        let catalog = Catalog::builtin();
        let hits: Vec<_> = catalog.search("PARKING").into_iter().map(|s| s.id.as_str()).collect();
        assert!(hits.contains(&"regulatory-no-parking"));
        assert!(hits.contains(&"info-rest-area"));

        let urdu = catalog.search("مسجد");
        assert_eq!(urdu.len(), 1);
        assert_eq!(urdu[0].id.as_str(), "info-mosque");

        assert_eq!(catalog.search("  ").len(), catalog.signs().len());
        assert!(catalog.search("submarine").is_empty());
    }

    #[test]
    fn filter_combines_criteria() {
        let catalog = Catalog::builtin();
        let filters = SearchFilters::default()
            .with_shape(SignShape::Diamond)
            .with_color(SignColor::Orange);
        let ids: Vec<_> = catalog.filter(&filters).into_iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "construction-road-work",
                "construction-lane-closure",
                "construction-flagman"
            ]
        );

        let regulatory_red = SearchFilters::default()
            .with_category(CategoryId::new("regulatory"))
            .with_color(SignColor::Red);
        assert_eq!(catalog.filter(&regulatory_red).len(), 3);
    }

    #[test]
    fn questions_by_category_follow_sign_category() {
        let catalog = Catalog::builtin();
        let regulatory = catalog.questions_in_category(&CategoryId::new("regulatory"));
        let ids: Vec<_> = regulatory.iter().map(|q| q.id().as_str()).collect();
        assert_eq!(ids, vec!["q1", "q3"]);
        assert!(catalog.questions_in_category(&CategoryId::new("nope")).is_empty());
    }

    #[test]
    fn rejects_dangling_sign_reference() {
        let catalog = Catalog::builtin();
        let err = Catalog::new(
            catalog.categories().to_vec(),
            Vec::new(),
            catalog.questions().to_vec(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSign { .. }));
    }

    #[test]
    fn rejects_sign_in_missing_category() {
        let catalog = Catalog::builtin();
        let categories = catalog
            .categories()
            .iter()
            .filter(|c| c.id.as_str() != "regulatory")
            .cloned()
            .collect();
        let err = Catalog::new(categories, catalog.signs().to_vec(), Vec::new()).unwrap_err();
        match err {
            CatalogError::UnknownCategory { category, .. } => {
                assert_eq!(category.as_str(), "regulatory");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_category() {
        let mut categories = Catalog::builtin().categories().to_vec();
        categories.push(categories[0].clone());
        let err = Catalog::new(categories, Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("warning".into()));
    }
}
