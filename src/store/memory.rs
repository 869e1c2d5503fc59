//! In-process backend: two ordered maps behind a lock.

use super::TriviaStore;
use crate::error::AppError;
use crate::migration::SEED_CATEGORIES;
use crate::model::{Category, NewQuestion, Question};
use async_trait::async_trait;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    next_category_id: i64,
    next_question_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the default categories and no questions.
    pub fn seeded() -> Self {
        let store = Self::new();
        for kind in SEED_CATEGORIES {
            store.add_category(kind);
        }
        store
    }

    /// Categories are read-only over HTTP; this is how local runs and tests get them.
    pub fn add_category(&self, kind: &str) -> Category {
        let mut tables = self.write();
        tables.next_category_id += 1;
        let category = Category {
            id: tables.next_category_id,
            kind: kind.to_string(),
        };
        tables.categories.insert(category.id, category.clone());
        category
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        // a panic while holding the guard cannot leave the maps half-updated
        self.tables.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(|e| e.into_inner())
    }

    fn filtered<F>(&self, keep: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        self.read()
            .questions
            .values()
            .filter(|q| keep(q))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.read().categories.values().cloned().collect())
    }

    async fn category(&self, id: i64) -> Result<Option<Category>, AppError> {
        Ok(self.read().categories.get(&id).cloned())
    }

    async fn questions(&self) -> Result<Vec<Question>, AppError> {
        Ok(self.filtered(|_| true))
    }

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, AppError> {
        Ok(self.filtered(|q| q.category == category))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, AppError> {
        let needle = term.to_lowercase();
        Ok(self.filtered(|q| q.question.to_lowercase().contains(&needle)))
    }

    async fn question(&self, id: i64) -> Result<Option<Question>, AppError> {
        Ok(self.read().questions.get(&id).cloned())
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, AppError> {
        let mut tables = self.write();
        tables.next_question_id += 1;
        let question = Question {
            id: tables.next_question_id,
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category,
            difficulty: new.difficulty,
        };
        tables.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.write().questions.remove(&id).is_some())
    }

    async fn random_question(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> Result<Option<Question>, AppError> {
        let eligible = self.filtered(|q| {
            !exclude.contains(&q.id) && category.map_or(true, |c| q.category == c)
        });
        Ok(eligible.choose(&mut rand::thread_rng()).cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 1,
        }
    }

    #[tokio::test]
    async fn seeded_store_has_default_categories_in_order() {
        let store = MemoryStore::seeded();
        let categories = store.categories().await.unwrap();
        let names: Vec<_> = categories.iter().map(|c| c.kind.as_str()).collect();
        assert_eq!(names, SEED_CATEGORIES);
        assert_eq!(categories[0].id, 1);
        assert!(store.questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let store = MemoryStore::seeded();
        let first = store.insert_question(&new_question("a", 1)).await.unwrap();
        assert!(store.delete_question(first.id).await.unwrap());
        assert!(!store.delete_question(first.id).await.unwrap());
        let second = store.insert_question(&new_question("b", 1)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let store = MemoryStore::seeded();
        store.insert_question(&new_question("What is the TITLE?", 1)).await.unwrap();
        store.insert_question(&new_question("Who painted it?", 2)).await.unwrap();
        let hits = store.search_questions("title").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "What is the TITLE?");
    }

    #[tokio::test]
    async fn random_question_respects_category_and_exclusions() {
        let store = MemoryStore::seeded();
        let mut science = Vec::new();
        for i in 0..5 {
            science.push(store.insert_question(&new_question(&format!("s{i}"), 1)).await.unwrap().id);
            store.insert_question(&new_question(&format!("a{i}"), 2)).await.unwrap();
        }
        let exclude = &science[..4];
        for _ in 0..20 {
            let picked = store.random_question(Some(1), exclude).await.unwrap().unwrap();
            assert_eq!(picked.id, science[4]);
        }
        assert!(store.random_question(Some(1), &science).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn random_question_reaches_every_candidate() {
        let store = MemoryStore::seeded();
        for i in 0..3 {
            store.insert_question(&new_question(&format!("q{i}"), 1 + i)).await.unwrap();
        }
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.insert(store.random_question(None, &[]).await.unwrap().unwrap().id);
        }
        assert_eq!(seen.len(), 3);
    }
}
