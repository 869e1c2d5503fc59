//! Endpoint logic over any [`TriviaStore`]. Every failure is a typed [`AppError`];
//! translating it to HTTP happens once, in the error module.

use super::pagination::paginate;
use super::validation::RequestValidator;
use crate::error::AppError;
use crate::model::{category_map, CategoryMap, NewQuestionRequest, QuizRequest, SearchRequest};
use crate::response::{
    CategoriesBody, CategoryQuestionPage, CreatedBody, DeletedBody, QuestionPage, QuizTurn,
    SearchResults,
};
use crate::store::TriviaStore;

/// Category id meaning "any category" in a quiz request.
pub const ALL_CATEGORIES: i64 = 0;

pub struct TriviaService;

impl TriviaService {
    /// Category id to type for every category; NotFound when there are none.
    pub async fn category_map(store: &dyn TriviaStore) -> Result<CategoryMap, AppError> {
        let categories = store.categories().await?;
        if categories.is_empty() {
            return Err(AppError::NotFound("No category is present".into()));
        }
        Ok(category_map(categories))
    }

    pub async fn list_categories(store: &dyn TriviaStore) -> Result<CategoriesBody, AppError> {
        Ok(CategoriesBody {
            success: true,
            categories: Self::category_map(store).await?,
        })
    }

    pub async fn list_questions(store: &dyn TriviaStore, page: i64) -> Result<QuestionPage, AppError> {
        let questions = store.questions().await?;
        if questions.is_empty() {
            return Err(AppError::NotFound(
                "No question is present, please add a question and then try".into(),
            ));
        }
        let current = paginate(&questions, page)?;
        let categories = Self::category_map(store).await?;
        Ok(QuestionPage {
            success: true,
            questions: current,
            categories,
            total_questions: questions.len(),
            current_category: None,
        })
    }

    pub async fn delete_question(store: &dyn TriviaStore, id: i64) -> Result<DeletedBody, AppError> {
        let not_present = || AppError::NotFound(format!("Question with id={id} is not present"));
        store.question(id).await?.ok_or_else(not_present)?;
        let deleted = store.delete_question(id).await.map_err(|e| {
            AppError::Internal(format!("Unable to delete the question. Error - {}", cause(&e)))
        })?;
        if !deleted {
            return Err(not_present());
        }
        tracing::info!(question_id = id, "question deleted");
        Ok(DeletedBody {
            success: true,
            question_id: id,
        })
    }

    pub async fn questions_in_category(
        store: &dyn TriviaStore,
        category_id: i64,
        page: i64,
    ) -> Result<CategoryQuestionPage, AppError> {
        store.category(category_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Category with id {category_id} doesn't exist"))
        })?;
        let questions = store.questions_in_category(category_id).await?;
        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "No question found for the category id {category_id}"
            )));
        }
        Ok(CategoryQuestionPage {
            success: true,
            current_category: category_id,
            questions: paginate(&questions, page)?,
            total_questions: questions.len(),
        })
    }

    pub async fn create_question(
        store: &dyn TriviaStore,
        body: NewQuestionRequest,
    ) -> Result<CreatedBody, AppError> {
        let category = body.category;
        let validated = RequestValidator::new_question(body);
        let mut errors = match &validated {
            Ok(_) => Default::default(),
            Err(errors) => errors.clone(),
        };
        if let Some(category) = category {
            if store.category(category).await?.is_none() {
                errors.push("category", format!("category {category} does not exist"));
            }
        }
        let new = match validated {
            Ok(new) if errors.is_empty() => new,
            _ => return Err(AppError::Validation(errors)),
        };

        let created = store.insert_question(&new).await?;
        tracing::info!(question_id = created.id, category = created.category, "question created");
        Ok(CreatedBody {
            success: true,
            id: created.id,
            created_question: created,
        })
    }

    pub async fn search_questions(
        store: &dyn TriviaStore,
        body: SearchRequest,
        page: i64,
    ) -> Result<SearchResults, AppError> {
        let term = body.search_term.ok_or_else(|| {
            AppError::BadRequest(r#"Invalid JSON, "searchTerm" key is not present"#.into())
        })?;
        let term = match term {
            Some(term) if !term.is_empty() => term,
            _ => return Err(AppError::BadRequest("Search term is empty".into())),
        };
        let questions = store.search_questions(&term).await?;
        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                r#"No question found with search term "{term}""#
            )));
        }
        Ok(SearchResults {
            success: true,
            questions: paginate(&questions, page)?,
            total_questions: questions.len(),
        })
    }

    pub async fn next_quiz_question(
        store: &dyn TriviaStore,
        body: QuizRequest,
    ) -> Result<QuizTurn, AppError> {
        let (quiz_category, previous) = match (body.quiz_category, body.previous_questions) {
            (Some(c), Some(p)) => (c, p),
            _ => {
                return Err(AppError::BadRequest(
                    "Invalid input JSON, either quiz_category or previous_questions key is missing"
                        .into(),
                ))
            }
        };
        let category_id = quiz_category
            .id
            .ok_or_else(|| AppError::BadRequest("quiz_category.id is missing".into()))?;

        let category = if category_id == ALL_CATEGORIES {
            None
        } else {
            let known = store.categories().await?.iter().any(|c| c.id == category_id);
            if !known {
                return Err(AppError::NotFound(format!("Invalid category id {category_id}")));
            }
            Some(category_id)
        };

        match store.random_question(category, &previous).await? {
            Some(question) => Ok(QuizTurn::next(question)),
            None => {
                tracing::debug!(category = category_id, played = previous.len(), "quiz exhausted");
                Ok(QuizTurn::played_out())
            }
        }
    }
}

/// The underlying cause of a store failure, without the variant prefix.
fn cause(error: &AppError) -> String {
    match error {
        AppError::Db(e) => e.to_string(),
        other => other.to_string(),
    }
}
