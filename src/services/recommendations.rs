use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Genre, RecommendationCard},
    services::{
        formatter, prompt,
        providers::{MovieCatalog, RecommendationModel},
    },
};

/// Runs the full recommendation pipeline for one request:
/// catalog discovery, prompt composition, model call, formatting.
///
/// Everything is request-local; the providers are the only shared resources.
/// An empty card list is a valid outcome (the model answered but nothing
/// matched), as is an empty candidate list (nothing to recommend from, so the
/// model is never called).
pub async fn recommend(
    catalog: Arc<dyn MovieCatalog>,
    model: Arc<dyn RecommendationModel>,
    genre_name: &str,
    filter_text: &str,
) -> AppResult<Vec<RecommendationCard>> {
    let genre = Genre::resolve(genre_name)
        .ok_or_else(|| AppError::InvalidInput(format!("Unknown genre: {}", genre_name)))?;

    let candidates = catalog.discover(genre, filter_text).await?;
    if candidates.is_empty() {
        tracing::info!(genre = genre.name, "No candidates matched the catalog query");
        return Ok(vec![]);
    }

    let prompt = prompt::compose(genre.name, filter_text, &candidates);
    let raw_text = model.generate(&prompt).await?;
    let cards = formatter::format(&raw_text, &candidates)?;

    tracing::info!(
        genre = genre.name,
        candidates = candidates.len(),
        cards = cards.len(),
        "Recommendation pipeline completed"
    );

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateMovie;
    use crate::services::providers::{MockMovieCatalog, MockRecommendationModel};

    fn candidates() -> Vec<CandidateMovie> {
        vec![CandidateMovie {
            title: "Arrival".to_string(),
            year: "2016".to_string(),
            overview: "A linguist decodes an alien language.".to_string(),
            rating: 7.9,
            poster_url: Some("https://image.test/arrival.jpg".to_string()),
        }]
    }

    #[tokio::test]
    async fn test_unknown_genre_is_invalid_input() {
        let catalog = MockMovieCatalog::new();
        let model = MockRecommendationModel::new();

        let result = recommend(Arc::new(catalog), Arc::new(model), "Telenovela", "sad").await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_empty_candidate_list_skips_model_call() {
        let mut catalog = MockMovieCatalog::new();
        catalog.expect_discover().returning(|_, _| Ok(vec![]));
        // No expectation set on the model: a call would panic the test
        let model = MockRecommendationModel::new();

        let cards = recommend(Arc::new(catalog), Arc::new(model), "Drama", "quiet")
            .await
            .unwrap();

        assert!(cards.is_empty());
    }

    #[tokio::test]
    async fn test_pipeline_threads_candidates_into_prompt_and_cards() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_discover()
            .withf(|genre, filter| genre.name == "Sci-Fi" && filter == "cerebral")
            .returning(|_, _| Ok(candidates()));

        let mut model = MockRecommendationModel::new();
        model
            .expect_generate()
            .withf(|prompt| prompt.contains("Title: Arrival") && prompt.contains("cerebral"))
            .returning(|_| {
                Ok("1. **Arrival** (2016) - Sci-Fi | Rating: 7.9: Quietly cerebral.".to_string())
            });

        let cards = recommend(Arc::new(catalog), Arc::new(model), "Sci-Fi", "cerebral")
            .await
            .unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Arrival");
        assert_eq!(cards[0].explanation, "Quietly cerebral.");
    }

    #[tokio::test]
    async fn test_catalog_error_propagates() {
        let mut catalog = MockMovieCatalog::new();
        catalog
            .expect_discover()
            .returning(|_, _| Err(AppError::ExternalApi("TMDB returned status 500".to_string())));
        let model = MockRecommendationModel::new();

        let result = recommend(Arc::new(catalog), Arc::new(model), "Drama", "any").await;

        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }

    #[tokio::test]
    async fn test_empty_model_response_is_format_error() {
        let mut catalog = MockMovieCatalog::new();
        catalog.expect_discover().returning(|_, _| Ok(candidates()));

        let mut model = MockRecommendationModel::new();
        let expected_prompt = prompt::compose("Sci-Fi", "cerebral", &candidates());
        model
            .expect_generate()
            .withf(move |prompt| prompt == expected_prompt)
            .returning(|_| Ok(String::new()));

        let result = recommend(Arc::new(catalog), Arc::new(model), "Sci-Fi", "cerebral").await;

        assert!(matches!(result, Err(AppError::Format(_))));
    }
}
