/// TMDB catalog provider
///
/// Queries TMDB's discover endpoint for genre-filtered candidates, or the
/// popular endpoint for the explicit catch-all genre. Query thresholds are
/// tuned by keyword detection in the user's filter text.
use crate::{
    error::{AppError, AppResult},
    models::{CandidateMovie, DiscoverResponse, Genre, GenreQuery},
    services::providers::MovieCatalog,
};
use reqwest::Client as HttpClient;

const MAX_CANDIDATES: usize = 15;
const LANGUAGE: &str = "en-US";
const SORT_BY: &str = "vote_average.desc";

// Baseline: popular-enough, decently rated.
const BASELINE_MIN_VOTES: u32 = 500;
const BASELINE_MIN_RATING: f64 = 6.5;

// "Lesser-known" family: admit low-vote titles, demand a higher rating.
const OBSCURE_MIN_VOTES: u32 = 50;
const OBSCURE_MIN_RATING: f64 = 7.5;

/// Phrases that bias the query toward obscure-but-well-reviewed titles
const LESSER_KNOWN_PHRASES: &[&str] = &[
    "lesser-known",
    "lesser known",
    "little-known",
    "little known",
    "hidden gem",
    "obscure",
    "underrated",
];

#[derive(Clone)]
pub struct TmdbCatalog {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
}

impl TmdbCatalog {
    pub fn new(
        http_client: HttpClient,
        api_key: String,
        api_url: String,
        image_base_url: String,
    ) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
            image_base_url,
        }
    }
}

/// Returns `(vote_count.gte, vote_average.gte)` for the given filter text
fn thresholds(filter_text: &str) -> (u32, f64) {
    if wants_lesser_known(filter_text) {
        (OBSCURE_MIN_VOTES, OBSCURE_MIN_RATING)
    } else {
        (BASELINE_MIN_VOTES, BASELINE_MIN_RATING)
    }
}

fn wants_lesser_known(filter_text: &str) -> bool {
    let lowered = filter_text.to_lowercase();
    LESSER_KNOWN_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}

#[async_trait::async_trait]
impl MovieCatalog for TmdbCatalog {
    async fn discover(&self, genre: Genre, filter_text: &str) -> AppResult<Vec<CandidateMovie>> {
        let request = match genre.query {
            GenreQuery::Discover(genre_id) => {
                let (min_votes, min_rating) = thresholds(filter_text);
                let genre_id = genre_id.to_string();
                let min_votes = min_votes.to_string();
                let min_rating = min_rating.to_string();
                self.http_client
                    .get(format!("{}/discover/movie", self.api_url))
                    .query(&[
                        ("api_key", self.api_key.as_str()),
                        ("with_genres", genre_id.as_str()),
                        ("sort_by", SORT_BY),
                        ("vote_count.gte", min_votes.as_str()),
                        ("vote_average.gte", min_rating.as_str()),
                        ("language", LANGUAGE),
                    ])
            }
            GenreQuery::Popular => self
                .http_client
                .get(format!("{}/movie/popular", self.api_url))
                .query(&[
                    ("api_key", self.api_key.as_str()),
                    ("language", LANGUAGE),
                ]),
        };

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB returned status {}: {}",
                status, body
            )));
        }

        let discovered: DiscoverResponse = response.json().await?;
        let candidates: Vec<CandidateMovie> = discovered
            .results
            .into_iter()
            .take(MAX_CANDIDATES)
            .map(|movie| CandidateMovie::from_api(movie, &self.image_base_url))
            .collect();

        tracing::info!(
            genre = genre.name,
            results = candidates.len(),
            provider = "tmdb",
            "Candidate discovery completed"
        );

        Ok(candidates)
    }
}
