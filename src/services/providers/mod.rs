/// Outbound provider abstractions
///
/// Both third-party dependencies (the movie catalog and the text-generation
/// model) sit behind traits so the recommendation pipeline can be exercised
/// with fakes. Concrete clients are constructed once at startup and injected.
use crate::{
    error::AppResult,
    models::{CandidateMovie, Genre},
};

pub mod gemini;
pub mod tmdb;

pub use gemini::GeminiModel;
pub use tmdb::TmdbCatalog;

/// Trait for movie catalog providers
///
/// A provider turns a resolved genre plus the user's free-text filter into a
/// list of candidate movies. The filter text only influences query thresholds;
/// it is never sent to the catalog verbatim.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Fetch candidate movies for a genre
    ///
    /// Returns the full mapped candidate list or an error, never partial data.
    async fn discover(&self, genre: Genre, filter_text: &str) -> AppResult<Vec<CandidateMovie>>;
}

/// Trait for recommendation text generators
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationModel: Send + Sync {
    /// Send a composed prompt and return the model's raw text response
    async fn generate(&self, prompt: &str) -> AppResult<String>;
}
