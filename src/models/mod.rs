use serde::Deserialize;

pub mod genre;
pub mod movie;

pub use genre::{Genre, GenreQuery};
pub use movie::{CandidateMovie, RecommendationCard, YEAR_UNKNOWN};

// ============================================================================
// TMDB API Types
// ============================================================================

/// Raw response from TMDB's discover and popular endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverResponse {
    #[serde(default)]
    pub results: Vec<ApiMovie>,
}

/// One raw movie record as returned by TMDB
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMovie {
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
}
