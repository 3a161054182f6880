use serde::{Deserialize, Serialize};

use super::ApiMovie;

/// Sentinel year shown when TMDB has no usable release date
pub const YEAR_UNKNOWN: &str = "unknown";

/// One candidate movie from the catalog, scoped to a single request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateMovie {
    pub title: String,
    /// Four-digit release year, or [`YEAR_UNKNOWN`]
    pub year: String,
    pub overview: String,
    pub rating: f64,
    /// Full poster image URL; `None` when the catalog has no poster
    pub poster_url: Option<String>,
}

impl CandidateMovie {
    /// Converts a raw TMDB record, joining the poster path onto the image base URL
    pub fn from_api(movie: ApiMovie, image_base_url: &str) -> Self {
        let year = movie
            .release_date
            .as_deref()
            .and_then(parse_year)
            .unwrap_or_else(|| YEAR_UNKNOWN.to_string());

        let poster_url = movie
            .poster_path
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", image_base_url, p));

        Self {
            title: movie.title,
            year,
            overview: movie.overview.unwrap_or_default(),
            rating: movie.vote_average,
            poster_url,
        }
    }
}

/// Extracts a four-digit year from a `YYYY-MM-DD` release date
fn parse_year(release_date: &str) -> Option<String> {
    let year = release_date.get(..4)?;
    if year.chars().all(|c| c.is_ascii_digit()) {
        Some(year.to_string())
    } else {
        None
    }
}

/// One finalized, displayable recommendation: the model's pick and explanation
/// recombined with the candidate's catalog metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationCard {
    pub title: String,
    pub year: String,
    pub rating: f64,
    pub poster_url: String,
    pub explanation: String,
}
