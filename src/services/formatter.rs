/// Recommendation formatter
///
/// Parses the model's free-text numbered-list response against a small line
/// grammar and re-associates each recommended title with its candidate's
/// catalog metadata. Lenient by design: a line that fails the grammar or names
/// a title outside the candidate list is dropped, never fatal. Producing fewer
/// than three cards is normal operation.
use crate::models::{CandidateMovie, RecommendationCard};

/// Substring marking a response body that is an upstream error payload rather
/// than a recommendation list
pub const ERROR_MARKER: &str = "API error";

/// Poster path substituted when a matched candidate has no poster
pub const PLACEHOLDER_POSTER: &str = "/static/placeholder.png";

const TITLE_DELIMITER: &str = "**";
const RATING_LABEL: &str = "Rating:";
const EXPLANATION_MARKER: &str = "]:";
const LINE_MARKERS: [&str; 3] = ["1.", "2.", "3."];

/// The model responded, but with nothing extractable
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("model returned an error payload")]
    ErrorPayload,
}

/// Builds display cards from the raw model response.
///
/// An `Ok` with an empty list means the model answered but nothing could be
/// matched against the candidates; that is distinct from `FormatError`, which
/// means the response itself was unusable.
pub fn format(
    raw_text: &str,
    candidates: &[CandidateMovie],
) -> Result<Vec<RecommendationCard>, FormatError> {
    if raw_text.trim().is_empty() {
        return Err(FormatError::EmptyResponse);
    }
    if raw_text.contains(ERROR_MARKER) {
        return Err(FormatError::ErrorPayload);
    }

    let mut cards = Vec::new();

    for line in raw_text.lines() {
        let line = line.trim_start();
        if !LINE_MARKERS.iter().any(|marker| line.starts_with(marker)) {
            continue;
        }

        // Grammar miss on one line skips that line, never the batch
        let Some((title, rest)) = extract_title(line) else {
            continue;
        };
        let Some(candidate) = candidates.iter().find(|c| c.title == title) else {
            continue;
        };

        cards.push(RecommendationCard {
            title: candidate.title.clone(),
            year: candidate.year.clone(),
            rating: candidate.rating,
            poster_url: candidate
                .poster_url
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_POSTER.to_string()),
            explanation: extract_explanation(rest),
        });
    }

    Ok(cards)
}

/// Returns the trimmed text strictly between the first two `**` occurrences,
/// plus the remainder of the line after the closing delimiter
fn extract_title(line: &str) -> Option<(&str, &str)> {
    let start = line.find(TITLE_DELIMITER)? + TITLE_DELIMITER.len();
    let end = start + line[start..].find(TITLE_DELIMITER)?;
    let title = line[start..end].trim();
    let rest = &line[end + TITLE_DELIMITER.len()..];
    Some((title, rest))
}

/// Extracts the explanation from the post-title segment of a line.
///
/// Preferred marker is a literal `]:` (the model kept the template's
/// brackets); failing that, the first colon after the `Rating:` label's value
/// closes the rating field and everything beyond it is the explanation.
/// A line with neither yields an empty explanation, not an error.
fn extract_explanation(rest: &str) -> String {
    if let Some(pos) = rest.rfind(EXPLANATION_MARKER) {
        return rest[pos + EXPLANATION_MARKER.len()..].trim().to_string();
    }

    if let Some(label) = rest.find(RATING_LABEL) {
        let after_label = &rest[label + RATING_LABEL.len()..];
        if let Some(colon) = after_label.find(':') {
            return after_label[colon + 1..].trim().to_string();
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::prompt;

    fn candidates() -> Vec<CandidateMovie> {
        vec![
            CandidateMovie {
                title: "Inception".to_string(),
                year: "2010".to_string(),
                overview: "A thief enters dreams.".to_string(),
                rating: 8.4,
                poster_url: Some("https://image.test/inception.jpg".to_string()),
            },
            CandidateMovie {
                title: "Coherence".to_string(),
                year: "2013".to_string(),
                overview: "A dinner party and a comet.".to_string(),
                rating: 7.2,
                poster_url: None,
            },
            CandidateMovie {
                title: "Predestination".to_string(),
                year: "2014".to_string(),
                overview: "A temporal agent's final assignment.".to_string(),
                rating: 7.4,
                poster_url: Some("https://image.test/predestination.jpg".to_string()),
            },
        ]
    }

    #[test]
    fn test_empty_response_is_format_error() {
        assert_eq!(format("", &candidates()), Err(FormatError::EmptyResponse));
        assert_eq!(
            format("  \n\t ", &candidates()),
            Err(FormatError::EmptyResponse)
        );
    }

    #[test]
    fn test_error_payload_is_format_error() {
        let raw = "Gemini API error: please check your API key.";
        assert_eq!(format(raw, &candidates()), Err(FormatError::ErrorPayload));
    }

    #[test]
    fn test_three_well_formed_lines_produce_three_cards_in_line_order() {
        let raw = "Movies:\n\
            1. **Coherence** (2013) - Sci-Fi | Rating: 7.2: Low-key and twisty.\n\
            2. **Inception** (2010) - Sci-Fi | Rating: 8.4: Dreams within dreams.\n\
            3. **Predestination** (2014) - Sci-Fi | Rating: 7.4: A closed loop.\n";

        let cards = format(raw, &candidates()).unwrap();

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].title, "Coherence");
        assert_eq!(cards[1].title, "Inception");
        assert_eq!(cards[2].title, "Predestination");
        assert_eq!(cards[1].year, "2010");
        assert_eq!(cards[1].rating, 8.4);
        assert_eq!(cards[1].poster_url, "https://image.test/inception.jpg");
        assert_eq!(cards[0].explanation, "Low-key and twisty.");
    }

    #[test]
    fn test_unmatched_title_is_silently_dropped() {
        let raw = "1. **Inception** (2010) - Sci-Fi | Rating: 8.4: Dreams.\n\
            2. **The Matrix** (1999) - Sci-Fi | Rating: 8.7: Not in the list.\n\
            3. **Coherence** (2013) - Sci-Fi | Rating: 7.2: A comet.\n";

        let cards = format(raw, &candidates()).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Inception");
        assert_eq!(cards[1].title, "Coherence");
    }

    #[test]
    fn test_title_match_is_case_sensitive() {
        let raw = "1. **inception** (2010) - Sci-Fi | Rating: 8.4: Lowercased.";
        let cards = format(raw, &candidates()).unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn test_title_is_trimmed_inside_delimiters() {
        let raw = "1. ** Inception ** (2010) - Sci-Fi | Rating: 8.4: Padded.";
        let cards = format(raw, &candidates()).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Inception");
    }

    #[test]
    fn test_line_with_single_delimiter_is_skipped() {
        let raw = "1. **Inception (2010) - Sci-Fi | Rating: 8.4: Unclosed.\n\
            2. **Coherence** (2013) - Sci-Fi | Rating: 7.2: Fine.";

        let cards = format(raw, &candidates()).unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Coherence");
    }

    #[test]
    fn test_non_numbered_lines_are_ignored() {
        let raw = "Here are my picks:\n\
            \n\
            1. **Inception** (2010) - Sci-Fi | Rating: 8.4: The pick.\n\
            Enjoy your movie night!";

        let cards = format(raw, &candidates()).unwrap();
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_explanation_after_literal_bracket_marker() {
        let raw = "1. **Inception** (2010) - Sci-Fi | Rating: [8.4]: Kept the brackets.";
        let cards = format(raw, &candidates()).unwrap();
        assert_eq!(cards[0].explanation, "Kept the brackets.");
    }

    #[test]
    fn test_missing_explanation_markers_yield_empty_explanation() {
        let raw = "1. **Inception** (2010) - Sci-Fi";
        let cards = format(raw, &candidates()).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].explanation, "");
    }

    #[test]
    fn test_missing_poster_substitutes_placeholder() {
        let raw = "1. **Coherence** (2013) - Sci-Fi | Rating: 7.2: No poster on file.";
        let cards = format(raw, &candidates()).unwrap();
        assert_eq!(cards[0].poster_url, PLACEHOLDER_POSTER);
    }

    #[test]
    fn test_nothing_matched_is_ok_empty_not_error() {
        let raw = "1. **Unknown Film** (1990) - Drama | Rating: 6.0: Hallucinated.";
        assert_eq!(format(raw, &candidates()), Ok(vec![]));
    }

    // A synthetic response obeying the composed prompt's format contract must
    // reconstruct cards carrying the original candidates' metadata.
    #[test]
    fn test_round_trip_through_prompt_format_contract() {
        let candidates = candidates();
        let prompt = prompt::compose("Sci-Fi", "mind-bending", &candidates);
        assert!(prompt.contains("Title: Inception"));

        let raw: String = candidates
            .iter()
            .enumerate()
            .map(|(i, c)| {
                format!(
                    "{}. **{}** ({}) - Sci-Fi | Rating: {}: Fits the mood.\n",
                    i + 1,
                    c.title,
                    c.year,
                    c.rating
                )
            })
            .collect();

        let cards = format(&raw, &candidates).unwrap();

        assert_eq!(cards.len(), 3);
        for (card, candidate) in cards.iter().zip(&candidates) {
            assert_eq!(card.title, candidate.title);
            assert_eq!(card.year, candidate.year);
            assert_eq!(card.rating, candidate.rating);
            match &candidate.poster_url {
                Some(url) => assert_eq!(&card.poster_url, url),
                None => assert_eq!(card.poster_url, PLACEHOLDER_POSTER),
            }
            assert_eq!(card.explanation, "Fits the mood.");
        }
    }
}
