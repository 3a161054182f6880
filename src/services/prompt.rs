use crate::models::CandidateMovie;

/// Line format the model is told to follow. The formatter's grammar is the
/// consumer of this contract.
pub const OUTPUT_LINE_FORMAT: &str =
    "**[Movie Title]** ([Year]) - [Genre] | Rating: [Rating]: [Brief explanation of fit]";

/// Renders the instruction block sent to the model.
///
/// Deterministic template: the candidate list is inlined as plain text, one
/// movie per line. Poster URLs are deliberately withheld; they are re-attached
/// from the candidate list after the response is parsed.
pub fn compose(genre: &str, filter_text: &str, candidates: &[CandidateMovie]) -> String {
    let movie_lines = candidates
        .iter()
        .map(|m| {
            format!(
                "Title: {}, Year: {}, Overview: {}, Rating: {}",
                m.title, m.year, m.overview, m.rating
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert movie critic. Your task is to provide exactly 3 personalized \
movie recommendations that satisfy the user's genre and filter requests.

**GIVEN DATA SOURCE:**
The movies listed below are sourced from The Movie Database (TMDb). You must ONLY \
recommend films from this list.

**USER PREFERENCES:**
Genre: {genre}
Specific Filter/Mood: {filter_text}

**PROVIDED MOVIE LIST (Analyze the Overview, Title, and Rating to match the filter):**
---
{movie_lines}
---

**RECOMMENDATION RULES:**
1. Suggest exactly 3 movies from the provided list.
2. Each suggestion must satisfy the Specific Filter/Mood ({filter_text}).
3. Output MUST STRICTLY follow the OUTPUT FORMAT. Do NOT include poster URLs.

**OUTPUT FORMAT:**
Movies:
1. {OUTPUT_LINE_FORMAT}
2. {OUTPUT_LINE_FORMAT}
3. {OUTPUT_LINE_FORMAT}
"
    )
}
