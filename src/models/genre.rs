/// How a genre selection translates into a catalog query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreQuery {
    /// Filter the discover endpoint by a TMDB genre id
    Discover(u32),
    /// Hit the popular endpoint with no genre filter
    Popular,
}

/// A genre the service accepts, paired with its catalog query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genre {
    pub name: &'static str,
    pub query: GenreQuery,
}

/// TMDB genre ids, plus the explicit catch-all entry.
///
/// Unknown genres are rejected outright rather than falling back to the
/// popular listing; the catch-all is only reachable by selecting it.
const GENRES: &[Genre] = &[
    Genre { name: "Action", query: GenreQuery::Discover(28) },
    Genre { name: "Adventure", query: GenreQuery::Discover(12) },
    Genre { name: "Animation", query: GenreQuery::Discover(16) },
    Genre { name: "Comedy", query: GenreQuery::Discover(35) },
    Genre { name: "Crime", query: GenreQuery::Discover(80) },
    Genre { name: "Documentary", query: GenreQuery::Discover(99) },
    Genre { name: "Drama", query: GenreQuery::Discover(18) },
    Genre { name: "Family", query: GenreQuery::Discover(10751) },
    Genre { name: "Fantasy", query: GenreQuery::Discover(14) },
    Genre { name: "History", query: GenreQuery::Discover(36) },
    Genre { name: "Horror", query: GenreQuery::Discover(27) },
    Genre { name: "Music", query: GenreQuery::Discover(10402) },
    Genre { name: "Mystery", query: GenreQuery::Discover(9648) },
    Genre { name: "Romance", query: GenreQuery::Discover(10749) },
    Genre { name: "Sci-Fi", query: GenreQuery::Discover(878) },
    Genre { name: "Thriller", query: GenreQuery::Discover(53) },
    Genre { name: "War", query: GenreQuery::Discover(10752) },
    Genre { name: "Western", query: GenreQuery::Discover(37) },
    Genre { name: "All Genres (Popular)", query: GenreQuery::Popular },
];

impl Genre {
    /// Looks up a genre by its exact display name
    pub fn resolve(name: &str) -> Option<Genre> {
        GENRES.iter().copied().find(|g| g.name == name)
    }

    /// All accepted genre names, in display order
    pub fn names() -> Vec<&'static str> {
        GENRES.iter().map(|g| g.name).collect()
    }
}
