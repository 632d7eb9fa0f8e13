//! The movie record and its CSV projection.
//!
//! A record is created with every field at its sentinel default, filled in
//! field by field during a single page visit, then frozen and appended to the
//! output table. Every declared field is present in every record; a lookup
//! that fails leaves the documented default in place rather than omitting the
//! column.

/// Placeholder stored when a field's data cannot be located.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for the review-count fields, which default to zero rather
/// than to [`NOT_AVAILABLE`].
pub const ZERO_COUNT: &str = "0";

/// How many user-review headings a record carries.
pub const USER_REVIEW_SLOTS: usize = 3;

/// How many critic-review composites a record carries.
pub const CRITIC_REVIEW_SLOTS: usize = 2;

/// One scraped movie.
///
/// String fields default to `"N/A"` (review counts to `"0"`), list fields to
/// empty. `sequence_number` is the 1-based position in traversal order,
/// assigned by the caller and never recomputed; `source_url` is attached by
/// the caller after extraction completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub sequence_number: u32,
    pub title: String,
    pub year: String,
    pub genres: Vec<String>,
    pub director: Vec<String>,
    pub writers: Vec<String>,
    pub cast: Vec<String>,
    pub metascore: String,
    pub synopsis: String,
    pub runtime: String,
    pub imdb_score: String,
    pub user_reviews_count: String,
    pub critic_reviews_count: String,
    pub user_reviews: [String; USER_REVIEW_SLOTS],
    pub critic_reviews: [String; CRITIC_REVIEW_SLOTS],
    pub box_office_budget: String,
    pub box_office_usa_weekend: String,
    pub box_office_worldwide: String,
    pub keywords: Vec<String>,
    pub production_companies: Vec<String>,
    pub source_url: String,
}

impl MovieRecord {
    /// CSV header, in the exact order [`MovieRecord::to_row`] emits values.
    pub const COLUMNS: [&'static str; 24] = [
        "sequence_number",
        "title",
        "year",
        "genres",
        "director",
        "writers",
        "cast",
        "metascore",
        "synopsis",
        "runtime",
        "imdb_score",
        "user_reviews_count",
        "critic_reviews_count",
        "user_review_1",
        "user_review_2",
        "user_review_3",
        "critic_review_1",
        "critic_review_2",
        "box_office_budget",
        "box_office_usa_weekend",
        "box_office_worldwide",
        "keywords",
        "production_companies",
        "source_url",
    ];

    /// A fresh record with every field at its default.
    pub fn new(sequence_number: u32) -> Self {
        let na = || NOT_AVAILABLE.to_string();
        Self {
            sequence_number,
            title: na(),
            year: na(),
            genres: Vec::new(),
            director: Vec::new(),
            writers: Vec::new(),
            cast: Vec::new(),
            metascore: na(),
            synopsis: na(),
            runtime: na(),
            imdb_score: na(),
            user_reviews_count: ZERO_COUNT.to_string(),
            critic_reviews_count: ZERO_COUNT.to_string(),
            user_reviews: std::array::from_fn(|_| na()),
            critic_reviews: std::array::from_fn(|_| na()),
            box_office_budget: na(),
            box_office_usa_weekend: na(),
            box_office_worldwide: na(),
            keywords: Vec::new(),
            production_companies: Vec::new(),
            source_url: na(),
        }
    }

    /// Project the record into one CSV row, in [`MovieRecord::COLUMNS`]
    /// order. List fields are rendered in bracketed debug form, e.g.
    /// `["Action", "Drama"]`.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(Self::COLUMNS.len());
        row.push(self.sequence_number.to_string());
        row.push(self.title.clone());
        row.push(self.year.clone());
        row.push(render_list(&self.genres));
        row.push(render_list(&self.director));
        row.push(render_list(&self.writers));
        row.push(render_list(&self.cast));
        row.push(self.metascore.clone());
        row.push(self.synopsis.clone());
        row.push(self.runtime.clone());
        row.push(self.imdb_score.clone());
        row.push(self.user_reviews_count.clone());
        row.push(self.critic_reviews_count.clone());
        row.extend(self.user_reviews.iter().cloned());
        row.extend(self.critic_reviews.iter().cloned());
        row.push(self.box_office_budget.clone());
        row.push(self.box_office_usa_weekend.clone());
        row.push(self.box_office_worldwide.clone());
        row.push(render_list(&self.keywords));
        row.push(render_list(&self.production_companies));
        row.push(self.source_url.clone());
        row
    }
}

fn render_list(values: &[String]) -> String {
    format!("{values:?}")
}
