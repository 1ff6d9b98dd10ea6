//! Test builders: fluent constructors for `College` and `NewsItem`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use college_core::{College, CollegeType, NewsItem};

// ---------------------------------------------------------------------------
// CollegeBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`College`] fixtures.
///
/// # Example
///
/// ```rust
/// let college = CollegeBuilder::new(1, "Test Institute of Technology")
///     .state("Delhi")
///     .kind(CollegeType::Private)
///     .fees(450_000)
///     .build();
/// ```
pub struct CollegeBuilder {
    college: College,
}

impl CollegeBuilder {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            college: College {
                id,
                short_name: name.split_whitespace().take(2).collect::<Vec<_>>().join(" "),
                name,
                location: "Test City".to_string(),
                state: "Test State".to_string(),
                rating: None,
                reviews: 0,
                kind: CollegeType::Public,
                category: "Engineering".to_string(),
                established: 1990,
                fees: None,
                placement: None,
                ranking: None,
                featured: false,
                courses: 1,
                students: 100,
                image: format!("https://example.test/college/{id}.jpg"),
            },
        }
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.college.state = state.into();
        self
    }

    pub fn kind(mut self, kind: CollegeType) -> Self {
        self.college.kind = kind;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.college.category = category.into();
        self
    }

    pub fn rating(mut self, rating: f64) -> Self {
        self.college.rating = Some(rating);
        self
    }

    pub fn fees(mut self, fees: u64) -> Self {
        self.college.fees = Some(fees);
        self
    }

    pub fn placement(mut self, placement: u64) -> Self {
        self.college.placement = Some(placement);
        self
    }

    pub fn ranking(mut self, ranking: u32) -> Self {
        self.college.ranking = Some(ranking);
        self
    }

    pub fn build(self) -> College {
        self.college
    }
}

// ---------------------------------------------------------------------------
// NewsItemBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`NewsItem`] fixtures.
pub struct NewsItemBuilder {
    item: NewsItem,
}

impl NewsItemBuilder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            item: NewsItem {
                id: id.into(),
                title: title.into(),
                date: chrono::NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
                category: "General".to_string(),
                excerpt: String::new(),
                image: "https://example.test/news.jpg".to_string(),
            },
        }
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.item.excerpt = excerpt.into();
        self
    }

    pub fn date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.item.date = chrono::NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
        self
    }

    pub fn build(self) -> NewsItem {
        self.item
    }
}
