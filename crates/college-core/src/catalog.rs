//! Catalog: the in-memory data source behind every endpoint.
//!
//! The catalog owns the college listing, the news list and the static profile
//! sections. [`Catalog::embedded`] parses the JSON documents compiled into the
//! binary; [`Catalog::new`] accepts fixture data for tests.

use crate::error::CatalogError;
use crate::query::{PageRequest, Predicate, Query, QueryResult, SortKey};
use crate::types::{College, CollegeField, CollegeSort, CollegeType, NewsField, NewsItem};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

// ---------------------------------------------------------------------------
// Embedded datasets
// ---------------------------------------------------------------------------

const COLLEGES_JSON: &str = include_str!("../data/colleges.json");
const NEWS_JSON: &str = include_str!("../data/news.json");

// ---------------------------------------------------------------------------
// Profile sections
// ---------------------------------------------------------------------------

/// A static block of per-college profile content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Details,
    Ratings,
    Reviews,
    FeeStructure,
    Placements,
    BranchPlacements,
    Admissions,
    Academics,
    Departments,
    Infrastructure,
    CampusExperience,
    Clubs,
    Events,
    Gallery,
    Alumni,
    Scholarships,
    Startups,
    SocialMedia,
    NearbyPlaces,
}

impl Section {
    pub const ALL: [Section; 19] = [
        Section::Details,
        Section::Ratings,
        Section::Reviews,
        Section::FeeStructure,
        Section::Placements,
        Section::BranchPlacements,
        Section::Admissions,
        Section::Academics,
        Section::Departments,
        Section::Infrastructure,
        Section::CampusExperience,
        Section::Clubs,
        Section::Events,
        Section::Gallery,
        Section::Alumni,
        Section::Scholarships,
        Section::Startups,
        Section::SocialMedia,
        Section::NearbyPlaces,
    ];

    /// Stable identifier, also used as the dataset name in parse errors.
    pub fn name(&self) -> &'static str {
        match self {
            Section::Details => "details",
            Section::Ratings => "ratings",
            Section::Reviews => "reviews",
            Section::FeeStructure => "fee_structure",
            Section::Placements => "placements",
            Section::BranchPlacements => "branch_placements",
            Section::Admissions => "admissions",
            Section::Academics => "academics",
            Section::Departments => "departments",
            Section::Infrastructure => "infrastructure",
            Section::CampusExperience => "campus_experience",
            Section::Clubs => "clubs",
            Section::Events => "events",
            Section::Gallery => "gallery",
            Section::Alumni => "alumni",
            Section::Scholarships => "scholarships",
            Section::Startups => "startups",
            Section::SocialMedia => "social_media",
            Section::NearbyPlaces => "nearby_places",
        }
    }

    /// Key of this section inside the combined profile, or `None` for the
    /// sections the combined profile leaves out (ratings and reviews).
    pub fn profile_key(&self) -> Option<&'static str> {
        match self {
            Section::Ratings | Section::Reviews => None,
            Section::Details => Some("college_details"),
            Section::FeeStructure => Some("college_fee_structure"),
            Section::Placements => Some("college_placements"),
            Section::BranchPlacements => Some("college_branch_placements"),
            Section::Admissions => Some("college_admissions"),
            Section::Academics => Some("college_academics"),
            Section::Departments => Some("college_departments"),
            Section::Infrastructure => Some("college_infrastructure"),
            Section::CampusExperience => Some("college_campus_experience"),
            Section::Clubs => Some("college_clubs"),
            Section::Events => Some("college_events"),
            Section::Gallery => Some("college_gallery"),
            Section::Alumni => Some("college_alumni"),
            Section::Scholarships => Some("college_scholarships"),
            Section::Startups => Some("college_startups"),
            Section::SocialMedia => Some("college_social_media"),
            Section::NearbyPlaces => Some("college_nearby_places"),
        }
    }

    fn embedded_json(&self) -> &'static str {
        match self {
            Section::Details => include_str!("../data/profile/details.json"),
            Section::Ratings => include_str!("../data/profile/ratings.json"),
            Section::Reviews => include_str!("../data/profile/reviews.json"),
            Section::FeeStructure => include_str!("../data/profile/fee_structure.json"),
            Section::Placements => include_str!("../data/profile/placements.json"),
            Section::BranchPlacements => include_str!("../data/profile/branch_placements.json"),
            Section::Admissions => include_str!("../data/profile/admissions.json"),
            Section::Academics => include_str!("../data/profile/academics.json"),
            Section::Departments => include_str!("../data/profile/departments.json"),
            Section::Infrastructure => include_str!("../data/profile/infrastructure.json"),
            Section::CampusExperience => include_str!("../data/profile/campus_experience.json"),
            Section::Clubs => include_str!("../data/profile/clubs.json"),
            Section::Events => include_str!("../data/profile/events.json"),
            Section::Gallery => include_str!("../data/profile/gallery.json"),
            Section::Alumni => include_str!("../data/profile/alumni.json"),
            Section::Scholarships => include_str!("../data/profile/scholarships.json"),
            Section::Startups => include_str!("../data/profile/startups.json"),
            Section::SocialMedia => include_str!("../data/profile/social_media.json"),
            Section::NearbyPlaces => include_str!("../data/profile/nearby_places.json"),
        }
    }
}

// ---------------------------------------------------------------------------
// Listing filter
// ---------------------------------------------------------------------------

/// Validated listing filter. Text values are expected trimmed; an absent
/// field adds no predicate. `state` and `category` match exactly, so
/// `Some("")` matches nothing, while an empty `search` matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollegeFilter {
    /// Case-insensitive substring of the college name.
    pub search: Option<String>,
    pub state: Option<String>,
    pub kind: Option<CollegeType>,
    pub category: Option<String>,
    pub sort: Option<CollegeSort>,
}

impl CollegeFilter {
    pub fn to_query(&self) -> Query<CollegeField> {
        let mut query = Query::new();
        if let Some(search) = non_empty(&self.search) {
            query = query.filter(Predicate::contains(CollegeField::Name, search));
        }
        if let Some(state) = &self.state {
            query = query.filter(Predicate::equals(CollegeField::State, state.as_str()));
        }
        if let Some(kind) = self.kind {
            query = query.filter(Predicate::equals(CollegeField::Type, kind.as_str()));
        }
        if let Some(category) = &self.category {
            query = query.filter(Predicate::equals(CollegeField::Category, category.as_str()));
        }
        if let Some(sort) = self.sort {
            query = query.sort_by(SortKey::descending(sort.field()));
        }
        query
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// News search: the pattern may appear in the title or the excerpt.
pub fn news_query(search: Option<&str>) -> Query<NewsField> {
    match search.filter(|s| !s.is_empty()) {
        Some(pattern) => Query::new().filter(Predicate::any_of(vec![
            Predicate::contains(NewsField::Title, pattern),
            Predicate::contains(NewsField::Excerpt, pattern),
        ])),
        None => Query::new(),
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Immutable data source shared by all request handlers.
#[derive(Debug, Clone)]
pub struct Catalog {
    colleges: Vec<College>,
    known_ids: HashSet<u32>,
    news: Vec<NewsItem>,
    sections: HashMap<Section, Value>,
}

impl Catalog {
    /// Build a catalog from already-parsed parts. Fails if two colleges share
    /// an id.
    pub fn new(
        colleges: Vec<College>,
        news: Vec<NewsItem>,
        sections: HashMap<Section, Value>,
    ) -> Result<Self, CatalogError> {
        let mut known_ids = HashSet::with_capacity(colleges.len());
        for college in &colleges {
            if !known_ids.insert(college.id) {
                return Err(CatalogError::DuplicateId(college.id));
            }
        }
        Ok(Self {
            colleges,
            known_ids,
            news,
            sections,
        })
    }

    /// Parse the datasets compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        let colleges: Vec<College> = parse("colleges", COLLEGES_JSON)?;
        let news: Vec<NewsItem> = parse("news", NEWS_JSON)?;
        let mut sections = HashMap::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            sections.insert(section, parse(section.name(), section.embedded_json())?);
        }
        let catalog = Self::new(colleges, news, sections)?;
        tracing::debug!(
            colleges = catalog.colleges.len(),
            news = catalog.news.len(),
            sections = catalog.sections.len(),
            "embedded catalog parsed"
        );
        Ok(catalog)
    }

    pub fn colleges(&self) -> &[College] {
        &self.colleges
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    pub fn contains(&self, college_id: u32) -> bool {
        self.known_ids.contains(&college_id)
    }

    /// Run the listing query.
    pub fn list_colleges(
        &self,
        filter: &CollegeFilter,
        page: PageRequest,
    ) -> QueryResult<&College> {
        filter.to_query().run(&self.colleges, page)
    }

    /// Run the news query. The same news list is served for every college, so
    /// `college_id` does not narrow the result.
    pub fn news_for(
        &self,
        college_id: u32,
        search: Option<&str>,
        page: PageRequest,
    ) -> QueryResult<&NewsItem> {
        tracing::trace!(college_id, ?search, "news query");
        news_query(search).run(&self.news, page)
    }

    /// One profile section for a known college. The details section carries
    /// the requested id.
    pub fn section(&self, college_id: u32, section: Section) -> Option<Value> {
        if !self.contains(college_id) {
            return None;
        }
        let mut value = self.sections.get(&section)?.clone();
        if section == Section::Details {
            if let Value::Object(map) = &mut value {
                map.insert("id".to_string(), Value::from(college_id));
            }
        }
        Some(value)
    }

    /// Every section except ratings and reviews, keyed by profile key.
    pub fn profile(&self, college_id: u32) -> Option<Map<String, Value>> {
        if !self.contains(college_id) {
            return None;
        }
        let profile = Section::ALL
            .into_iter()
            .filter_map(|section| {
                let key = section.profile_key()?;
                let value = self.section(college_id, section)?;
                Some((key.to_string(), value))
            })
            .collect();
        Some(profile)
    }
}

fn parse<T: serde::de::DeserializeOwned>(
    name: &'static str,
    json: &str,
) -> Result<T, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Dataset { name, source })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
