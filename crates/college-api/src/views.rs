//! Response payload shapes.
//!
//! The engine hands back borrowed records; these types decide what the client
//! sees. Listing cards carry display-formatted money values, pages carry their
//! counters, and each profile section has its route slug and message label.

use college_core::{College, CollegeType, NewsItem, QueryResult, Section};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// A college as shown on the listing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeCard<'a> {
    pub id: u32,
    pub name: &'a str,
    pub short_name: &'a str,
    pub location: &'a str,
    pub state: &'a str,
    pub rating: Option<f64>,
    pub reviews: u32,
    #[serde(rename = "type")]
    pub kind: CollegeType,
    pub category: &'a str,
    pub established: u16,
    /// e.g. `₹2.3 Lakhs`.
    pub fees: Option<String>,
    /// e.g. `₹25 LPA`.
    pub placement: Option<String>,
    pub ranking: Option<u32>,
    pub featured: bool,
    pub courses: u32,
    pub students: u32,
    pub image: &'a str,
}

impl<'a> From<&'a College> for CollegeCard<'a> {
    fn from(college: &'a College) -> Self {
        Self {
            id: college.id,
            name: &college.name,
            short_name: &college.short_name,
            location: &college.location,
            state: &college.state,
            rating: college.rating,
            reviews: college.reviews,
            kind: college.kind,
            category: &college.category,
            established: college.established,
            fees: college.fees.map(format_lakhs),
            placement: college.placement.map(format_lpa),
            ranking: college.ranking,
            featured: college.featured,
            courses: college.courses,
            students: college.students,
            image: &college.image,
        }
    }
}

const LAKH: f64 = 100_000.0;

pub fn format_lakhs(rupees: u64) -> String {
    format!("₹{:.1} Lakhs", rupees as f64 / LAKH)
}

pub fn format_lpa(rupees: u64) -> String {
    format!("₹{:.0} LPA", rupees as f64 / LAKH)
}

/// `data` of the listing response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollegeListPage<'a> {
    pub colleges: Vec<CollegeCard<'a>>,
    pub total: usize,
    pub page: usize,
    pub size: usize,
}

impl<'a> From<QueryResult<&'a College>> for CollegeListPage<'a> {
    fn from(result: QueryResult<&'a College>) -> Self {
        let result = result.map(CollegeCard::from);
        Self {
            colleges: result.items,
            total: result.total,
            page: result.page,
            size: result.size,
        }
    }
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

/// `data` of the news response. The page size is reported as `limit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsPage<'a> {
    pub items: Vec<&'a NewsItem>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

impl<'a> From<QueryResult<&'a NewsItem>> for NewsPage<'a> {
    fn from(result: QueryResult<&'a NewsItem>) -> Self {
        Self {
            items: result.items,
            total: result.total,
            page: result.page,
            limit: result.size,
        }
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Path below `/api/v1/colleges/{id}/` that serves `section`.
pub fn section_path(section: Section) -> &'static str {
    match section {
        Section::Details => "details",
        Section::Ratings => "ratings",
        Section::Reviews => "reviews",
        Section::FeeStructure => "fees",
        Section::Placements => "placements",
        Section::BranchPlacements => "placements/branches",
        Section::Admissions => "admissions",
        Section::Academics => "academics",
        Section::Departments => "departments",
        Section::Infrastructure => "infrastructure",
        Section::CampusExperience => "campus-experience",
        Section::Clubs => "clubs",
        Section::Events => "events",
        Section::Gallery => "gallery",
        Section::Alumni => "alumni",
        Section::Scholarships => "scholarships",
        Section::Startups => "startups",
        Section::SocialMedia => "social-media",
        Section::NearbyPlaces => "nearby-places",
    }
}

fn section_label(section: Section) -> &'static str {
    match section {
        Section::Details => "details",
        Section::Ratings => "ratings",
        Section::Reviews => "reviews",
        Section::FeeStructure => "fee structure",
        Section::Placements => "placement data",
        Section::BranchPlacements => "branch-wise placement data",
        Section::Admissions => "admission information",
        Section::Academics => "academic information",
        Section::Departments => "departments",
        Section::Infrastructure => "infrastructure",
        Section::CampusExperience => "campus experience",
        Section::Clubs => "clubs",
        Section::Events => "events",
        Section::Gallery => "gallery images",
        Section::Alumni => "alumni network",
        Section::Scholarships => "scholarships",
        Section::Startups => "startups",
        Section::SocialMedia => "social media links",
        Section::NearbyPlaces => "nearby places",
    }
}

pub fn section_message(section: Section) -> String {
    format!("College {} retrieved successfully", section_label(section))
}
