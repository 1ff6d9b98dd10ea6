//! Record types for the two queryable datasets: [`College`] and [`NewsItem`].
//!
//! Each record exposes its filterable/sortable fields through a field enum
//! ([`CollegeField`], [`NewsField`]). College fields also have a compile-time
//! table keyed by wire name, which is how `sortBy` values are resolved.

use crate::query::{FieldValue, Record};
use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// College
// ---------------------------------------------------------------------------

/// One entry in the college listing.
///
/// The four rankable metrics are optional: a record without one of them sorts
/// as zero on that key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct College {
    pub id: u32,
    pub name: String,
    pub short_name: String,
    /// City.
    pub location: String,
    pub state: String,
    #[serde(default)]
    pub rating: Option<f64>,
    pub reviews: u32,
    #[serde(rename = "type")]
    pub kind: CollegeType,
    pub category: String,
    pub established: u16,
    /// Annual fees in rupees.
    #[serde(default)]
    pub fees: Option<u64>,
    /// Average placement package in rupees.
    #[serde(default)]
    pub placement: Option<u64>,
    #[serde(default)]
    pub ranking: Option<u32>,
    pub featured: bool,
    pub courses: u32,
    pub students: u32,
    pub image: String,
}

/// Ownership type of a college. The only two values the listing filter
/// accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollegeType {
    Public,
    Private,
}

impl CollegeType {
    pub const ALL: [CollegeType; 2] = [CollegeType::Public, CollegeType::Private];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollegeType::Public => "Public",
            CollegeType::Private => "Private",
        }
    }
}

impl fmt::Display for CollegeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollegeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Public" => Ok(CollegeType::Public),
            "Private" => Ok(CollegeType::Private),
            _ => {
                let allowed: Vec<&str> = Self::ALL.iter().map(CollegeType::as_str).collect();
                Err(format!("Invalid type. Must be one of: {}", allowed.join(", ")))
            }
        }
    }
}

/// Queryable fields of a [`College`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollegeField {
    Id,
    Name,
    ShortName,
    Location,
    State,
    Rating,
    Reviews,
    Type,
    Category,
    Established,
    Fees,
    Placement,
    Ranking,
    Featured,
    Courses,
    Students,
}

static COLLEGE_FIELDS: phf::Map<&'static str, CollegeField> = phf_map! {
    "id" => CollegeField::Id,
    "name" => CollegeField::Name,
    "shortName" => CollegeField::ShortName,
    "location" => CollegeField::Location,
    "state" => CollegeField::State,
    "rating" => CollegeField::Rating,
    "reviews" => CollegeField::Reviews,
    "type" => CollegeField::Type,
    "category" => CollegeField::Category,
    "established" => CollegeField::Established,
    "fees" => CollegeField::Fees,
    "placement" => CollegeField::Placement,
    "ranking" => CollegeField::Ranking,
    "featured" => CollegeField::Featured,
    "courses" => CollegeField::Courses,
    "students" => CollegeField::Students,
};

impl CollegeField {
    /// Look up a field by its wire name (`"shortName"`, `"fees"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        COLLEGE_FIELDS.get(name).copied()
    }
}

impl Record for College {
    type Field = CollegeField;

    fn field(&self, field: CollegeField) -> Option<FieldValue<'_>> {
        match field {
            CollegeField::Id => Some(FieldValue::Int(i64::from(self.id))),
            CollegeField::Name => Some(FieldValue::Text(&self.name)),
            CollegeField::ShortName => Some(FieldValue::Text(&self.short_name)),
            CollegeField::Location => Some(FieldValue::Text(&self.location)),
            CollegeField::State => Some(FieldValue::Text(&self.state)),
            CollegeField::Rating => self.rating.map(FieldValue::Float),
            CollegeField::Reviews => Some(FieldValue::Int(i64::from(self.reviews))),
            CollegeField::Type => Some(FieldValue::Text(self.kind.as_str())),
            CollegeField::Category => Some(FieldValue::Text(&self.category)),
            CollegeField::Established => Some(FieldValue::Int(i64::from(self.established))),
            CollegeField::Fees => self.fees.map(|v| FieldValue::Int(saturating_i64(v))),
            CollegeField::Placement => self.placement.map(|v| FieldValue::Int(saturating_i64(v))),
            CollegeField::Ranking => self.ranking.map(|v| FieldValue::Int(i64::from(v))),
            CollegeField::Featured => Some(FieldValue::Bool(self.featured)),
            CollegeField::Courses => Some(FieldValue::Int(i64::from(self.courses))),
            CollegeField::Students => Some(FieldValue::Int(i64::from(self.students))),
        }
    }
}

fn saturating_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

/// Sort keys the listing endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollegeSort {
    Ranking,
    Rating,
    Fees,
    Placement,
}

impl CollegeSort {
    pub const ALL: [CollegeSort; 4] = [
        CollegeSort::Ranking,
        CollegeSort::Rating,
        CollegeSort::Fees,
        CollegeSort::Placement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollegeSort::Ranking => "ranking",
            CollegeSort::Rating => "rating",
            CollegeSort::Fees => "fees",
            CollegeSort::Placement => "placement",
        }
    }

    pub fn field(&self) -> CollegeField {
        match self {
            CollegeSort::Ranking => CollegeField::Ranking,
            CollegeSort::Rating => CollegeField::Rating,
            CollegeSort::Fees => CollegeField::Fees,
            CollegeSort::Placement => CollegeField::Placement,
        }
    }

    /// The sort backed by `field`, if that field is one of the sortable four.
    pub fn from_field(field: CollegeField) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.field() == field)
    }
}

impl FromStr for CollegeSort {
    type Err = String;

    /// Resolves `s` through the field-name table, then keeps only sortable
    /// fields: `"name"` is a known field but not a sort key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollegeField::from_name(s)
            .and_then(CollegeSort::from_field)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(CollegeSort::as_str).collect();
                format!("Invalid sortBy. Must be one of: {}", allowed.join(", "))
            })
    }
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

/// A news headline shown on a college page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub date: chrono::NaiveDate,
    pub category: String,
    pub excerpt: String,
    pub image: String,
}

/// Queryable fields of a [`NewsItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewsField {
    Id,
    Title,
    Date,
    Category,
    Excerpt,
}

impl Record for NewsItem {
    type Field = NewsField;

    fn field(&self, field: NewsField) -> Option<FieldValue<'_>> {
        match field {
            NewsField::Id => Some(FieldValue::Text(&self.id)),
            NewsField::Title => Some(FieldValue::Text(&self.title)),
            // Days since the common era keep dates orderable as integers.
            NewsField::Date => Some(FieldValue::Int(i64::from(
                chrono::Datelike::num_days_from_ce(&self.date),
            ))),
            NewsField::Category => Some(FieldValue::Text(&self.category)),
            NewsField::Excerpt => Some(FieldValue::Text(&self.excerpt)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
