//! Query engine: filter, sort and paginate a slice of typed records.
//!
//! A query runs in three fixed stages:
//!
//! ```text
//! records ──► filter (AND of predicates) ──► stable sort (desc) ──► page window
//! ```
//!
//! `total` is taken after filtering and before windowing. The engine is a pure
//! function of its inputs: it never allocates shared state, never blocks and
//! never fails. Every caller-facing check (page ≥ 1, size bounds, enum
//! membership of filter values) happens before a query is built.

use crate::error::PageError;
use serde::Serialize;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

// ---------------------------------------------------------------------------
// Records and field values
// ---------------------------------------------------------------------------

/// A record the engine can query by field.
///
/// `Field` is a small `Copy` enum naming the exposed fields; implementors map
/// each variant to a borrowed view of the value, or `None` when the record
/// has no value for it.
pub trait Record {
    type Field: Copy + fmt::Debug;

    fn field(&self, field: Self::Field) -> Option<FieldValue<'_>>;
}

/// Borrowed view of a single scalar field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl FieldValue<'_> {
    /// Textual representation used by substring predicates.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s),
            FieldValue::Int(n) => Cow::Owned(n.to_string()),
            FieldValue::Float(x) => Cow::Owned(x.to_string()),
            FieldValue::Bool(b) => Cow::Owned(b.to_string()),
        }
    }

    /// Numeric view used for ordering. Booleans order as 0/1; text has none.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::Int(n) => Some(*n as f64),
            FieldValue::Float(x) => Some(*x),
            FieldValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        }
    }

    /// Exact equality against an owned scalar. Integers and floats compare
    /// numerically; mismatched kinds never match.
    pub fn equals(&self, other: &Scalar) -> bool {
        match (self, other) {
            (FieldValue::Text(a), Scalar::Text(b)) => *a == b.as_str(),
            (FieldValue::Int(a), Scalar::Int(b)) => a == b,
            (FieldValue::Bool(a), Scalar::Bool(b)) => a == b,
            (FieldValue::Int(_) | FieldValue::Float(_), Scalar::Int(_) | Scalar::Float(_)) => {
                self.as_number() == other.as_number()
            }
            _ => false,
        }
    }
}

/// Owned scalar carried by an equality predicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Int(n) => Some(*n as f64),
            Scalar::Float(x) => Some(*x),
            Scalar::Text(_) | Scalar::Bool(_) => None,
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// Total order over field values used by the sort stage.
///
/// - Numbers (and booleans as 0/1) compare numerically.
/// - Text compares lexicographically.
/// - A number always orders below text.
pub fn compare_values(left: &FieldValue<'_>, right: &FieldValue<'_>) -> Ordering {
    match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, None) => left.as_text().cmp(&right.as_text()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// A boolean test on a record. A query keeps a record only when every
/// predicate in its set matches.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<F> {
    /// Case-insensitive literal substring match. `needle` is stored lowercased.
    Contains { field: F, needle: String },
    /// Exact equality with a scalar.
    Equals { field: F, value: Scalar },
    /// Matches when at least one inner predicate matches. Empty never matches.
    AnyOf(Vec<Predicate<F>>),
}

impl<F: Copy + fmt::Debug> Predicate<F> {
    /// `field` contains `pattern`, ignoring case. The pattern is a literal,
    /// never a regular expression.
    pub fn contains(field: F, pattern: &str) -> Self {
        Predicate::Contains {
            field,
            needle: pattern.to_lowercase(),
        }
    }

    /// `field == value`
    pub fn equals(field: F, value: impl Into<Scalar>) -> Self {
        Predicate::Equals {
            field,
            value: value.into(),
        }
    }

    /// `p1 OR p2 OR ...`
    pub fn any_of(predicates: Vec<Predicate<F>>) -> Self {
        Predicate::AnyOf(predicates)
    }

    /// Evaluate against one record. A missing field never matches.
    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Record<Field = F>,
    {
        match self {
            Predicate::Contains { field, needle } => record
                .field(*field)
                .is_some_and(|v| v.as_text().to_lowercase().contains(needle.as_str())),
            Predicate::Equals { field, value } => {
                record.field(*field).is_some_and(|v| v.equals(value))
            }
            Predicate::AnyOf(inner) => inner.iter().any(|p| p.matches(record)),
        }
    }
}

// ---------------------------------------------------------------------------
// Sort key
// ---------------------------------------------------------------------------

/// Single-field sort. Direction is always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<F> {
    field: F,
}

impl<F: Copy + fmt::Debug> SortKey<F> {
    pub fn descending(field: F) -> Self {
        Self { field }
    }

    pub fn field(&self) -> F {
        self.field
    }

    /// Descending comparison. A record without the field orders as if the
    /// field held numeric zero; present values are never coerced.
    pub fn compare<R>(&self, a: &R, b: &R) -> Ordering
    where
        R: Record<Field = F>,
    {
        let zero = FieldValue::Int(0);
        let left = a.field(self.field).unwrap_or(zero);
        let right = b.field(self.field).unwrap_or(zero);
        compare_values(&right, &left)
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// A validated `(page, size)` pair. Only constructible through
/// [`PageRequest::new`], so `page ≥ 1` and `1 ≤ size ≤ max` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize, max_size: usize) -> Result<Self, PageError> {
        if page < 1 {
            return Err(PageError::Page(page));
        }
        if size < 1 || size > max_size {
            return Err(PageError::Size {
                size,
                max: max_size,
            });
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Index of the first item on this page in the full sequence.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.size)
    }

    /// Slice bounds of this page over a sequence of `total` items, clamped so
    /// pages past the end produce an empty range.
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = self.offset().min(total);
        let end = start.saturating_add(self.size).min(total);
        start..end
    }
}

/// One page of query output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult<T> {
    pub items: Vec<T>,
    /// Matching records before pagination.
    pub total: usize,
    pub page: usize,
    pub size: usize,
}

impl<T> QueryResult<T> {
    /// Number of pages needed to cover `total` at this page size.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.size.max(1))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> QueryResult<U> {
        QueryResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
        }
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Predicate set plus optional sort key, reusable across datasets of the same
/// record type.
#[derive(Debug, Clone, PartialEq)]
pub struct Query<F> {
    predicates: Vec<Predicate<F>>,
    sort: Option<SortKey<F>>,
}

impl<F> Default for Query<F> {
    fn default() -> Self {
        Self {
            predicates: Vec::new(),
            sort: None,
        }
    }
}

impl<F: Copy + fmt::Debug> Query<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, predicate: Predicate<F>) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn sort_by(mut self, key: SortKey<F>) -> Self {
        self.sort = Some(key);
        self
    }

    pub fn run<'a, R>(&self, records: &'a [R], page: PageRequest) -> QueryResult<&'a R>
    where
        R: Record<Field = F>,
    {
        query(records, &self.predicates, self.sort, page)
    }
}

/// Filter `records` by every predicate, optionally stable-sort descending by
/// `sort`, then cut the page window.
pub fn query<'a, R: Record>(
    records: &'a [R],
    predicates: &[Predicate<R::Field>],
    sort: Option<SortKey<R::Field>>,
    page: PageRequest,
) -> QueryResult<&'a R> {
    let mut retained: Vec<&'a R> = records
        .iter()
        .filter(|record| predicates.iter().all(|p| p.matches(*record)))
        .collect();

    if let Some(key) = sort {
        retained.sort_by(|a, b| key.compare(*a, *b));
    }

    let total = retained.len();
    let items: Vec<&'a R> = retained.drain(page.window(total)).collect();

    QueryResult {
        items,
        total,
        page: page.page(),
        size: page.size(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
