//! Catalogs and record sets used across harnesses.

use super::builders::{CollegeBuilder, NewsItemBuilder};
use college_core::{Catalog, College, CollegeType, NewsItem, Section};
use serde_json::json;
use std::collections::HashMap;

/// The catalog the binary serves.
pub fn embedded_catalog() -> Catalog {
    Catalog::embedded().expect("embedded datasets must parse")
}

/// A five-college fixture with one record missing every sortable metric.
///
/// | id | state | type | fees | ranking |
/// |----|-------|------|------|---------|
/// | 1 | Goa | Public | 100 000 | 3 |
/// | 2 | Goa | Private | 900 000 | 7 |
/// | 3 | Kerala | Private | 400 000 | 7 |
/// | 4 | Kerala | Public | none | none |
/// | 5 | Goa | Private | 400 000 | 1 |
pub fn fixture_colleges() -> Vec<College> {
    vec![
        CollegeBuilder::new(1, "Coastal Institute of Technology")
            .state("Goa")
            .fees(100_000)
            .placement(900_000)
            .ranking(3)
            .rating(4.1)
            .build(),
        CollegeBuilder::new(2, "Harbour Medical College")
            .state("Goa")
            .kind(CollegeType::Private)
            .category("Medical")
            .fees(900_000)
            .placement(1_500_000)
            .ranking(7)
            .rating(4.5)
            .build(),
        CollegeBuilder::new(3, "Backwater Institute of Technology")
            .state("Kerala")
            .kind(CollegeType::Private)
            .fees(400_000)
            .placement(1_100_000)
            .ranking(7)
            .rating(3.9)
            .build(),
        CollegeBuilder::new(4, "Spice Coast Arts College")
            .state("Kerala")
            .category("Arts & Science")
            .build(),
        CollegeBuilder::new(5, "Mandovi School of Law")
            .state("Goa")
            .kind(CollegeType::Private)
            .category("Law")
            .fees(400_000)
            .placement(1_300_000)
            .ranking(1)
            .rating(4.4)
            .build(),
    ]
}

pub fn fixture_news() -> Vec<NewsItem> {
    vec![
        NewsItemBuilder::new("f1", "Robotics club wins regional cup")
            .excerpt("Team of six beat 40 entries")
            .date(2025, 3, 1)
            .build(),
        NewsItemBuilder::new("f2", "Library extends hours")
            .excerpt("Open until midnight during exams, robotics kits now lendable")
            .date(2025, 2, 1)
            .build(),
        NewsItemBuilder::new("f3", "Convocation dates announced")
            .excerpt("Ceremony moves to the new auditorium")
            .date(2025, 1, 1)
            .build(),
    ]
}

/// Minimal section payloads; every section is present so the profile is
/// complete.
pub fn fixture_sections() -> HashMap<Section, serde_json::Value> {
    Section::ALL
        .into_iter()
        .map(|section| (section, json!({ "section": section.name() })))
        .collect()
}

pub fn fixture_catalog() -> Catalog {
    Catalog::new(fixture_colleges(), fixture_news(), fixture_sections())
        .expect("fixture ids are unique")
}

/// `n` synthetic colleges cycling through a few states, types and metric
/// values, with every seventh record missing its metrics.
pub fn synthetic_colleges(n: u32) -> Vec<College> {
    const STATES: [&str; 4] = ["Delhi", "Goa", "Kerala", "Punjab"];
    (1..=n)
        .map(|id| {
            let mut builder = CollegeBuilder::new(id, format!("Synthetic College {id}"))
                .state(STATES[id as usize % STATES.len()])
                .kind(if id % 3 == 0 { CollegeType::Private } else { CollegeType::Public });
            if id % 7 != 0 {
                builder = builder
                    .fees(u64::from(id % 50) * 10_000)
                    .placement(u64::from(id % 40) * 50_000)
                    .ranking(id % 25)
                    .rating(f64::from(id % 50) / 10.0);
            }
            builder.build()
        })
        .collect()
}
