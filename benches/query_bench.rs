//! Query engine benchmarks.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `embedded` | Listing and news queries over the shipped 15-college catalog |
//! | `scaling` | Filter + sort + page over synthetic catalogs from 1k to 100k records |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench query_bench
//! open target/criterion/report/index.html
//! ```

use college_core::{
    Catalog, College, CollegeFilter, CollegeSort, CollegeType, PageRequest,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::HashMap;
use std::hint::black_box;

const STATES: [&str; 4] = ["Delhi", "Goa", "Kerala", "Punjab"];

fn synthetic_catalog(n: u32) -> Catalog {
    let colleges: Vec<College> = (1..=n)
        .map(|id| College {
            id,
            name: format!("Synthetic Institute {id}"),
            short_name: format!("SI{id}"),
            location: "Bench City".to_string(),
            state: STATES[id as usize % STATES.len()].to_string(),
            rating: Some(f64::from(id % 50) / 10.0),
            reviews: id % 1_000,
            kind: if id % 3 == 0 { CollegeType::Private } else { CollegeType::Public },
            category: "Engineering".to_string(),
            established: 1950 + (id % 70) as u16,
            fees: (id % 7 != 0).then(|| u64::from(id % 50) * 10_000),
            placement: Some(u64::from(id % 40) * 50_000),
            ranking: Some(id % 100),
            featured: id % 11 == 0,
            courses: 10,
            students: 1_000,
            image: String::new(),
        })
        .collect();
    Catalog::new(colleges, Vec::new(), HashMap::new()).expect("synthetic ids are unique")
}

fn page(page: usize, size: usize) -> PageRequest {
    PageRequest::new(page, size, 100).expect("valid page")
}

// ---------------------------------------------------------------------------
// Embedded catalog
// ---------------------------------------------------------------------------

fn embedded_bench(c: &mut Criterion) {
    let catalog = Catalog::embedded().expect("embedded datasets parse");
    let mut group = c.benchmark_group("embedded");

    group.bench_function("unfiltered_first_page", |b| {
        let filter = CollegeFilter::default();
        b.iter(|| black_box(catalog.list_colleges(&filter, page(1, 10))))
    });

    group.bench_function("private_by_fees", |b| {
        let filter = CollegeFilter {
            kind: Some(CollegeType::Private),
            sort: Some(CollegeSort::Fees),
            ..Default::default()
        };
        b.iter(|| black_box(catalog.list_colleges(&filter, page(1, 3))))
    });

    group.bench_function("news_search", |b| {
        b.iter(|| black_box(catalog.news_for(1, Some(black_box("robotics")), page(1, 10))))
    });

    group.bench_function("parse_catalog", |b| {
        b.iter(|| black_box(Catalog::embedded().expect("embedded datasets parse")))
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for n in [1_000u32, 10_000, 100_000] {
        let catalog = synthetic_catalog(n);
        group.throughput(Throughput::Elements(u64::from(n)));

        group.bench_with_input(BenchmarkId::new("search_state", n), &catalog, |b, catalog| {
            let filter = CollegeFilter {
                search: Some("institute 9".into()),
                state: Some("Goa".into()),
                ..Default::default()
            };
            b.iter(|| black_box(catalog.list_colleges(&filter, page(1, 20))))
        });

        group.bench_with_input(BenchmarkId::new("sort_ranking", n), &catalog, |b, catalog| {
            let filter = CollegeFilter {
                sort: Some(CollegeSort::Ranking),
                ..Default::default()
            };
            b.iter(|| black_box(catalog.list_colleges(&filter, page(5, 50))))
        });
    }

    group.finish();
}

criterion_group!(benches, embedded_bench, scaling_bench);
criterion_main!(benches);
