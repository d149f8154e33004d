//! Search layer benchmarks.
//!
//! Every keystroke in the search box (after the debounce) re-ranks the whole
//! catalog, and every category tab re-filters it, so both must stay well
//! under a frame even for catalogs far larger than the built-in one.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `rank` | Tokenize, score, group and dedupe at 1-3 query tokens |
//! | `filter_by_category` | Exact-then-fuzzy category filter, hit and miss |
//! | `paginate` | Load-more slicing (should be effectively free) |
//! | `scaling` | `rank` throughput as the catalog grows from 1k to 100k |
//!
//! # Key performance targets (aspirational, not enforced in CI yet)
//!
//! - Two-token rank over 10k items: < 5 ms
//! - Category filter over 10k items: < 2 ms
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use zyn_core::search::{filter_by_category, paginate, rank};
use zyn_core::Item;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const BRANDS: &[&str] = &["Nike", "Adidas", "Lumo", "Acme", "Globex", "Initech", "Puma"];
const CATEGORIES: &[&str] = &["shoes", "fashion", "home", "sports", "electronics", "beauty"];
const NOUNS: &[&str] = &["Shoe", "Lamp", "Tee", "Bottle", "Watch", "Kettle", "Jacket", "Mat"];
const ADJECTIVES: &[&str] = &["Red", "Running", "Desk", "Classic", "Smart", "Light", "Travel"];

/// Deterministic synthetic catalog; the same `n` always yields the same items.
fn catalog(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item {
            id: i as u32,
            title: format!(
                "{} {} {}",
                ADJECTIVES[i % ADJECTIVES.len()],
                NOUNS[(i / 3) % NOUNS.len()],
                i
            ),
            brand: BRANDS[(i / 7) % BRANDS.len()].to_string(),
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            description: format!(
                "A {} {} for everyday use",
                ADJECTIVES[(i / 5) % ADJECTIVES.len()].to_lowercase(),
                NOUNS[i % NOUNS.len()].to_lowercase()
            ),
            price: 5.0 + (i % 200) as f64,
            rating: (i % 5) as f32 + 0.5,
            image: String::new(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Rank
// ---------------------------------------------------------------------------

fn rank_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let items = catalog(10_000);
    group.throughput(Throughput::Elements(items.len() as u64));

    for query in ["shoe", "nike shoe", "red running lamp", "zzz"] {
        group.bench_with_input(BenchmarkId::new("10k", query), &query, |b, q| {
            b.iter(|| rank(black_box(q), black_box(&items)))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Category filter
// ---------------------------------------------------------------------------

fn filter_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_category");
    let items = catalog(10_000);
    group.throughput(Throughput::Elements(items.len() as u64));

    // "sports" hits exact categories; "jacket" only matches via titles
    for filter in ["all", "sports", "jacket", "garden"] {
        group.bench_with_input(BenchmarkId::new("10k", filter), &filter, |b, f| {
            b.iter(|| filter_by_category(black_box(f), black_box(&items)))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

fn paginate_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("paginate");
    let items = catalog(10_000);

    for page in [1usize, 400, 900] {
        group.bench_with_input(BenchmarkId::new("page", page), &page, |b, &p| {
            b.iter(|| paginate(black_box(&items), black_box(p), 12).len())
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    group.sample_size(20);

    for n in [1_000usize, 10_000, 100_000] {
        let items = catalog(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("rank_nike_shoe", n), &items, |b, items| {
            b.iter(|| rank(black_box("nike shoe"), black_box(items)))
        });
    }

    group.finish();
}

criterion_group!(benches, rank_bench, filter_bench, paginate_bench, scaling_bench);
criterion_main!(benches);
