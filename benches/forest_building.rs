//! Performance benchmarks for forest building and projection
//!
//! Measures:
//! - Forest construction over wide and deep menu sets
//! - Route projection over a built forest
//! - Association diffing of large permission sets
//!
//! Run with: cargo bench

use admin_tree::{
    association::diff,
    forest::{build_forest, ForestBuilder},
    menu::MenuRecord,
    projection::RouteProjection,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// Ten top-level menus, each with `per_parent` pages, each page with `per_parent` buttons.
fn wide_menus(per_parent: i64) -> Vec<MenuRecord> {
    let mut records = Vec::new();
    let mut next_id = 1;
    for _ in 0..10 {
        let top = next_id;
        next_id += 1;
        records.push(MenuRecord::new(top, 0, format!("menu-{top}")));
        for _ in 0..per_parent {
            let page = next_id;
            next_id += 1;
            records.push(MenuRecord::new(page, top, format!("page-{page}")));
            for _ in 0..per_parent {
                records.push(MenuRecord::new(next_id, page, format!("button-{next_id}")));
                next_id += 1;
            }
        }
    }
    records
}

fn deep_menus(depth: i64) -> Vec<MenuRecord> {
    (1..=depth)
        .map(|id| MenuRecord::new(id, id - 1, format!("level-{id}")))
        .collect()
}

fn bench_build_wide(c: &mut Criterion) {
    let records = wide_menus(30);

    c.bench_function("build_forest_wide", |b| {
        b.iter(|| {
            let forest = build_forest(black_box(&records), Some(&0)).unwrap();
            forest.node_count()
        });
    });

    c.bench_function("build_forest_wide_detached_roots", |b| {
        b.iter(|| {
            let forest = build_forest(black_box(&records), None).unwrap();
            forest.node_count()
        });
    });
}

fn bench_build_deep(c: &mut Criterion) {
    let records = deep_menus(5_000);
    let builder = ForestBuilder::new(usize::MAX);

    c.bench_function("build_forest_deep", |b| {
        b.iter(|| {
            let forest = builder.build(black_box(&records), Some(&0)).unwrap();
            forest.node_count()
        });
    });
}

fn bench_route_projection(c: &mut Criterion) {
    let records = wide_menus(30);
    let forest = build_forest(&records, Some(&0)).unwrap();
    let projection = RouteProjection::default();

    c.bench_function("route_projection", |b| {
        b.iter(|| forest.project(black_box(&projection)).len());
    });
}

fn bench_association_diff(c: &mut Criterion) {
    let existing: Vec<i64> = (0..10_000).collect();
    let desired: Vec<i64> = (5_000..15_000).collect();

    c.bench_function("association_diff", |b| {
        b.iter(|| {
            let changes = diff(
                black_box(existing.iter().copied()),
                black_box(desired.iter().copied()),
            )
            .unwrap();
            changes.to_insert.len() + changes.to_delete.len()
        });
    });
}

criterion_group!(
    benches,
    bench_build_wide,
    bench_build_deep,
    bench_route_projection,
    bench_association_diff
);
criterion_main!(benches);
