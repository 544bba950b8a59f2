//! Benchmarks for the changeset reconciliation path.
//!
//! Compares the incremental batch path against the full-reload fallback for
//! growing changeset sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rowbind_core::Changeset;
use rowbind_datasource::{RenderConfig, TableDataSource};
use rowbind_surface::{HeadlessCell, HeadlessList};
use std::cell::RefCell;
use std::rc::Rc;

const ROWS: usize = 10_000;

fn bound(rows: usize) -> (TableDataSource<u64, HeadlessList>, Rc<RefCell<HeadlessList>>) {
    let config = RenderConfig::with_configurator("item", |cell: &mut HeadlessCell, _address, item: &u64| {
        cell.text = item.to_string();
    })
    .unwrap();
    let mut ds = TableDataSource::new(config);
    let surface = Rc::new(RefCell::new(HeadlessList::with_rows(rows)));
    ds.bind(surface.clone());
    (ds, surface)
}

fn shared(len: usize) -> Rc<RefCell<Vec<u64>>> {
    Rc::new(RefCell::new((0..len as u64).collect()))
}

fn bench_incremental(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental");

    for size in [1usize, 10, 100, 1000] {
        let mut changes = Changeset::new();
        for i in 0..size {
            changes.record_delete(i);
            changes.record_insert(i);
            changes.record_update(ROWS - size + i);
        }

        group.bench_with_input(BenchmarkId::new("batch", size), &changes, |b, changes| {
            b.iter(|| {
                let (mut ds, _surface) = bound(ROWS);
                ds.apply_changes(black_box(shared(ROWS)), Some(black_box(changes)));
            })
        });
    }

    group.finish();
}

fn bench_reload_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("reload");

    group.bench_function("absent_changeset", |b| {
        b.iter(|| {
            let (mut ds, _surface) = bound(ROWS);
            ds.apply_changes(black_box(shared(ROWS)), None);
        })
    });

    group.bench_function("stale_changeset", |b| {
        let changes = Changeset::deleted_at(0);
        b.iter(|| {
            let (mut ds, _surface) = bound(ROWS);
            ds.apply_changes(black_box(shared(ROWS)), Some(black_box(&changes)));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_incremental, bench_reload_fallback);
criterion_main!(benches);
