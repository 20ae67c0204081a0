//! Benchmarks for keyed store operations at personal contact-list sizes.
//!
//! Lookups are linear scans, so these measure the worst case (last record
//! or a miss) for a few hundred to a few thousand contacts.

use contact_book::models::Contact;
use contact_book::store::ContactStore;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const SIZES: [usize; 3] = [100, 1_000, 5_000];

fn build_store(size: usize) -> ContactStore {
    let contacts = (0..size)
        .map(|i| Contact {
            first_name: format!("First{}", letters(i)),
            last_name: format!("Last{}", letters(i)),
            phone: "1234567890".to_string(),
            email: format!("person{}@example.com", i),
            ..Default::default()
        })
        .collect::<Vec<_>>();
    ContactStore::from(contacts)
}

/// Encode `i` as letters so generated names stay alphabetic.
fn letters(mut i: usize) -> String {
    let mut out = String::new();
    loop {
        out.push((b'a' + (i % 26) as u8) as char);
        i /= 26;
        if i == 0 {
            return out;
        }
    }
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    for size in SIZES {
        let store = build_store(size);
        let last = store.list()[size - 1].clone();

        group.bench_with_input(BenchmarkId::new("last", size), &store, |b, store| {
            b.iter(|| store.get(black_box(&last.first_name), black_box(&last.last_name)))
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &store, |b, store| {
            b.iter(|| store.get(black_box("Nobody"), black_box("Here")))
        });
    }
    group.finish();
}

fn bench_update_and_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutate");
    for size in SIZES {
        let store = build_store(size);
        let last = store.list()[size - 1].clone();

        group.bench_function(BenchmarkId::new("update_phone_last", size), |b| {
            let mut store = store.clone();
            b.iter(|| {
                store
                    .update_phone(&last.first_name, &last.last_name, black_box("555.666.7777"))
                    .ok()
            })
        });
        group.bench_function(BenchmarkId::new("delete_first", size), |b| {
            b.iter_batched(
                || store.clone(),
                |mut store| {
                    let first = store.list()[0].clone();
                    store.delete(&first.first_name, &first.last_name).ok()
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_get, bench_update_and_delete);
criterion_main!(benches);
