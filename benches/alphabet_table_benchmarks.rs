//! Alphabet Table Benchmarks
//!
//! Criterion benchmarks for hashing and bucket operations.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use alphabet_table_lib::data_structures::alphabet_table::{hash_code, AlphabetTable, CYRILLIC, LATIN};

/// Every two-letter key over both alphabets, 59 * 59 keys.
fn all_pairs() -> Vec<String> {
    let letters: Vec<char> = LATIN.chars().chain(CYRILLIC.chars()).collect();
    letters
        .iter()
        .flat_map(|a| letters.iter().map(move |b| format!("{a}{b}")))
        .collect()
}

/// Benchmark the positional hash
fn bench_hash(c: &mut Criterion) {
    let keys = all_pairs();
    let mut group = c.benchmark_group("alphabet_hash");
    group.measurement_time(Duration::from_secs(2));
    group.throughput(Throughput::Elements(keys.len() as u64));

    group.bench_function("hash_code_all_pairs", |b| {
        b.iter(|| {
            for key in &keys {
                let _ = black_box(hash_code(black_box(key)));
            }
        });
    });

    group.finish();
}

/// Benchmark insert and lookup for different bucket counts
fn bench_table(c: &mut Criterion) {
    let keys = all_pairs();
    let mut group = c.benchmark_group("alphabet_table");
    group.measurement_time(Duration::from_secs(2));
    group.throughput(Throughput::Elements(keys.len() as u64));

    for capacity in [7usize, 101, 4099].iter() {
        group.bench_with_input(BenchmarkId::new("insert", capacity), capacity, |b, &capacity| {
            b.iter(|| {
                let mut table = AlphabetTable::new(capacity).unwrap();
                for key in &keys {
                    table.insert(key.as_str(), "value").unwrap();
                }
                black_box(table.len())
            });
        });

        let mut table = AlphabetTable::new(*capacity).unwrap();
        for key in &keys {
            table.insert(key.as_str(), "value").unwrap();
        }
        group.bench_with_input(BenchmarkId::new("get", capacity), &table, |b, table| {
            b.iter(|| {
                for key in &keys {
                    let _ = black_box(table.get(black_box(key)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hash, bench_table);
criterion_main!(benches);
