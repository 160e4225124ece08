use catalog_reader::system_catalog::sys::{DmResourceGovernorResourcePool, Schema};
use catalog_reader::{read_all, CatalogRow, FrameCursor, MemoryCursor, Value};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput};
use polars::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn gen_schemas_frame(n: usize, seed: u64) -> DataFrame {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut name: Vec<String> = Vec::with_capacity(n);
    let mut schema_id: Vec<i32> = Vec::with_capacity(n);
    let mut principal_id: Vec<Option<i32>> = Vec::with_capacity(n);
    for i in 0..n {
        name.push(format!("schema_{}", i));
        schema_id.push(i as i32);
        principal_id.push(if rng.gen_bool(0.2) { None } else { Some(rng.gen_range(1..500)) });
    }
    DataFrame::new(vec![
        Series::new("name".into(), name).into(),
        Series::new("schema_id".into(), schema_id).into(),
        Series::new("principal_id".into(), principal_id).into(),
    ])
    .expect("df build")
}

// Wide rows: every resource pool column filled with random data of its declared type.
fn gen_pool_rows(n: usize, seed: u64) -> Vec<Vec<Value>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let cols = DmResourceGovernorResourcePool::SCHEMA.columns;
    (0..n)
        .map(|_| {
            cols.iter()
                .map(|c| {
                    if c.nullable && rng.gen_bool(0.1) {
                        return Value::Null;
                    }
                    match c.scalar {
                        catalog_reader::ScalarType::Int16 => Value::Int16(rng.gen()),
                        catalog_reader::ScalarType::Int32 => Value::Int32(rng.gen()),
                        catalog_reader::ScalarType::Int64 => Value::Int64(rng.gen()),
                        catalog_reader::ScalarType::Byte => Value::Byte(rng.gen()),
                        catalog_reader::ScalarType::Bool => Value::Bool(rng.gen()),
                        catalog_reader::ScalarType::Float => Value::Float(rng.gen()),
                        catalog_reader::ScalarType::Double => Value::Double(rng.gen()),
                        catalog_reader::ScalarType::DateTime => Value::DateTime(
                            chrono::DateTime::from_timestamp(1_700_000_000 + rng.gen_range(0..86_400), 0)
                                .expect("ts")
                                .naive_utc(),
                        ),
                        catalog_reader::ScalarType::Text => Value::from(format!("pool_{}", rng.gen::<u16>())),
                        other => panic!("unexpected column type {}", other),
                    }
                })
                .collect()
        })
        .collect()
}

fn bench_drain(c: &mut Criterion) {
    let ns = [1_000usize, 100_000usize];
    let mut group = c.benchmark_group("drain");
    group.sampling_mode(SamplingMode::Flat);
    group.sample_size(20);

    for &n in &ns {
        group.throughput(Throughput::Elements(n as u64));

        let df = gen_schemas_frame(n, 0xC0FF_EE00);
        group.bench_with_input(BenchmarkId::new("frame_schemas", n.to_string()), &n, |b, _| {
            b.iter(|| {
                let rows: Vec<Schema> = read_all(FrameCursor::new(df.clone())).unwrap();
                assert_eq!(rows.len(), n);
            });
        });

        let pools = gen_pool_rows(n, 0xABCD_1234);
        group.bench_with_input(BenchmarkId::new("memory_resource_pools", n.to_string()), &n, |b, _| {
            b.iter(|| {
                let cols = DmResourceGovernorResourcePool::SCHEMA.columns;
                let mut cursor = MemoryCursor::new(cols.iter().map(|c| (c.name, c.scalar)));
                for row in pools.iter().cloned() {
                    cursor.push_row(row);
                }
                let rows: Vec<DmResourceGovernorResourcePool> = read_all(cursor).unwrap();
                assert_eq!(rows.len(), n);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drain);
criterion_main!(benches);
