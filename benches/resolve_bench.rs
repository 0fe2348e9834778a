//! Benchmarks for namefs name decoding and resolution

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use namefs::catalog::{FileEntry, FileType, SqliteCatalog, VersionRecord};
use namefs::name::{decode_name, Name};
use namefs::resolver::Resolver;

const PREFIX: &str = "/ndn/namefs";

fn seeded_catalog() -> SqliteCatalog {
    let catalog = SqliteCatalog::in_memory().unwrap();
    catalog
        .insert_entry(&FileEntry {
            path: "/bench.bin".to_string(),
            parent: "/".to_string(),
            file_type: FileType::File,
            mtime: 1_700_000_000,
            current_version: Some(1),
        })
        .unwrap();
    catalog
        .insert_version(
            "/bench.bin",
            1,
            &VersionRecord {
                size: 8192,
                total_segments: 2,
            },
        )
        .unwrap();
    catalog
        .insert_segment("/bench.bin", 1, 0, &[0xAB; 4096])
        .unwrap();
    catalog
        .insert_segment("/bench.bin", 1, 1, &[0xCD; 4096])
        .unwrap();
    catalog
}

fn resolve_benchmarks(c: &mut Criterion) {
    let name = Name::from_uri("/ndn/namefs/bench.bin")
        .unwrap()
        .append_version(1)
        .append_segment(0);

    c.bench_function("decode_name", |b| {
        b.iter(|| decode_name(black_box(&name), PREFIX))
    });

    let resolver = Resolver::new(seeded_catalog());
    let segment_request = decode_name(&name, PREFIX);
    c.bench_function("resolve_segment", |b| {
        b.iter(|| resolver.resolve(black_box(&segment_request)).unwrap())
    });

    let bare_request = decode_name(&Name::from_uri("/ndn/namefs/bench.bin").unwrap(), PREFIX);
    c.bench_function("resolve_redirect_descriptor", |b| {
        b.iter(|| resolver.resolve(black_box(&bare_request)).unwrap())
    });
}

criterion_group!(benches, resolve_benchmarks);
criterion_main!(benches);
