//! ASN.1 codec and OID registry benchmarks.
//!
//! Run with: cargo bench -p asnkit-utils

use asnkit_utils::asn1::{decode, traverse, Asn1Constructive, Asn1Data, Asn1Primitive, Tagging};
use asnkit_utils::oid::OidRegistry;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// A SEQUENCE of `n` RDN-like entries, each `SET { SEQUENCE { OID, UTF8String } }`.
fn name_with_entries(n: usize) -> Asn1Data {
    let entries: Vec<Asn1Data> = (0..n)
        .map(|i| {
            let attr = if i % 2 == 0 { "CN" } else { "O" };
            Asn1Constructive::set(vec![Asn1Constructive::sequence(vec![
                Asn1Primitive::object_id(attr).into(),
                Asn1Primitive::utf8_string(&format!("entry number {i}")).into(),
            ])
            .into()])
            .into()
        })
        .collect();
    Asn1Constructive::sequence(vec![
        Asn1Primitive::integer(2).with_tag(0, Tagging::Explicit).into(),
        Asn1Constructive::sequence(entries).into(),
    ])
    .into()
}

// ---------------------------------------------------------------------------
// Codec benchmarks
// ---------------------------------------------------------------------------

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("asn1");

    for entries in [4usize, 64, 1024] {
        let tree = name_with_entries(entries);
        let der = tree.to_der().unwrap();
        group.throughput(Throughput::Bytes(der.len() as u64));

        group.bench_with_input(BenchmarkId::new("decode", entries), &der, |b, der| {
            b.iter(|| decode(der).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("traverse", entries), &der, |b, der| {
            b.iter(|| traverse(der).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("encode", entries), &tree, |b, tree| {
            b.iter(|| tree.to_der().unwrap());
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Registry benchmarks
// ---------------------------------------------------------------------------

fn bench_registry(c: &mut Criterion) {
    let reg = OidRegistry::global();
    let mut group = c.benchmark_group("oid-registry");

    group.bench_function("resolve", |b| {
        b.iter(|| reg.resolve("commonName"));
    });
    group.bench_function("long_name_for", |b| {
        b.iter(|| reg.long_name_for("2.5.4.3"));
    });

    group.finish();
}

criterion_group!(benches, bench_codec, bench_registry);
criterion_main!(benches);
