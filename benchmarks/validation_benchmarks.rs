#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Host validation benchmarks: uricheck vs url crate host parsing
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use uricheck::{validate_component, validate_dns_host, validate_host};

// Rust url crate
use url::Host as UrlHost;

const HOSTS: &[&str] = &[
    "example.com",
    "www.google.com",
    "docs.rs",
    "a.very.deeply.nested.subdomain.example.org",
    "xn--bcher-kva.example",
    "b%C3%BCcher.example",
    "127.0.0.1",
    "my-service-01.internal.cluster.local",
];

fn bench_dns_hosts(c: &mut Criterion) {
    let mut group = c.benchmark_group("dns_host");

    group.bench_function("uricheck", |b| {
        b.iter(|| {
            for host in HOSTS {
                let _ = black_box(validate_dns_host(black_box(host)));
            }
        });
    });

    group.bench_function("url", |b| {
        b.iter(|| {
            for host in HOSTS {
                let _ = black_box(UrlHost::parse(black_box(host)));
            }
        });
    });

    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let plain = "abcdefghijklmnopqrstuvwxyz0123456789-._~".repeat(8);
    let escaped = "%E6%97%A5%E6%9C%AC%20".repeat(16);

    let mut group = c.benchmark_group("component");
    group.bench_function("plain_ascii", |b| {
        b.iter(|| validate_component(black_box(&plain), &[]));
    });
    group.bench_function("percent_encoded", |b| {
        b.iter(|| validate_component(black_box(&escaped), &[]));
    });
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    c.bench_function("validate_host", |b| {
        b.iter(|| {
            for (scheme, host) in [
                ("https", "example.com"),
                ("file", "server_01"),
                ("http", "10.0.0.1"),
                ("urn", "isbn"),
            ] {
                let _ = black_box(validate_host(black_box(scheme), black_box(host)));
            }
        });
    });
}

criterion_group!(benches, bench_dns_hosts, bench_components, bench_dispatch);
criterion_main!(benches);
