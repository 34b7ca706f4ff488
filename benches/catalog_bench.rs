//! Benchmarks for catalog search and route gating
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use croptrace::catalog::{filter_by_name, inventory, products, trace};
use croptrace::{resolve, Role, Route, User};

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for query in ["", "tom", "ORGANIC", "no such produce"] {
        group.throughput(Throughput::Elements(products::products().len() as u64));

        group.bench_function(format!("products_{:?}", query), |b| {
            b.iter(|| filter_by_name(black_box(products::products()), black_box(query)))
        });

        group.bench_function(format!("inventory_{:?}", query), |b| {
            b.iter(|| filter_by_name(black_box(inventory::inventory()), black_box(query)))
        });
    }

    group.bench_function("find_batch", |b| {
        b.iter(|| trace::find_batch(black_box(" ct-rce-2412 ")))
    });

    group.finish();
}

fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing");

    let users = [
        User::new("Asha").role(Role::Consumer),
        User::new("Ravi").role(Role::Retailer),
        User::new("Gopal").role(Role::Farmer),
    ];

    group.bench_function("parse_and_resolve", |b| {
        b.iter(|| {
            for path in ["/", "/login", "/dashboard", "/trace/", "/unknown"] {
                let route = Route::parse(black_box(path));
                black_box(resolve(route, None));
                for user in &users {
                    black_box(resolve(route, Some(user)));
                }
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_search, bench_routing);
criterion_main!(benches);
