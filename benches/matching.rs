//! Criterion benchmarks for route matching.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use uuid::Uuid;

use deeplink_router::{
    PartialIso, Router, UrlData, end, host, path, path_as, query_opt, scheme,
};

#[derive(Debug, Clone, PartialEq)]
enum Route {
    Home,
    Article(i64, Option<String>),
    Programme(Uuid),
    Series(String),
    Other(String, i64, Option<bool>),
}

fn route_table() -> Router<Route> {
    Router::new()
        .route(
            scheme("myapp")
                .with(host("goto"))
                .with(path("home"))
                .skip(end())
                .via(PartialIso::new(
                    |()| Some(Route::Home),
                    |route| matches!(route, Route::Home).then_some(()),
                )),
        )
        .route(
            scheme("myapp")
                .with(host("goto"))
                .with(path("article"))
                .with(path_as(PartialIso::int()))
                .and(query_opt("theme", PartialIso::string().optional()))
                .skip(end())
                .via(PartialIso::new(
                    |(id, theme)| Some(Route::Article(id, theme)),
                    |route| match route {
                        Route::Article(id, theme) => Some((id, theme)),
                        _ => None,
                    },
                )),
        )
        .route(
            scheme("myapp")
                .with(host("goto"))
                .with(path("discover"))
                .with(path("programme"))
                .with(path_as(PartialIso::uuid()))
                .skip(end())
                .via(PartialIso::new(
                    |id| Some(Route::Programme(id)),
                    |route| match route {
                        Route::Programme(id) => Some(id),
                        _ => None,
                    },
                )),
        )
        .route(
            scheme("myapp")
                .with(host("goto"))
                .with(path("discover"))
                .with(path("series"))
                .with(path_as(PartialIso::string()))
                .skip(end())
                .via(PartialIso::new(
                    |name| Some(Route::Series(name)),
                    |route| match route {
                        Route::Series(name) => Some(name),
                        _ => None,
                    },
                )),
        )
        .route(
            scheme("myapp")
                .with(host("goto"))
                .with(path("discover"))
                .with(path("other"))
                .with(path_as(PartialIso::string()))
                .and(path_as(PartialIso::int()))
                .and3(query_opt("test", PartialIso::boolean().optional()))
                .skip(end())
                .via(PartialIso::new(
                    |(s, n, b)| Some(Route::Other(s, n, b)),
                    |route| match route {
                        Route::Other(s, n, b) => Some((s, n, b)),
                        _ => None,
                    },
                )),
        )
}

/// Benchmark: full resolution across table positions
fn bench_resolve(c: &mut Criterion) {
    let router = route_table();
    let mut group = c.benchmark_group("resolve");

    let test_cases = [
        ("first_route", "myapp://goto/home"),
        ("mid_table", "myapp://goto/article/123?theme=vip"),
        (
            "uuid_parameter",
            "myapp://goto/discover/programme/67e55044-10b1-426f-9247-bb680e5fe0c8",
        ),
        (
            "last_route",
            "myapp://goto/discover/other/hello-world/123?test=true",
        ),
        ("miss", "myapp://goto/discover/unknown/route"),
    ];

    for (name, input) in test_cases {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("url", name), &input, |b, input| {
            b.iter(|| router.resolve_str(black_box(input)));
        });
    }

    group.finish();
}

/// Benchmark: decomposition alone
fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");

    let test_cases = [
        ("minimal", "myapp://goto/home"),
        ("typical", "myapp://goto/article/123?theme=vip"),
        (
            "deep_path",
            "myapp://goto/level1/level2/level3/level4/level5?a=1&b=2&c=3",
        ),
    ];

    for (name, input) in test_cases {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("url", name), &input, |b, input| {
            b.iter(|| UrlData::parse(black_box(input)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_decompose);
criterion_main!(benches);
