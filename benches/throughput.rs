use criterion::{black_box, criterion_group, criterion_main, Criterion};
use http::Method;
use switchyard::{config::parse_routes, config::RouteFormat, path::tokenize, RouteTable};

fn example_routes() -> &'static str {
    r#"
routes:
  - { kind: dispatch, method: GET, path: /, to: "Zoo#root" }
  - { kind: resources, controller: Zoo.Animals }
  - { kind: dispatch, method: GET, path: "/zoo/animals/:id/toys/:toy_id", to: "Toys#show" }
  - { kind: dispatch, method: GET, path: "/zoo/:category/animals/:id/habitats/:habitat_id/sections/:section_id", to: "Habitats#section" }
  - { kind: dispatch, method: POST, path: "/inventory/:warehouse_id/feeds/:feed_id/items/:item_id/batches/:batch_id", to: "Inventory#batch" }
  - { kind: dispatch, method: GET, path: "/complex/:a/:b/:c/:d/:e/:f/:g/:h/:i", to: "Complex#many" }
  - { kind: dispatch, method: HEAD, path: /zoo/health, to: "Health#check" }
  - { kind: regex, method: GET, pattern: "^/assets/(?P<file>.+)$", to: "Assets#serve" }
"#
}

fn load_table() -> RouteTable {
    parse_routes(example_routes(), RouteFormat::Yaml).expect("failed to load routes")
}

fn bench_route_throughput(c: &mut Criterion) {
    let table = load_table();
    c.bench_function("route_match", |b| {
        let test_paths = [
            (Method::GET, "/animals/123"),
            (Method::GET, "/zoo/animals/123/toys/456"),
            (Method::GET, "/zoo/cats/animals/123/habitats/88/sections/5"),
            (Method::POST, "/inventory/1/feeds/2/items/3/batches/4"),
            (Method::GET, "/complex/1/2/3/4/5/6/7/8/9"),
            (Method::GET, "/assets/css/site.css"),
        ];
        b.iter(|| {
            for (method, path) in test_paths.iter() {
                let res = table.route(method, path);
                black_box(&res);
            }
        })
    });
}

fn bench_find_miss(c: &mut Criterion) {
    let table = load_table();
    c.bench_function("find_miss_full_scan", |b| {
        b.iter(|| black_box(table.find(&Method::PATCH, black_box("/nowhere/at/all"))))
    });
}

fn bench_link(c: &mut Criterion) {
    let table = load_table();
    let bindings = [("category", "cats"), ("id", "1"), ("habitat_id", "2"), ("section_id", "3")];
    c.bench_function("link", |b| {
        b.iter(|| black_box(table.link("Habitats", "section", &bindings)))
    });
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize", |b| {
        b.iter(|| black_box(tokenize(black_box("/zoo/cats/animals/123/habitats/88/sections/5"))))
    });
}

criterion_group!(benches, bench_route_throughput, bench_find_miss, bench_link, bench_tokenize);
criterion_main!(benches);
