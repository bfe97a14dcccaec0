use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use termpose::{from_str, parse_document, to_string, PrettyOptions};

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn inventory(size: u32) -> String {
    let mut text = String::from("inventory\n");
    for i in 0..size {
        text.push_str(&format!(
            "  item:{i}\n    name \"Product {i}\"\n    price {}\n    tags: new sale\n    notes \"\n      restocked weekly\n      fragile\n",
            9.99 + f64::from(i)
        ));
    }
    text
}

fn benchmark_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    for size in [10, 100, 1000].iter() {
        let text = inventory(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse_document(black_box(&text)))
        });
    }
    group.finish();
}

fn benchmark_parse_sugar(c: &mut Criterion) {
    let text = "a(b c:d e(f g:h:i) \"quoted atom\")\n".repeat(200);

    c.bench_function("parse_sugar_lines", |b| {
        b.iter(|| parse_document(black_box(&text)))
    });
}

fn benchmark_render(c: &mut Criterion) {
    let doc = parse_document(&inventory(100)).unwrap();
    let options = PrettyOptions::new().with_max_width(40);

    c.bench_function("render_canonical", |b| {
        b.iter(|| {
            black_box(&doc)
                .items
                .iter()
                .map(|t| t.to_canonical_string())
                .collect::<Vec<_>>()
        })
    });

    c.bench_function("render_compact", |b| {
        b.iter(|| {
            black_box(&doc)
                .items
                .iter()
                .map(|t| t.to_compact_string())
                .collect::<Vec<_>>()
        })
    });

    c.bench_function("render_pretty", |b| {
        b.iter(|| {
            black_box(&doc)
                .items
                .iter()
                .map(|t| t.to_pretty_string(&options))
                .collect::<Vec<_>>()
        })
    });

    c.bench_function("render_json", |b| {
        b.iter(|| {
            black_box(&doc)
                .items
                .iter()
                .map(|t| t.to_json_string())
                .collect::<Vec<_>>()
        })
    });
}

fn benchmark_serde(c: &mut Criterion) {
    let mut group = c.benchmark_group("serde_round_trip");

    for size in [10, 100].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect();
        let text = to_string(&products).unwrap();

        group.bench_with_input(BenchmarkId::new("serialize", size), size, |b, _| {
            b.iter(|| to_string(black_box(&products)))
        });
        group.bench_with_input(BenchmarkId::new("deserialize", size), size, |b, _| {
            b.iter(|| from_str::<Vec<Product>>(black_box(&text)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_document,
    benchmark_parse_sugar,
    benchmark_render,
    benchmark_serde
);
criterion_main!(benches);
