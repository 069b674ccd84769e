use cityweather::{normalize, parse_catalog, ForecastDocument};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn catalog_text(rows: usize) -> String {
    let mut text = String::from("latitude,longitude,city,country\n");
    for i in 0..rows {
        text.push_str(&format!("{:.4},{:.4},City {},Country {}\n", i as f64 * 0.01, i as f64 * 0.02, i, i % 50));
    }
    text
}

fn forecast_document(entries: u64) -> ForecastDocument {
    let series: Vec<_> = (0..entries)
        .map(|i| {
            json!({
                "date": 20240101 + i / 8,
                "weather": "pcloudy",
                "temp2m": {"max": 12, "min": 3},
                "wind10m_max": 4
            })
        })
        .collect();
    serde_json::from_value(json!({ "dataseries": series })).unwrap()
}

fn bench_parsing(c: &mut Criterion) {
    let catalog = catalog_text(5_000);
    let document = forecast_document(64);
    c.bench_function("parse_catalog", |b| b.iter(|| parse_catalog(black_box(&catalog))));
    c.bench_function("normalize", |b| b.iter(|| normalize(black_box(&document))));
}

criterion_group!(benches, bench_parsing);
criterion_main!(benches);
