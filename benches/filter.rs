// benches/filter.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use offerings_browser::{
    filter::{self, FilterCriteria},
    model::{Dataset, Offering},
};

const COUNTRIES: [&str; 6] = ["Peru", "Chile", "India", "Kenya", "Norway", "Japan"];
const CITIES: [&str; 4] = ["North", "South", "Harbor", "Hill"];

// Synthetic year: real files run to a few thousand entries.
fn synthetic(n: usize) -> Dataset {
    Dataset::new(
        (0..n)
            .map(|i| {
                Offering::default()
                    .with_name(format!("Person {i}"))
                    .with_city(CITIES[i % CITIES.len()])
                    .with_country(COUNTRIES[i % COUNTRIES.len()])
                    .with_body(format!("I offer song number {i} and a loaf of banana bread. ").repeat(6))
            })
            .collect(),
    )
}

fn bench_filter(c: &mut Criterion) {
    let ds = synthetic(5_000);

    c.bench_function("filter_identity", |b| {
        let crit = FilterCriteria::default();
        b.iter(|| black_box(filter::apply(black_box(&ds), &crit).len()))
    });

    c.bench_function("filter_query", |b| {
        let crit = FilterCriteria::default().with_query("BANANA");
        b.iter(|| black_box(filter::apply(black_box(&ds), &crit).len()))
    });

    c.bench_function("filter_query_miss", |b| {
        let crit = FilterCriteria::default().with_query("zzzz");
        b.iter(|| black_box(filter::apply(black_box(&ds), &crit).len()))
    });

    c.bench_function("filter_combined", |b| {
        let crit = FilterCriteria::default()
            .with_query("song")
            .with_country("Kenya")
            .with_city("Hill");
        b.iter(|| black_box(filter::apply(black_box(&ds), &crit).len()))
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
