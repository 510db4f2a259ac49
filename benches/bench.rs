// Criterion benchmarks for campscout

use campscout::core::{is_available, Matcher, PreferenceExtractor};
use campscout::models::{Booking, CampStatus, CampgroundRecord};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_camp(id: usize) -> CampgroundRecord {
    let locations = ["Kerala", "Gujarat", "Rajasthan", "Uttarakhand", "Tamil Nadu"];
    let lodgings = ["Tent", "Cabin", "RV"];

    CampgroundRecord {
        id: format!("C{}", id),
        name: format!("Camp {}", id),
        location: locations[id % locations.len()].to_string(),
        lodging_type: lodgings[id % lodgings.len()].to_string(),
        activities: vec!["Hiking".to_string(), "Bonfire".to_string()],
        amenities: vec!["Toilets".to_string()],
        status: if id % 7 == 0 {
            CampStatus::Inactive
        } else {
            CampStatus::Active
        },
        owner_id: "owner".to_string(),
        bookings: vec![],
    }
}

fn create_booking(id: usize) -> Booking {
    Booking {
        username: "meera".to_string(),
        camp_id: format!("C{}", id),
        camp_name: format!("Camp {}", id),
        from_date: "2024-06-01".parse().unwrap(),
        to_date: "2024-06-05".parse().unwrap(),
    }
}

fn bench_extract_preferences(c: &mut Criterion) {
    let extractor = PreferenceExtractor::with_gazetteer();

    c.bench_function("extract_preferences", |b| {
        b.iter(|| {
            extractor.extract(black_box(
                "I want a tent in Kerala with hiking, bonfire and cultural shows, wi-fi a plus",
            ))
        });
    });
}

fn bench_is_available(c: &mut Criterion) {
    let bookings: Vec<Booking> = (0..1000).map(create_booking).collect();
    let from = "2024-06-03".parse().unwrap();
    let to = "2024-06-08".parse().unwrap();

    c.bench_function("is_available_1000_bookings", |b| {
        b.iter(|| is_available(black_box("C999"), black_box(from), black_box(to), &bookings));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let extractor = PreferenceExtractor::with_gazetteer();
    let matcher = Matcher::with_default_weights();
    let prefs = extractor.extract("tent in kerala with hiking and bonfire");

    let mut group = c.benchmark_group("ranking");

    for catalog_size in [10, 50, 100, 500, 1000].iter() {
        let catalog: Vec<CampgroundRecord> = (0..*catalog_size).map(create_camp).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(catalog_size),
            &catalog,
            |b, catalog| {
                b.iter(|| matcher.rank(black_box(&prefs), black_box(catalog), None, &[]));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_preferences,
    bench_is_available,
    bench_ranking
);
criterion_main!(benches);
