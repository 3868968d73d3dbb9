use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mess_discovery::{
    algorithms::filter::filter,
    models::{Coordinate, CuisineType, FilterSpec, ServiceType, SortField, SortOrder},
    search,
    utils::catalog::generate_catalog,
};

fn benchmark_search(c: &mut Criterion) {
    // Create benchmark data
    let catalog = generate_catalog(2_000, 17);
    let instant = NaiveDate::from_ymd_opt(2024, 1, 3)
        .unwrap()
        .and_hms_opt(13, 0, 0)
        .unwrap();
    let origin = Coordinate::new(18.5204, 73.8567);

    let attribute_spec = FilterSpec::new()
        .cuisine(&[CuisineType::Maharashtrian, CuisineType::Gujarati])
        .service_types(&[ServiceType::Delivery])
        .veg_only();
    let proximity_spec = FilterSpec::new().near(origin, 5.0);
    let sorted_spec = FilterSpec::new()
        .origin(origin)
        .sort_by(SortField::Rating, SortOrder::Desc);

    c.bench_function("filter_attributes", |b| {
        b.iter(|| filter(black_box(&catalog), black_box(&attribute_spec)))
    });

    c.bench_function("search_proximity", |b| {
        b.iter(|| search(black_box(&catalog), black_box(&proximity_spec), instant))
    });

    c.bench_function("search_sorted_by_rating", |b| {
        b.iter(|| search(black_box(&catalog), black_box(&sorted_spec), instant))
    });
}

criterion_group!(benches, benchmark_search);
criterion_main!(benches);
