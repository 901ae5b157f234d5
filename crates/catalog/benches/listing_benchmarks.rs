use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use shopwindow_catalog::{
    project, Category, CategoryFilter, FilterCriteria, Product, SortKey,
};
use shopwindow_core::ProductId;

/// Builds a catalog large enough to make sort cost visible. Prices, ratings
/// and categories cycle so every filter and sort key has work to do.
fn synthetic_catalog(size: usize) -> Vec<Product> {
    (0..size)
        .map(|index| Product {
            id: ProductId::new(index as u64),
            name: format!("Product {:05}", (index * 7919) % size.max(1)),
            price: ((index * 37) % 100_000) as u64,
            category: Category::ALL[index % Category::ALL.len()],
            rating: ((index * 7) % 51) as u16,
            stock: (index % 40) as u32,
        })
        .collect()
}

fn bench_projection_sort_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("listing_projection");

    for size in [100usize, 1_000, 10_000] {
        let catalog = synthetic_catalog(size);
        group.throughput(Throughput::Elements(size as u64));

        for sort_key in [
            SortKey::NameAscending,
            SortKey::PriceAscending,
            SortKey::PriceDescending,
            SortKey::RatingDescending,
        ] {
            group.bench_with_input(
                BenchmarkId::new(sort_key.as_str(), size),
                &catalog,
                |b, catalog| {
                    b.iter(|| {
                        project(
                            black_box(catalog),
                            &FilterCriteria::unfiltered(),
                            sort_key,
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_filtered_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered_projection");
    let catalog = synthetic_catalog(10_000);

    // Benchmark: category filter alone
    group.bench_function("category_only", |b| {
        let criteria = FilterCriteria {
            category: CategoryFilter::Only(Category::Electronics),
            search: String::new(),
        };
        b.iter(|| project(black_box(&catalog), &criteria, SortKey::PriceAscending));
    });

    // Benchmark: search term alone (forces a case fold per product)
    group.bench_function("search_only", |b| {
        let criteria = FilterCriteria {
            category: CategoryFilter::All,
            search: "product 00".to_string(),
        };
        b.iter(|| project(black_box(&catalog), &criteria, SortKey::PriceAscending));
    });

    // Benchmark: both filters plus a sort over the survivors
    group.bench_function("category_and_search", |b| {
        let criteria = FilterCriteria {
            category: CategoryFilter::Only(Category::Clothing),
            search: "1".to_string(),
        };
        b.iter(|| project(black_box(&catalog), &criteria, SortKey::RatingDescending));
    });

    group.finish();
}

criterion_group!(benches, bench_projection_sort_keys, bench_filtered_projection);
criterion_main!(benches);
