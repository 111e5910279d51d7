use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rect_packer_core::prelude::*;

fn generate_items(count: usize, min_size: u32, max_size: u32) -> Vec<Item<usize>> {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xB1B5);
    (0..count)
        .map(|i| {
            let w = rng.gen_range(min_size..=max_size);
            let h = rng.gen_range(min_size..=max_size);
            Item::with_payload(w, h, i)
        })
        .collect()
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_batches");

    for count in [25, 50, 100] {
        let items = generate_items(count, 16, 128);

        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("no_padding", count), &items, |b, items| {
            let opts = PackOptions::default();
            b.iter(|| black_box(pack(items.clone(), 512, 512, &opts)))
        });

        group.bench_with_input(BenchmarkId::new("padded", count), &items, |b, items| {
            let opts = PackOptions::builder()
                .border_padding(4)
                .rectangle_padding(2)
                .build();
            b.iter(|| black_box(pack(items.clone(), 512, 512, &opts)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pack);
criterion_main!(benches);
