use std::hint::black_box;

use chainhash::chainhash::pack_u64s;
use chainhash::chainhash::unpack_u64s;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

fn generate_ints(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    // Stay below u64::MAX, it's the padding value
    (0..count).map(|_| rng.gen_range(0..u64::MAX)).collect()
}

fn pack_unpack(c: &mut Criterion) {
    let mut group = c.benchmark_group("packed_u64s");

    for size in [4, 101, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let ints = generate_ints(*size, 42);
        let packed = pack_u64s(&ints);

        group.bench_with_input(BenchmarkId::new("pack", size), size, |b, _| {
            b.iter(|| black_box(pack_u64s(black_box(&ints))))
        });
        group.bench_with_input(BenchmarkId::new("unpack", size), size, |b, _| {
            b.iter(|| black_box(unpack_u64s(black_box(&packed))))
        });
    }
    group.finish();
}

criterion_group!(benches, pack_unpack);
criterion_main!(benches);
