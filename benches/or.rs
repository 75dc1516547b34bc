#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion, Throughput};
use criterion::black_box;

use rand::prelude::*;
use rand::rngs::SmallRng;

use vector_or::{AlignedVec, Kernel};

const SEED0: u64 = 0x0306_0803_0906_0401;
const SEED1: u64 = 0x0905_0407_0608_0102;

fn generate_seeded_data(count: usize, seed: u64) -> AlignedVec {
    let mut rng = SmallRng::seed_from_u64(seed);
    let data: Vec<i32> = (0..count).map(|_| rng.gen()).collect();

    AlignedVec::from(data)
}

fn bench_sizes(c: &mut Criterion, label: &str, sizes: &[usize]) {
    let mut group = c.benchmark_group(label);

    for n in sizes.iter() {
        let a = generate_seeded_data(*n, SEED0);
        let b = generate_seeded_data(*n, SEED1);
        let mut out = AlignedVec::zeroed(*n);

        group.throughput(Throughput::Elements(*n as u64));

        for k in Kernel::supported() {
            group.bench_with_input(BenchmarkId::new(k.name, n), n, |bencher, n| {
                bencher.iter(|| unsafe {
                    (k.body)(
                        black_box(out.as_mut_ptr()),
                        black_box(a.as_ptr()),
                        black_box(b.as_ptr()),
                        *n
                    )
                })
            });
        }
    }

    group.finish();
}

fn or_small(c: &mut Criterion) {
    // Includes every tail length
    bench_sizes(c, "i32 or - small", &[7, 8, 9, 10, 11, 63, 64, 65]);
}

fn or_large(c: &mut Criterion) {
    bench_sizes(c, "i32 or - large", &[4_096, 65_536, 1_048_576]);
}

criterion_group!(i32_or, or_small, or_large);
criterion_main!(i32_or);
