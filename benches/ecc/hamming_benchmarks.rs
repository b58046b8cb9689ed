use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming_coder::ecc::{assemble, code_length, DataWord};
use hamming_coder::encode_lines;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, Cursor};

fn random_word(rng: &mut StdRng, len: usize) -> DataWord {
    (0..len).map(|_| rng.gen::<bool>()).collect()
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [4, 16, 64, 256, 1024] {
        let word = random_word(&mut rng, size);
        let length = code_length(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &word, |b, word| {
            b.iter(|| assemble(black_box(word), length))
        });
    }

    group.finish();
}

fn bench_encode_lines(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let input: String = (0..1000)
        .map(|_| format!("{}\n", random_word(&mut rng, 16)))
        .collect();

    c.bench_function("encode_lines 1000x16", |b| {
        b.iter(|| encode_lines(Cursor::new(black_box(input.as_str())), io::sink()))
    });
}

criterion_group!(benches, bench_assemble, bench_encode_lines);
criterion_main!(benches);
