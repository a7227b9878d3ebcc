use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hamming::ecc::hamming::{inject_error, random_information};
use hamming::{BlockCode, CodeParameters, HammingCode, ParityCheckMatrix};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_matrix_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("parity_check_matrix");
    for m in [4, 8, 12] {
        let params = CodeParameters::new(m).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(m), &params, |b, &params| {
            b.iter(|| ParityCheckMatrix::new(black_box(params)))
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    for m in [4, 8, 12] {
        let code = HammingCode::new(m).unwrap();
        let information = random_information(code.parameters().information_bits(), &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(m), &information, |b, information| {
            b.iter(|| code.encode(black_box(information)).unwrap())
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("syndrome_decode");
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    for m in [4, 8, 12] {
        let code = HammingCode::new(m).unwrap();
        let information = random_information(code.parameters().information_bits(), &mut rng);
        let word = code.encode(&information).unwrap();
        let corrupted = inject_error(&word, code.parameters().length() / 2).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(m), &corrupted, |b, corrupted| {
            b.iter(|| code.decode(black_box(corrupted)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_matrix_build, bench_encode, bench_decode);
criterion_main!(benches);
