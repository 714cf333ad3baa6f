use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use rand::Rng;

fn random_text(len: usize, alphabet: u8) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(0, alphabet)).collect()
}

fn bench_construct(b: &mut Bencher, text: &[u8]) {
    let mut sa = vec![0u32; text.len()];
    b.iter(|| {
        saisrs::sa(text, &mut sa, None).unwrap();
    });
}

fn construct_benchmark(c: &mut Criterion) {
    let small_alphabet = random_text(1 << 16, 4);
    let large_alphabet = random_text(1 << 16, 250);

    c.bench_function("construct 64KiB, k=4", move |b| {
        bench_construct(b, &small_alphabet)
    });
    c.bench_function("construct 64KiB, k=250", move |b| {
        bench_construct(b, &large_alphabet)
    });
}

criterion_group!(benches, construct_benchmark);
criterion_main!(benches);
