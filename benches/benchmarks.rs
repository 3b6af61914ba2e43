use criterion::{criterion_group, criterion_main, Criterion};
use rand::{thread_rng, Rng};

use kcdsa25519::{public_key, shared_secret, sign, verify};

fn keygen_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("keygen");

    g.bench_function("kcdsa25519", |b| b.iter(|| public_key(&[22u8; 32])));

    g.bench_function("x25519-dalek", |b| {
        b.iter(|| x25519_dalek::x25519([22u8; 32], x25519_dalek::X25519_BASEPOINT_BYTES))
    });

    g.finish();
}

fn ecdh_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("ecdh");

    let sk_a: [u8; 32] = thread_rng().gen();
    let pk_b = public_key(&thread_rng().gen());

    g.bench_function("kcdsa25519", |b| b.iter(|| shared_secret(&sk_a, &pk_b)));

    g.bench_function("x25519-dalek", |b| {
        b.iter(|| x25519_dalek::x25519(sk_a, pk_b))
    });

    g.finish();
}

fn sign_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("sign");

    let sk: [u8; 32] = thread_rng().gen();
    let message = b"this is a short message";

    g.bench_function("kcdsa25519", |b| b.iter(|| sign(&sk, message)));

    g.finish();
}

fn verify_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("verify");

    let sk: [u8; 32] = thread_rng().gen();
    let pk = public_key(&sk);
    let message = b"this is a short message";
    let sig = sign(&sk, message);

    g.bench_function("kcdsa25519", |b| b.iter(|| verify(message, &sig, &pk, true)));

    g.finish();
}

criterion_group!(
    benches,
    keygen_benchmarks,
    ecdh_benchmarks,
    sign_benchmarks,
    verify_benchmarks
);
criterion_main!(benches);
