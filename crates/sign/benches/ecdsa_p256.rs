use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecsig_api::Digest;
use ecsig_sign::{EcdsaP256, EcdsaP256SecretKey};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_ecdsa_p256(c: &mut Criterion) {
    let mut group = c.benchmark_group("ECDSA-P256");

    let secret = EcdsaP256SecretKey::import(&[0x11; 32]).unwrap();
    let public = secret.public_key().unwrap();
    let digest = Digest::new([0x42; 32]);

    group.bench_function("public_key", |b| {
        b.iter(|| black_box(secret.public_key().unwrap()))
    });

    let mut deterministic = EcdsaP256::deterministic();
    group.bench_function("sign_rfc6979", |b| {
        b.iter(|| black_box(deterministic.sign(black_box(&digest), &secret).unwrap()))
    });

    let mut random = EcdsaP256::with_rng(ChaCha20Rng::seed_from_u64(42));
    group.bench_function("sign_random", |b| {
        b.iter(|| black_box(random.sign(black_box(&digest), &secret).unwrap()))
    });

    let signature = deterministic.sign(&digest, &secret).unwrap();
    group.bench_function("verify", |b| {
        b.iter(|| {
            black_box(
                deterministic
                    .verify(black_box(&digest), &public, &signature)
                    .unwrap(),
            )
        })
    });

    let encoded = public.export();
    group.bench_function("import_public_key", |b| {
        b.iter(|| black_box(ecsig_sign::EcdsaP256PublicKey::import(black_box(&encoded)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_ecdsa_p256);
criterion_main!(benches);
