use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paste::paste;
use std::time::Duration;

macro_rules! impl_bench_ecies {
    ($curve: ident, $hash: ident) => {
        paste! {
            fn [<bench_ecies_ $curve:lower _ $hash:lower>](criterion: &mut Criterion) {
                use ecies_bls12381::suite::{$curve, $hash};
                use ecies_bls12381::Ecies;

                let mut rng = rand::thread_rng();
                let ecies = Ecies::<$curve, $hash>::new();
                let msg = [0u8; 32];

                let (pk, sk) = ecies.generate_keypair(&mut rng).unwrap();
                let c = ecies.encrypt(Some(&pk), Some(&msg[..]), &mut rng).unwrap();

                criterion.bench_function(&format!("{} keygen", ecies), |b| {
                    let mut rng = rand::thread_rng();
                    b.iter(|| ecies.generate_keypair(&mut rng))
                });
                criterion.bench_function(&format!("{} encrypt", ecies), |b| {
                    let mut rng = rand::thread_rng();
                    b.iter(|| {
                        ecies.encrypt(black_box(Some(&pk)), black_box(Some(&msg[..])), &mut rng)
                    })
                });
                criterion.bench_function(&format!("{} decrypt", ecies), |b| {
                    b.iter(|| ecies.decrypt(black_box(Some(&sk)), black_box(Some(&c[..]))))
                });
            }
        }
    };
}

fn bench_envelope(criterion: &mut Criterion) {
    use ecies_bls12381::EciesBls12381;

    let mut rng = rand::thread_rng();
    let ecies = EciesBls12381::new();
    let (pk, sk) = ecies.generate_keypair(&mut rng).unwrap();
    let payload = vec![0u8; 1 << 20];
    let env = ecies
        .seal_envelope(Some(&pk), Some(&payload[..]), &mut rng)
        .unwrap();

    criterion.bench_function("envelope seal 1MiB", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| ecies.seal_envelope(Some(&pk), black_box(Some(&payload[..])), &mut rng))
    });
    criterion.bench_function("envelope open 1MiB", |b| {
        b.iter(|| ecies.open_envelope(Some(&sk), black_box(&env)))
    });
}

impl_bench_ecies!(G1, Sha3_256);
impl_bench_ecies!(G1, Sha3_512);
impl_bench_ecies!(G2, Sha3_256);
impl_bench_ecies!(G2, Sha3_512);

criterion_group!(
    name = benches;
    config = Criterion::default().warm_up_time(Duration::new(0, 500_000_000));
    targets =
    bench_ecies_g1_sha3_256,
    bench_ecies_g1_sha3_512,
    bench_ecies_g2_sha3_256,
    bench_ecies_g2_sha3_512,
    bench_envelope,
);
criterion_main!(benches);
