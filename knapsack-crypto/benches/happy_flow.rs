use criterion::{Criterion, black_box, criterion_group, criterion_main};
use knapsack_crypto::keypair::{KnapsackParams, PrivateKeyChain};
use knapsack_crypto::knapsack::Message;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_happy_flow(c: &mut Criterion) {
    // 1) one‐time setup
    let mut rng = StdRng::seed_from_u64(12345);
    let params = KnapsackParams::try_with(64, 3).expect("build params");
    let chain = PrivateKeyChain::generate(&params, &mut rng).expect("make key chain");
    let public_key = chain.public_key();

    // the same message every iteration
    let original = Message::random(64, &mut rng);

    c.bench_function("happy_flow", |b| {
        b.iter(|| {
            // 2) encrypt
            let cipher = public_key.encrypt(&original).expect("encrypt");

            // 3) decrypt
            let decoded = chain.decrypt(&cipher).expect("decrypt");

            // 4) black_box the result so the optimizer can't drop it
            black_box(decoded);
        })
    });

    c.bench_function("key_generation", |b| {
        b.iter(|| {
            let chain = PrivateKeyChain::generate(black_box(&params), &mut rng).expect("keygen");
            black_box(chain);
        })
    });
}

criterion_group!(benches, bench_happy_flow);
criterion_main!(benches);
