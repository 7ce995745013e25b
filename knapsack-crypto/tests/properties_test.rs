use knapsack_crypto::keypair::helper::sum;
use knapsack_crypto::keypair::sequence::is_superincreasing;
use knapsack_crypto::keypair::{
    KnapsackParams, PrivateKeyChain, PrivateKeyRound, SuperincreasingSequence,
};
use knapsack_crypto::knapsack::Message;
use knapsack_crypto::ring::gcd;

use num_traits::One;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;

const MAX_SIZE: u8 = 48;
const MAX_ROUNDS: u8 = 4;

fn bounded(value: u8, max: u8) -> usize {
    (value % max) as usize + 1
}

#[quickcheck]
fn prop_generated_sequence_is_superincreasing(size: u8, seed: u64) -> bool {
    let mut rng = StdRng::seed_from_u64(seed);
    match SuperincreasingSequence::generate(bounded(size, MAX_SIZE), &mut rng) {
        Ok(sequence) => is_superincreasing(sequence.terms()),
        Err(_) => false,
    }
}

#[quickcheck]
fn prop_generated_round_is_valid(size: u8, seed: u64) -> bool {
    let mut rng = StdRng::seed_from_u64(seed);
    let Ok(params) = KnapsackParams::try_with(bounded(size, MAX_SIZE), 1) else {
        return false;
    };
    match PrivateKeyRound::generate(&params, &mut rng) {
        Ok(round) => {
            *round.modulus() > sum(round.sequence())
                && gcd(round.modulus(), round.multiplier()).is_one()
        }
        Err(_) => false,
    }
}

quickcheck::quickcheck! {
    fn prop_single_round_round_trip(bits: Vec<bool>, seed: u64) -> TestResult {
        if bits.is_empty() || bits.len() > MAX_SIZE as usize {
            return TestResult::discard();
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let params = match KnapsackParams::try_with(bits.len(), 1) {
            Ok(params) => params,
            Err(e) => return TestResult::error(e.to_string()),
        };
        let round = match PrivateKeyRound::generate(&params, &mut rng) {
            Ok(round) => round,
            Err(e) => return TestResult::error(e.to_string()),
        };

        let message = Message::new(bits);
        let decoded = round
            .public_key()
            .encrypt(&message)
            .and_then(|cipher| round.decrypt(&cipher));

        match decoded {
            Ok(decoded) => TestResult::from_bool(decoded == message),
            Err(e) => TestResult::error(e.to_string()),
        }
    }

    fn prop_chain_round_trip(bits: Vec<bool>, rounds: u8, seed: u64) -> TestResult {
        if bits.is_empty() || bits.len() > MAX_SIZE as usize {
            return TestResult::discard();
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let params = match KnapsackParams::try_with(bits.len(), bounded(rounds, MAX_ROUNDS)) {
            Ok(params) => params,
            Err(e) => return TestResult::error(e.to_string()),
        };
        let chain = match PrivateKeyChain::generate(&params, &mut rng) {
            Ok(chain) => chain,
            Err(e) => return TestResult::error(e.to_string()),
        };

        let message = Message::new(bits);
        let decoded = chain
            .public_key()
            .encrypt(&message)
            .and_then(|cipher| chain.decrypt(&cipher));

        match decoded {
            Ok(decoded) => TestResult::from_bool(decoded == message),
            Err(e) => TestResult::error(e.to_string()),
        }
    }

    fn prop_length_mismatch_is_reported(size: u8, extra: u8, seed: u64) -> TestResult {
        if extra == 0 {
            return TestResult::discard();
        }

        let size = bounded(size, MAX_SIZE);
        let mut rng = StdRng::seed_from_u64(seed);
        let params = match KnapsackParams::try_with(size, 1) {
            Ok(params) => params,
            Err(e) => return TestResult::error(e.to_string()),
        };
        let round = match PrivateKeyRound::generate(&params, &mut rng) {
            Ok(round) => round,
            Err(e) => return TestResult::error(e.to_string()),
        };

        let message = Message::random(size + extra as usize, &mut rng);
        TestResult::from_bool(round.public_key().encrypt(&message).is_err())
    }
}
