mod config;

use config::{Command, PRIME_MODULUS_ENV};

use knapsack_crypto::PrivateKeyChain;
use knapsack_crypto::exchange::{TrialOutcome, run_batch, run_trial};
use knapsack_crypto::preset::{sample_message, sample_round};

use serde::Serialize;

use std::error::Error;

#[derive(Serialize)]
struct Summary {
    trials: usize,
    total_errors: usize,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

fn run_sample() -> Result<TrialOutcome, Box<dyn Error>> {
    let chain = PrivateKeyChain::from(sample_round()?);
    let public_key = chain.public_key();
    log::info!("Sample public key: {}", public_key);

    Ok(run_trial(&chain, &sample_message()?)?)
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let prime_flag = std::env::var(PRIME_MODULUS_ENV).ok();
    let command = Command::parse(&args, prime_flag.as_deref())?;
    log::debug!("Running {}", serde_json::to_string(&command)?);

    match command {
        Command::Sample => print_json(&run_sample()?),
        Command::Batch(batch) => {
            let summary = run_batch(&batch, &mut rand::rng())?;
            for outcome in &summary.outcomes {
                print_json(outcome)?;
            }
            if summary.total_errors > 0 {
                log::warn!("{} bits decoded incorrectly", summary.total_errors);
            }
            print_json(&Summary {
                trials: summary.outcomes.len(),
                total_errors: summary.total_errors,
            })
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
