use knapsack_crypto::KnapsackError;
use knapsack_crypto::ModulusPolicy;
use knapsack_crypto::exchange::BatchConfig;

use serde::Serialize;

pub const DEFAULT_TRIALS: usize = 100;
pub const DEFAULT_MAX_SIZE: usize = 100;
pub const DEFAULT_MAX_ROUNDS: usize = 4;

/// Environment variable selecting prime moduli (`1`/`true`).
pub const PRIME_MODULUS_ENV: &str = "KNAPSACK_PRIME_MODULUS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Command {
    /// One exchange with the textbook key.
    Sample,
    /// Many random exchanges.
    Batch(BatchConfig),
}

impl Command {
    /// `sample`, or up to three positional numbers: `trials max_size max_rounds`.
    pub fn parse(args: &[String], prime_flag: Option<&str>) -> Result<Self, KnapsackError> {
        if args.first().map(String::as_str) == Some("sample") {
            if args.len() > 1 {
                return Err(KnapsackError::InvalidParameters(
                    "`sample` takes no further arguments".to_string(),
                ));
            }
            return Ok(Command::Sample);
        }

        if args.len() > 3 {
            return Err(KnapsackError::InvalidParameters(format!(
                "Expected at most 3 arguments, got {}",
                args.len()
            )));
        }

        let trials = parse_positional(args, 0, "trials", DEFAULT_TRIALS)?;
        let max_size = parse_positional(args, 1, "max_size", DEFAULT_MAX_SIZE)?;
        let max_rounds = parse_positional(args, 2, "max_rounds", DEFAULT_MAX_ROUNDS)?;

        let policy = match prime_flag {
            Some("1") | Some("true") => ModulusPolicy::Prime,
            Some("0") | Some("false") | None => ModulusPolicy::Any,
            Some(other) => {
                return Err(KnapsackError::InvalidParameters(format!(
                    "{} must be 0/1/true/false, got {:?}",
                    PRIME_MODULUS_ENV, other
                )));
            }
        };

        Ok(Command::Batch(
            BatchConfig::try_with(trials, max_size, max_rounds)?.with_policy(policy),
        ))
    }
}

fn parse_positional(
    args: &[String],
    index: usize,
    name: &str,
    default: usize,
) -> Result<usize, KnapsackError> {
    match args.get(index) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e| {
            KnapsackError::InvalidParameters(format!("Invalid {} {:?}: {}", name, raw, e))
        }),
    }
}
