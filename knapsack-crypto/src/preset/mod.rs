pub mod sample_key;

pub use sample_key::{SAMPLE_MESSAGE, sample_message, sample_round};
