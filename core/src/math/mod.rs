pub mod stats;

pub use stats::{average, StatsHelper};
