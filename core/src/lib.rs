//! Arithmetic mean over a variable number of values.
//!
//! `average` takes an explicit slice; the `average!` macro collects a
//! call-site argument list into one and forwards to it.

pub mod input;
pub mod math;
pub mod prelude;
pub mod telemetry;

pub use math::stats::average;
pub use prelude::{Invocation, InvocationResult, ParseError, ParseResult};

/// Averages any number of numeric expressions, converting each with `as f64`.
///
/// ```
/// assert_eq!(avgcore::average!(2, 6), 4.0);
/// assert_eq!(avgcore::average!(), 0.0);
/// ```
#[macro_export]
macro_rules! average {
    ($($value:expr),* $(,)?) => {
        $crate::math::stats::average(&[$($value as f64),*])
    };
}
