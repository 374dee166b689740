use avgcore::InvocationResult;
use clap::ValueEnum;
use std::io::Write;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One bare number per line
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

/// Renders `value` the way a JavaScript console prints a number.
///
/// Magnitudes at or above `1e21` or below `1e-6` switch to exponent form
/// (`1e+21`, `1.5e-7`), non-finite values print as `Infinity`/`NaN`, and
/// negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else {
        format!("{}", value)
    }
}

pub fn write_results<W: Write>(
    out: &mut W,
    results: &[InvocationResult],
    format: OutputFormat,
) -> anyhow::Result<()> {
    for result in results {
        match format {
            OutputFormat::Plain => writeln!(out, "{}", format_number(result.average))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(result)?)?,
        }
    }
    Ok(())
}
