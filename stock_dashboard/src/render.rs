//! Output rendering for records and symbol listings.
use clap::ValueEnum;
use stock_registry::{Record, RegistryError};
use strum_macros::Display;

/// Output style selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// `Symbol: AAPL, Price: $150, Volume: 1000`
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

/// Render a single record.
pub fn render_record(record: &Record, format: OutputFormat) -> Result<String, RegistryError> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Symbol: {}, Price: ${}, Volume: {}",
            record.symbol, record.price, record.volume
        )),
        OutputFormat::Json => record.to_json(),
    }
}

/// Render the sorted symbol listing on one line.
pub fn render_symbols<'a, I>(symbols: I, format: OutputFormat) -> Result<String, RegistryError>
where
    I: IntoIterator<Item = &'a str>,
{
    match format {
        OutputFormat::Text => {
            let mut line = String::new();
            for symbol in symbols {
                line.push_str(symbol);
                line.push(' ');
            }
            Ok(line)
        }
        OutputFormat::Json => {
            let symbols: Vec<&str> = symbols.into_iter().collect();
            Ok(serde_json::to_string(&symbols)?)
        }
    }
}
