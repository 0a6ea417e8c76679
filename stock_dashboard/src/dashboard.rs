//! Interactive menu loop.
//!
//! `Dashboard` reads operator input line by line, dispatches each menu choice to
//! the `Registry` and writes human-readable results. It is generic over the
//! input and output streams so the same loop runs against stdin/stdout in `main`
//! and against in-memory buffers in tests.
//!
//! Input problems (empty symbol, unparsable number, unknown menu entry) are
//! reported to the operator and the loop continues; only I/O failures end it
//! with an error. End of input is treated like choosing `Exit`.
use std::io::{BufRead, Write};
use std::str::FromStr;

use log::{debug, info, warn};
use stock_registry::{Registry, RegistryError};

use crate::menu::{MenuChoice, render_menu};
use crate::render::{OutputFormat, render_record, render_symbols};

/// Menu loop bound to an input and an output stream.
pub struct Dashboard<R, W> {
    registry: Registry,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Dashboard<R, W> {
    /// Create a dashboard over an existing (possibly preloaded) registry.
    pub fn new(registry: Registry, input: R, output: W, format: OutputFormat) -> Self {
        Self {
            registry,
            input,
            output,
            format,
        }
    }

    /// Run until the operator exits or input ends.
    pub fn run(&mut self) -> Result<(), RegistryError> {
        loop {
            write!(self.output, "{}", render_menu())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                info!("Input closed, leaving dashboard");
                writeln!(self.output, "\nExiting...")?;
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                Ok(choice) => self.dispatch(choice)?,
                Err(e) => {
                    warn!("{}", e);
                    writeln!(self.output, "Invalid choice. Try again.")?;
                }
            }
        }
    }

    /// Give back the registry and the output stream.
    pub fn into_parts(self) -> (Registry, W) {
        (self.registry, self.output)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<(), RegistryError> {
        debug!("Menu choice: {}", choice);
        let outcome = match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Remove => self.remove(),
            MenuChoice::Search => self.search(),
            MenuChoice::DisplayAll => self.display_all(),
            MenuChoice::DisplayLatest => self.display_latest(),
            MenuChoice::DisplaySorted => self.display_sorted(),
            MenuChoice::Exit => Ok(()),
        };

        match outcome {
            Err(RegistryError::Format(msg)) => {
                warn!("Rejected input: {}", msg);
                writeln!(self.output, "{}", msg)?;
                Ok(())
            }
            other => other,
        }
    }

    fn add(&mut self) -> Result<(), RegistryError> {
        let symbol = self.prompt("Enter Stock Symbol: ")?;
        if symbol.is_empty() {
            return Err(RegistryError::Format(
                "Stock symbol must not be empty.".to_string(),
            ));
        }
        let price: f64 = parse_field(&self.prompt("Enter Stock Price: $")?, "price")?;
        let volume: i64 = parse_field(&self.prompt("Enter Stock Volume: ")?, "volume")?;

        self.registry.add_record(&symbol, price, volume);
        info!("Added {} (price {}, volume {})", symbol, price, volume);
        writeln!(self.output, "Stock added successfully.")?;
        Ok(())
    }

    fn remove(&mut self) -> Result<(), RegistryError> {
        let symbol = self.prompt("Enter Stock Symbol to Remove: ")?;
        if self.registry.remove_record(&symbol) {
            info!("Removed {}", symbol);
            writeln!(self.output, "Stock removed successfully.")?;
        } else {
            writeln!(self.output, "Stock not found.")?;
        }
        Ok(())
    }

    fn search(&mut self) -> Result<(), RegistryError> {
        let symbol = self.prompt("Enter Stock Symbol to Search: ")?;
        match self.registry.search_record(&symbol) {
            Some(record) => {
                let line = render_record(record, self.format)?;
                writeln!(self.output, "Stock found:")?;
                writeln!(self.output, "{}", line)?;
            }
            None => writeln!(self.output, "Stock not found.")?,
        }
        Ok(())
    }

    fn display_all(&mut self) -> Result<(), RegistryError> {
        for record in self.registry.list_all() {
            writeln!(self.output, "{}", render_record(record, self.format)?)?;
        }
        Ok(())
    }

    fn display_latest(&mut self) -> Result<(), RegistryError> {
        let count: i64 = parse_field(
            &self.prompt("Enter the number of latest stocks to display: ")?,
            "count",
        )?;
        for record in self.registry.list_latest(count) {
            writeln!(self.output, "{}", render_record(record, self.format)?)?;
        }
        Ok(())
    }

    fn display_sorted(&mut self) -> Result<(), RegistryError> {
        let line = render_symbols(self.registry.list_sorted(), self.format)?;
        writeln!(self.output, "BST In-Order Traversal:")?;
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<String, RegistryError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()?
            .ok_or_else(|| RegistryError::Format("Unexpected end of input.".to_string()))
    }

    fn read_line(&mut self) -> Result<Option<String>, RegistryError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}

fn parse_field<T>(text: &str, what: &str) -> Result<T, RegistryError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    text.parse()
        .map_err(|e| RegistryError::Format(format!("Invalid {} `{}`: {}", what, text, e)))
}
