//! Menu entries of the interactive dashboard.
//!
//! Each entry is selected by its number; `MenuChoice` parses that number with
//! `strum`'s `EnumString` and prints its label with `Display`.
use std::str::FromStr;

use stock_registry::RegistryError;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Menu heading printed above the entries.
pub const TITLE: &str = "Stock Market Dashboard:";

/// One dashboard action. The discriminant is the number the operator types.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[repr(u8)]
pub enum MenuChoice {
    #[strum(serialize = "1", to_string = "Add Stock")]
    Add = 1,
    #[strum(serialize = "2", to_string = "Remove Stock")]
    Remove = 2,
    #[strum(serialize = "3", to_string = "Search Stock")]
    Search = 3,
    #[strum(serialize = "4", to_string = "Display All Stocks")]
    DisplayAll = 4,
    #[strum(serialize = "5", to_string = "Display Latest Stocks")]
    DisplayLatest = 5,
    #[strum(serialize = "6", to_string = "Display BST In-Order")]
    DisplaySorted = 6,
    #[strum(serialize = "0", to_string = "Exit")]
    Exit = 0,
}

impl MenuChoice {
    /// Parse the operator's input line.
    pub fn parse(input: &str) -> Result<Self, RegistryError> {
        let trimmed = input.trim();
        MenuChoice::from_str(trimmed).map_err(|_| RegistryError::InvalidChoice(trimmed.to_string()))
    }

    /// Number shown next to the entry.
    pub fn key(self) -> u8 {
        self as u8
    }
}

/// Full menu text, heading included.
pub fn render_menu() -> String {
    let mut text = format!("\n{}\n", TITLE);
    for choice in MenuChoice::iter() {
        text.push_str(&format!("{}. {}\n", choice.key(), choice));
    }
    text.push_str("Enter your choice: ");
    text
}
