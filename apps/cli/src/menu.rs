//! # Menu
//!
//! The seven numbered choices of the text shell.

use std::fmt;

/// Name shown in the menu banner.
pub const STORE_NAME: &str = "Dulce Hogar Tienda";

/// A menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RegisterSale,
    ListSales,
    Statistics,
    SearchProduct,
    DeleteSale,
    DeleteAllSales,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::RegisterSale,
        MenuChoice::ListSales,
        MenuChoice::Statistics,
        MenuChoice::SearchProduct,
        MenuChoice::DeleteSale,
        MenuChoice::DeleteAllSales,
        MenuChoice::Exit,
    ];

    /// Parses the operator's answer (`"1"`..`"7"`, surrounding whitespace ignored).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::RegisterSale),
            "2" => Some(MenuChoice::ListSales),
            "3" => Some(MenuChoice::Statistics),
            "4" => Some(MenuChoice::SearchProduct),
            "5" => Some(MenuChoice::DeleteSale),
            "6" => Some(MenuChoice::DeleteAllSales),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Number the operator types for this choice.
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::RegisterSale => 1,
            MenuChoice::ListSales => 2,
            MenuChoice::Statistics => 3,
            MenuChoice::SearchProduct => 4,
            MenuChoice::DeleteSale => 5,
            MenuChoice::DeleteAllSales => 6,
            MenuChoice::Exit => 7,
        }
    }

    fn label(self) -> &'static str {
        match self {
            MenuChoice::RegisterSale => "Register sale",
            MenuChoice::ListSales => "List sales",
            MenuChoice::Statistics => "Statistics",
            MenuChoice::SearchProduct => "Search product",
            MenuChoice::DeleteSale => "Delete sale",
            MenuChoice::DeleteAllSales => "Delete ALL sales",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_numbers() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.number().to_string()), Some(choice));
        }
    }

    #[test]
    fn test_parse_rejects_other_input() {
        assert_eq!(MenuChoice::parse(" 3 \n"), Some(MenuChoice::Statistics));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(MenuChoice::DeleteAllSales.to_string(), "6. Delete ALL sales");
    }
}
