//! # Text Shell
//!
//! The numbered menu loop.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  show menu ──► read choice ──► run action ──► show menu ...            │
//! │                    │                │                                   │
//! │                    │                ├── invalid field → re-prompt      │
//! │                    │                ├── not found     → message        │
//! │                    │                └── storage error → abort (Err)    │
//! │                    │                                                    │
//! │                    └── "7" or end of input → leave loop                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shell is generic over its input and output so tests can drive it
//! with in-memory buffers.

use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::error::ShellResult;
use crate::menu::{MenuChoice, STORE_NAME};
use crate::render;
use ventas_core::validation::{self, ValidationResult};
use ventas_db::Database;

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Answer that confirms "delete all".
const CONFIRM_YES: &str = "s";

/// Text menu bound to an owned database handle.
#[derive(Debug)]
pub struct TextShell<R, W> {
    db: Database,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextShell<R, W> {
    /// Creates a shell reading from `input` and writing to `output`.
    pub fn new(db: Database, input: R, output: W) -> Self {
        TextShell { db, input, output }
    }

    /// Runs the menu until the operator exits or input ends.
    ///
    /// Storage and terminal failures abort the loop and are returned.
    pub async fn run(&mut self) -> ShellResult<()> {
        info!("Text shell started");

        loop {
            self.print_menu()?;

            let Some(answer) = self.prompt("Choose an option: ")? else {
                debug!("Input closed");
                break;
            };

            let flow = match MenuChoice::parse(&answer) {
                Some(choice) => {
                    debug!(?choice, "Menu choice");
                    self.dispatch(choice).await?
                }
                None => {
                    writeln!(self.output, "Invalid option, try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        info!("Text shell stopped");
        Ok(())
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> ShellResult<Flow> {
        match choice {
            MenuChoice::RegisterSale => self.register_sale().await,
            MenuChoice::ListSales => self.list_sales().await,
            MenuChoice::Statistics => self.statistics().await,
            MenuChoice::SearchProduct => self.search_product().await,
            MenuChoice::DeleteSale => self.delete_sale().await,
            MenuChoice::DeleteAllSales => self.delete_all_sales().await,
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn print_menu(&mut self) -> ShellResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "✨ {STORE_NAME} ✨")?;
        writeln!(self.output)?;
        writeln!(self.output, " - SALES REGISTER -")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{choice}")?;
        }
        Ok(())
    }

    // =========================================================================
    // Actions
    // =========================================================================

    async fn register_sale(&mut self) -> ShellResult<Flow> {
        let Some(product) =
            self.prompt_until_valid("Product name: ", validation::validate_product_name)?
        else {
            return Ok(Flow::Exit);
        };
        let Some(unit_price) =
            self.prompt_until_valid("Unit price: ", validation::parse_unit_price)?
        else {
            return Ok(Flow::Exit);
        };
        let Some(quantity) =
            self.prompt_until_valid("Quantity sold: ", validation::parse_quantity)?
        else {
            return Ok(Flow::Exit);
        };

        match self.db.sales().register(&product, unit_price, quantity).await {
            Ok(id) => writeln!(self.output, "Sale registered (ID {id}).")?,
            Err(e) if e.is_validation() => writeln!(self.output, "{e}")?,
            Err(e) => return Err(e.into()),
        }

        Ok(Flow::Continue)
    }

    async fn list_sales(&mut self) -> ShellResult<Flow> {
        let records = self.db.sales().list_all().await?;

        if records.is_empty() {
            writeln!(self.output, "No sales recorded.")?;
        } else {
            writeln!(self.output)?;
            writeln!(self.output, "--- SALES ---")?;
            for record in &records {
                writeln!(self.output, "{}", render::sale_line(record))?;
            }
        }

        Ok(Flow::Continue)
    }

    async fn statistics(&mut self) -> ShellResult<Flow> {
        match self.db.reports().summarize().await? {
            None => writeln!(self.output, "No sales recorded.")?,
            Some(summary) => {
                writeln!(self.output)?;
                writeln!(self.output, "--- STATISTICS ---")?;
                for line in render::summary_lines(&summary) {
                    writeln!(self.output, "{line}")?;
                }
            }
        }

        Ok(Flow::Continue)
    }

    async fn search_product(&mut self) -> ShellResult<Flow> {
        let Some(name) = self.prompt("Product name to search: ")? else {
            return Ok(Flow::Exit);
        };

        let records = self.db.sales().find_by_product(&name).await?;

        if records.is_empty() {
            writeln!(self.output, "Product not found.")?;
        } else {
            writeln!(self.output)?;
            writeln!(self.output, "--- RESULTS ---")?;
            for record in &records {
                writeln!(self.output, "{}", render::sale_line(record))?;
            }
        }

        Ok(Flow::Continue)
    }

    async fn delete_sale(&mut self) -> ShellResult<Flow> {
        if self.db.sales().count().await? == 0 {
            writeln!(self.output, "No sales recorded.")?;
            return Ok(Flow::Continue);
        }

        self.list_sales().await?;

        let Some(answer) = self.prompt("ID of the sale to delete: ")? else {
            return Ok(Flow::Exit);
        };

        let id = match validation::parse_sale_id(&answer) {
            Ok(id) => id,
            Err(_) => {
                writeln!(self.output, "Invalid input.")?;
                return Ok(Flow::Continue);
            }
        };

        if self.db.sales().delete(id).await? {
            writeln!(self.output, "Sale deleted.")?;
        } else {
            writeln!(self.output, "No sale with ID {id}.")?;
        }

        Ok(Flow::Continue)
    }

    async fn delete_all_sales(&mut self) -> ShellResult<Flow> {
        let Some(answer) =
            self.prompt("Are you sure you want to delete ALL sales? (s/n): ")?
        else {
            return Ok(Flow::Exit);
        };

        if answer.trim().to_lowercase() == CONFIRM_YES {
            let removed = self.db.sales().delete_all().await?;
            info!(removed, "All sales deleted by operator");
            writeln!(self.output, "All sales have been deleted.")?;
        } else {
            writeln!(self.output, "Operation cancelled.")?;
        }

        Ok(Flow::Continue)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Writes `label` and reads one line. `None` means input has ended.
    fn prompt(&mut self, label: &str) -> ShellResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Asks again until `parse` accepts the answer.
    fn prompt_until_valid<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> ValidationResult<T>,
    ) -> ShellResult<Option<T>> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };

            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
