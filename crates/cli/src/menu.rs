//! Interactive numbered menu over an [`Inventory`].
//!
//! Reads answers line by line from any `BufRead` and writes prompts and reports
//! to any `Write`, so the loop runs the same against a terminal or a test buffer.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use stockroom_inventory::{
    Inventory, InventoryError, InventoryResult, InventoryStore, ProductId, StoreError, SupplierId,
};

const MENU: &str = "\n\
1. Add Product\n\
2. Update Stock\n\
3. Delete Product\n\
4. View Inventory\n\
5. Add Supplier\n\
6. View Suppliers\n\
7. Exit\n\
8. Record Supplier Order";

/// Failure that ends (or interrupts) a menu action.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Input ran out; the session ends quietly.
    #[error("end of input")]
    Eof,

    /// An answer could not be used. Reported to the user; the menu continues.
    #[error("{0}")]
    Input(String),

    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    /// Persisting a change failed. Fatal for the session.
    #[error(transparent)]
    Store(#[from] StoreError),
}

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'a, S, R, W> {
    inventory: &'a mut Inventory<S>,
    input: R,
    output: W,
}

impl<'a, S, R, W> Menu<'a, S, R, W>
where
    S: InventoryStore,
    R: BufRead,
    W: Write,
{
    pub fn new(inventory: &'a mut Inventory<S>, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends.
    ///
    /// Store failures abort the loop; everything else is reported and re-prompted.
    pub fn run(&mut self) -> Result<(), MenuError> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let choice = match self.ask("Enter your choice") {
                Ok(choice) => choice,
                Err(MenuError::Eof) => return Ok(()),
                Err(err) => return Err(err),
            };

            match self.dispatch(choice.trim()) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    writeln!(self.output, "Exiting... Thank you!")?;
                    return Ok(());
                }
                Err(MenuError::Eof) => return Ok(()),
                Err(MenuError::Input(msg)) => writeln!(self.output, "{msg}")?,
                Err(err) => return Err(err),
            }
        }
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow, MenuError> {
        match choice {
            "1" => self.add_product()?,
            "2" => self.update_stock()?,
            "3" => self.delete_product()?,
            "4" => self.view_inventory()?,
            "5" => self.add_supplier()?,
            "6" => self.view_suppliers()?,
            "7" => return Ok(Flow::Exit),
            "8" => self.record_order()?,
            _ => writeln!(self.output, "Invalid choice.")?,
        }
        Ok(Flow::Continue)
    }

    fn add_product(&mut self) -> Result<(), MenuError> {
        let id: ProductId = self.ask_parsed("Enter product ID")?;
        let name = self.ask("Enter product name")?;
        let quantity: i64 = self.ask_parsed("Enter quantity")?;
        let price: f64 = self.ask_parsed("Enter price")?;
        let reorder_level: i64 = self.ask_parsed("Enter reorder level")?;

        let result = self
            .inventory
            .add_product(id, name, quantity, price, reorder_level);
        self.report(result, "Product saved.")
    }

    fn update_stock(&mut self) -> Result<(), MenuError> {
        let id: ProductId = self.ask_parsed("Enter product ID")?;
        let amount: i64 = self.ask_parsed("Enter stock change amount")?;

        match self.inventory.update_stock(id.as_str(), amount) {
            Ok(quantity) => {
                writeln!(self.output, "Stock updated. New quantity: {quantity}")?;
                Ok(())
            }
            Err(err) => self.report(Err(err), ""),
        }
    }

    fn delete_product(&mut self) -> Result<(), MenuError> {
        let id: ProductId = self.ask_parsed("Enter product ID to delete")?;
        let result = self.inventory.delete_product(id.as_str()).map(drop);
        self.report(result, "Product deleted.")
    }

    fn view_inventory(&mut self) -> Result<(), MenuError> {
        if self.inventory.products().is_empty() {
            writeln!(self.output, "No products.")?;
        }
        for line in self.inventory.view_inventory() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn add_supplier(&mut self) -> Result<(), MenuError> {
        let id: SupplierId = self.ask_parsed("Enter supplier ID")?;
        let name = self.ask("Enter supplier name")?;
        let contact = self.ask("Enter contact details")?;

        let result = self.inventory.add_supplier(id, name, contact);
        self.report(result, "Supplier saved.")
    }

    fn view_suppliers(&mut self) -> Result<(), MenuError> {
        if self.inventory.suppliers().is_empty() {
            writeln!(self.output, "No suppliers.")?;
        }
        for line in self.inventory.view_suppliers() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn record_order(&mut self) -> Result<(), MenuError> {
        let supplier_id: SupplierId = self.ask_parsed("Enter supplier ID")?;
        let product_id: ProductId = self.ask_parsed("Enter product ID")?;
        let quantity: i64 = self.ask_parsed("Enter order quantity")?;

        let result = self
            .inventory
            .record_order(supplier_id.as_str(), product_id, quantity);
        self.report(result, "Order recorded.")
    }

    /// Print the outcome of an inventory call. Domain errors are messages; store errors are fatal.
    fn report(&mut self, result: InventoryResult<()>, success: &str) -> Result<(), MenuError> {
        match result {
            Ok(()) => {
                if !success.is_empty() {
                    writeln!(self.output, "{success}")?;
                }
                Ok(())
            }
            Err(InventoryError::Domain(err)) => {
                writeln!(self.output, "{err}")?;
                Ok(())
            }
            Err(InventoryError::Store(err)) => Err(err.into()),
        }
    }

    /// Prompt and read one line (without its line ending).
    fn ask(&mut self, label: &str) -> Result<String, MenuError> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::Eof);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn ask_parsed<T>(&mut self, label: &str) -> Result<T, MenuError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let answer = self.ask(label)?;
        answer
            .trim()
            .parse()
            .map_err(|e| MenuError::Input(format!("Invalid input {:?}: {e}", answer.trim())))
    }
}
