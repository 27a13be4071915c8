//! Lending menu

use std::io::{BufRead, Write};

use crate::error::AppResult;

use super::{Flow, Shell};

impl<R: BufRead, W: Write> Shell<'_, R, W> {
    pub(crate) fn lending_menu(&mut self) -> AppResult<Flow> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Lending:")?;
            writeln!(self.output, "1. Check out a book")?;
            writeln!(self.output, "2. Return a book")?;
            writeln!(self.output, "3. Loan history")?;
            writeln!(self.output, "4. Back to main menu")?;

            let choice = ask!(self, "Choose an option (1-4): ");
            match choice.trim() {
                "1" => {
                    let item_id = ask!(self, "Book ID: ");
                    let patron_id = ask!(self, "Patron ID: ");
                    match self.library.checkout(&item_id, &patron_id) {
                        Ok(receipt) => writeln!(
                            self.output,
                            "{} borrowed '{}', due {}.",
                            receipt.patron_name, receipt.item_title, receipt.due_date
                        )?,
                        Err(e) => self.report(e)?,
                    }
                }
                "2" => {
                    let item_id = ask!(self, "Book ID: ");
                    let patron_id = ask!(self, "Patron ID: ");
                    match self.library.checkin(&item_id, &patron_id) {
                        Ok(item) => writeln!(self.output, "'{}' has been returned.", item.title)?,
                        Err(e) => self.report(e)?,
                    }
                }
                "3" => {
                    let history = self.library.history();
                    if history.is_empty() {
                        writeln!(self.output, "No loan history.")?;
                    }
                    for record in history {
                        writeln!(self.output, "{}", record)?;
                    }
                }
                "4" => return Ok(Flow::Continue),
                _ => self.invalid_choice()?,
            }
        }
    }
}
