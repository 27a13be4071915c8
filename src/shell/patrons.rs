//! Patron management menu

use std::io::{BufRead, Write};

use crate::{error::AppResult, models::parse_id};

use super::{Flow, Shell};

impl<R: BufRead, W: Write> Shell<'_, R, W> {
    pub(crate) fn patrons_menu(&mut self) -> AppResult<Flow> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Patrons:")?;
            writeln!(self.output, "1. List patrons")?;
            writeln!(self.output, "2. Add a patron")?;
            writeln!(self.output, "3. Show a patron's loans")?;
            writeln!(self.output, "4. Back to main menu")?;

            let choice = ask!(self, "Choose an option (1-4): ");
            match choice.trim() {
                "1" => {
                    let patrons = self.library.list_patrons();
                    if patrons.is_empty() {
                        writeln!(self.output, "No patrons.")?;
                    }
                    for patron in patrons {
                        writeln!(self.output, "{}", patron)?;
                    }
                }
                "2" => {
                    let first_name = ask!(self, "First name: ");
                    let last_name = ask!(self, "Last name: ");
                    match self.library.add_patron(&first_name, &last_name) {
                        Ok(patron) => {
                            let name = patron.full_name();
                            writeln!(self.output, "Added patron: {}", name)?;
                        }
                        Err(e) => self.report(e)?,
                    }
                }
                "3" => {
                    let raw = ask!(self, "Patron ID: ");
                    let loans = parse_id(&raw, "Patron").and_then(|id| {
                        self.library
                            .patron_loans(id)
                            .map(|items| items.iter().map(|i| i.to_string()).collect::<Vec<_>>())
                    });
                    match loans {
                        Ok(lines) if lines.is_empty() => writeln!(self.output, "No active loans.")?,
                        Ok(lines) => {
                            for line in lines {
                                writeln!(self.output, "{}", line)?;
                            }
                        }
                        Err(e) => self.report(e)?,
                    }
                }
                "4" => return Ok(Flow::Continue),
                _ => self.invalid_choice()?,
            }
        }
    }
}
