//! Help, about and manual save

use std::io::{BufRead, Write};

use crate::error::AppResult;

use super::{Flow, Shell};

const HELP: &str = "\
Help:
1. Books - list, add, remove and search books.
   Search matches the whole title, author or year, ignoring case.
2. Patrons - list and register patrons, and show what a patron has borrowed.
3. Lending - check out and return books, and show the loan history.
   Loans last 14 days. A book must be returned by the patron who borrowed it.
4. Other - this help, information about the program, and saving.
5. Exit - save all data and quit.";

const ABOUT: &str = "\
About:
Bibliotheca keeps track of a small library: its books, its patrons,
and who borrowed what. Data is stored in a single JSON file and is
written on exit or when saved from the Other menu.";

impl<R: BufRead, W: Write> Shell<'_, R, W> {
    pub(crate) fn other_menu(&mut self) -> AppResult<Flow> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Other:")?;
            writeln!(self.output, "1. Help")?;
            writeln!(self.output, "2. About")?;
            writeln!(self.output, "3. Save data")?;
            writeln!(self.output, "4. Back to main menu")?;

            let choice = ask!(self, "Choose an option (1-4): ");
            match choice.trim() {
                "1" => writeln!(self.output, "{}", HELP)?,
                "2" => {
                    writeln!(self.output, "{}", ABOUT)?;
                    writeln!(
                        self.output,
                        "Version {}, data file: {}",
                        env!("CARGO_PKG_VERSION"),
                        self.library.storage_location()
                    )?;
                }
                "3" => match self.library.save_all() {
                    Ok(()) => writeln!(self.output, "Data saved.")?,
                    Err(e) => self.report(e)?,
                },
                "4" => return Ok(Flow::Continue),
                _ => self.invalid_choice()?,
            }
        }
    }
}
