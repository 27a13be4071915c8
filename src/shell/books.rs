//! Book management menu

use std::io::{BufRead, Write};

use crate::{error::AppResult, models::parse_id, models::SearchField};

use super::{Flow, Shell};

impl<R: BufRead, W: Write> Shell<'_, R, W> {
    pub(crate) fn books_menu(&mut self) -> AppResult<Flow> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Books:")?;
            writeln!(self.output, "1. List books")?;
            writeln!(self.output, "2. Add a book")?;
            writeln!(self.output, "3. Remove a book")?;
            writeln!(self.output, "4. Search books")?;
            writeln!(self.output, "5. Back to main menu")?;

            let choice = ask!(self, "Choose an option (1-5): ");
            match choice.trim() {
                "1" => self.list_books()?,
                "2" => {
                    let title = ask!(self, "Title: ");
                    let author = ask!(self, "Author: ");
                    let year = ask!(self, "Publication year: ");
                    match self.library.add_item(&title, &author, &year) {
                        Ok(item) => {
                            let message = format!("Added book: {}", item.title);
                            writeln!(self.output, "{}", message)?;
                        }
                        Err(e) => self.report(e)?,
                    }
                }
                "3" => {
                    let raw = ask!(self, "ID of the book to remove: ");
                    match parse_id(&raw, "Item").and_then(|id| self.library.remove_item(id)) {
                        Ok(item) => writeln!(self.output, "Removed book: {}", item.title)?,
                        Err(e) => self.report(e)?,
                    }
                }
                "4" => {
                    let raw = ask!(self, "Search by (title, author, year): ");
                    let field = match raw.parse::<SearchField>() {
                        Ok(field) => field,
                        Err(e) => {
                            self.report(e)?;
                            continue;
                        }
                    };
                    let value = ask!(self, &format!("Value for {}: ", field));
                    let found: Vec<String> = self
                        .library
                        .find_items(field, &value)
                        .iter()
                        .map(|item| item.to_string())
                        .collect();
                    if found.is_empty() {
                        writeln!(self.output, "No results.")?;
                    }
                    for line in found {
                        writeln!(self.output, "{}", line)?;
                    }
                }
                "5" => return Ok(Flow::Continue),
                _ => self.invalid_choice()?,
            }
        }
    }

    fn list_books(&mut self) -> AppResult<()> {
        let items = self.library.list_items();
        if items.is_empty() {
            writeln!(self.output, "No books in the library.")?;
        }
        for item in items {
            writeln!(self.output, "{}", item)?;
        }
        Ok(())
    }
}
