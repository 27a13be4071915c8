//! Interactive menu shell
//!
//! Line-oriented command dispatcher over the [`Library`] facade. It reads menu
//! choices and field values from any `BufRead` and writes prompts and results
//! to any `Write`; all decisions are left to the library.

/// Read a field or leave the current menu when input ends
macro_rules! ask {
    ($shell:expr, $label:expr) => {
        match $shell.prompt($label)? {
            Some(value) => value,
            None => return Ok(Flow::Quit),
        }
    };
}

mod books;
mod lending;
mod other;
mod patrons;

use std::io::{BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    library::Library,
};

/// Whether the session goes on after a menu returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a, R, W> {
    library: &'a mut Library,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(library: &'a mut Library, input: R, output: W) -> Self {
        Self {
            library,
            input,
            output,
        }
    }

    /// Run the main menu until the user exits or input ends, then save
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Library menu:")?;
            writeln!(self.output, "1. Books")?;
            writeln!(self.output, "2. Patrons")?;
            writeln!(self.output, "3. Lending")?;
            writeln!(self.output, "4. Other")?;
            writeln!(self.output, "5. Exit")?;

            let Some(choice) = self.prompt("Choose an option (1-5): ")? else {
                break;
            };
            let flow = match choice.trim() {
                "1" => self.books_menu()?,
                "2" => self.patrons_menu()?,
                "3" => self.lending_menu()?,
                "4" => self.other_menu()?,
                "5" => Flow::Quit,
                _ => {
                    self.invalid_choice()?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        self.library.save_all()?;
        writeln!(self.output, "Data saved. Goodbye!")?;
        self.output.flush()?;
        tracing::info!("Session ended");
        Ok(())
    }

    /// Print `label` and read one line. `None` once input is exhausted.
    pub(crate) fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Print a recoverable error; anything else is passed back to the caller
    pub(crate) fn report(&mut self, err: AppError) -> AppResult<()> {
        if !err.is_recoverable() {
            return Err(err);
        }
        tracing::debug!("Operation rejected: {}", err);
        writeln!(self.output, "Error [{}]: {}", err.code() as u32, err)?;
        Ok(())
    }

    pub(crate) fn invalid_choice(&mut self) -> AppResult<()> {
        writeln!(self.output, "Invalid choice. Try again.")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::JsonFileStorage;
    use std::io::Cursor;

    fn run_script(library: &mut Library, script: &str) -> String {
        let mut output = Vec::new();
        Shell::new(library, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn fresh_library(dir: &tempfile::TempDir) -> Library {
        Library::open(JsonFileStorage::new(dir.path().join("data.json"))).unwrap()
    }

    #[test]
    fn test_exit_saves() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = fresh_library(&dir);
        let out = run_script(&mut library, "5\n");
        assert!(out.contains("Data saved. Goodbye!"));
        assert!(dir.path().join("data.json").exists());
    }

    #[test]
    fn test_end_of_input_saves() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = fresh_library(&dir);
        let out = run_script(&mut library, "1\n2\nDune\n");
        assert!(out.contains("Data saved. Goodbye!"));
        assert!(library.list_items().is_empty());
        assert!(dir.path().join("data.json").exists());
    }

    #[test]
    fn test_invalid_choice() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = fresh_library(&dir);
        let out = run_script(&mut library, "9\n1\n7\n5\n5\n");
        assert_eq!(out.matches("Invalid choice. Try again.").count(), 2);
    }

    #[test]
    fn test_books_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = fresh_library(&dir);
        let script = "1\n1\n2\nDune\nHerbert\n1965\n2\nSolaris\nLem\nabc\n\
                      4\ntitle\ndune\n4\nisbn\n3\n7\n1\n5\n5\n";
        let out = run_script(&mut library, script);

        assert!(out.contains("No books in the library."));
        assert!(out.contains("Added book: Dune"));
        assert!(out.contains("Error [18]: Validation error: Publication year must be a number"));
        assert!(out.contains("1: Dune - Herbert (1965) - Status: Available"));
        assert!(out.contains("Unsupported search field 'isbn'"));
        assert!(out.contains("Error [20]: Not found: Item with id 7 not found"));
        assert_eq!(library.list_items().len(), 1);
    }

    #[test]
    fn test_lending_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = fresh_library(&dir);
        let script = "1\n2\nDune\nHerbert\n1965\n5\n\
                      2\n2\nAna\nNowak\n1\n4\n\
                      3\n1\n1\n1\n1\n1\n1\n3\n2\n1\n1\n4\n5\n";
        let out = run_script(&mut library, script);

        assert!(out.contains("Added patron: Ana Nowak"));
        assert!(out.contains("1: Ana Nowak - Loans: 0"));
        assert!(out.contains("Ana Nowak borrowed 'Dune', due"));
        assert!(out.contains("Error [7]: Conflict: Item 'Dune' is already on loan"));
        assert!(out.contains("Ana Nowak borrowed 'Dune' - Date:"));
        assert!(out.contains("'Dune' has been returned."));
        assert_eq!(library.history().len(), 1);
        assert!(!library.list_items()[0].on_loan);
    }
}
