//! Line-oriented interactive menu over a [`RecordStore`].

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::debug;

use crate::{
    core::store::{RecordStore, StoreError},
    present::table::{DuplicateReport, RecordTable},
    record::RecordDraft,
};

const MENU: &str = "
1. Add New User Data
2. View All Data
3. Remove Duplicate Data
4. Search Data
5. Exit
";

/// Fatal shell failures. Duplicates, empty results and bad choices never surface here.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Console read or write failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    /// Storage layer failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One menu selection, compared literally against the entered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: add a record.
    Add,
    /// `2`: list every record.
    ViewAll,
    /// `3`: delete duplicate groups.
    RemoveDuplicates,
    /// `4`: keyword search.
    Search,
    /// `5`: leave the loop.
    Exit,
    /// Anything else, as entered.
    Invalid(String),
}

impl MenuChoice {
    /// Parses a line with its line ending already stripped.
    pub fn parse(line: &str) -> Self {
        match line {
            "1" => Self::Add,
            "2" => Self::ViewAll,
            "3" => Self::RemoveDuplicates,
            "4" => Self::Search,
            "5" => Self::Exit,
            other => Self::Invalid(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Status {
    Success,
    Error,
    Warning,
    Info,
}

/// Interactive session owning the store and both console endpoints.
pub struct Shell<R, W> {
    store: RecordStore,
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Builds a session; `color` toggles ANSI styling of status lines.
    pub fn new(store: RecordStore, input: R, output: W, color: bool) -> Self {
        Self {
            store,
            input,
            output,
            color,
        }
    }

    /// Ends the session and hands back the store.
    pub fn into_store(self) -> RecordStore {
        self.store
    }

    /// Runs the menu loop until `5` is chosen or input ends.
    pub fn run(&mut self) -> Result<(), ShellError> {
        let title = "=== Data Redundancy Removal System ===";
        if self.color {
            writeln!(self.output, "\n{}\n", title.magenta().bold())?;
        } else {
            writeln!(self.output, "\n{title}\n")?;
        }

        loop {
            self.show_menu()?;
            let Some(line) = self.prompt("Enter your choice (1-5): ")? else {
                break;
            };
            let flow = match MenuChoice::parse(&line) {
                MenuChoice::Add => self.add()?,
                MenuChoice::ViewAll => self.view_all()?,
                MenuChoice::RemoveDuplicates => self.remove_duplicates()?,
                MenuChoice::Search => self.search()?,
                MenuChoice::Exit => {
                    self.status(Status::Info, "Exiting system. Have a great day!")?;
                    ControlFlow::Break(())
                }
                MenuChoice::Invalid(raw) => {
                    debug!(choice = %raw, "invalid menu choice");
                    self.status(
                        Status::Error,
                        "Invalid choice! Please enter a number between 1-5.",
                    )?;
                    ControlFlow::Continue(())
                }
            };
            if flow.is_break() {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn add(&mut self) -> Result<ControlFlow<()>, ShellError> {
        let mut fields = Vec::with_capacity(4);
        for label in ["Name", "Email", "Phone", "Address"] {
            let Some(value) = self.prompt(&format!("Enter {label}: "))? else {
                return Ok(ControlFlow::Break(()));
            };
            fields.push(value);
        }
        let address = fields.pop().filter(|a| !a.is_empty());
        let phone = fields.pop().unwrap_or_default();
        let email = fields.pop().unwrap_or_default();
        let name = fields.pop().unwrap_or_default();

        for (label, value) in [("Name", &name), ("Email", &email), ("Phone", &phone)] {
            if value.is_empty() {
                self.status(Status::Error, &format!("{label} must not be empty."))?;
                return Ok(ControlFlow::Continue(()));
            }
        }

        let draft = RecordDraft {
            name,
            email,
            phone,
            address,
        };
        let name = draft.name.clone();
        match self.store.insert(draft) {
            Ok(_) => {
                self.status(
                    Status::Success,
                    &format!("Data added successfully for {name}."),
                )?;
            }
            Err(StoreError::Duplicate { .. }) => {
                self.status(
                    Status::Error,
                    "Duplicate entry detected! Either email or phone already exists.",
                )?;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn view_all(&mut self) -> Result<ControlFlow<()>, ShellError> {
        let records = self.store.list_all()?;
        if records.is_empty() {
            self.status(Status::Warning, "No data found in the database.")?;
        } else {
            self.status(Status::Info, "\nCurrent Database Records:\n")?;
            writeln!(self.output, "{}\n", RecordTable::new(&records))?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn remove_duplicates(&mut self) -> Result<ControlFlow<()>, ShellError> {
        let groups = self.store.duplicate_groups()?;
        if !groups.is_empty() {
            writeln!(self.output, "{}", DuplicateReport::new(&groups))?;
        }
        let removed = self.store.delete_duplicates()?;
        self.status(
            Status::Success,
            &format!("Removed {removed} duplicate record(s)."),
        )?;
        Ok(ControlFlow::Continue(()))
    }

    fn search(&mut self) -> Result<ControlFlow<()>, ShellError> {
        let Some(keyword) = self.prompt("Enter keyword to search: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let found = self.store.search(&keyword)?;
        if found.is_empty() {
            self.status(
                Status::Warning,
                &format!("No records found for '{keyword}'."),
            )?;
        } else {
            self.status(Status::Info, &format!("\nSearch results for '{keyword}':\n"))?;
            writeln!(self.output, "{}", RecordTable::new(&found))?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn show_menu(&mut self) -> io::Result<()> {
        if self.color {
            writeln!(self.output, "{}", MENU.blue())
        } else {
            writeln!(self.output, "{MENU}")
        }
    }

    /// Writes `label` and reads one line without its line ending. `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than failing the session.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn status(&mut self, status: Status, msg: &str) -> io::Result<()> {
        if !self.color {
            return writeln!(self.output, "{msg}");
        }
        match status {
            Status::Success => writeln!(self.output, "{}", msg.green()),
            Status::Error => writeln!(self.output, "{}", msg.red()),
            Status::Warning => writeln!(self.output, "{}", msg.yellow()),
            Status::Info => writeln!(self.output, "{}", msg.cyan()),
        }
    }
}
