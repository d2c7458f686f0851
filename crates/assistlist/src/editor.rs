//! Interactive menu-driven editor.
//!
//! The editor owns the in-memory entry list for one session. It reads operator
//! input line by line and writes prompts and listings to any [`Write`] sink,
//! so the same loop serves the console and scripted tests.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::entry::{Entry, FieldMap};
use crate::error::{Error, Result};
use crate::fields::FieldLists;
use crate::store::format::SEPARATOR;
use crate::store::Store;

/// One selection from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Append a new entry.
    Add,
    /// Re-enter the fields of an existing entry.
    Edit,
    /// Remove an entry.
    Delete,
    /// Print every entry.
    View,
    /// Persist the list and leave the loop.
    SaveAndExit,
}

impl MenuChoice {
    /// All choices, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Edit,
        Self::Delete,
        Self::View,
        Self::SaveAndExit,
    ];

    /// Parse the operator's menu response; `None` for anything unrecognised.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Edit),
            "3" => Some(Self::Delete),
            "4" => Some(Self::View),
            "5" => Some(Self::SaveAndExit),
            _ => None,
        }
    }

    /// Number shown next to this choice in the menu.
    #[must_use]
    pub fn number(self) -> usize {
        match self {
            Self::Add => 1,
            Self::Edit => 2,
            Self::Delete => 3,
            Self::View => 4,
            Self::SaveAndExit => 5,
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "Add Entry"),
            Self::Edit => write!(f, "Edit Entry"),
            Self::Delete => write!(f, "Delete Entry"),
            Self::View => write!(f, "View All Entries"),
            Self::SaveAndExit => write!(f, "Save and Exit"),
        }
    }
}

/// Read one line from `input`, without the trailing newline.
///
/// # Errors
///
/// Returns [`Error::InputClosed`] at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputClosed);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Ask for one field value, showing `default` in brackets.
///
/// Returns the trimmed response, or `default` when the response is blank.
///
/// # Errors
///
/// Returns an error if the prompt cannot be written or input has ended.
pub fn prompt_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: &str,
) -> Result<String> {
    write!(output, "{label} [{default}]: ")?;
    output.flush()?;
    let response = read_line(input)?;
    let response = response.trim();
    if response.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(response.to_string())
    }
}

/// Menu loop over an in-memory entry list.
#[derive(Debug)]
pub struct Editor<R, W> {
    input: R,
    output: W,
    fields: FieldLists,
    entries: Vec<Entry>,
}

impl<R: BufRead, W: Write> Editor<R, W> {
    /// Create an editor over `entries`, reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, fields: FieldLists, entries: Vec<Entry>) -> Self {
        Self {
            input,
            output,
            fields,
            entries,
        }
    }

    /// Current entries, in display order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Consume the editor, returning its entries and output sink.
    pub fn into_parts(self) -> (Vec<Entry>, W) {
        (self.entries, self.output)
    }

    /// Run the menu until the operator saves and exits.
    ///
    /// Returns the number of entries written to `store`.
    ///
    /// # Errors
    ///
    /// An invalid entry number during edit or delete ends the session with
    /// [`Error::InvalidIndex`]; nothing is saved. End of input and I/O
    /// failures also end the session.
    pub fn run(&mut self, store: &Store) -> Result<usize> {
        loop {
            self.print_menu()?;
            let response = read_line(&mut self.input)?;
            match MenuChoice::parse(&response) {
                Some(MenuChoice::Add) => self.add()?,
                Some(MenuChoice::Edit) => self.edit()?,
                Some(MenuChoice::Delete) => self.delete()?,
                Some(MenuChoice::View) => self.view()?,
                Some(MenuChoice::SaveAndExit) => return self.save(store),
                None => {
                    debug!("Unrecognised menu choice {:?}", response);
                    writeln!(self.output, "Invalid choice.")?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- MENU ---")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {choice}", choice.number())?;
        }
        write!(self.output, "Choose: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompt for every field of a new entry and append it.
    ///
    /// # Errors
    ///
    /// Returns an error if input ends or output fails.
    pub fn add(&mut self) -> Result<()> {
        let empty = Entry::default();
        let entry = self.collect_entry(&empty)?;
        self.entries.push(entry);
        info!("Added entry #{}", self.entries.len());
        Ok(())
    }

    /// Pick an entry by number and re-prompt its fields, keeping current values as defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] for a number outside the list.
    pub fn edit(&mut self) -> Result<()> {
        if self.entries.is_empty() {
            writeln!(self.output, "No entries yet.")?;
            return Ok(());
        }
        self.list_summaries()?;
        let index = self.prompt_index("Enter entry number to edit: ")?;
        let current = self.entries[index].clone();
        let updated = self.collect_entry(&current)?;
        self.entries[index] = updated;
        info!("Edited entry #{}", index + 1);
        Ok(())
    }

    /// Pick an entry by number and remove it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] for a number outside the list.
    pub fn delete(&mut self) -> Result<()> {
        if self.entries.is_empty() {
            writeln!(self.output, "No entries to delete.")?;
            return Ok(());
        }
        self.list_summaries()?;
        let index = self.prompt_index("Enter entry number to delete: ")?;
        self.entries.remove(index);
        writeln!(self.output, "Entry deleted.")?;
        info!("Deleted entry #{}", index + 1);
        Ok(())
    }

    /// Print every entry in full.
    ///
    /// # Errors
    ///
    /// Returns an error if output fails.
    pub fn view(&mut self) -> Result<()> {
        if self.entries.is_empty() {
            writeln!(self.output, "No entries yet.")?;
        }
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(self.output)?;
            writeln!(self.output, "==== Entry #{} ====", i + 1)?;
            writeln!(self.output, "Parent/Guardian Info:")?;
            for (name, value) in entry.parent.iter() {
                writeln!(self.output, "  {name}: {value}")?;
            }
            writeln!(self.output, "Student Info:")?;
            for (name, value) in entry.student.iter() {
                writeln!(self.output, "  {name}: {value}")?;
            }
            writeln!(self.output, "{SEPARATOR}")?;
        }
        Ok(())
    }

    fn save(&mut self, store: &Store) -> Result<usize> {
        let written = store.save(&self.entries)?;
        writeln!(
            self.output,
            "Saved {written} entries to {}",
            store.path().display()
        )?;
        Ok(written)
    }

    fn list_summaries(&mut self) -> Result<()> {
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(self.output, "[{}] {}", i + 1, entry.summary())?;
        }
        Ok(())
    }

    /// Read a 1-based entry number and convert it to a list index.
    fn prompt_index(&mut self, prompt: &str) -> Result<usize> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let response = read_line(&mut self.input)?;
        let len = self.entries.len();
        match response.trim().parse::<usize>() {
            Ok(number) if (1..=len).contains(&number) => Ok(number - 1),
            _ => Err(Error::invalid_index(response.trim(), len)),
        }
    }

    fn collect_entry(&mut self, defaults: &Entry) -> Result<Entry> {
        let fields = self.fields;
        let parent = self.collect_info(
            "Parent/Guardian Information",
            fields.parent,
            &defaults.parent,
        )?;
        let student = self.collect_info("Student Information", fields.student, &defaults.student)?;
        Ok(Entry::new(parent, student))
    }

    fn collect_info(
        &mut self,
        heading: &str,
        names: &[&str],
        defaults: &FieldMap,
    ) -> Result<FieldMap> {
        writeln!(self.output)?;
        writeln!(self.output, "--- {heading} ---")?;
        let mut info = FieldMap::new();
        for name in names {
            let default = defaults.get(name).unwrap_or_default();
            let value = prompt_field(&mut self.input, &mut self.output, name, default)?;
            info.insert(*name, value);
        }
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const PARENT: &[&str] = &["Last Name", "Sex"];
    const STUDENT: &[&str] = &["First Name"];

    fn fields() -> FieldLists {
        FieldLists::new(PARENT, STUDENT)
    }

    fn entry(last: &str, sex: &str, first: &str) -> Entry {
        Entry::new(
            [("Last Name", last), ("Sex", sex)].into_iter().collect(),
            [("First Name", first)].into_iter().collect(),
        )
    }

    fn editor(script: &str, entries: Vec<Entry>) -> Editor<Cursor<Vec<u8>>, Vec<u8>> {
        Editor::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            fields(),
            entries,
        )
    }

    fn output(editor: Editor<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, out) = editor.into_parts();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::SaveAndExit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn test_menu_choice_numbers_match_parse() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.number().to_string()), Some(choice));
        }
    }

    #[test]
    fn test_menu_choice_display() {
        assert_eq!(MenuChoice::View.to_string(), "View All Entries");
        assert_eq!(MenuChoice::SaveAndExit.to_string(), "Save and Exit");
    }

    #[test]
    fn test_prompt_field_uses_input() {
        let mut input = Cursor::new(b"  Reyes  \n".to_vec());
        let mut out = Vec::new();
        let value = prompt_field(&mut input, &mut out, "Last Name", "Cruz").unwrap();
        assert_eq!(value, "Reyes");
        assert_eq!(String::from_utf8(out).unwrap(), "Last Name [Cruz]: ");
    }

    #[test]
    fn test_prompt_field_blank_keeps_default() {
        let mut input = Cursor::new(b"   \n".to_vec());
        let mut out = Vec::new();
        let value = prompt_field(&mut input, &mut out, "Last Name", "Cruz").unwrap();
        assert_eq!(value, "Cruz");
    }

    #[test]
    fn test_prompt_field_no_default() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut out = Vec::new();
        let value = prompt_field(&mut input, &mut out, "Sex", "").unwrap();
        assert_eq!(value, "");
        assert_eq!(String::from_utf8(out).unwrap(), "Sex []: ");
    }

    #[test]
    fn test_prompt_field_eof() {
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let err = prompt_field(&mut input, &mut out, "Sex", "").unwrap_err();
        assert!(err.is_input_closed());
    }

    #[test]
    fn test_read_line_strips_crlf() {
        let mut input = Cursor::new(b"2\r\n".to_vec());
        assert_eq!(read_line(&mut input).unwrap(), "2");
    }

    #[test]
    fn test_add_appends_in_field_order() {
        let mut ed = editor("Reyes\nF\nAna\n", vec![entry("Cruz", "M", "Ben")]);
        ed.add().unwrap();

        assert_eq!(ed.entries().len(), 2);
        let added = &ed.entries()[1];
        assert_eq!(added, &entry("Reyes", "F", "Ana"));
        let names: Vec<_> = added.parent.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Last Name", "Sex"]);

        let out = output(ed);
        assert!(out.contains("--- Parent/Guardian Information ---"));
        assert!(out.contains("--- Student Information ---"));
        assert!(out.contains("Last Name []: "));
    }

    #[test]
    fn test_edit_keeps_defaults_on_blank() {
        let mut ed = editor("1\n\nF\n\n", vec![entry("Cruz", "M", "Ben")]);
        ed.edit().unwrap();

        assert_eq!(ed.entries()[0], entry("Cruz", "F", "Ben"));
        let out = output(ed);
        assert!(out.contains("[1] Cruz, Ben..."));
        assert!(out.contains("Last Name [Cruz]: "));
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut ed = editor(
            "2\nLim\n\nJo\n",
            vec![entry("Cruz", "M", "Ben"), entry("Tan", "F", "Ria"), entry("Go", "M", "Al")],
        );
        ed.edit().unwrap();

        assert_eq!(ed.entries()[0], entry("Cruz", "M", "Ben"));
        assert_eq!(ed.entries()[1], entry("Lim", "F", "Jo"));
        assert_eq!(ed.entries()[2], entry("Go", "M", "Al"));
    }

    #[test]
    fn test_edit_empty_reports() {
        let mut ed = editor("", Vec::new());
        ed.edit().unwrap();
        assert!(output(ed).contains("No entries yet."));
    }

    #[test]
    fn test_edit_non_numeric_index_fails() {
        let mut ed = editor("abc\n", vec![entry("Cruz", "M", "Ben")]);
        let err = ed.edit().unwrap_err();
        assert!(err.is_invalid_index());
        assert_eq!(ed.entries()[0], entry("Cruz", "M", "Ben"));
    }

    #[test]
    fn test_delete_shifts_later_entries() {
        let entries = vec![
            entry("A", "M", "a"),
            entry("B", "M", "b"),
            entry("C", "M", "c"),
            entry("D", "M", "d"),
        ];
        let mut ed = editor("2\n", entries.clone());
        ed.delete().unwrap();

        assert_eq!(ed.entries().len(), 3);
        assert_eq!(ed.entries()[0], entries[0]);
        assert_eq!(ed.entries()[1], entries[2]);
        assert_eq!(ed.entries()[2], entries[3]);
        assert!(output(ed).contains("Entry deleted."));
    }

    #[test]
    fn test_delete_empty_reports() {
        let mut ed = editor("", Vec::new());
        ed.delete().unwrap();
        assert!(output(ed).contains("No entries to delete."));
    }

    #[test]
    fn test_delete_out_of_range_fails() {
        for bad in ["0", "3", "-1", ""] {
            let mut ed = editor(&format!("{bad}\n"), vec![entry("A", "M", "a"), entry("B", "F", "b")]);
            let err = ed.delete().unwrap_err();
            assert!(err.is_invalid_index(), "expected invalid index for {bad:?}");
            assert_eq!(ed.entries().len(), 2);
        }
    }

    #[test]
    fn test_view_prints_entries() {
        let mut ed = editor("", vec![entry("Cruz", "M", "Ben")]);
        ed.view().unwrap();
        let out = output(ed);
        assert!(out.contains("==== Entry #1 ===="));
        assert!(out.contains("Parent/Guardian Info:\n  Last Name: Cruz\n  Sex: M\n"));
        assert!(out.contains("Student Info:\n  First Name: Ben\n--------------------------\n"));
    }

    #[test]
    fn test_view_empty() {
        let mut ed = editor("", Vec::new());
        ed.view().unwrap();
        assert_eq!(output(ed), "No entries yet.\n");
    }

    #[test]
    fn test_run_eof_at_menu() {
        let mut ed = editor("", Vec::new());
        let store = Store::new("unused.txt", "unused.bak");
        let err = ed.run(&store).unwrap_err();
        assert!(err.is_input_closed());
    }

    #[test]
    fn test_run_invalid_choice_then_bad_index() {
        let mut ed = editor("9\n3\nx\n", vec![entry("A", "M", "a")]);
        let store = Store::new("unused.txt", "unused.bak");
        let err = ed.run(&store).unwrap_err();
        assert!(err.is_invalid_index());
        let out = output(ed);
        assert!(out.contains("Invalid choice."));
        assert!(out.contains("--- MENU ---\n1. Add Entry\n2. Edit Entry\n3. Delete Entry\n4. View All Entries\n5. Save and Exit\nChoose: "));
    }
}
