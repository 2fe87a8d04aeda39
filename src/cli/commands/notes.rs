//! Notes command handler

use crate::args::NotesSubcommand;
use degree_planner::config::Config;
use degree_planner::core::notes::{append_note, read_notes, write_notes};
use degree_planner::FileStorage;

use super::report_saved;

/// Dispatch `notes` subcommands; no subcommand shows the notes
pub fn run(subcommand: Option<NotesSubcommand>, config: &Config) {
    let mut storage = FileStorage::new(config.data_dir());

    match subcommand.unwrap_or(NotesSubcommand::Show) {
        NotesSubcommand::Show => {
            let notes = read_notes(&storage);
            if notes.trim().is_empty() {
                println!("No notes yet. Add one with `degreeplan notes add <TEXT>`.");
            } else {
                println!("{notes}");
            }
        }
        NotesSubcommand::Add { text } => {
            let result = append_note(&mut storage, &text.join(" ")).map(|_| ());
            report_saved(result, "Note added");
        }
        NotesSubcommand::Set { text } => {
            report_saved(write_notes(&mut storage, &text.join(" ")), "Notes replaced");
        }
        NotesSubcommand::Clear => {
            report_saved(write_notes(&mut storage, ""), "Notes cleared");
        }
    }
}
