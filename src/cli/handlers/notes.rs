//! Note command handlers (note, note-rm, note-edit, note-show, notes, search).

use anyhow::Result;
use chrono::Utc;

use super::{load, save};
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{NoteArgs, NoteEditArgs, NoteRmArgs, NoteShowArgs, NotesArgs, SearchArgs};
use crate::domain::Note;
use crate::infra::Store;

pub fn handle_note(args: &NoteArgs, store: &Store) -> Result<()> {
    let mut directory = load(store)?;
    directory.add_note(&args.title, &args.content, Utc::now())?;
    save(store, &directory)?;

    println!("Added note '{}'.", args.title.trim());
    Ok(())
}

pub fn handle_note_rm(args: &NoteRmArgs, store: &Store) -> Result<()> {
    let mut directory = load(store)?;
    let removed = directory.delete_note(&args.title)?;
    save(store, &directory)?;

    println!("Deleted note '{}'.", removed.title());
    Ok(())
}

pub fn handle_note_edit(args: &NoteEditArgs, store: &Store) -> Result<()> {
    let mut directory = load(store)?;
    directory.edit_note(&args.title, &args.content)?;
    save(store, &directory)?;

    println!("Updated note '{}'.", args.title);
    Ok(())
}

pub fn handle_note_show(args: &NoteShowArgs, store: &Store) -> Result<()> {
    let directory = load(store)?;
    let note = directory.note(&args.title)?;
    print_note(note);
    Ok(())
}

pub fn handle_notes(args: &NotesArgs, store: &Store) -> Result<()> {
    let directory = load(store)?;
    let notes: Vec<&Note> = directory.notes().values().collect();
    print_note_set(&notes, args.format, "No notes found.")
}

pub fn handle_search(args: &SearchArgs, store: &Store) -> Result<()> {
    let directory = load(store)?;
    let matches = directory.search_notes(&args.query);
    let empty = format!("No notes matching '{}'.", args.query);
    print_note_set(&matches, args.format, &empty)
}

/// Prints a set of notes in the requested format; used by every listing
/// command so the shapes stay identical.
pub(crate) fn print_note_set(notes: &[&Note], format: OutputFormat, empty_msg: &str) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("{empty_msg}");
            } else {
                for (i, note) in notes.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    print_note(note);
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().copied().map(Into::into).collect();
            let out = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

fn print_note(note: &Note) {
    println!(
        "{} (created {})",
        note.title(),
        note.created().format("%Y-%m-%d %H:%M")
    );
    if !note.tags().is_empty() {
        let tags: Vec<&str> = note.tags().iter().map(|t| t.as_str()).collect();
        println!("  tags: {}", tags.join(" "));
    }
    println!("  {}", note.content());
}
