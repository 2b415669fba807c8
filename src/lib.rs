//! rolo - a contact book and notes assistant with a single-file store

pub mod cli;
pub mod domain;
pub mod infra;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_add_phone, handle_birthday, handle_birthdays, handle_change_phone,
        handle_completions, handle_list, handle_note, handle_note_edit, handle_note_rm,
        handle_note_show, handle_notes, handle_phones, handle_rm, handle_search,
        handle_set_address, handle_set_birthday, handle_set_email, handle_show, handle_tag,
        handle_tagged, handle_untag,
    },
};
use infra::Store;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let store = Store::new(config.book_path(cli.file.as_ref()));

    match &cli.command {
        Command::Add(args) => handle_add(args, &store),
        Command::Rm(args) => handle_rm(args, &store),
        Command::Show(args) => handle_show(args, &store),
        Command::List(args) => handle_list(args, &store),
        Command::AddPhone(args) => handle_add_phone(args, &store),
        Command::ChangePhone(args) => handle_change_phone(args, &store),
        Command::Phones(args) => handle_phones(args, &store),
        Command::SetBirthday(args) => handle_set_birthday(args, &store),
        Command::Birthday(args) => handle_birthday(args, &store),
        Command::Birthdays(args) => handle_birthdays(args, &store),
        Command::SetEmail(args) => handle_set_email(args, &store),
        Command::SetAddress(args) => handle_set_address(args, &store),
        Command::Note(args) => handle_note(args, &store),
        Command::NoteRm(args) => handle_note_rm(args, &store),
        Command::NoteEdit(args) => handle_note_edit(args, &store),
        Command::NoteShow(args) => handle_note_show(args, &store),
        Command::Notes(args) => handle_notes(args, &store),
        Command::Search(args) => handle_search(args, &store),
        Command::Tag(args) => handle_tag(args, &store),
        Command::Untag(args) => handle_untag(args, &store),
        Command::Tagged(args) => handle_tagged(args, &store),
        Command::Completions(args) => handle_completions(args),
    }
}
