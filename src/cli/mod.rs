//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// rolo - contact book and notes in one file
#[derive(Parser, Debug)]
#[command(name = "rolo", version, about, long_about = None)]
pub struct Cli {
    /// Book file (overrides config file and the default location)
    #[arg(short = 'f', long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new contact
    Add(AddArgs),

    /// Delete a contact
    Rm(RmArgs),

    /// Show a contact card
    Show(ShowArgs),

    /// List all contacts
    #[command(name = "ls")]
    List(ListArgs),

    /// Add a phone number to a contact
    AddPhone(AddPhoneArgs),

    /// Replace one of a contact's phone numbers
    ChangePhone(ChangePhoneArgs),

    /// List a contact's phone numbers
    Phones(PhonesArgs),

    /// Set a contact's birthday (DD.MM.YYYY)
    SetBirthday(SetBirthdayArgs),

    /// Show a contact's birthday
    Birthday(BirthdayArgs),

    /// Show birthdays coming up within a window of days
    Birthdays(BirthdaysArgs),

    /// Set a contact's email address
    SetEmail(SetEmailArgs),

    /// Set a contact's postal address
    SetAddress(SetAddressArgs),

    /// Add a note
    Note(NoteArgs),

    /// Delete a note
    NoteRm(NoteRmArgs),

    /// Replace a note's content
    NoteEdit(NoteEditArgs),

    /// Show a note
    NoteShow(NoteShowArgs),

    /// List all notes
    Notes(NotesArgs),

    /// Search notes by title or content
    Search(SearchArgs),

    /// Add a tag to a note
    Tag(TagArgs),

    /// Remove a tag from a note
    Untag(UntagArgs),

    /// List notes carrying a tag
    Tagged(TaggedArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Contact name
    pub name: String,

    /// Phone number (10 digits)
    pub phone: String,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Contact name
    pub name: String,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Contact name
    pub name: String,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `add-phone` command
#[derive(Parser, Debug)]
pub struct AddPhoneArgs {
    /// Contact name
    pub name: String,

    /// Phone number (10 digits)
    pub phone: String,
}

/// Arguments for the `change-phone` command
#[derive(Parser, Debug)]
pub struct ChangePhoneArgs {
    /// Contact name
    pub name: String,

    /// Existing phone number
    pub old_phone: String,

    /// Replacement phone number (10 digits)
    pub new_phone: String,
}

/// Arguments for the `phones` command
#[derive(Parser, Debug)]
pub struct PhonesArgs {
    /// Contact name
    pub name: String,
}

/// Arguments for the `set-birthday` command
#[derive(Parser, Debug)]
pub struct SetBirthdayArgs {
    /// Contact name
    pub name: String,

    /// Birthday in DD.MM.YYYY
    pub birthday: String,
}

/// Arguments for the `birthday` command
#[derive(Parser, Debug)]
pub struct BirthdayArgs {
    /// Contact name
    pub name: String,
}

/// Arguments for the `birthdays` command
#[derive(Parser, Debug)]
pub struct BirthdaysArgs {
    /// Window in days from today
    #[arg(default_value_t = 7)]
    pub days: u32,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `set-email` command
#[derive(Parser, Debug)]
pub struct SetEmailArgs {
    /// Contact name
    pub name: String,

    /// Email address
    pub email: String,
}

/// Arguments for the `set-address` command
#[derive(Parser, Debug)]
pub struct SetAddressArgs {
    /// Contact name
    pub name: String,

    /// Postal address
    pub address: String,
}

/// Arguments for the `note` command
#[derive(Parser, Debug)]
pub struct NoteArgs {
    /// Note title
    pub title: String,

    /// Note content
    pub content: String,
}

/// Arguments for the `note-rm` command
#[derive(Parser, Debug)]
pub struct NoteRmArgs {
    /// Note title
    pub title: String,
}

/// Arguments for the `note-edit` command
#[derive(Parser, Debug)]
pub struct NoteEditArgs {
    /// Note title
    pub title: String,

    /// Replacement content
    pub content: String,
}

/// Arguments for the `note-show` command
#[derive(Parser, Debug)]
pub struct NoteShowArgs {
    /// Note title
    pub title: String,
}

/// Arguments for the `notes` command
#[derive(Parser, Debug)]
pub struct NotesArgs {
    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query (case-insensitive substring)
    pub query: String,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tag` command
#[derive(Parser, Debug)]
pub struct TagArgs {
    /// Note title
    pub title: String,

    /// Tag to add (with or without the leading #)
    pub tag: String,
}

/// Arguments for the `untag` command
#[derive(Parser, Debug)]
pub struct UntagArgs {
    /// Note title
    pub title: String,

    /// Tag to remove (with or without the leading #)
    pub tag: String,
}

/// Arguments for the `tagged` command
#[derive(Parser, Debug)]
pub struct TaggedArgs {
    /// Tag to look for (with or without the leading #)
    pub tag: String,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
