//! Tag command handlers (tag, untag, tagged).

use anyhow::Result;

use super::notes::print_note_set;
use super::{load, save};
use crate::cli::{TagArgs, TaggedArgs, UntagArgs};
use crate::domain::Tag;
use crate::infra::Store;

pub fn handle_tag(args: &TagArgs, store: &Store) -> Result<()> {
    // Validate the tag before any I/O.
    let tag = Tag::new(&args.tag)?;

    let mut directory = load(store)?;
    directory.note_mut(&args.title)?.add_tag(tag.as_str())?;
    save(store, &directory)?;

    println!("Tagged '{}' with {}.", args.title, tag);
    Ok(())
}

pub fn handle_untag(args: &UntagArgs, store: &Store) -> Result<()> {
    let tag = Tag::new(&args.tag)?;

    let mut directory = load(store)?;
    directory.note_mut(&args.title)?.remove_tag(tag.as_str())?;
    save(store, &directory)?;

    println!("Removed {} from '{}'.", tag, args.title);
    Ok(())
}

pub fn handle_tagged(args: &TaggedArgs, store: &Store) -> Result<()> {
    let directory = load(store)?;
    let matches = directory.notes_by_tag(&args.tag)?;
    let empty = format!("No notes tagged {}.", Tag::new(&args.tag)?);
    print_note_set(&matches, args.format, &empty)
}
