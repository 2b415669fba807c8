//! Birthday command handlers (set-birthday, birthday, birthdays).

use anyhow::Result;
use chrono::Local;

use super::{load, save};
use crate::cli::output::{BirthdayListing, Output, OutputFormat};
use crate::cli::{BirthdayArgs, BirthdaysArgs, SetBirthdayArgs};
use crate::infra::Store;

pub fn handle_set_birthday(args: &SetBirthdayArgs, store: &Store) -> Result<()> {
    let mut directory = load(store)?;
    directory
        .contact_mut(&args.name)?
        .set_birthday(&args.birthday)?;
    save(store, &directory)?;

    println!("Set birthday {} for {}.", args.birthday, args.name);
    Ok(())
}

pub fn handle_birthday(args: &BirthdayArgs, store: &Store) -> Result<()> {
    let directory = load(store)?;
    let record = directory.contact(&args.name)?;

    match record.birthday() {
        Some(birthday) => println!("{}'s birthday: {birthday}", args.name),
        None => println!("{} has no birthday set.", args.name),
    }
    Ok(())
}

pub fn handle_birthdays(args: &BirthdaysArgs, store: &Store) -> Result<()> {
    let directory = load(store)?;
    let today = Local::now().date_naive();
    let upcoming = directory.upcoming_birthdays(args.days, today);

    match args.format {
        OutputFormat::Human => {
            if upcoming.is_empty() {
                println!("No upcoming birthdays.");
            } else {
                for entry in &upcoming {
                    let listing = BirthdayListing::from(entry);
                    println!("{}: {}", listing.name, listing.date);
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<BirthdayListing> = upcoming.iter().map(Into::into).collect();
            let out = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
