//! Contact command handlers (add, rm, show, ls, phones, email, address).

use anyhow::Result;

use super::{load, save};
use crate::cli::output::{ContactListing, Output, OutputFormat};
use crate::cli::{
    AddArgs, AddPhoneArgs, ChangePhoneArgs, ListArgs, PhonesArgs, RmArgs, SetAddressArgs,
    SetEmailArgs, ShowArgs,
};
use crate::domain::{Name, Record};
use crate::infra::Store;

pub fn handle_add(args: &AddArgs, store: &Store) -> Result<()> {
    // Validate both fields before any I/O.
    let name = Name::new(&args.name)?;
    let mut record = Record::new(name);
    record.add_phone(&args.phone)?;

    let mut directory = load(store)?;
    directory.add_record(record)?;
    save(store, &directory)?;

    println!("Added contact {}.", args.name.trim());
    Ok(())
}

pub fn handle_rm(args: &RmArgs, store: &Store) -> Result<()> {
    let mut directory = load(store)?;
    directory.delete(&args.name)?;
    save(store, &directory)?;

    println!("Deleted contact {}.", args.name);
    Ok(())
}

pub fn handle_show(args: &ShowArgs, store: &Store) -> Result<()> {
    let directory = load(store)?;
    let record = directory.contact(&args.name)?;

    println!("{}", record.name());
    if !record.phones().is_empty() {
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        println!("  phones: {}", phones.join("; "));
    }
    if let Some(birthday) = record.birthday() {
        println!("  birthday: {birthday}");
    }
    if let Some(email) = record.email() {
        println!("  email: {email}");
    }
    if let Some(address) = record.address() {
        println!("  address: {address}");
    }
    Ok(())
}

pub fn handle_list(args: &ListArgs, store: &Store) -> Result<()> {
    let directory = load(store)?;

    match args.format {
        OutputFormat::Human => {
            if directory.contacts().is_empty() {
                println!("No contacts found.");
            } else {
                for record in directory.contacts().values() {
                    println!("{record}");
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<ContactListing> =
                directory.contacts().values().map(Into::into).collect();
            let out = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

pub fn handle_add_phone(args: &AddPhoneArgs, store: &Store) -> Result<()> {
    let mut directory = load(store)?;
    directory.contact_mut(&args.name)?.add_phone(&args.phone)?;
    save(store, &directory)?;

    println!("Added phone {} to {}.", args.phone, args.name);
    Ok(())
}

pub fn handle_change_phone(args: &ChangePhoneArgs, store: &Store) -> Result<()> {
    let mut directory = load(store)?;
    directory
        .contact_mut(&args.name)?
        .edit_phone(&args.old_phone, &args.new_phone)?;
    save(store, &directory)?;

    println!(
        "Changed phone {} to {} for {}.",
        args.old_phone, args.new_phone, args.name
    );
    Ok(())
}

pub fn handle_phones(args: &PhonesArgs, store: &Store) -> Result<()> {
    let directory = load(store)?;
    let record = directory.contact(&args.name)?;

    if record.phones().is_empty() {
        println!("{} has no phone numbers.", args.name);
    } else {
        for phone in record.phones() {
            println!("{phone}");
        }
    }
    Ok(())
}

pub fn handle_set_email(args: &SetEmailArgs, store: &Store) -> Result<()> {
    let mut directory = load(store)?;
    directory.contact_mut(&args.name)?.set_email(&args.email)?;
    save(store, &directory)?;

    println!("Set email {} for {}.", args.email, args.name);
    Ok(())
}

pub fn handle_set_address(args: &SetAddressArgs, store: &Store) -> Result<()> {
    let mut directory = load(store)?;
    directory
        .contact_mut(&args.name)?
        .set_address(&args.address)?;
    save(store, &directory)?;

    println!("Set address for {}.", args.name);
    Ok(())
}
