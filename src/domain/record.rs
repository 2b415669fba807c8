//! Record entity: one contact's full set of fields.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::address::Address;
use crate::domain::birthday::Birthday;
use crate::domain::email::Email;
use crate::domain::error::{Error, Result};
use crate::domain::name::Name;
use crate::domain::phone::Phone;

/// A contact record.
///
/// The name is the record's immutable identity. Phones are kept in
/// insertion order; duplicate values are permitted (callers that want
/// dedup must check with [`Record::find_phone`] first). Birthday, email,
/// and address are optional and overwritten unconditionally by their
/// setters, which act as both "add" and "change".
///
/// # Examples
///
/// ```
/// use rolo::domain::{Name, Record};
///
/// let mut record = Record::new(Name::new("Alice").unwrap());
/// record.add_phone("0501234567").unwrap();
/// record.set_birthday("24.03.1990").unwrap();
/// assert_eq!(record.phones().len(), 1);
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<Email>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
}

impl Record {
    /// Creates a record with no phones and no optional fields.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
            email: None,
            address: None,
        }
    }

    /// Returns the contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the contact's phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Returns the contact's birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Returns the contact's email, if set.
    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// Returns the contact's address, if set.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Validates and appends a phone number. Duplicates are permitted.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPhone` if the number fails validation.
    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replaces the first phone equal to `old_raw` with the validated
    /// `new_raw`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPhone` if `new_raw` fails validation, or
    /// `Error::PhoneNotFound` if no phone equals `old_raw`.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> Result<()> {
        let new_phone = Phone::new(new_raw)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old_raw) {
            Some(slot) => {
                *slot = new_phone;
                Ok(())
            }
            None => Err(Error::PhoneNotFound(old_raw.to_string())),
        }
    }

    /// Returns the first phone equal to `raw`, if any.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Validates and sets the birthday, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBirthday` if the date fails to parse.
    pub fn set_birthday(&mut self, raw: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Validates and sets the email, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidEmail` if the address fails validation.
    pub fn set_email(&mut self, raw: &str) -> Result<()> {
        self.email = Some(Email::new(raw)?);
        Ok(())
    }

    /// Validates and sets the address, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidAddress` if the address is empty.
    pub fn set_address(&mut self, raw: &str) -> Result<()> {
        self.address = Some(Address::new(raw)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.phones.is_empty() {
            let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
            write!(f, ", phones: {}", phones.join("; "))?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {birthday}")?;
        }
        if let Some(email) = &self.email {
            write!(f, ", email: {email}")?;
        }
        if let Some(address) = &self.address {
            write!(f, ", address: {address}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("name", &self.name)
            .field("phones", &self.phones)
            .field("birthday", &self.birthday)
            .field("email", &self.email)
            .field("address", &self.address)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    #[test]
    fn new_record_is_bare() {
        let r = record("Alice");
        assert_eq!(r.name().as_str(), "Alice");
        assert!(r.phones().is_empty());
        assert!(r.birthday().is_none());
        assert!(r.email().is_none());
        assert!(r.address().is_none());
    }

    #[test]
    fn add_phone_appends_in_order() {
        let mut r = record("Alice");
        r.add_phone("0501234567").unwrap();
        r.add_phone("0509999999").unwrap();
        let phones: Vec<&str> = r.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["0501234567", "0509999999"]);
    }

    #[test]
    fn add_phone_rejects_invalid() {
        let mut r = record("Alice");
        assert!(matches!(
            r.add_phone("123").unwrap_err(),
            Error::InvalidPhone(_)
        ));
        assert!(r.phones().is_empty());
    }

    #[test]
    fn duplicate_phone_values_are_permitted() {
        let mut r = record("Alice");
        r.add_phone("0501234567").unwrap();
        r.add_phone("0501234567").unwrap();
        assert_eq!(r.phones().len(), 2);
    }

    #[test]
    fn edit_phone_replaces_first_match() {
        let mut r = record("Alice");
        r.add_phone("0501234567").unwrap();
        r.add_phone("0501234567").unwrap();
        r.edit_phone("0501234567", "0507777777").unwrap();
        let phones: Vec<&str> = r.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["0507777777", "0501234567"]);
    }

    #[test]
    fn edit_phone_missing_old_number_fails() {
        let mut r = record("Alice");
        r.add_phone("0501234567").unwrap();
        let err = r.edit_phone("0000000000", "0507777777").unwrap_err();
        assert!(matches!(err, Error::PhoneNotFound(_)));
        assert_eq!(r.phones()[0].as_str(), "0501234567");
    }

    #[test]
    fn edit_phone_invalid_new_number_fails() {
        let mut r = record("Alice");
        r.add_phone("0501234567").unwrap();
        assert!(matches!(
            r.edit_phone("0501234567", "bad").unwrap_err(),
            Error::InvalidPhone(_)
        ));
    }

    #[test]
    fn find_phone_exact_match() {
        let mut r = record("Alice");
        r.add_phone("0501234567").unwrap();
        assert!(r.find_phone("0501234567").is_some());
        assert!(r.find_phone("0509999999").is_none());
    }

    #[test]
    fn set_birthday_overwrites() {
        let mut r = record("Alice");
        r.set_birthday("24.03.1990").unwrap();
        r.set_birthday("25.03.1990").unwrap();
        assert_eq!(r.birthday().unwrap().to_string(), "25.03.1990");
    }

    #[test]
    fn set_email_overwrites() {
        let mut r = record("Alice");
        r.set_email("a@example.com").unwrap();
        r.set_email("b@example.com").unwrap();
        assert_eq!(r.email().unwrap().as_str(), "b@example.com");
    }

    #[test]
    fn set_email_rejects_invalid() {
        let mut r = record("Alice");
        assert!(matches!(
            r.set_email("nope").unwrap_err(),
            Error::InvalidEmail(_)
        ));
        assert!(r.email().is_none());
    }

    #[test]
    fn set_address_overwrites() {
        let mut r = record("Alice");
        r.set_address("1 Main St").unwrap();
        r.set_address("2 Side St").unwrap();
        assert_eq!(r.address().unwrap().as_str(), "2 Side St");
    }

    #[test]
    fn serde_roundtrip_full_record() {
        let mut r = record("Alice");
        r.add_phone("0501234567").unwrap();
        r.set_birthday("24.03.1990").unwrap();
        r.set_email("alice@example.com").unwrap();
        r.set_address("1 Main St").unwrap();

        let json = serde_json::to_string(&r).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(r, parsed);
    }

    #[test]
    fn serde_omits_unset_fields() {
        let r = record("Alice");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "{\"name\":\"Alice\"}");
    }
}
