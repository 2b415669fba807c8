//! Directory — the address-book aggregate owning contacts and notes.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::error::{Error, Result};
use crate::domain::note::Note;
use crate::domain::record::Record;
use crate::domain::tag::Tag;

/// One contact's next birthday occurrence within a query window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The reported date: the occurrence, rolled forward to Monday when it
    /// lands on a weekend.
    pub next_occurrence: NaiveDate,
}

/// The in-memory aggregate holding all contacts and notes for one session.
///
/// Contacts are keyed by name, notes by title. Both collections live in
/// `BTreeMap`s, so every "iteration order" in listings, searches, and the
/// birthday query means lexicographic key order.
///
/// The directory performs no I/O; loading and saving are the store's job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    contacts: BTreeMap<String, Record>,
    notes: BTreeMap<String, Note>,
}

impl Directory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Contacts ────────────────────────────────────────────────────────

    /// Inserts a record keyed by its name.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateContact` if a record with the same name
    /// already exists. Extending an existing contact goes through
    /// [`Directory::contact_mut`] instead.
    pub fn add_record(&mut self, record: Record) -> Result<()> {
        let key = record.name().as_str().to_string();
        if self.contacts.contains_key(&key) {
            return Err(Error::DuplicateContact(key));
        }
        self.contacts.insert(key, record);
        Ok(())
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.contacts.get(name)
    }

    /// Exact-match lookup with a typed not-found error.
    ///
    /// # Errors
    ///
    /// Returns `Error::ContactNotFound` if no record has this name.
    pub fn contact(&self, name: &str) -> Result<&Record> {
        self.contacts
            .get(name)
            .ok_or_else(|| Error::ContactNotFound(name.to_string()))
    }

    /// Exact-match mutable lookup with a typed not-found error.
    ///
    /// # Errors
    ///
    /// Returns `Error::ContactNotFound` if no record has this name.
    pub fn contact_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.contacts
            .get_mut(name)
            .ok_or_else(|| Error::ContactNotFound(name.to_string()))
    }

    /// Removes and returns a record.
    ///
    /// # Errors
    ///
    /// Returns `Error::ContactNotFound` if no record has this name.
    pub fn delete(&mut self, name: &str) -> Result<Record> {
        self.contacts
            .remove(name)
            .ok_or_else(|| Error::ContactNotFound(name.to_string()))
    }

    /// Read-only view of all contacts, keyed by name.
    pub fn contacts(&self) -> &BTreeMap<String, Record> {
        &self.contacts
    }

    // ── Birthday window ─────────────────────────────────────────────────

    /// Returns contacts whose next birthday falls within `window_days` of
    /// `today`, in contact iteration order (not sorted by date).
    ///
    /// The occurrence is this year's, rolled to next year once it has
    /// passed. Inclusion is decided on the unshifted day count; only the
    /// *reported* date is rolled off a weekend to the following Monday.
    pub fn upcoming_birthdays(&self, window_days: u32, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for (name, record) in &self.contacts {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut occurrence = birthday.occurrence_in(today.year());
            if occurrence < today {
                occurrence = birthday.occurrence_in(today.year() + 1);
            }

            let days_until = (occurrence - today).num_days();
            if days_until > i64::from(window_days) {
                continue;
            }

            upcoming.push(UpcomingBirthday {
                name: name.clone(),
                next_occurrence: roll_off_weekend(occurrence),
            });
        }

        upcoming
    }

    // ── Notes ───────────────────────────────────────────────────────────

    /// Creates a note with the given creation timestamp.
    ///
    /// The uniqueness check is against the exact stored title.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateNote` if a note with this exact title
    /// exists, or the underlying title validation error.
    pub fn add_note(
        &mut self,
        title: &str,
        content: &str,
        created: DateTime<Utc>,
    ) -> Result<&Note> {
        let note = Note::new(title, content, created)?;
        let key = note.title().to_string();
        if self.notes.contains_key(&key) {
            return Err(Error::DuplicateNote(key));
        }
        Ok(self.notes.entry(key).or_insert(note))
    }

    /// Removes and returns a note matched case-insensitively by title.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoteNotFound` if no title matches.
    pub fn delete_note(&mut self, title: &str) -> Result<Note> {
        let key = self.note_key(title)?;
        Ok(self.notes.remove(&key).expect("key came from the map"))
    }

    /// Overwrites a note's content; the creation timestamp is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoteNotFound` if no title matches.
    pub fn edit_note(&mut self, title: &str, new_content: &str) -> Result<()> {
        self.note_mut(title)?.set_content(new_content);
        Ok(())
    }

    /// Case-insensitive lookup by title. When several stored titles differ
    /// only by case, the lexicographically smallest wins.
    pub fn find_note(&self, title: &str) -> Option<&Note> {
        self.notes
            .values()
            .find(|note| note.title().eq_ignore_ascii_case(title))
    }

    /// Case-insensitive lookup with a typed not-found error.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoteNotFound` if no title matches.
    pub fn note(&self, title: &str) -> Result<&Note> {
        self.find_note(title)
            .ok_or_else(|| Error::NoteNotFound(title.to_string()))
    }

    /// Case-insensitive mutable lookup with a typed not-found error.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoteNotFound` if no title matches.
    pub fn note_mut(&mut self, title: &str) -> Result<&mut Note> {
        let key = self.note_key(title)?;
        Ok(self.notes.get_mut(&key).expect("key came from the map"))
    }

    /// Returns every note whose title or content contains `query` as a
    /// case-insensitive substring. An empty result is not an error.
    pub fn search_notes(&self, query: &str) -> Vec<&Note> {
        let needle = query.to_lowercase();
        self.notes
            .values()
            .filter(|note| {
                note.title().to_lowercase().contains(&needle)
                    || note.content().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Returns every note carrying a tag equal to the normalized `raw`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTag` if `raw` fails tag validation.
    pub fn notes_by_tag(&self, raw: &str) -> Result<Vec<&Note>> {
        let tag = Tag::new(raw)?;
        Ok(self
            .notes
            .values()
            .filter(|note| note.has_tag(&tag))
            .collect())
    }

    /// Read-only view of all notes, keyed by title.
    pub fn notes(&self) -> &BTreeMap<String, Note> {
        &self.notes
    }

    fn note_key(&self, title: &str) -> Result<String> {
        self.notes
            .keys()
            .find(|key| key.eq_ignore_ascii_case(title))
            .cloned()
            .ok_or_else(|| Error::NoteNotFound(title.to_string()))
    }
}

/// Weekend occurrences are reported on the following Monday.
fn roll_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

impl Serialize for Directory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(2))?;
        let contacts: Vec<&Record> = self.contacts.values().collect();
        let notes: Vec<&Note> = self.notes.values().collect();
        map.serialize_entry("contacts", &contacts)?;
        map.serialize_entry("notes", &notes)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Directory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct DirectoryHelper {
            #[serde(default)]
            contacts: Vec<Record>,
            #[serde(default)]
            notes: Vec<Note>,
        }

        let helper = DirectoryHelper::deserialize(deserializer)?;
        let mut directory = Directory::new();
        for record in helper.contacts {
            let key = record.name().as_str().to_string();
            directory.contacts.insert(key, record);
        }
        for note in helper.notes {
            let key = note.title().to_string();
            directory.notes.insert(key, note);
        }
        Ok(directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::name::Name;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ===========================================
    // Contacts
    // ===========================================

    #[test]
    fn add_and_find_record() {
        let mut dir = Directory::new();
        dir.add_record(record("Alice")).unwrap();
        assert!(dir.find("Alice").is_some());
        assert!(dir.find("Bob").is_none());
    }

    #[test]
    fn add_duplicate_name_fails() {
        let mut dir = Directory::new();
        dir.add_record(record("Alice")).unwrap();
        let err = dir.add_record(record("Alice")).unwrap_err();
        assert!(matches!(err, Error::DuplicateContact(_)));
        assert_eq!(dir.contacts().len(), 1);
    }

    #[test]
    fn find_is_case_sensitive() {
        let mut dir = Directory::new();
        dir.add_record(record("Alice")).unwrap();
        assert!(dir.find("alice").is_none());
    }

    #[test]
    fn delete_removes_record() {
        let mut dir = Directory::new();
        dir.add_record(record("Alice")).unwrap();
        let removed = dir.delete("Alice").unwrap();
        assert_eq!(removed.name().as_str(), "Alice");
        assert!(dir.find("Alice").is_none());
    }

    #[test]
    fn delete_missing_fails() {
        let mut dir = Directory::new();
        assert!(matches!(
            dir.delete("Alice").unwrap_err(),
            Error::ContactNotFound(_)
        ));
    }

    #[test]
    fn contact_mut_allows_in_place_edits() {
        let mut dir = Directory::new();
        dir.add_record(record("Alice")).unwrap();
        dir.contact_mut("Alice")
            .unwrap()
            .add_phone("0501234567")
            .unwrap();
        assert_eq!(dir.find("Alice").unwrap().phones().len(), 1);
    }

    #[test]
    fn contacts_iterate_in_name_order() {
        let mut dir = Directory::new();
        dir.add_record(record("Zoe")).unwrap();
        dir.add_record(record("Alice")).unwrap();
        let names: Vec<&String> = dir.contacts().keys().collect();
        assert_eq!(names, vec!["Alice", "Zoe"]);
    }

    // ===========================================
    // Birthday window
    // ===========================================

    #[test]
    fn weekend_birthday_reported_on_monday() {
        // 2024-06-15 is a Saturday; today 2024-06-10 is a Monday.
        // Inclusion uses the unshifted day count (5 <= 7); only the
        // reported date moves to Monday the 17th.
        let mut dir = Directory::new();
        let mut alice = record("Alice");
        alice.set_birthday("15.06.1985").unwrap();
        dir.add_record(alice).unwrap();

        let upcoming = dir.upcoming_birthdays(7, date(2024, 6, 10));
        assert_eq!(
            upcoming,
            vec![UpcomingBirthday {
                name: "Alice".to_string(),
                next_occurrence: date(2024, 6, 17),
            }]
        );
    }

    #[test]
    fn sunday_birthday_reported_on_monday() {
        let mut dir = Directory::new();
        let mut bob = record("Bob");
        bob.set_birthday("16.06.1990").unwrap(); // 2024-06-16 is a Sunday
        dir.add_record(bob).unwrap();

        let upcoming = dir.upcoming_birthdays(7, date(2024, 6, 10));
        assert_eq!(upcoming[0].next_occurrence, date(2024, 6, 17));
    }

    #[test]
    fn weekday_birthday_reported_unshifted() {
        let mut dir = Directory::new();
        let mut carol = record("Carol");
        carol.set_birthday("12.06.1970").unwrap(); // 2024-06-12 is a Wednesday
        dir.add_record(carol).unwrap();

        let upcoming = dir.upcoming_birthdays(7, date(2024, 6, 10));
        assert_eq!(upcoming[0].next_occurrence, date(2024, 6, 12));
    }

    #[test]
    fn birthday_outside_window_excluded() {
        let mut dir = Directory::new();
        let mut alice = record("Alice");
        alice.set_birthday("30.06.1985").unwrap();
        dir.add_record(alice).unwrap();

        assert!(dir.upcoming_birthdays(7, date(2024, 6, 10)).is_empty());
        assert_eq!(dir.upcoming_birthdays(20, date(2024, 6, 10)).len(), 1);
    }

    #[test]
    fn birthday_today_is_included() {
        let mut dir = Directory::new();
        let mut alice = record("Alice");
        alice.set_birthday("10.06.1985").unwrap();
        dir.add_record(alice).unwrap();

        let upcoming = dir.upcoming_birthdays(0, date(2024, 6, 10));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].next_occurrence, date(2024, 6, 10));
    }

    #[test]
    fn passed_birthday_rolls_to_next_year() {
        let mut dir = Directory::new();
        let mut alice = record("Alice");
        alice.set_birthday("05.01.1985").unwrap();
        dir.add_record(alice).unwrap();

        // Not within 7 days of late December... unless the window reaches
        // January 5th of next year.
        assert!(dir.upcoming_birthdays(7, date(2024, 12, 1)).is_empty());
        let upcoming = dir.upcoming_birthdays(7, date(2024, 12, 30));
        assert_eq!(upcoming.len(), 1);
        // 2025-01-05 is a Sunday; reported on Monday the 6th.
        assert_eq!(upcoming[0].next_occurrence, date(2025, 1, 6));
    }

    #[test]
    fn contacts_without_birthday_are_skipped() {
        let mut dir = Directory::new();
        dir.add_record(record("Alice")).unwrap();
        assert!(dir.upcoming_birthdays(7, date(2024, 6, 10)).is_empty());
    }

    #[test]
    fn results_follow_contact_iteration_order() {
        let mut dir = Directory::new();
        let mut zoe = record("Zoe");
        zoe.set_birthday("11.06.1990").unwrap();
        let mut alice = record("Alice");
        alice.set_birthday("14.06.1990").unwrap();
        dir.add_record(zoe).unwrap();
        dir.add_record(alice).unwrap();

        let upcoming = dir.upcoming_birthdays(7, date(2024, 6, 10));
        let names: Vec<&str> = upcoming
            .iter()
            .map(|u| u.name.as_str())
            .collect();
        // Name order, not date order: Alice's birthday is later but lists first.
        assert_eq!(names, vec!["Alice", "Zoe"]);
    }

    // ===========================================
    // Notes
    // ===========================================

    #[test]
    fn add_and_find_note() {
        let mut dir = Directory::new();
        dir.add_note("Project Plan", "ship it", created()).unwrap();
        assert!(dir.find_note("Project Plan").is_some());
    }

    #[test]
    fn add_duplicate_title_fails() {
        let mut dir = Directory::new();
        dir.add_note("Project Plan", "a", created()).unwrap();
        let err = dir.add_note("Project Plan", "b", created()).unwrap_err();
        assert!(matches!(err, Error::DuplicateNote(_)));
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut dir = Directory::new();
        dir.add_note("Project Plan", "a", created()).unwrap();
        // A differently-cased title is a distinct storage key.
        assert!(dir.add_note("project plan", "b", created()).is_ok());
        assert_eq!(dir.notes().len(), 2);
    }

    #[test]
    fn find_note_is_case_insensitive() {
        let mut dir = Directory::new();
        dir.add_note("Project Plan", "a", created()).unwrap();
        assert!(dir.find_note("PROJECT plan").is_some());
    }

    #[test]
    fn edit_note_keeps_created() {
        let mut dir = Directory::new();
        dir.add_note("Project Plan", "old", created()).unwrap();
        dir.edit_note("project plan", "new").unwrap();
        let note = dir.find_note("Project Plan").unwrap();
        assert_eq!(note.content(), "new");
        assert_eq!(note.created(), created());
    }

    #[test]
    fn edit_missing_note_fails() {
        let mut dir = Directory::new();
        assert!(matches!(
            dir.edit_note("Nope", "x").unwrap_err(),
            Error::NoteNotFound(_)
        ));
    }

    #[test]
    fn delete_note_twice_fails_second_time() {
        let mut dir = Directory::new();
        dir.add_note("Project Plan", "a", created()).unwrap();
        dir.delete_note("Project Plan").unwrap();
        assert!(matches!(
            dir.delete_note("Project Plan").unwrap_err(),
            Error::NoteNotFound(_)
        ));
    }

    #[test]
    fn search_matches_title_or_content() {
        let mut dir = Directory::new();
        dir.add_note("Project Plan", "roadmap", created()).unwrap();
        dir.add_note("Groceries", "milk, eggs", created()).unwrap();

        let titles: Vec<&str> = dir
            .search_notes("proj")
            .iter()
            .map(|n| n.title())
            .collect();
        assert_eq!(titles, vec!["Project Plan"]);

        let by_content: Vec<&str> = dir
            .search_notes("MILK")
            .iter()
            .map(|n| n.title())
            .collect();
        assert_eq!(by_content, vec!["Groceries"]);
    }

    #[test]
    fn search_with_no_match_is_empty_not_error() {
        let mut dir = Directory::new();
        dir.add_note("Project Plan", "roadmap", created()).unwrap();
        assert!(dir.search_notes("zzz").is_empty());
    }

    #[test]
    fn notes_by_tag_normalizes_query() {
        let mut dir = Directory::new();
        dir.add_note("Project Plan", "roadmap", created()).unwrap();
        dir.note_mut("Project Plan").unwrap().add_tag("work").unwrap();
        dir.add_note("Groceries", "milk", created()).unwrap();

        let tagged: Vec<&str> = dir
            .notes_by_tag("#work")
            .unwrap()
            .iter()
            .map(|n| n.title())
            .collect();
        assert_eq!(tagged, vec!["Project Plan"]);

        let bare: Vec<&str> = dir
            .notes_by_tag("work")
            .unwrap()
            .iter()
            .map(|n| n.title())
            .collect();
        assert_eq!(bare, vec!["Project Plan"]);
    }

    #[test]
    fn notes_by_tag_rejects_invalid_tag() {
        let dir = Directory::new();
        assert!(matches!(
            dir.notes_by_tag("two words").unwrap_err(),
            Error::InvalidTag(_)
        ));
    }

    // ===========================================
    // Serde
    // ===========================================

    #[test]
    fn serde_roundtrip_populated_directory() {
        let mut dir = Directory::new();
        let mut alice = record("Alice");
        alice.add_phone("0501234567").unwrap();
        alice.set_birthday("24.03.1990").unwrap();
        alice.set_email("alice@example.com").unwrap();
        dir.add_record(alice).unwrap();
        dir.add_record(record("Bob")).unwrap();
        dir.add_note("Project Plan", "roadmap", created()).unwrap();
        dir.note_mut("Project Plan").unwrap().add_tag("work").unwrap();

        let json = serde_json::to_string_pretty(&dir).unwrap();
        let parsed: Directory = serde_json::from_str(&json).unwrap();
        assert_eq!(dir, parsed);
    }

    #[test]
    fn serde_empty_object_is_empty_directory() {
        let parsed: Directory = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, Directory::new());
    }
}
