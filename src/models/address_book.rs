//! Address book: contact records keyed by name.

use super::record::Record;
use super::reminders::{reminder_weekday, WeeklyReminders};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A keyed store of contact records.
///
/// At most one record exists per name. Records iterate in the order their
/// name was first added: overwriting a name keeps its slot, deleting and
/// re-adding moves it to the end. The book serializes as a plain list of
/// records and rebuilds its index on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&slot) => self.records[slot] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&slot) => Some(&mut self.records[slot]),
            None => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Remove the record named `name`. Absent names are a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let slot = self.index.remove(name)?;
        let removed = self.records.remove(slot);
        for position in self.index.values_mut() {
            if *position > slot {
                *position -= 1;
            }
        }
        Some(removed)
    }

    /// Records in book order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Names in book order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name().as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Group contacts with a birthday in the coming week by reminder weekday.
    ///
    /// `today` is a parameter rather than the wall clock so the schedule can
    /// be computed for any date. The book is not modified.
    pub fn schedule_birthday_reminders(&self, today: NaiveDate) -> WeeklyReminders {
        let mut reminders = WeeklyReminders::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            if let Some(weekday) = reminder_weekday(birthday, today) {
                reminders.push(weekday, record.name().as_str());
            }
        }

        tracing::debug!(
            today = %today,
            weekdays = reminders.len(),
            "Scheduled birthday reminders"
        );

        reminders
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::try_new(name).unwrap();
        record.add_phone(phone).unwrap();
        record
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.is_empty());

        book.add_record(record("Bill", "1111111111"));
        assert_eq!(book.len(), 1);
        assert!(book.contains("Bill"));
        assert_eq!(
            book.find("Bill").unwrap().phones()[0].as_str(),
            "1111111111"
        );
        assert!(book.find("bill").is_none());
    }

    #[test]
    fn test_add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Bill", "1111111111"));
        book.add_record(record("Jan", "2222222222"));
        book.add_record(record("Bill", "3333333333"));

        assert_eq!(book.len(), 2);
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["Bill", "Jan"]);
        assert_eq!(
            book.find("Bill").unwrap().phones()[0].as_str(),
            "3333333333"
        );
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("Bill", "1111111111"));
        book.add_record(record("Jan", "2222222222"));
        book.add_record(record("Kim", "3333333333"));

        assert!(book.delete("Missing").is_none());
        assert_eq!(book.len(), 3);

        let removed = book.delete("Bill").unwrap();
        assert_eq!(removed.name().as_str(), "Bill");
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["Jan", "Kim"]);
        assert_eq!(book.find("Kim").unwrap().name().as_str(), "Kim");

        book.add_record(record("Bill", "1111111111"));
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["Jan", "Kim", "Bill"]);
    }

    #[test]
    fn test_find_mut_updates_record() {
        let mut book = AddressBook::new();
        book.add_record(record("Bill", "1111111111"));
        book.find_mut("Bill").unwrap().set_birthday("01.01.1990").unwrap();
        assert_eq!(book.find("Bill").unwrap().render_birthday(), "01.01.1990");
        assert!(book.find_mut("Nobody").is_none());
    }

    #[test]
    fn test_schedule_preserves_book_order_within_weekday() {
        let mut book = AddressBook::new();
        for (name, birthday) in [
            ("Kim", "22.10.1991"),
            ("Bill", "22.10.1985"),
            ("Nobody", "01.01.1970"),
            ("Jan", "23.10.2000"),
        ] {
            let mut r = Record::try_new(name).unwrap();
            r.set_birthday(birthday).unwrap();
            book.add_record(r);
        }
        book.add_record(Record::try_new("NoBirthday").unwrap());

        // Monday 2026-10-19.
        let reminders = book.schedule_birthday_reminders(date(2026, 10, 19));
        assert_eq!(reminders.len(), 2);
        assert_eq!(
            reminders.get(Weekday::Thu),
            Some(&["Kim".to_string(), "Bill".to_string()][..])
        );
        assert_eq!(reminders.get(Weekday::Fri), Some(&["Jan".to_string()][..]));
    }

    #[test]
    fn test_serialization_is_a_list_of_records() {
        let mut book = AddressBook::new();
        book.add_record(record("Bill", "1111111111"));
        book.add_record(record("Jan", "2222222222"));

        let json = serde_json::to_value(&book).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 2);

        let restored: AddressBook = serde_json::from_value(json).unwrap();
        assert_eq!(restored.names().collect::<Vec<_>>(), vec!["Bill", "Jan"]);
        assert!(restored.contains("Jan"));
    }

    #[test]
    fn test_from_records_last_wins() {
        let book: AddressBook = vec![
            record("Bill", "1111111111"),
            record("Bill", "2222222222"),
        ]
        .into_iter()
        .collect();

        assert_eq!(book.len(), 1);
        assert_eq!(
            book.find("Bill").unwrap().phones()[0].as_str(),
            "2222222222"
        );
    }
}
