//! AddressBook model: the in-memory collection of all contact records.

use crate::models::Record;
use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeMap;

/// The in-memory collection of all records, keyed by contact name.
///
/// The book exclusively owns its records; callers get references or
/// mutable references, never shared handles. Iteration is in name order
/// so rendered listings are deterministic.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name. Last write wins; overwriting
    /// an existing name is not an error.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by name. Absence is not an error at this layer.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record by name. Returns whether a deletion occurred.
    pub fn delete(&mut self, name: &str) -> bool {
        self.records.remove(name).is_some()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Records whose birthday falls within `[today, today + days]`,
    /// using today's local date. See [`Self::upcoming_birthdays_from`].
    pub fn upcoming_birthdays(&self, days: i64) -> Vec<&Record> {
        self.upcoming_birthdays_from(Local::now().date_naive(), days)
    }

    /// Records whose birthday, projected onto `today`'s year, falls
    /// within the inclusive window `[today, today + days]`.
    ///
    /// A window that overflows the calendar saturates at the date range
    /// limits, so arbitrarily large `days` values from user input cannot
    /// panic the query.
    ///
    /// Known limitation: birthdays that wrap around year-end are not
    /// matched (a January birthday queried from late December projects
    /// onto the current year, which is already in the past).
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, days: i64) -> Vec<&Record> {
        use chrono::Datelike;

        let window_end = Duration::try_days(days)
            .and_then(|window| today.checked_add_signed(window))
            .unwrap_or(if days < 0 {
                NaiveDate::MIN
            } else {
                NaiveDate::MAX
            });
        self.records
            .values()
            .filter(|record| {
                record.birthday().is_some_and(|birthday| {
                    let this_year = birthday.in_year(today.year());
                    today <= this_year && this_year <= window_end
                })
            })
            .collect()
    }
}
