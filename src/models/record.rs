//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{CommandError, CommandResult};
use serde::Serialize;
use std::fmt;

/// One contact's data: a name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// The name is immutable after creation. Phones keep insertion order and
/// duplicates are allowed unless explicitly removed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append an already-validated phone number. Duplicates are not rejected.
    pub fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Validate and append a phone number. Duplicates are not rejected.
    pub fn add_phone(&mut self, number: &str) -> CommandResult<()> {
        let phone = Phone::new(number)?;
        self.push_phone(phone);
        Ok(())
    }

    /// Remove all phone entries equal to `number`. No-op if absent.
    pub fn remove_phone(&mut self, number: &str) {
        self.phones.retain(|phone| phone.as_str() != number);
    }

    /// Replace `old` with `new`.
    ///
    /// Fails with `PhoneNotFound` if `old` is absent. Adds `new` before
    /// removing `old`, so an invalid new number fails the whole operation
    /// and leaves the old phone intact.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        if self.find_phone(old).is_none() {
            return Err(CommandError::PhoneNotFound);
        }
        self.add_phone(new)?;
        self.remove_phone(old);
        Ok(())
    }

    /// Find a phone entry equal to `number`.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    /// Validate and set the birthday, silently overwriting any prior one.
    pub fn add_birthday(&mut self, raw: &str) -> CommandResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// The formatted birthday, or `"No birthday set"`.
    pub fn birthday_display(&self) -> String {
        match &self.birthday {
            Some(birthday) => birthday.to_string(),
            None => "No birthday set".to_string(),
        }
    }

    /// The phone list joined for the `phone` command output.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(
            f,
            "Contact name: {}, phones: {}, Birthday: {}",
            self.name,
            phones,
            self.birthday_display()
        )
    }
}
