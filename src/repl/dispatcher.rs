//! Command dispatch: the boundary between user input and the data model.
//!
//! Each handler returns `Result<String, CommandError>`; the dispatch
//! table converts errors into their composed user-facing messages so the
//! loop never crashes on user input.

use crate::domain::{Name, Phone};
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use crate::repl::parser::ParsedInput;
use tracing::debug;

/// Outcome of dispatching one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A response to print; the loop continues.
    Reply(String),
    /// The farewell to print; the loop terminates.
    Exit(String),
}

/// Route a tokenized line to its handler and fold any error into the
/// user-facing reply.
pub fn dispatch(input: &ParsedInput<'_>, book: &mut AddressBook, default_window_days: i64) -> Dispatch {
    debug!(command = input.command, argc = input.args.len(), "dispatching command");

    let result = match input.command {
        "close" | "exit" => return Dispatch::Exit("Good bye!".to_string()),
        "hello" => Ok("How can I help you?".to_string()),
        "add" => add_contact(&input.args, book),
        "change" => change_contact(&input.args, book),
        "phone" => show_phones(&input.args, book),
        "all" => Ok(show_all(book)),
        "add-birthday" => add_birthday(&input.args, book),
        "show-birthday" => show_birthday(&input.args, book),
        "birthdays" => birthdays(&input.args, book, default_window_days),
        _ => Ok("Invalid command.".to_string()),
    };

    Dispatch::Reply(result.unwrap_or_else(|err| err.to_string()))
}

/// `add <name> <phone>` — create the record on first sight, append the
/// phone. The phone is validated before the record is touched, so an
/// invalid phone never leaves an empty record behind.
fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = take_args(args, "add <name> <phone>")?;
    let phone = Phone::new(phone)?;

    match book.find_mut(name) {
        Some(record) => {
            record.push_phone(phone);
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut record = Record::new(Name::new(name)?);
            record.push_phone(phone);
            book.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change <name> <old_phone> <new_phone>`
fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] =
        take_args(args, "change <name> <old_phone> <new_phone>")?;

    match book.find_mut(name) {
        Some(record) => {
            record.edit_phone(old_phone, new_phone)?;
            Ok("Phone number updated.".to_string())
        }
        None => Ok("Contact not found.".to_string()),
    }
}

/// `phone <name>`
fn show_phones(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = take_args(args, "phone <name>")?;

    match book.find(name) {
        Some(record) => Ok(format!("Phones for {}: {}", name, record.phones_display())),
        None => Ok("Contact not found.".to_string()),
    }
}

/// `all` — one line per contact, in name order.
fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts.".to_string();
    }
    book.iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <birthday>`
fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday] = take_args(args, "add-birthday <name> <birthday>")?;

    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(birthday)?;
            Ok("Birthday added.".to_string())
        }
        None => Ok("Contact not found.".to_string()),
    }
}

/// `show-birthday <name>`
fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = take_args(args, "show-birthday <name>")?;

    match book.find(name).and_then(Record::birthday) {
        Some(birthday) => Ok(format!("{}'s birthday is on {}", name, birthday)),
        None => Ok("Birthday not set or contact not found.".to_string()),
    }
}

/// `birthdays [days]` — defaults to the configured window.
fn birthdays(args: &[&str], book: &AddressBook, default_window_days: i64) -> CommandResult<String> {
    let days = match args.first() {
        Some(raw) => raw.parse::<i64>().map_err(|_| CommandError::InvalidDays)?,
        None => default_window_days,
    };

    let upcoming = book.upcoming_birthdays(days);
    if upcoming.is_empty() {
        return Ok(format!("No birthdays in the next {} days.", days));
    }

    Ok(upcoming
        .iter()
        .map(|record| {
            format!(
                "{}'s birthday is on {}",
                record.name(),
                record.birthday_display()
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Require exactly N leading arguments, with a usage message otherwise.
/// Extra trailing tokens are ignored, matching the original tool's
/// tolerance for them.
fn take_args<'a, const N: usize>(
    args: &[&'a str],
    usage: &'static str,
) -> CommandResult<[&'a str; N]> {
    if args.len() < N {
        return Err(CommandError::NotEnoughArguments { usage });
    }
    let mut taken = [""; N];
    taken.copy_from_slice(&args[..N]);
    Ok(taken)
}
