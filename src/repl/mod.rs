//! The read-eval-print loop: tokenizing, dispatch, and the blocking
//! stdin/stdout glue around the data model.

pub mod dispatcher;
pub mod parser;

pub use dispatcher::{dispatch, Dispatch};
pub use parser::{parse_input, ParsedInput};

use crate::config::Config;
use crate::models::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the command loop until `close`/`exit` or end of input.
///
/// One command is fully read, processed, and printed before the next is
/// read. Responses go to stdout; diagnostics stay on stderr.
pub fn run(book: &mut AddressBook, config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    writeln!(output, "Welcome to the assistant bot!")?;

    let mut line = String::new();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like an explicit close
            writeln!(output, "Good bye!")?;
            break;
        }

        let Some(parsed) = parse_input(&line) else {
            continue;
        };

        match dispatch(&parsed, book, config.birthday_window_days) {
            Dispatch::Reply(reply) => writeln!(output, "{}", reply)?,
            Dispatch::Exit(farewell) => {
                writeln!(output, "{}", farewell)?;
                break;
            }
        }
    }

    info!(contacts = book.len(), "command loop finished");
    Ok(())
}
