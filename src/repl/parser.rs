//! Input line tokenizing.

/// A tokenized input line: the command keyword plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    pub command: &'a str,
    pub args: Vec<&'a str>,
}

/// Split a raw input line on whitespace into command + args.
///
/// Returns `None` for blank lines so the loop can re-prompt instead of
/// treating emptiness as a command.
pub fn parse_input(line: &str) -> Option<ParsedInput<'_>> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?;
    Some(ParsedInput {
        command,
        args: tokens.collect(),
    })
}
