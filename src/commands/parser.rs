//! Tokenizer for user input lines.

/// A command line split into its command name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Lower-cased command name
    pub command: String,

    /// Remaining whitespace-separated tokens, case preserved
    pub args: Vec<String>,
}

/// Split a line on whitespace into a command and its arguments.
///
/// The command name is lower-cased; arguments keep their case because
/// contact names are case-sensitive. Blank lines yield `None`.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();

    Some(ParsedInput { command, args })
}
