//! REPL line parsing.

/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// `/lang <code>`
    Language(String),
    /// `/reset`
    Reset,
    /// `/quit` or `/exit`
    Quit,
    /// `/help`, or an unknown slash command.
    Usage,
    /// Anything else goes to the assistant.
    Say(String),
}

pub const USAGE: &str = "commands: /lang <english|pidgin|igbo|yoruba|hausa>, /reset, /quit";

/// Parse a line. Blank lines yield `None`.
pub fn parse(line: &str) -> Option<ReplCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(rest) = line.strip_prefix('/') else {
        return Some(ReplCommand::Say(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    Some(match name.to_lowercase().as_str() {
        "lang" | "language" => ReplCommand::Language(arg.to_string()),
        "reset" => ReplCommand::Reset,
        "quit" | "exit" => ReplCommand::Quit,
        _ => ReplCommand::Usage,
    })
}
