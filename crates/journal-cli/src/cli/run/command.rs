use anyhow::{Error, anyhow};
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Exit,
    Help,
    /// `/signin` with whatever credentials were typed; blanks are left for the screen to reject.
    SignIn { email: String, password: String },
    /// `/signup` alone switches screens, with credentials it registers.
    SignUp(Option<(String, String)>),
    Back,
    List,
    New,
    /// Zero based row index.
    Edit(usize),
    Delete(usize),
    SignOut,
    Title(String),
    Content(String),
    Save,
    Cancel,
    /// A line that is not a command.
    Text(String),
}

pub(crate) struct CommandParser {
    regex: Regex,
}

impl CommandParser {
    pub(crate) fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(r"^/(\w+)(?:\s+(.*))?$")?,
        })
    }

    pub(crate) fn parse(&self, input: &str) -> Result<Command, Error> {
        let input = input.trim_end();
        let Some(captures) = self.regex.captures(input) else {
            return Ok(Command::Text(input.to_owned()));
        };
        let name = captures.get(1).map_or("", |m| m.as_str());
        let arg = captures.get(2).map(|m| m.as_str().trim());

        let command = match name {
            "exit" | "quit" => Command::Exit,
            "help" => Command::Help,
            "signin" => {
                let (email, password) = credentials(arg.unwrap_or_default());
                Command::SignIn { email, password }
            }
            "signup" => Command::SignUp(arg.map(credentials)),
            "back" => Command::Back,
            "list" => Command::List,
            "new" => Command::New,
            "edit" => Command::Edit(row(arg)?),
            "delete" => Command::Delete(row(arg)?),
            "signout" => Command::SignOut,
            "title" => Command::Title(arg.unwrap_or_default().to_owned()),
            "content" => Command::Content(arg.unwrap_or_default().to_owned()),
            "save" => Command::Save,
            "cancel" => Command::Cancel,
            _ => return Err(anyhow!("Unknown command /{name}")),
        };
        Ok(command)
    }
}

fn credentials(arg: &str) -> (String, String) {
    let (email, password) = arg.split_once(char::is_whitespace).unwrap_or((arg, ""));
    (email.to_owned(), password.to_owned())
}

// Rows are numbered from 1 on screen.
fn row(arg: Option<&str>) -> Result<usize, Error> {
    arg.and_then(|arg| arg.parse::<usize>().ok())
        .and_then(|number| number.checked_sub(1))
        .ok_or_else(|| anyhow!("Expected a row number from the list"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Command, Error> {
        CommandParser::new().unwrap().parse(input)
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse("dear diary").unwrap(), Command::Text("dear diary".to_owned()));
        assert_eq!(parse("").unwrap(), Command::Text(String::new()));
    }

    #[test]
    fn test_credentials() {
        assert_eq!(
            parse("/signin a@example.com pass word").unwrap(),
            Command::SignIn {
                email: "a@example.com".to_owned(),
                password: "pass word".to_owned()
            }
        );
        assert_eq!(
            parse("/signin").unwrap(),
            Command::SignIn {
                email: String::new(),
                password: String::new()
            }
        );
        assert_eq!(parse("/signup").unwrap(), Command::SignUp(None));
        assert_eq!(
            parse("/signup a@example.com").unwrap(),
            Command::SignUp(Some(("a@example.com".to_owned(), String::new())))
        );
    }

    #[test]
    fn test_rows() {
        assert_eq!(parse("/edit 1").unwrap(), Command::Edit(0));
        assert_eq!(parse("/delete 3").unwrap(), Command::Delete(2));
        assert!(parse("/edit 0").is_err());
        assert!(parse("/delete").is_err());
        assert!(parse("/edit first").is_err());
    }

    #[test]
    fn test_editor_commands() {
        assert_eq!(parse("/title  Monday ").unwrap(), Command::Title("Monday".to_owned()));
        assert_eq!(parse("/content").unwrap(), Command::Content(String::new()));
        assert_eq!(parse("/save").unwrap(), Command::Save);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(parse("/dance").unwrap_err().to_string(), "Unknown command /dance");
    }
}
