use std::fmt;

/// Menu entries of the console.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Command {
    Load,
    List,
    Find,
    Remove,
    Quit,
}

#[derive(Debug, PartialEq, Clone)]
pub enum CommandError {
    InvalidChoice(String),
    MissingCode,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CommandError::InvalidChoice(_) => write!(f, "Invalid choice"),
            CommandError::MissingCode => write!(f, "No course code given"),
        }
    }
}

pub static MENU: &str = concat!(
    "Menu\n",
    "1 Load Courses\n",
    "2 List All\n",
    "3 Find Course\n",
    "4 Remove Course\n",
    "9 Quit\n"
);

impl Command {
    pub fn parse(input: &str) -> Result<Command, CommandError> {
        let choice = input
            .trim()
            .parse::<u32>()
            .map_err(|_| CommandError::InvalidChoice(input.trim().to_string()))?;
        match choice {
            1 => Ok(Command::Load),
            2 => Ok(Command::List),
            3 => Ok(Command::Find),
            4 => Ok(Command::Remove),
            9 => Ok(Command::Quit),
            _ => Err(CommandError::InvalidChoice(input.trim().to_string())),
        }
    }

    /// First word of a prompt answer, the rest of the line is ignored.
    pub fn code_argument(input: &str) -> Result<&str, CommandError> {
        input.split_whitespace().next().ok_or(CommandError::MissingCode)
    }
}
