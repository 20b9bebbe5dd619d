use crate::session::command::{Command, CommandError, MENU};
use crate::session::response::Response;
use crate::session::worker::Session;
use std::io;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

static CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Menu loop over a line based input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
    pause: Duration,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, pause_ms: u64, clear_screen: bool) -> Console<R, W> {
        Console {
            input,
            output,
            pause: Duration::from_millis(pause_ms),
            clear_screen,
        }
    }

    /// Run until `9` is chosen or the input ends.
    pub fn run(&mut self, session: &mut Session) -> io::Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let line = match self.prompt("Select: ")? {
                Some(line) => line,
                None => {
                    writeln!(self.output)?;
                    self.reply(&Response::ok("Goodbye"))?;
                    return Ok(());
                }
            };

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    debug!("menu input rejected: {:?}", e);
                    self.reply(&Response::Error { msg: format!("{}", e) })?;
                    self.pause_and_clear()?;
                    continue;
                }
            };
            debug!("command {:?}", command);

            match command {
                Command::Load => {
                    let response = session.load();
                    self.reply(&response)?;
                }
                Command::List => {
                    let response = session.list();
                    self.reply(&response)?;
                    writeln!(self.output, "Press enter to continue")?;
                    self.output.flush()?;
                    self.read_line()?;
                }
                Command::Find => {
                    let response = match self.prompt("Enter course code: ")? {
                        Some(answer) => match Command::code_argument(&answer) {
                            Ok(code) => session.find(code),
                            Err(e) => Response::Error { msg: format!("{}", e) },
                        },
                        None => Response::Error {
                            msg: format!("{}", CommandError::MissingCode),
                        },
                    };
                    self.reply(&response)?;
                }
                Command::Remove => {
                    let response = match self.prompt("Course code to remove: ")? {
                        Some(answer) => match Command::code_argument(&answer) {
                            Ok(code) => session.remove(code),
                            Err(e) => Response::Error { msg: format!("{}", e) },
                        },
                        None => Response::Error {
                            msg: format!("{}", CommandError::MissingCode),
                        },
                    };
                    self.reply(&response)?;
                }
                Command::Quit => {
                    self.reply(&Response::ok("Goodbye"))?;
                    return Ok(());
                }
            }

            // the listing already waited for enter
            if command != Command::List {
                self.pause()?;
            }
            self.clear()?;
        }
    }

    /// Load the source and show one course, without entering the menu.
    pub fn run_query(&mut self, session: &mut Session, code: &str) -> io::Result<()> {
        let loaded = session.load();
        self.reply(&loaded)?;
        if let Response::Error { .. } = loaded {
            return Ok(());
        }
        let found = session.find(code);
        self.reply(&found)
    }

    fn reply(&mut self, response: &Response) -> io::Result<()> {
        if let Response::Error { ref msg } = *response {
            info!("{}", msg);
        }
        self.output.write_all(response.serialize().as_bytes())?;
        self.output.flush()
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// `None` once the input is exhausted
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn pause(&mut self) -> io::Result<()> {
        if self.pause > Duration::from_millis(0) {
            self.output.flush()?;
            thread::sleep(self.pause);
        }
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }

    fn pause_and_clear(&mut self) -> io::Result<()> {
        self.pause()?;
        self.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::index::tree::Tree;
    use std::fs;
    use std::io::Cursor;

    fn session_with(name: &str, content: &str) -> Session {
        let dir = std::env::temp_dir().join("course_catalog_console_tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        let mut config = Config::new(path.to_str().unwrap());
        config.pause_ms = 0;
        config.clear_screen = false;
        Session::new(config)
    }

    fn remove_source(session: &Session) {
        fs::remove_file(&session.config.course_file).unwrap();
    }

    fn run(session: &mut Session, input: &str) -> String {
        let mut output = Vec::new();
        {
            let mut console = Console::new(Cursor::new(input.as_bytes()), &mut output, 0, false);
            console.run(session).unwrap();
        }
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_session() {
        let mut session = session_with(
            "menu.csv",
            "CS300,Algorithms,CS250\nCS101,Programming\nCS250,Data Structures,CS101\n",
        );
        let output = run(&mut session, "1\n2\n\n3\ncs250\n4\nCS101\n2\n\n7\n9\n");

        let expected = [
            MENU,
            "Select: 3 courses loaded\n",
            MENU,
            "Select: CS101, Programming\nCS250, Data Structures\nCS300, Algorithms\n",
            "Press enter to continue\n",
            MENU,
            "Select: Enter course code: CS250, Data Structures\nPrerequisites: CS101\n",
            MENU,
            "Select: Course code to remove: CS101 removed\n",
            MENU,
            "Select: CS250, Data Structures\nCS300, Algorithms\nPress enter to continue\n",
            MENU,
            "Select: Invalid choice\n",
            MENU,
            "Select: Goodbye\n",
        ]
        .concat();
        assert_eq!(output, expected);
        assert_eq!(session.courses.len(), 2);
        remove_source(&session);
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut session = session_with("eof.csv", "CS101,Programming\n");
        let output = run(&mut session, "3\n");
        assert!(output.ends_with("Select: \nGoodbye\n"));
        assert!(output.contains("Enter course code: No course code given\n"));
        remove_source(&session);
    }

    #[test]
    fn test_clear_screen() {
        let mut session = session_with("clear.csv", "CS101,Programming\n");
        let mut output = Vec::new();
        {
            let input = Cursor::new(&b"4\ncs999\n9\n"[..]);
            let mut console = Console::new(input, &mut output, 0, true);
            console.run(&mut session).unwrap();
        }
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("CS999 not found\n\x1B[2J\x1B[1;1H"));
        remove_source(&session);
    }

    #[test]
    fn test_run_query() {
        let mut session = session_with(
            "query.csv",
            "CS101,Programming\nCS200,Data Structures,CS101\n",
        );
        let mut output = Vec::new();
        {
            let mut console = Console::new(Cursor::new(&b""[..]), &mut output, 0, false);
            console.run_query(&mut session, "cs200").unwrap();
        }
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "2 courses loaded\nCS200, Data Structures\nPrerequisites: CS101\n"
        );
        remove_source(&session);
    }

    #[test]
    fn test_run_query_unreadable() {
        let mut session = Session::new(Config::new("course_catalog_missing_dir/none.csv"));
        let mut output = Vec::new();
        {
            let mut console = Console::new(Cursor::new(&b""[..]), &mut output, 0, false);
            console.run_query(&mut session, "CS200").unwrap();
        }
        assert_eq!(String::from_utf8(output).unwrap(), "Unable to open file\n");
    }
}
