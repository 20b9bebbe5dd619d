use clap::ArgMatches;

const DEFAULT_PAUSE_MS: u64 = 5000;

/// Resolved settings of one run: `.env` defaults overridden by arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub course_file: String,
    pub query: Option<String>,
    pub pause_ms: u64,
    pub clear_screen: bool,
    pub json: bool,
}

impl Config {
    pub fn new(course_file: &str) -> Config {
        let pause_ms = match dotenv!("PAUSE_MS").parse::<u64>() {
            Ok(ms) => ms,
            Err(_) => DEFAULT_PAUSE_MS,
        };
        Config {
            course_file: course_file.to_string(),
            query: None,
            pause_ms,
            clear_screen: true,
            json: false,
        }
    }

    pub fn from_matches(m: &ArgMatches) -> Config {
        let course_file = if let Some(file) = m.value_of("FILE") {
            file
        } else {
            dotenv!("COURSE_FILE")
        };

        let mut config = Config::new(course_file);
        config.query = m.value_of("COURSE").map(|q| q.to_string());
        config.json = m.is_present("json");
        if m.is_present("no-pause") {
            config.pause_ms = 0;
            config.clear_screen = false;
        }
        config
    }
}
