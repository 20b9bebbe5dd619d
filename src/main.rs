#[macro_use]
extern crate clap;
#[macro_use]
extern crate dotenv_codegen;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
extern crate env_logger;
extern crate serde;
extern crate serde_json;

mod component;
mod config;
mod index;
mod session;
mod storage;

use crate::config::Config;
use crate::session::console::Console;
use crate::session::worker::Session;
use clap::App;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    // Parse arguments
    let yml = load_yaml!("../cli.yml");
    let m = App::from_yaml(yml).get_matches();
    let config = Config::from_matches(&m);
    info!("course source: `{}`", config.course_file);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(
        stdin.lock(),
        stdout.lock(),
        config.pause_ms,
        config.clear_screen,
    );
    let query = config.query.clone();
    let mut session = Session::new(config);

    let result = match query {
        Some(code) => console.run_query(&mut session, &code),
        None => console.run(&mut session),
    };

    if let Err(e) = result {
        error!("console error: {}", e);
        process::exit(1);
    }
}
