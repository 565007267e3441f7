#[macro_use]
extern crate lazy_static;

use std::error::Error;
use std::io::{self, BufRead, Write};

use log::info;

use crate::config::Config;
use crate::error::KeypadError;
use crate::session::Session;

mod config;
mod error;
mod input;
mod session;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config: Config = config::figment().extract().map_err(KeypadError::from)?;
    info!("Starting keypad with {:?}", config);

    let mut session = Session::new(&config);
    let args: Vec<String> = std::env::args().skip(1).collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.is_empty() {
        session.run_line(&args.join(" "), &mut out)?;
    } else {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.map_err(KeypadError::from)?;
            session.run_line(&line, &mut out)?;
        }
    }

    if config.metrics {
        write!(out, "{}", telemetry::encode()?)?;
    }

    Ok(())
}
