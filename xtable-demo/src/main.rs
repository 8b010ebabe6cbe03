mod app;
mod keys;
mod terminal;
mod users;

use std::fs::File;
use std::io;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::terminal::TerminalGuard;

fn main() -> io::Result<()> {
    let log_file = File::create("xtable-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file).map_err(io::Error::other)?;

    let mut app = App::new().map_err(io::Error::other)?;
    let mut terminal = TerminalGuard::new()?;
    let (_, rows) = terminal.size()?;
    app.resize(rows);

    let result = app.run(&mut terminal);
    if let Err(e) = &result {
        log::error!("demo stopped: {e}");
    }
    result
}
