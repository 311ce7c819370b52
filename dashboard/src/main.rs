mod app;
mod error;
mod filter;
mod navigation;
mod pages;
mod paths;
mod settings;

use std::fs::{self, File};
use std::io::{self, BufRead};

use celldom::Terminal;
use log::{debug, info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::{App, Command, HELP, Outcome};
use crate::error::AppError;
use crate::settings::Settings;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    paths::rotate_logs();

    // The logger level comes from settings, so a settings failure is logged
    // only once the logger exists.
    let (settings, settings_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    init_logging(settings.level_filter())?;
    if let Some(e) = settings_error {
        warn!("{e}, using default settings");
        eprintln!("{e}, using default settings");
    }
    info!(
        "starting dashboard: page size {}, tab {}",
        settings.page_size(),
        settings.default_tab
    );

    let mut app = App::new(&settings)?;
    let mut terminal = Terminal::stdout();
    terminal.draw(app.frame())?;
    println!("{HELP}");

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>().and_then(|command| app.handle(command)) {
            Ok(Outcome::Redraw) => terminal.draw(app.render()?)?,
            Ok(Outcome::Print(text)) => println!("{text}"),
            Ok(Outcome::Quit) => break,
            Err(e) => {
                debug!("command {line:?} failed: {e}");
                eprintln!("{e}");
            }
        }
    }

    info!("dashboard stopped");
    Ok(())
}

fn init_logging(level: LevelFilter) -> Result<(), AppError> {
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = File::create(&path)?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}
