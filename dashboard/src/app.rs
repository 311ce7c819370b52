//! The dashboard shell and its command loop.
//!
//! Every command is one interaction. The shell re-renders after each one,
//! clearing the handler registry first so only handlers of the visible
//! frame can fire.

use std::str::FromStr;

use celldom::{Element, Style, collect_clickable, find_clickable};
use datatable::{HandlerRegistry, ON_CLICK};
use log::{debug, info, trace};

use crate::error::AppError;
use crate::navigation::{self, SIDEBAR};
use crate::pages::GeneralSettings;
use crate::settings::Settings;

const ACTIVE_ROUTE: &str = "/general-settings";

pub const HELP: &str = "\
commands:
  click <id>     click an element (see `ids`)
  search <text>  filter the table, empty text clears
  tab <value>    switch tab
  loading        toggle the loading placeholder
  ids            list clickable element ids
  quit           exit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Click(String),
    Search(String),
    Tab(String),
    Loading,
    Ids,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };
        let required = |command: &'static str| {
            if arg.is_empty() {
                Err(AppError::MissingArgument(command))
            } else {
                Ok(arg.to_string())
            }
        };

        match name {
            "click" => Ok(Command::Click(required("click")?)),
            "search" => Ok(Command::Search(arg.to_string())),
            "tab" => Ok(Command::Tab(required("tab")?)),
            "loading" => Ok(Command::Loading),
            "ids" => Ok(Command::Ids),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(AppError::UnknownCommand(other.to_string())),
        }
    }
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Redraw,
    Print(String),
    Quit,
}

pub struct App {
    registry: HandlerRegistry,
    page: GeneralSettings,
    frame: Element,
}

impl App {
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let page = GeneralSettings::new(settings.page_size(), &settings.default_tab)?;
        info!("loaded {} organization types", page.organization_count());
        let mut app = Self {
            registry: HandlerRegistry::new(),
            page,
            frame: Element::default(),
        };
        app.render()?;
        Ok(app)
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &Element {
        &self.frame
    }

    #[cfg(test)]
    pub fn page(&self) -> &GeneralSettings {
        &self.page
    }

    /// Rebuild the frame, replacing every registered handler.
    pub fn render(&mut self) -> Result<&Element, AppError> {
        self.registry.clear();
        let page = self.page.element(&self.registry)?;

        self.frame = Element::col()
            .id("app")
            .gap(1)
            .child(Element::text("Dashboard").style(Style::new().bold().underline()))
            .child(navigation::sidebar(SIDEBAR, ACTIVE_ROUTE))
            .child(page);
        trace!("rendered frame, {} handlers", self.registry.len());

        Ok(&self.frame)
    }

    pub fn handle(&mut self, command: Command) -> Result<Outcome, AppError> {
        match command {
            Command::Click(id) => {
                if find_clickable(&self.frame, &id).is_none() {
                    return Err(AppError::NotClickable(id));
                }
                self.registry.dispatch(&id, ON_CLICK);
                debug!(
                    "clicked {id}: tab {}, page {}",
                    self.page.active_tab().value,
                    self.page.current_page()
                );
                if let Some(status) = self.page.status() {
                    trace!("status: {status}");
                }
                Ok(Outcome::Redraw)
            }
            Command::Search(query) => {
                self.page.set_query(&query);
                debug!("searching for {:?}", self.page.query());
                Ok(Outcome::Redraw)
            }
            Command::Tab(value) => {
                self.page.select_tab(&value)?;
                Ok(Outcome::Redraw)
            }
            Command::Loading => {
                let loading = self.page.toggle_loading();
                debug!("loading placeholder {}", if loading { "on" } else { "off" });
                Ok(Outcome::Redraw)
            }
            Command::Ids => Ok(Outcome::Print(collect_clickable(&self.frame).join("\n"))),
            Command::Help => Ok(Outcome::Print(HELP.to_string())),
            Command::Quit => Ok(Outcome::Quit),
        }
    }
}
