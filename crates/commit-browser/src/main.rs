use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use ratatui::{
    crossterm::{
        self,
        event::{self, Event, KeyEventKind},
    },
    prelude::*,
};

use crate::actions::Action;
use crate::cli::Cli;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::Config;
use crate::effect::execute_effect;
use crate::source::{CommitSource, GitLog};
use crate::state::*;
use crate::store::Store;
use crate::view_models::commit_list::CommitListViewModel;

mod actions;
mod cli;
mod clipboard;
mod config;
mod effect;
mod log_capture;
mod reducer;
mod shortcuts;
mod source;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

pub struct App {
    // Redux store - centralized state management
    pub store: Store,
    // Where commit history comes from (git in production)
    pub source: Box<dyn CommitSource>,
    pub clipboard: Box<dyn Clipboard>,
}

impl App {
    fn new(config: Config, log_buffer: log_capture::LogBuffer) -> App {
        let source = GitLog::new(config.git_command.clone(), &config.repo, config.max_count);

        let initial_state = AppState {
            debug_console: DebugConsoleState {
                logs: log_buffer,
                ..DebugConsoleState::default()
            },
            config,
            ..AppState::default()
        };

        App {
            store: Store::new(initial_state),
            source: Box::new(source),
            clipboard: Box::new(SystemClipboard),
        }
    }
}

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best effort: the terminal may already be restored
        let _ = shutdown();
        original_hook(panic_info);
    }));
}

fn startup() -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stderr(), crossterm::terminal::EnterAlternateScreen)?;
    Ok(())
}

fn shutdown() -> Result<()> {
    crossterm::execute!(std::io::stderr(), crossterm::terminal::LeaveAlternateScreen)?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}

/// Dispatch an action and run the resulting effects to completion
///
/// Follow-up actions returned by effects are queued and dispatched in order:
/// Action → Effects → Follow-up Actions → More Effects...
fn update(app: &mut App, action: Action) -> Result<()> {
    let mut pending = VecDeque::from([action]);

    while let Some(action) = pending.pop_front() {
        if action == Action::None {
            continue;
        }

        let effects = app.store.dispatch(&action);
        for effect in effects {
            pending.extend(execute_effect(app, &effect)?);
        }
    }

    Ok(())
}

/// Convert a terminal event into an action
fn event_to_action(event: Event, debug_console_open: bool) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            shortcuts::action_for_key(&key, debug_console_open)
        }
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

fn run(app: &mut App) -> Result<()> {
    // Drawn on stderr so stdout stays free for the selected hash
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stderr()))?;
    let tick_rate = Duration::from_millis(app.store.state().config.tick_rate_ms.max(1));

    let size = terminal.size()?;
    update(app, Action::Resize(size.width, size.height))?;

    // Draw the loading screen before the blocking history read
    terminal.draw(|f| ui(f, app))?;
    update(app, Action::Bootstrap)?;

    let mut last_tick = Instant::now();
    while !app.store.state().ui.should_quit {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let console_open = app.store.state().debug_console.is_open;
            update(app, event_to_action(event::read()?, console_open))?;
        }

        if last_tick.elapsed() >= tick_rate {
            update(app, Action::Tick)?;
            last_tick = Instant::now();
        }
    }

    debug!("Event loop finished");
    Ok(())
}

fn ui(f: &mut Frame<'_>, app: &App) {
    let state = app.store.state();
    let area = f.area();

    let view_model = CommitListViewModel::from_state(state, area.width, area.height);
    views::commit_list::render_commit_browser(f, area, &view_model, &state.theme);

    if state.debug_console.is_open {
        views::debug_console::render_debug_console(f, area, &state.debug_console, &state.theme);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize debug console logger before anything else
    let log_buffer = log_capture::init_logger()?;

    let config = Config::load(cli.config.as_deref()).with_cli(&cli);
    info!(
        "Browsing {} ({} ranking)",
        config.repo.display(),
        config.ranking
    );

    let mut app = App::new(config, log_buffer);

    initialize_panic_handler();
    startup()?;
    let result = run(&mut app);
    shutdown()?;
    result?;

    let state = app.store.state();
    if state.config.print_selection {
        if let Some(commit) = &state.ui.chosen_commit {
            println!("{}", commit.hash);
        }
    }

    Ok(())
}
