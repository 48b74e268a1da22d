// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Song-selection screen TUI.
//!
//! A terminal rendition of a dance game's song-selection screen.
//!
//! Raw key events are captured on a reader thread and translated into the
//! game's device code space; everything else is a single cooperative loop
//! that drains the input mapper, applies the resolved menu commands to the
//! selection state, and redraws the animated widgets from elapsed time.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. The input
//! mapper is caller-owned and lives for the duration of the screen; the
//! reader thread communicates with it over a `std::sync::mpsc` channel.

mod components;
mod config;
mod input;
mod menu;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    thread,
    time::{Duration, Instant},
};

use crate::{
    components::HelpText,
    config::AppConfig,
    input::{ChannelSource, InputMapper, MenuCommand, PlayerTag},
    menu::MenuState,
    render::draw,
    theme::Theme,
};

const HELP: [&str; 8] = [
    "Up / Down changes song selection",
    "Left / Right changes difficulty setting",
    "Up Left / Up Right marks songs and pages up",
    "Down Left / Down Right unmarks songs and pages down",
    "Select / Tab takes you to a random song",
    "Start / Enter switches between screens",
    "F toggles the expanded view - Backspace changes the sort mode",
    "Escape backs out of the screen",
];

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub menu: MenuState,
    pub help: HelpText,

    pub fast_scroll: [bool; 2],

    epoch: Instant,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Self {
        let songs = model::catalog::load_catalog(&config);
        Self {
            config,
            theme: Theme::default(),
            menu: MenuState::new(songs),
            help: HelpText::new(HELP.iter().map(|s| s.to_string()).collect()),
            fast_scroll: [false, false],
            epoch: Instant::now(),
        }
    }

    /// Milliseconds since the screen came up; the clock every animated
    /// widget runs on.
    pub fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

/// The entry point of the application.
///
/// Builds the input mapper and the application state, manages the terminal
/// lifecycle, and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();
    // Write the defaults out on first run so there is a file to edit.
    config::save_config(&config).ok();

    let rx = input::spawn_key_reader();
    let mut mapper =
        InputMapper::new(ChannelSource::new(rx)).context("Failed to build input bindings")?;

    let mut app = App::new(config);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, &mut mapper);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Asks the emulator to report key releases, which is what feeds the
///   mapper's held-state table.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
    )
    .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background
/// color. It is "best-effort" and does not return a result, as it is
/// typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        PopKeyboardEnhancementFlags,
        LeaveAlternateScreen
    )
    .ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// The cooperative main loop of the selection screen.
///
/// Each tick drains the mapper of queued events, applies them to the menu
/// state, recomputes the animated widgets from elapsed time, and draws one
/// frame. Stale input queued before the screen came up is flushed first.
///
/// # Errors
///
/// Returns an error if drawing a frame fails.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mapper: &mut InputMapper<ChannelSource>,
) -> Result<()> {
    mapper.empty();

    loop {
        loop {
            let (player, event) = mapper.poll();
            if event.command() == MenuCommand::Pass {
                break;
            }
            app.menu.apply(player, event);
        }

        if app.menu.quit {
            return Ok(());
        }

        // Animation hint: the indicator pulses faster while a scroll input
        // is held.
        for (slot, tag) in [(0, PlayerTag::One), (1, PlayerTag::Two)] {
            app.fast_scroll[slot] = [
                MenuCommand::Up,
                MenuCommand::Down,
                MenuCommand::PageUp,
                MenuCommand::PageDown,
            ]
            .into_iter()
            .any(|command| mapper.is_held(tag, command));
        }

        let now = app.now_ms();
        app.help.update(now);

        terminal.draw(|f| draw(f, app))?;

        thread::sleep(Duration::from_millis(app.config.tick_ms));
    }
}
