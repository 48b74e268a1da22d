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

//! Selection-screen state and command handling.
//!
//! [`MenuState`] owns the catalog, the wheel cursor, per-player difficulty
//! cursors, and the marked-song set, and advances them one
//! [`CommandEvent`] at a time. All wheel movement wraps modulo the catalog
//! length. Only presses act; releases are consumed solely for held-state
//! bookkeeping upstream.

use std::collections::HashSet;

use rand::RngExt;

use crate::{
    input::{CommandEvent, MenuCommand, PlayerTag},
    model::{SongInfo, SortMode, catalog::sort_catalog},
};

/// Rows visible on the song wheel; page movement jumps by this much.
pub(crate) const WHEEL_ROWS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuScreen {
    Wheel,
    Marked,
}

pub(crate) struct MenuState {
    pub(crate) songs: Vec<SongInfo>,
    pub(crate) selected: usize,
    pub(crate) sort: SortMode,
    pub(crate) marked: HashSet<i32>,
    pub(crate) difficulty: [usize; 2],
    pub(crate) screen: MenuScreen,
    pub(crate) expanded: bool,
    pub(crate) quit: bool,
}

impl MenuState {
    pub(crate) fn new(mut songs: Vec<SongInfo>) -> Self {
        sort_catalog(&mut songs, SortMode::Title);
        Self {
            songs,
            selected: 0,
            sort: SortMode::Title,
            marked: HashSet::new(),
            difficulty: [0, 0],
            screen: MenuScreen::Wheel,
            expanded: false,
            quit: false,
        }
    }

    pub(crate) fn current(&self) -> Option<&SongInfo> {
        self.songs.get(self.selected)
    }

    /// Applies one resolved input event to the screen state.
    pub(crate) fn apply(&mut self, player: PlayerTag, event: CommandEvent) {
        let CommandEvent::Pressed(command) = event else {
            return;
        };

        match command {
            MenuCommand::Pass => {}
            MenuCommand::Quit => self.quit = true,

            MenuCommand::Up => self.step(-1),
            MenuCommand::Down => self.step(1),
            MenuCommand::PageUp => self.step(-(WHEEL_ROWS as isize)),
            MenuCommand::PageDown => self.step(WHEEL_ROWS as isize),

            MenuCommand::Left => self.change_difficulty(player, -1),
            MenuCommand::Right => self.change_difficulty(player, 1),

            MenuCommand::Select => self.random_jump(),
            MenuCommand::Sort => self.cycle_sort(),

            MenuCommand::Mark => {
                if let Some(id) = self.current().map(|song| song.id) {
                    self.marked.insert(id);
                }
            }
            MenuCommand::Unmark => {
                if let Some(id) = self.current().map(|song| song.id) {
                    self.marked.remove(&id);
                }
            }
            MenuCommand::Clear => self.marked.clear(),

            MenuCommand::Fullscreen => self.expanded = !self.expanded,
            MenuCommand::Start => {
                self.screen = match self.screen {
                    MenuScreen::Wheel => MenuScreen::Marked,
                    MenuScreen::Marked => MenuScreen::Wheel,
                };
            }
        }
    }

    /// Songs currently marked, in wheel order.
    pub(crate) fn marked_songs(&self) -> Vec<&SongInfo> {
        self.songs
            .iter()
            .filter(|song| self.marked.contains(&song.id))
            .collect()
    }

    fn step(&mut self, delta: isize) {
        let len = self.songs.len();
        if len == 0 {
            return;
        }
        let moved = self.selected as isize + delta;
        self.selected = moved.rem_euclid(len as isize) as usize;
    }

    fn change_difficulty(&mut self, player: PlayerTag, delta: isize) {
        // Keyboard input counts as player one, as it does in play.
        let slot = player.index().unwrap_or(0);
        let Some(song) = self.songs.get(self.selected) else {
            return;
        };
        let count = song.difficulties.len();
        if count == 0 {
            return;
        }
        let moved = self.difficulty[slot] as isize + delta;
        self.difficulty[slot] = moved.rem_euclid(count as isize) as usize;
    }

    fn random_jump(&mut self) {
        if self.songs.len() > 1 {
            self.selected = rand::rng().random_range(0..self.songs.len());
        }
    }

    fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        let current_id = self.current().map(|song| song.id);
        sort_catalog(&mut self.songs, self.sort);
        if let Some(id) = current_id {
            if let Some(pos) = self.songs.iter().position(|song| song.id == id) {
                self.selected = pos;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::load_catalog;

    fn state() -> MenuState {
        MenuState::new(load_catalog(&crate::config::AppConfig::default()))
    }

    fn press(state: &mut MenuState, command: MenuCommand) {
        state.apply(PlayerTag::One, CommandEvent::Pressed(command));
    }

    #[test]
    fn up_from_the_top_wraps_to_the_bottom() {
        let mut state = state();
        let len = state.songs.len();
        press(&mut state, MenuCommand::Up);
        assert_eq!(state.selected, len - 1);
        press(&mut state, MenuCommand::Down);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn page_movement_jumps_by_a_wheel_page() {
        let mut state = state();
        let len = state.songs.len();
        press(&mut state, MenuCommand::PageDown);
        assert_eq!(state.selected, WHEEL_ROWS % len);
        press(&mut state, MenuCommand::PageUp);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn difficulty_changes_track_the_acting_player() {
        let mut state = state();
        state.apply(PlayerTag::Two, CommandEvent::Pressed(MenuCommand::Right));
        assert_eq!(state.difficulty, [0, 1]);

        // Keyboard input drives player one's cursor.
        state.apply(
            PlayerTag::Keyboard,
            CommandEvent::Pressed(MenuCommand::Left),
        );
        let count = state.current().unwrap().difficulties.len();
        assert_eq!(state.difficulty, [count - 1, 1]);
    }

    #[test]
    fn mark_unmark_and_clear_manage_the_marked_set() {
        let mut state = state();
        press(&mut state, MenuCommand::Mark);
        let id = state.current().unwrap().id;
        assert!(state.marked.contains(&id));
        assert_eq!(state.marked_songs().len(), 1);

        press(&mut state, MenuCommand::Unmark);
        assert!(state.marked.is_empty());

        press(&mut state, MenuCommand::Mark);
        press(&mut state, MenuCommand::Down);
        press(&mut state, MenuCommand::Mark);
        assert_eq!(state.marked.len(), 2);
        press(&mut state, MenuCommand::Clear);
        assert!(state.marked.is_empty());
    }

    #[test]
    fn sorting_keeps_the_cursor_on_the_same_song() {
        let mut state = state();
        press(&mut state, MenuCommand::Down);
        press(&mut state, MenuCommand::Down);
        let id = state.current().unwrap().id;

        press(&mut state, MenuCommand::Sort);
        assert_eq!(state.sort, SortMode::Artist);
        assert_eq!(state.current().unwrap().id, id);

        press(&mut state, MenuCommand::Sort);
        assert_eq!(state.sort, SortMode::Bpm);
        assert_eq!(state.current().unwrap().id, id);
    }

    #[test]
    fn random_jump_stays_in_bounds() {
        let mut state = state();
        for _ in 0..32 {
            press(&mut state, MenuCommand::Select);
            assert!(state.selected < state.songs.len());
        }
    }

    #[test]
    fn start_toggles_screens_and_fullscreen_toggles_expansion() {
        let mut state = state();
        press(&mut state, MenuCommand::Start);
        assert_eq!(state.screen, MenuScreen::Marked);
        press(&mut state, MenuCommand::Start);
        assert_eq!(state.screen, MenuScreen::Wheel);

        press(&mut state, MenuCommand::Fullscreen);
        assert!(state.expanded);
        press(&mut state, MenuCommand::Fullscreen);
        assert!(!state.expanded);
    }

    #[test]
    fn releases_do_not_change_state() {
        let mut state = state();
        state.apply(PlayerTag::One, CommandEvent::Released(MenuCommand::Down));
        assert_eq!(state.selected, 0);
        state.apply(PlayerTag::One, CommandEvent::Released(MenuCommand::Quit));
        assert!(!state.quit);
    }

    #[test]
    fn quit_from_any_tag_ends_the_screen() {
        let mut state = state();
        state.apply(
            PlayerTag::NoPlayer,
            CommandEvent::Pressed(MenuCommand::Quit),
        );
        assert!(state.quit);
    }
}
