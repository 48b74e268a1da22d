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

//! Static event binding tables.
//!
//! The binding table maps the magnitude of a raw device code to a
//! [`MenuCommand`]. It is assembled once at startup by merging three sets:
//! the shared keyboard defaults, then the pad defaults for each player.
//!
//! The three key spaces are disjoint by construction: pad codes occupy a
//! small per-player band (the device layer offsets player two's codes by
//! [`PAD_STRIDE`]), while keyboard codes are pre-scaled by
//! [`KEYBOARD_SCALE`] and so sit far above any pad band. A duplicate code
//! during the merge therefore indicates a broken binding set and is a
//! construction-time error rather than a silent overwrite.

use std::collections::HashMap;

use thiserror::Error;

use crate::input::{MenuCommand, PlayerTag};

/// Keyboard raw codes are the key's numeric code multiplied by this factor.
pub(crate) const KEYBOARD_SCALE: i32 = 100;

/// Offset between consecutive players' pad code bands.
const PAD_STRIDE: i32 = 32;

/// Physical pad inputs, in the device layer's base code order.
///
/// The diagonals exist because dance pads have no dedicated menu buttons:
/// hitting two arrows at once is how a player marks songs or pages through
/// the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PadButton {
    Quit = 1,
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    Start,
    Select,
}

impl PadButton {
    /// The raw code this button produces for the given player.
    pub(crate) fn code(self, player: PlayerTag) -> i32 {
        let slot = player.index().unwrap_or(0) as i32;
        self as i32 + PAD_STRIDE * slot
    }
}

/// Default pad bindings, registered once per player.
pub(crate) const PAD_DEFAULTS: [(PadButton, MenuCommand); 11] = [
    (PadButton::Quit, MenuCommand::Quit),
    (PadButton::Up, MenuCommand::Up),
    (PadButton::Down, MenuCommand::Down),
    (PadButton::Left, MenuCommand::Left),
    (PadButton::Right, MenuCommand::Right),
    (PadButton::Start, MenuCommand::Start),
    (PadButton::Select, MenuCommand::Select),
    (PadButton::UpRight, MenuCommand::PageUp),
    (PadButton::DownRight, MenuCommand::PageDown),
    (PadButton::UpLeft, MenuCommand::Mark),
    (PadButton::DownLeft, MenuCommand::Unmark),
];

/// Default keyboard bindings, already scaled into the keyboard code space.
pub(crate) const KEY_DEFAULTS: [(i32, MenuCommand); 3] = [
    (b'f' as i32 * KEYBOARD_SCALE, MenuCommand::Fullscreen),
    (8 * KEYBOARD_SCALE, MenuCommand::Sort),   // backspace
    (9 * KEYBOARD_SCALE, MenuCommand::Select), // tab
];

#[derive(Debug, Error)]
pub(crate) enum BindingError {
    #[error("raw code {code} is bound to both {existing:?} and {new:?}")]
    Collision {
        code: i32,
        existing: MenuCommand,
        new: MenuCommand,
    },
}

/// The merged event binding table, immutable after construction.
pub(crate) struct Bindings {
    events: HashMap<i32, MenuCommand>,
    seeded: Vec<(PlayerTag, MenuCommand)>,
}

impl Bindings {
    /// Builds the table from the default binding sets: keyboard first, then
    /// pads for player one and player two.
    pub(crate) fn defaults() -> Result<Self, BindingError> {
        let mut bindings = Self {
            events: HashMap::new(),
            seeded: Vec::new(),
        };

        bindings.merge(PlayerTag::Keyboard, KEY_DEFAULTS.iter().copied())?;
        for player in [PlayerTag::One, PlayerTag::Two] {
            let set = PAD_DEFAULTS
                .iter()
                .map(|&(button, command)| (button.code(player), command));
            bindings.merge(player, set)?;
        }

        Ok(bindings)
    }

    fn merge(
        &mut self,
        player: PlayerTag,
        set: impl Iterator<Item = (i32, MenuCommand)>,
    ) -> Result<(), BindingError> {
        for (code, command) in set {
            if let Some(&existing) = self.events.get(&code) {
                return Err(BindingError::Collision {
                    code,
                    existing,
                    new: command,
                });
            }
            self.events.insert(code, command);
            self.seeded.push((player, command));
        }
        Ok(())
    }

    /// Resolves a raw code magnitude; unbound codes degrade to `Pass`.
    pub(crate) fn resolve(&self, magnitude: i32) -> MenuCommand {
        self.events
            .get(&magnitude)
            .copied()
            .unwrap_or(MenuCommand::Pass)
    }

    /// Every (player, command) pair the merge produced, in merge order. The
    /// mapper pre-seeds its state table from this so a held-state lookup for
    /// any resolvable pair never misses.
    pub(crate) fn seeded(&self) -> &[(PlayerTag, MenuCommand)] {
        &self.seeded
    }

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_table_size_is_sum_of_binding_sets() {
        let bindings = Bindings::defaults().unwrap();
        assert_eq!(bindings.len(), KEY_DEFAULTS.len() + 2 * PAD_DEFAULTS.len());
    }

    #[test]
    fn pad_code_bands_are_disjoint_per_player() {
        for &(button, _) in PAD_DEFAULTS.iter() {
            let one = button.code(PlayerTag::One);
            let two = button.code(PlayerTag::Two);
            assert_ne!(one, two);
            assert_eq!(two - one, 32);
        }
    }

    #[test]
    fn keyboard_codes_sit_above_the_pad_bands() {
        let top_pad = PadButton::Select.code(PlayerTag::Two);
        for &(code, _) in KEY_DEFAULTS.iter() {
            assert!(code > top_pad);
        }
    }

    #[test]
    fn unbound_code_resolves_to_pass() {
        let bindings = Bindings::defaults().unwrap();
        assert_eq!(bindings.resolve(9999), MenuCommand::Pass);
        assert_eq!(bindings.resolve(0), MenuCommand::Pass);
    }

    #[test]
    fn duplicate_code_is_a_construction_error() {
        let mut bindings = Bindings::defaults().unwrap();
        let code = PadButton::Up.code(PlayerTag::One);
        let result = bindings.merge(PlayerTag::One, [(code, MenuCommand::Down)].into_iter());
        assert!(matches!(result, Err(BindingError::Collision { .. })));
    }
}
