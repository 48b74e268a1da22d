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

//! Input abstraction for the selection screens.
//!
//! This module decouples the menu logic from raw device semantics. Raw
//! device events arrive as player-tagged signed integer codes (negative
//! magnitude encodes a release); the [`InputMapper`] resolves the magnitude
//! through a binding table built once at startup and hands the caller a
//! [`CommandEvent`] carrying one of the closed set of [`MenuCommand`]s.
//!
//! # Organization
//!
//! * [`bindings`]: the static binding tables and their merge logic.
//! * [`mapper`]: the mapper itself, with its poll/wait/drain operations and
//!   per-player held-state tracking.
//! * [`source`]: the raw device collaborator trait and the terminal-backed
//!   implementation of it.
//!
//! Unrecognized input is inert by design: an unbound code resolves to
//! [`MenuCommand::Pass`] rather than an error, so nothing the user mashes
//! can crash or wedge the menu.

mod bindings;
mod mapper;
mod source;

pub(crate) use bindings::{BindingError, Bindings, KEY_DEFAULTS, KEYBOARD_SCALE, PAD_DEFAULTS, PadButton};
pub(crate) use mapper::InputMapper;
pub(crate) use source::{ChannelSource, HOST_QUIT_CODE, RawEventSource, spawn_key_reader};

/// The closed set of logical menu actions.
///
/// `Pass` is the no-op signal every unbound raw event degrades to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum MenuCommand {
    Pass,
    Quit,
    Up,
    Down,
    Left,
    Right,
    Start,
    Select,
    Mark,
    Unmark,
    PageUp,
    PageDown,
    Fullscreen,
    Sort,
    Clear,
}

/// Identifies which input source an event came from.
///
/// `Keyboard` is the reserved "no device" tag that the shared keyboard
/// bindings are registered under; `NoPlayer` is the sentinel used for
/// broadcast pseudo-events such as the host quit signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum PlayerTag {
    One,
    Two,
    Keyboard,
    NoPlayer,
}

impl PlayerTag {
    /// The zero-based player slot, for tags that correspond to a player.
    pub(crate) fn index(self) -> Option<usize> {
        match self {
            PlayerTag::One => Some(0),
            PlayerTag::Two => Some(1),
            PlayerTag::Keyboard | PlayerTag::NoPlayer => None,
        }
    }
}

/// A resolved menu command together with its press/release polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CommandEvent {
    Pressed(MenuCommand),
    Released(MenuCommand),
}

impl CommandEvent {
    pub(crate) fn command(self) -> MenuCommand {
        match self {
            CommandEvent::Pressed(command) | CommandEvent::Released(command) => command,
        }
    }

    pub(crate) fn is_pressed(self) -> bool {
        matches!(self, CommandEvent::Pressed(_))
    }
}
