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

//! Raw device event sources.
//!
//! The mapper only ever sees `(player, signed raw code)` pairs pulled from a
//! [`RawEventSource`]. The production source is a channel fed by a reader
//! thread that translates `crossterm` terminal key events into the device
//! code space: arrow keys and their friends become player one's pad codes,
//! the `wasd` cluster becomes player two's, and everything else lands in the
//! scaled keyboard space.
//!
//! The source contract: a non-blocking poll of an exhausted queue yields
//! `(NoPlayer, 0)`, which resolves to the idle `Pass` pseudo-event; when the
//! host wants the process gone the source yields `(NoPlayer,
//! HOST_QUIT_CODE)`, which resolves to the broadcast quit pseudo-event.

use std::{
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::{KEYBOARD_SCALE, PadButton, PlayerTag};

/// Raw code of the broadcast quit sentinel, delivered under the `NoPlayer`
/// tag when the host process should terminate.
pub(crate) const HOST_QUIT_CODE: i32 = PadButton::Quit as i32;

/// The external device-polling collaborator.
///
/// `poll(true)` may suspend until an event arrives; `poll(false)` must
/// return immediately, yielding the idle sentinel when nothing is queued.
pub(crate) trait RawEventSource {
    fn poll(&mut self, blocking: bool) -> (PlayerTag, i32);
}

/// A [`RawEventSource`] backed by an mpsc channel.
pub(crate) struct ChannelSource {
    rx: Receiver<(PlayerTag, i32)>,
}

impl ChannelSource {
    pub(crate) fn new(rx: Receiver<(PlayerTag, i32)>) -> Self {
        Self { rx }
    }
}

impl RawEventSource for ChannelSource {
    fn poll(&mut self, blocking: bool) -> (PlayerTag, i32) {
        if blocking {
            // A hung-up channel means the reader thread is gone, which only
            // happens when the host is shutting down.
            self.rx
                .recv()
                .unwrap_or((PlayerTag::NoPlayer, HOST_QUIT_CODE))
        } else {
            match self.rx.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) => (PlayerTag::NoPlayer, 0),
                Err(TryRecvError::Disconnected) => (PlayerTag::NoPlayer, HOST_QUIT_CODE),
            }
        }
    }
}

/// Spawns the terminal reader thread and returns the receiving end of its
/// raw event channel.
///
/// The thread blocks on `crossterm` reads for the lifetime of the process
/// and translates each key event into the raw device code space. Key
/// repeats are forwarded as fresh presses so the terminal's own repeat rate
/// drives wheel scrolling.
pub(crate) fn spawn_key_reader() -> Receiver<(PlayerTag, i32)> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if let Some(raw) = translate_key(&key) {
                        if tx.send(raw).is_err() {
                            break;
                        }
                    }
                }
                Ok(_) => {}
                Err(_) => {
                    let _ = tx.send((PlayerTag::NoPlayer, HOST_QUIT_CODE));
                    break;
                }
            }
        }
    });

    rx
}

/// Translates one terminal key event into a `(player, signed raw code)`
/// pair, or `None` for keys outside the device code space.
fn translate_key(key: &KeyEvent) -> Option<(PlayerTag, i32)> {
    use PadButton::*;
    use PlayerTag::{Keyboard, NoPlayer, One, Two};

    let (player, magnitude) = match key.code {
        // Player one rides the navigation cluster.
        KeyCode::Up => (One, Up.code(One)),
        KeyCode::Down => (One, Down.code(One)),
        KeyCode::Left => (One, Left.code(One)),
        KeyCode::Right => (One, Right.code(One)),
        KeyCode::PageUp => (One, UpRight.code(One)),
        KeyCode::PageDown => (One, DownRight.code(One)),
        KeyCode::Home => (One, UpLeft.code(One)),
        KeyCode::End => (One, DownLeft.code(One)),
        KeyCode::Enter => (One, Start.code(One)),
        KeyCode::Esc => (One, Quit.code(One)),

        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            (NoPlayer, HOST_QUIT_CODE)
        }

        // Player two rides the wasd cluster.
        KeyCode::Char('w') => (Two, Up.code(Two)),
        KeyCode::Char('s') => (Two, Down.code(Two)),
        KeyCode::Char('a') => (Two, Left.code(Two)),
        KeyCode::Char('d') => (Two, Right.code(Two)),

        KeyCode::Backspace => (Keyboard, 8 * KEYBOARD_SCALE),
        KeyCode::Tab => (Keyboard, 9 * KEYBOARD_SCALE),
        KeyCode::Char(c) => (Keyboard, c as i32 * KEYBOARD_SCALE),

        _ => return None,
    };

    let signed = match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => magnitude,
        KeyEventKind::Release => -magnitude,
    };

    Some((player, signed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    #[test]
    fn arrows_map_to_player_one_pad_codes() {
        let (player, raw) = translate_key(&key(KeyCode::Up, KeyEventKind::Press)).unwrap();
        assert_eq!(player, PlayerTag::One);
        assert_eq!(raw, PadButton::Up.code(PlayerTag::One));
    }

    #[test]
    fn wasd_maps_to_player_two_pad_codes() {
        let (player, raw) = translate_key(&key(KeyCode::Char('s'), KeyEventKind::Press)).unwrap();
        assert_eq!(player, PlayerTag::Two);
        assert_eq!(raw, PadButton::Down.code(PlayerTag::Two));
    }

    #[test]
    fn release_negates_the_code() {
        let (_, pressed) = translate_key(&key(KeyCode::Enter, KeyEventKind::Press)).unwrap();
        let (_, released) = translate_key(&key(KeyCode::Enter, KeyEventKind::Release)).unwrap();
        assert_eq!(released, -pressed);
    }

    #[test]
    fn plain_characters_land_in_the_keyboard_space() {
        let (player, raw) = translate_key(&key(KeyCode::Char('f'), KeyEventKind::Press)).unwrap();
        assert_eq!(player, PlayerTag::Keyboard);
        assert_eq!(raw, 'f' as i32 * KEYBOARD_SCALE);
    }

    #[test]
    fn ctrl_c_is_the_host_quit_sentinel() {
        let event = KeyEvent::new_with_kind(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        );
        assert_eq!(
            translate_key(&event),
            Some((PlayerTag::NoPlayer, HOST_QUIT_CODE))
        );
    }

    #[test]
    fn exhausted_channel_source_yields_the_idle_sentinel() {
        let (tx, rx) = mpsc::channel();
        let mut source = ChannelSource::new(rx);
        tx.send((PlayerTag::One, 2)).unwrap();

        assert_eq!(source.poll(false), (PlayerTag::One, 2));
        assert_eq!(source.poll(false), (PlayerTag::NoPlayer, 0));

        drop(tx);
        assert_eq!(source.poll(false), (PlayerTag::NoPlayer, HOST_QUIT_CODE));
    }
}
