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

//! The input mapper.
//!
//! [`InputMapper`] wraps a [`RawEventSource`] and renames its raw codes into
//! the menu-command vocabulary, tracking a per-(player, command) held flag
//! as events flow through. The instance is caller-owned and single-threaded;
//! the only suspension in the component is the cooperative sleep inside
//! [`InputMapper::wait`].
//!
//! None of the operations here return errors. An unbound code resolves to
//! `Pass`, and a state update for a pair the source contract says cannot
//! occur is silently dropped. Interactive menu input must be inert on
//! surprise, never disruptive.

use std::{collections::HashMap, thread, time::Duration};

use crate::input::{
    BindingError, Bindings, CommandEvent, MenuCommand, PlayerTag, RawEventSource,
};

pub(crate) struct InputMapper<S> {
    source: S,
    bindings: Bindings,
    states: HashMap<(PlayerTag, MenuCommand), bool>,
}

impl<S: RawEventSource> InputMapper<S> {
    /// Builds the mapper around a raw event source.
    ///
    /// The binding table is merged from the default sets, and the state
    /// table is seeded with a `false` entry for every (player, command)
    /// pair the merge produced, plus the broadcast pseudo-pairs under the
    /// `NoPlayer` tag, so that no later lookup can miss.
    ///
    /// # Errors
    ///
    /// Returns an error if two binding sets claim the same raw code.
    pub(crate) fn new(source: S) -> Result<Self, BindingError> {
        let bindings = Bindings::defaults()?;

        let mut states: HashMap<(PlayerTag, MenuCommand), bool> = bindings
            .seeded()
            .iter()
            .map(|&pair| (pair, false))
            .collect();

        // Broadcast quit/idle checks and unbound-key resolutions must find
        // an entry whatever tag they arrive under.
        for player in [
            PlayerTag::One,
            PlayerTag::Two,
            PlayerTag::Keyboard,
            PlayerTag::NoPlayer,
        ] {
            states.insert((player, MenuCommand::Pass), false);
        }
        states.insert((PlayerTag::NoPlayer, MenuCommand::Quit), false);

        Ok(Self {
            source,
            bindings,
            states,
        })
    }

    /// Pulls one event from the source and resolves it.
    ///
    /// The raw magnitude is looked up in the binding table (missing entries
    /// resolve to `Pass`); the sign selects press or release, which is
    /// recorded in the state table and mirrored in the returned
    /// [`CommandEvent`].
    pub(crate) fn poll(&mut self) -> (PlayerTag, CommandEvent) {
        let (player, raw) = self.source.poll(false);
        let command = self.bindings.resolve(raw.abs());

        let event = if raw < 0 {
            CommandEvent::Released(command)
        } else {
            CommandEvent::Pressed(command)
        };

        if let Some(held) = self.states.get_mut(&(player, command)) {
            *held = event.is_pressed();
        }

        (player, event)
    }

    /// Sleep-polls until something other than `Pass` shows up.
    ///
    /// This can loop forever if the source never produces a bound event,
    /// which is exactly what an interactive menu waiting on the user wants.
    pub(crate) fn wait(&mut self, delay: Duration) -> (PlayerTag, CommandEvent) {
        loop {
            let (player, event) = self.poll();
            if event.command() != MenuCommand::Pass {
                return (player, event);
            }
            thread::sleep(delay);
        }
    }

    /// Drains the queued events without acting on them.
    ///
    /// Polls until a broadcast pseudo-event resolves: `Pass` under the
    /// `NoPlayer` tag once the queue is exhausted, or the host quit
    /// sentinel. Used to flush stale input before a screen takes over.
    pub(crate) fn empty(&mut self) {
        loop {
            let (player, event) = self.poll();
            if player == PlayerTag::NoPlayer
                && matches!(event.command(), MenuCommand::Pass | MenuCommand::Quit)
            {
                return;
            }
        }
    }

    /// Whether the given command is currently held by the given player.
    pub(crate) fn is_held(&self, player: PlayerTag, command: MenuCommand) -> bool {
        self.states
            .get(&(player, command))
            .copied()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::input::{HOST_QUIT_CODE, KEY_DEFAULTS, PAD_DEFAULTS, PadButton};

    /// A source that replays a fixed script, then reports an empty queue.
    struct ScriptedSource {
        events: VecDeque<(PlayerTag, i32)>,
    }

    impl ScriptedSource {
        fn new(events: impl IntoIterator<Item = (PlayerTag, i32)>) -> Self {
            Self {
                events: events.into_iter().collect(),
            }
        }
    }

    impl RawEventSource for ScriptedSource {
        fn poll(&mut self, _blocking: bool) -> (PlayerTag, i32) {
            self.events.pop_front().unwrap_or((PlayerTag::NoPlayer, 0))
        }
    }

    fn mapper(events: impl IntoIterator<Item = (PlayerTag, i32)>) -> InputMapper<ScriptedSource> {
        InputMapper::new(ScriptedSource::new(events)).unwrap()
    }

    #[test]
    fn pressing_every_bound_pad_code_resolves_and_sets_held() {
        for player in [PlayerTag::One, PlayerTag::Two] {
            let script: Vec<_> = PAD_DEFAULTS
                .iter()
                .map(|&(button, _)| (player, button.code(player)))
                .collect();
            let mut mapper = mapper(script);

            for &(_, expected) in PAD_DEFAULTS.iter() {
                let (tag, event) = mapper.poll();
                assert_eq!(tag, player);
                assert_eq!(event, CommandEvent::Pressed(expected));
                assert!(mapper.is_held(player, expected));
            }
        }
    }

    #[test]
    fn releasing_a_bound_code_resolves_released_and_clears_held() {
        let code = PadButton::Start.code(PlayerTag::One);
        let mut mapper = mapper([(PlayerTag::One, code), (PlayerTag::One, -code)]);

        let (_, pressed) = mapper.poll();
        assert_eq!(pressed, CommandEvent::Pressed(MenuCommand::Start));
        assert!(mapper.is_held(PlayerTag::One, MenuCommand::Start));

        let (_, released) = mapper.poll();
        assert_eq!(released, CommandEvent::Released(MenuCommand::Start));
        assert!(!mapper.is_held(PlayerTag::One, MenuCommand::Start));
    }

    #[test]
    fn keyboard_bindings_resolve_under_the_keyboard_tag() {
        for &(code, expected) in KEY_DEFAULTS.iter() {
            let mut mapper = mapper([(PlayerTag::Keyboard, code)]);
            let (tag, event) = mapper.poll();
            assert_eq!(tag, PlayerTag::Keyboard);
            assert_eq!(event, CommandEvent::Pressed(expected));
        }
    }

    #[test]
    fn unbound_codes_degrade_to_pass_for_either_sign() {
        let mut mapper = mapper([(PlayerTag::One, 31), (PlayerTag::Two, -31)]);

        let (_, event) = mapper.poll();
        assert_eq!(event, CommandEvent::Pressed(MenuCommand::Pass));
        let (_, event) = mapper.poll();
        assert_eq!(event, CommandEvent::Released(MenuCommand::Pass));
    }

    #[test]
    fn wait_skips_pass_events_and_returns_the_first_bound_one() {
        let up = PadButton::Up.code(PlayerTag::One);
        let mut mapper = mapper([
            (PlayerTag::Keyboard, 'x' as i32 * 100),
            (PlayerTag::Two, -31),
            (PlayerTag::One, up),
        ]);

        let (player, event) = mapper.wait(Duration::ZERO);
        assert_eq!(player, PlayerTag::One);
        assert_eq!(event, CommandEvent::Pressed(MenuCommand::Up));
    }

    #[test]
    fn empty_consumes_up_to_the_no_player_quit() {
        let start = PadButton::Start.code(PlayerTag::One);
        let mut mapper = mapper([
            (PlayerTag::One, PadButton::Up.code(PlayerTag::One)),
            (PlayerTag::Two, PadButton::Down.code(PlayerTag::Two)),
            (PlayerTag::NoPlayer, HOST_QUIT_CODE),
            (PlayerTag::One, start),
        ]);

        mapper.empty();

        // The event after the quit sentinel is still queued.
        let (player, event) = mapper.poll();
        assert_eq!(player, PlayerTag::One);
        assert_eq!(event, CommandEvent::Pressed(MenuCommand::Start));
    }

    #[test]
    fn empty_returns_immediately_on_an_exhausted_queue() {
        let mut mapper = mapper([]);
        mapper.empty();
    }

    #[test]
    fn player_quit_events_do_not_satisfy_the_drain() {
        // A player backing out of the screen is an ordinary event to be
        // discarded; only the broadcast sentinel ends the drain.
        let mut mapper = mapper([(PlayerTag::One, PadButton::Quit.code(PlayerTag::One))]);
        mapper.empty();
        assert!(mapper.is_held(PlayerTag::One, MenuCommand::Quit));
    }
}
