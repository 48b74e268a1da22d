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

//! The song catalog.
//!
//! Configured song directories are walked for step files (`.sm`, `.dwi`)
//! whose file stems become wheel titles; full chart parsing happens
//! elsewhere in the game and is none of this screen's business. With no
//! directories configured, a built-in demo catalog stands in so the screen
//! always has something to show.

use ratatui::style::Color;
use walkdir::WalkDir;

use crate::{
    config::AppConfig,
    model::{Difficulty, SongInfo, SortMode},
};

const STEP_FILE_EXTENSIONS: [&str; 2] = ["sm", "dwi"];

/// Loads the catalog from the configured directories, falling back to the
/// demo catalog when the scan turns up nothing.
pub(crate) fn load_catalog(config: &AppConfig) -> Vec<SongInfo> {
    let mut songs = scan_song_dirs(&config.song_dirs);
    if songs.is_empty() {
        songs = demo_catalog();
    }
    songs
}

fn scan_song_dirs(dirs: &[String]) -> Vec<SongInfo> {
    let mut songs = Vec::new();

    for dir in dirs {
        for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }

            let is_step_file = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    STEP_FILE_EXTENSIONS
                        .iter()
                        .any(|known| ext.eq_ignore_ascii_case(known))
                });
            if !is_step_file {
                continue;
            }

            let Some(title) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            // Song packs conventionally nest charts as <pack>/<artist>/<song>.
            let artist = path
                .parent()
                .and_then(|p| p.file_name())
                .and_then(|name| name.to_str())
                .unwrap_or("Unknown")
                .to_string();

            songs.push(SongInfo {
                id: songs.len() as i32,
                title: title.to_string(),
                artist,
                bpm: 0.0,
                difficulties: standard_difficulties(),
            });
        }
    }

    songs
}

/// Re-orders the catalog in place for the given wheel mode.
///
/// Ties fall back to the title so the order is stable across repeated
/// sorts of the same catalog.
pub(crate) fn sort_catalog(songs: &mut [SongInfo], mode: SortMode) {
    match mode {
        SortMode::Title => songs.sort_by(|a, b| a.title.cmp(&b.title)),
        SortMode::Artist => {
            songs.sort_by(|a, b| a.artist.cmp(&b.artist).then_with(|| a.title.cmp(&b.title)))
        }
        SortMode::Bpm => {
            songs.sort_by(|a, b| a.bpm.total_cmp(&b.bpm).then_with(|| a.title.cmp(&b.title)))
        }
    }
}

fn standard_difficulties() -> Vec<Difficulty> {
    vec![
        difficulty("BEGINNER", 2, Color::Rgb(255, 216, 0)),
        difficulty("BASIC", 4, Color::Rgb(0, 180, 255)),
        difficulty("TRICK", 6, Color::Rgb(255, 80, 80)),
        difficulty("MANIAC", 8, Color::Rgb(0, 255, 0)),
    ]
}

fn difficulty(name: &str, feet: u8, colour: Color) -> Difficulty {
    Difficulty {
        name: name.to_string(),
        feet,
        grade: None,
        colour,
    }
}

/// A handful of songs so the screen can be driven without any packs
/// installed.
fn demo_catalog() -> Vec<SongInfo> {
    let entries: [(&str, &str, f32); 12] = [
        ("Afterimage", "Nova Circuit", 148.0),
        ("Break the Cycle", "DJ Meridian", 175.0),
        ("Cardinal Steps", "Polar Front", 132.0),
        ("Double Helix", "Twin Ratio", 160.0),
        ("Eight Counts", "Metronome Club", 128.0),
        ("Freefall Friday", "Gravity Well", 182.0),
        ("Glass Arrows", "Soda Prism", 140.0),
        ("Half-Beat Heart", "Analog Courage", 95.0),
        ("Ion Trail", "Nova Circuit", 155.0),
        ("Last Train North", "Polar Front", 120.0),
        ("Mirror Stage", "Soda Prism", 166.0),
        ("Night Grammar", "DJ Meridian", 150.0),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, &(title, artist, bpm))| {
            let mut difficulties = standard_difficulties();
            // Seed a couple of grades so the difficulty boxes have
            // something to show in the demo.
            if i % 3 == 0 {
                difficulties[3].grade = Some("AA".to_string());
            }
            SongInfo {
                id: i as i32,
                title: title.to_string(),
                artist: artist.to_string(),
                bpm,
                difficulties,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_has_unique_ids() {
        let songs = demo_catalog();
        assert!(!songs.is_empty());
        for (i, song) in songs.iter().enumerate() {
            assert_eq!(song.id, i as i32);
            assert!(!song.difficulties.is_empty());
        }
    }

    #[test]
    fn sorting_by_title_orders_lexicographically() {
        let mut songs = demo_catalog();
        songs.reverse();
        sort_catalog(&mut songs, SortMode::Title);
        for pair in songs.windows(2) {
            assert!(pair[0].title <= pair[1].title);
        }
    }

    #[test]
    fn sorting_by_bpm_orders_numerically() {
        let mut songs = demo_catalog();
        sort_catalog(&mut songs, SortMode::Bpm);
        for pair in songs.windows(2) {
            assert!(pair[0].bpm <= pair[1].bpm);
        }
    }

    #[test]
    fn sorting_by_artist_breaks_ties_on_title() {
        let mut songs = demo_catalog();
        sort_catalog(&mut songs, SortMode::Artist);
        for pair in songs.windows(2) {
            assert!(pair[0].artist <= pair[1].artist);
            if pair[0].artist == pair[1].artist {
                assert!(pair[0].title <= pair[1].title);
            }
        }
    }

    #[test]
    fn empty_dir_list_scans_to_nothing() {
        assert!(scan_song_dirs(&[]).is_empty());
    }
}
