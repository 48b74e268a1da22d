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

//! The song wheel and the marked-songs list.
//!
//! The wheel shows a fixed window of rows starting at the selection, with
//! indices wrapping modulo the catalog length, so scrolling past either end
//! comes around the other side.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{menu::MenuState, render::icons::ICON_MARKED, theme::Theme};

/// The wheel indices visible when `selected` sits on the first row.
pub(crate) fn window(len: usize, selected: usize, rows: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    (0..rows.min(len)).map(|i| (selected + i) % len).collect()
}

pub(crate) fn draw_song_list(f: &mut Frame, area: Rect, menu: &MenuState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1))
        .title(format!(" Songs ({}) ", menu.songs.len()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = window(menu.songs.len(), menu.selected, inner.height as usize);
    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .map(|(row, &idx)| {
            let song = &menu.songs[idx];
            let style = if row == 0 {
                Style::default()
                    .fg(theme.list_selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.list_fg)
            };

            let mut spans = vec![Span::styled(song.title.clone(), style)];
            if menu.marked.contains(&song.id) {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    ICON_MARKED,
                    Style::default().fg(theme.marked_fg),
                ));
            }
            if menu.expanded {
                spans.push(Span::styled(
                    format!("  {} - {:.0} bpm", song.artist, song.bpm),
                    Style::default().fg(theme.status_fg),
                ));
            }
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

pub(crate) fn draw_marked_list(f: &mut Frame, area: Rect, menu: &MenuState, theme: &Theme) {
    let marked = menu.marked_songs();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1))
        .title(format!(" Marked ({}) ", marked.len()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = marked
        .iter()
        .take(inner.height as usize)
        .map(|song| {
            Line::from(vec![
                Span::styled(ICON_MARKED, Style::default().fg(theme.marked_fg)),
                Span::raw(" "),
                Span::styled(song.title.clone(), Style::default().fg(theme.list_fg)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}
