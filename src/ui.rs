//! Layout and drawing: playfield, sidebar, splash, pause and game-over popups.

use crate::app::Screen;
use crate::game::{RunState, Session};
use crate::theme::Theme;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Each grid cell is two terminal columns wide, one row tall.
const CELL_WIDTH: u16 = 2;
const SIDEBAR_WIDTH: u16 = 22;

/// Playfield size in terminal cells (border + grid) for given grid dimensions.
fn playfield_pixel_size(width: u16, height: u16) -> (u16, u16) {
    (width * CELL_WIDTH + 2, height + 2)
}

/// Draw the current screen. The pause overlay comes from the session state,
/// not the screen: a paused game is still the playing screen.
pub fn draw(
    frame: &mut Frame,
    screen: Screen,
    session: &Session,
    theme: &Theme,
    new_high_score: bool,
) {
    let area = frame.area();
    match screen {
        Screen::Splash => draw_splash(frame, session, theme, area),
        Screen::Playing => {
            draw_game(frame, session, theme, area);
            if session.state == RunState::Paused {
                draw_pause_overlay(frame, theme, area);
            }
        }
        Screen::GameOver => {
            draw_game(frame, session, theme, area);
            draw_game_over(frame, session, theme, area, new_high_score);
        }
    }
}

/// Playfield + sidebar, centred in the terminal.
fn draw_game(frame: &mut Frame, session: &Session, theme: &Theme, area: Rect) {
    let (pw, ph) = playfield_pixel_size(session.grid.width as u16, session.grid.height as u16);
    let total_w = pw + SIDEBAR_WIDTH;

    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(total_w),
            Constraint::Fill(1),
        ])
        .split(area);
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(ph),
            Constraint::Fill(1),
        ])
        .split(horiz[1]);
    let active = vert[1];

    let inner = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(pw), Constraint::Length(SIDEBAR_WIDTH)])
        .split(active);

    draw_playfield(frame, session, theme, inner[0]);
    draw_sidebar(frame, session, theme, inner[1]);
}

fn draw_playfield(frame: &mut Frame, session: &Session, theme: &Theme, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.div_line).bg(theme.bg))
        .title(Span::styled(" gridfall ", Style::default().fg(theme.title)));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let buf = frame.buffer_mut();
    for row in 0..session.grid.height {
        for col in 0..session.grid.width {
            let tag = piece_tag_at(session, row, col)
                .or_else(|| session.grid.get(row, col))
                .unwrap_or(0);
            let color = if tag == 0 {
                theme.bg
            } else {
                theme.piece_color(tag)
            };
            let rx = inner.x + col as u16 * CELL_WIDTH;
            let ry = inner.y + row as u16;
            for dx in 0..CELL_WIDTH {
                let x = rx + dx;
                if x < inner.x + inner.width && ry < inner.y + inner.height {
                    buf[(x, ry)]
                        .set_symbol(" ")
                        .set_style(Style::default().bg(color));
                }
            }
        }
    }
}

/// Active piece tag at a grid coordinate, if one of its filled cells covers it.
fn piece_tag_at(session: &Session, row: usize, col: usize) -> Option<u8> {
    let piece = &session.piece;
    let r = row as i32 - piece.row;
    let c = col as i32 - piece.col;
    if r < 0 || c < 0 {
        return None;
    }
    let tag = *piece.cells.get(r as usize)?.get(c as usize)?;
    (tag != 0).then_some(tag)
}

fn draw_sidebar(frame: &mut Frame, session: &Session, theme: &Theme, area: Rect) {
    let title_style = Style::default().fg(theme.title);
    let fg_style = Style::default().fg(theme.main_fg);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.div_line).bg(theme.bg));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let secs = session.elapsed_secs();
    let lines = vec![
        Line::from(Span::styled("Score", title_style)),
        Line::from(Span::styled(session.score.to_string(), fg_style)),
        Line::from(""),
        Line::from(Span::styled("Best", title_style)),
        Line::from(Span::styled(session.high_score.to_string(), fg_style)),
        Line::from(""),
        Line::from(Span::styled("Time", title_style)),
        Line::from(Span::styled(
            format!("{:02}:{:02}", secs / 60, secs % 60),
            fg_style,
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("←/→  Move", fg_style)),
        Line::from(Span::styled("↑    Rotate", fg_style)),
        Line::from(Span::styled("↓    Soft drop", fg_style)),
        Line::from(Span::styled("P    Pause", fg_style)),
        Line::from(Span::styled("R    Reset", fg_style)),
        Line::from(Span::styled("Q    Quit", fg_style)),
    ];
    Paragraph::new(lines).render(inner, frame.buffer_mut());
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn draw_splash(frame: &mut Frame, session: &Session, theme: &Theme, area: Rect) {
    let popup = centered_popup(area, 40, 11);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " gridfall ",
            Style::default().fg(theme.title).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" Best: {} ", session.high_score),
            Style::default().fg(theme.main_fg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " S / Enter — Start ",
            Style::default().fg(theme.main_fg),
        )),
        Line::from(Span::styled(
            " Q — Quit ",
            Style::default().fg(theme.main_fg),
        )),
        Line::from(""),
    ];
    let p = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.div_line).bg(theme.bg)),
    );
    p.render(popup, frame.buffer_mut());
}

fn draw_pause_overlay(frame: &mut Frame, theme: &Theme, area: Rect) {
    let popup = centered_popup(area, 28, 5);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Paused ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " P — Resume    Q — Quit ",
            Style::default().fg(theme.main_fg),
        )),
    ];
    let p = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.div_line).bg(theme.bg)),
    );
    p.render(popup, frame.buffer_mut());
}

fn draw_game_over(
    frame: &mut Frame,
    session: &Session,
    theme: &Theme,
    area: Rect,
    new_high_score: bool,
) {
    let popup = centered_popup(area, 32, 11);
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Game Over ",
            Style::default().fg(Color::White).bg(Color::Red),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" Score: {} ", session.score),
            Style::default().fg(theme.main_fg),
        )),
        Line::from(Span::styled(
            format!(" Best: {} ", session.high_score),
            Style::default().fg(theme.main_fg),
        )),
    ];
    if new_high_score {
        lines.push(Line::from(Span::styled(
            " New record! ",
            Style::default().fg(Color::Yellow).bold(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " R — Restart    Q — Quit ",
        Style::default().fg(theme.main_fg),
    )));
    lines.push(Line::from(""));
    let p = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.div_line).bg(theme.bg))
            .title(Span::styled(" gridfall ", Style::default().fg(theme.title))),
    );
    p.render(popup, frame.buffer_mut());
}
