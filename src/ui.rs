pub mod gallows;
pub mod screen;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::{App, AppState},
    history::RoundRecord,
    round::{GuessOutcome, Round, RoundStatus},
    ui::gallows::{gallows_lines, parts_shown},
    ui::screen::current_screen,
};

const HORIZONTAL_MARGIN: u16 = 4;
const VERTICAL_MARGIN: u16 = 1;
const PARTICLE_COLORS: [Color; 6] = [
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::LightRed,
    Color::LightBlue,
];

/// Entry point used by the event loop
pub fn draw(app: &App, f: &mut Frame) {
    current_screen(&app.state).render(app, f);
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(round) = &self.round else {
            return;
        };
        let finished = self.state == AppState::Finished;

        let dim_style = Style::default().add_modifier(Modifier::DIM);

        let inner_width = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let word_lines = ((word_width(round) as f64 / inner_width as f64).ceil() as u16).max(1);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1),          // strikes
                Constraint::Length(7),          // gallows
                Constraint::Length(1),          // padding
                Constraint::Length(word_lines), // slots
                Constraint::Length(1),          // padding
                Constraint::Length(1),          // alphabet
                Constraint::Length(1),          // status
                Constraint::Min(0),             // definition
                Constraint::Length(1),          // history
                Constraint::Length(1),          // recent rounds
                Constraint::Length(1),          // legend
            ])
            .split(area);

        Paragraph::new(Span::styled(
            format!(
                "strikes {}/{}   {} left",
                round.strikes(),
                round.max_strikes() + 1,
                round.remaining_strikes()
            ),
            dim_style,
        ))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

        let figure_style = match round.status() {
            RoundStatus::Lost => Style::default().fg(Color::Red),
            _ => Style::default(),
        };
        let figure: Vec<Line> = gallows_lines(parts_shown(round.strikes(), round.max_strikes()))
            .into_iter()
            .map(|l| Line::styled(l, figure_style))
            .collect();
        Paragraph::new(figure)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        Paragraph::new(Line::from(word_spans(round)))
            .alignment(if word_lines == 1 {
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: true })
            .render(chunks[3], buf);

        Paragraph::new(Line::from(alphabet_spans(round)))
            .alignment(Alignment::Center)
            .render(chunks[5], buf);

        Paragraph::new(status_line(self, round))
            .alignment(Alignment::Center)
            .render(chunks[6], buf);

        if finished {
            if let Some(definition) = self.definition() {
                Paragraph::new(definition.to_string())
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(format!(" {} ", round.secret().to_lowercase())),
                    )
                    .style(Style::default().add_modifier(Modifier::ITALIC))
                    .wrap(Wrap { trim: true })
                    .render(chunks[7], buf);
            }

            if let Some(summary) = &self.summary {
                let text = format!(
                    "played {}   won {}   win rate {}%   streak {} (best {})",
                    summary.played,
                    summary.won,
                    summary.win_rate().unwrap_or(0.0),
                    summary.current_streak,
                    summary.best_streak
                );
                Paragraph::new(Span::styled(
                    text,
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
                ))
                .alignment(Alignment::Center)
                .render(chunks[8], buf);
            }

            if !self.recent.is_empty() {
                Paragraph::new(Line::from(recent_spans(&self.recent)))
                    .alignment(Alignment::Center)
                    .render(chunks[9], buf);
            }
        }

        let legend = if finished {
            "(n/→) play again (esc) quit"
        } else {
            "(a-z) guess (→) new word (esc) quit"
        };
        Paragraph::new(Span::styled(legend, Style::default().add_modifier(Modifier::ITALIC)))
            .alignment(Alignment::Center)
            .render(chunks[10], buf);

        if self.celebration.is_active {
            render_particles(self, area, buf);
        }
    }
}

fn word_width(round: &Round) -> usize {
    round.masked().width()
}

/// One span per slot; letters uncovered only by a loss are shown in red
pub fn word_spans(round: &Round) -> Vec<Span<'static>> {
    let hit_style = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
    let missed_style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    let hidden_style = Style::default().add_modifier(Modifier::BOLD | Modifier::DIM);

    let mut spans = Vec::new();
    for (idx, c) in round.secret().chars().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        let span = match c {
            ' ' => Span::raw(" "),
            c if !c.is_ascii_alphabetic() => Span::styled(c.to_string(), hidden_style),
            _ if !round.is_revealed(idx) => Span::styled("_", hidden_style),
            c if round.guessed().contains(&c) => Span::styled(c.to_string(), hit_style),
            c => Span::styled(c.to_string(), missed_style),
        };
        spans.push(span);
    }
    spans
}

/// A-Z with guessed letters coloured by whether they hit
pub fn alphabet_spans(round: &Round) -> Vec<Span<'static>> {
    let misses = round.misses();
    ('A'..='Z')
        .map(|c| {
            let style = if misses.contains(&c) {
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if round.guessed().contains(&c) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            Span::styled(format!("{c} "), style)
        })
        .collect()
}

/// Recent words, green when solved and red when hanged
fn recent_spans(recent: &[RoundRecord]) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled("recent ", Style::default().add_modifier(Modifier::DIM))];
    for record in recent {
        let (mark, color) = if record.won {
            ('✓', Color::Green)
        } else {
            ('✗', Color::Red)
        };
        spans.push(Span::styled(
            format!(" {} {mark} ", record.word),
            Style::default().fg(color),
        ));
    }
    spans
}

fn status_line(app: &App, round: &Round) -> Line<'static> {
    match round.status() {
        RoundStatus::Won => Line::styled(
            format!("You got it! The word was {}", round.secret()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        RoundStatus::Lost => Line::styled(
            format!("Hanged. The word was {}", round.secret()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        RoundStatus::InProgress => {
            let text = match &app.last_outcome {
                None | Some(GuessOutcome::Ignored) => "Guess a letter".to_string(),
                Some(GuessOutcome::Hit { positions }) => match positions.len() {
                    1 => "Yes! 1 letter revealed".to_string(),
                    n => format!("Yes! {n} letters revealed"),
                },
                Some(GuessOutcome::Miss { .. }) => match round.remaining_strikes() {
                    1 => "No. Last chance".to_string(),
                    n => format!("No. {n} strikes left"),
                },
                Some(GuessOutcome::Repeated) => "Already guessed that one".to_string(),
            };
            Line::styled(text, Style::default().fg(Color::Yellow))
        }
    }
}

fn render_particles(app: &App, area: Rect, buf: &mut Buffer) {
    for p in &app.celebration.particles {
        if p.x < 0.0 || p.y < 0.0 {
            continue;
        }
        let (x, y) = (area.x + p.x as u16, area.y + p.y as u16);
        if x >= area.right() || y >= area.bottom() {
            continue;
        }
        let color = PARTICLE_COLORS[p.color_index % PARTICLE_COLORS.len()];
        buf.set_string(
            x,
            y,
            p.symbol.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );
    }
}

pub fn render_loading(app: &App, f: &mut Frame) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let text = vec![
        Line::styled(
            "gallows",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::raw(format!("loading dictionary ({})...", app.source_description())),
    ];
    f.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        chunks[1],
    );
}

pub fn render_load_failed(message: &str, f: &mut Frame) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    let text = vec![
        Line::styled(
            "Could not load the dictionary",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw(message.to_string()),
        Line::raw(""),
        Line::styled(
            "(r) retry (esc) quit",
            Style::default().add_modifier(Modifier::ITALIC),
        ),
    ];
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
}
