use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Paragraph,
        canvas::{Canvas, Context, Points},
    },
};

use crate::game::{GameState, Segment};
use crate::metrics::GameMetrics;

const BODY_COLOR: Color = Color::Green;
const HEAD_COLOR: Color = Color::Cyan;
const APPLE_COLOR: Color = Color::Red;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        let playfield = self.render_playfield(state);
        frame.render_widget(playfield, chunks[1]);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// The playfield as a canvas in pixel coordinates. Drawn back to front:
    /// body from the tail forward, then the head on top, then the apple.
    fn render_playfield<'a>(&self, state: &'a GameState) -> impl ratatui::widgets::Widget + 'a {
        let width = state.width as f64;
        let height = state.height as f64;

        Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(move |ctx| {
                for segment in state.snake.iter().skip(1).rev() {
                    fill_rect(ctx, state.height, segment, BODY_COLOR);
                }
                fill_rect(ctx, state.height, state.snake.head(), HEAD_COLOR);

                let apple = state.apple.rect();
                fill_rect(ctx, state.height, &apple, APPLE_COLOR);
            })
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Lives lost: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.lives_lost.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

/// Fill one segment rectangle on the canvas. The game's y axis grows down
/// while the canvas's grows up, so rectangles are flipped here.
fn fill_rect(ctx: &mut Context, playfield_height: i32, rect: &Segment, color: Color) {
    let top = (playfield_height - rect.y - rect.height) as f64;

    let mut coords = Vec::with_capacity((rect.width * rect.height) as usize);
    for dx in 0..rect.width {
        for dy in 0..rect.height {
            coords.push(((rect.x + dx) as f64, top + dy as f64));
        }
    }

    ctx.draw(&Points {
        coords: &coords,
        color,
    });
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
