//! UI rendering for the player.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::features::session::{
    format_minutes, format_mmss, ExerciseType, PlaybackObserver, PlaybackState,
};
use crate::tui::app::App;

/// Accent color for an exercise type.
pub const fn type_color(exercise_type: ExerciseType) -> Color {
    match exercise_type {
        ExerciseType::Strength => Color::Magenta,
        ExerciseType::Cardio => Color::Red,
        ExerciseType::Mobility => Color::Green,
        ExerciseType::Rest => Color::Blue,
    }
}

/// Render the player UI.
pub fn render<O: PlaybackObserver>(frame: &mut Frame<'_>, app: &App<O>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Current step
            Constraint::Length(3), // Session progress
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    if app.is_finished() {
        render_complete(frame, app, chunks[1]);
    } else {
        render_step(frame, app, chunks[1]);
    }
    render_session_gauge(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

fn render_header<O: PlaybackObserver>(frame: &mut Frame<'_>, app: &App<O>, area: Rect) {
    let summary = app.controller().summary();
    let mut spans = vec![Span::styled(
        format!(" {} ", summary.title),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    for label in [&summary.focus, &summary.difficulty] {
        if !label.is_empty() {
            spans.push(Span::styled(
                format!("· {label} "),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(header, area);
}

fn render_step<O: PlaybackObserver>(frame: &mut Frame<'_>, app: &App<O>, area: Rect) {
    let controller = app.controller();
    let step = controller.current_step();
    let color = type_color(step.exercise_type);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(
            " Step {}/{} · {} ",
            controller.current_index() + 1,
            controller.step_count(),
            step.exercise_type
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let mut title = vec![Span::styled(
        step.name.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if let Some(reps) = &step.reps {
        title.push(Span::raw(format!("  {reps}")));
    }
    frame.render_widget(
        Paragraph::new(Line::from(title)).alignment(Alignment::Center),
        rows[0],
    );

    frame.render_widget(
        Paragraph::new(step.description.clone())
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[1],
    );

    let paused = controller.state() == PlaybackState::Paused;
    let countdown = Gauge::default()
        .gauge_style(Style::default().fg(if paused { Color::Yellow } else { color }))
        .ratio(controller.step_progress().clamp(0.0, 1.0))
        .label(if paused {
            format!("{} paused", format_mmss(controller.remaining_secs()))
        } else {
            format_mmss(controller.remaining_secs())
        });
    frame.render_widget(countdown, rows[2]);

    let next = controller.next_step().map_or_else(
        || Line::from(Span::styled("Last step", Style::default().fg(Color::DarkGray))),
        |next| {
            Line::from(vec![
                Span::styled("Up next: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    next.name.clone(),
                    Style::default().fg(type_color(next.exercise_type)),
                ),
                Span::styled(
                    format!(" ({})", format_mmss(next.duration_secs)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        },
    );
    frame.render_widget(Paragraph::new(next).alignment(Alignment::Center), rows[3]);
}

fn render_complete<O: PlaybackObserver>(frame: &mut Frame<'_>, app: &App<O>, area: Rect) {
    let summary = app.controller().summary();
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Session Complete!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "{} · {}",
            summary.title,
            format_minutes(summary.total_duration_minutes)
        )),
    ];

    let body = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(body, area);
}

fn render_session_gauge<O: PlaybackObserver>(frame: &mut Frame<'_>, app: &App<O>, area: Rect) {
    let controller = app.controller();
    let progress = controller.session_progress().clamp(0.0, 1.0);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (progress * 100.0).round() as u16;

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Session "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(progress)
        .label(format!("{percent}%"));
    frame.render_widget(gauge, area);
}

fn render_status_bar<O: PlaybackObserver>(frame: &mut Frame<'_>, app: &App<O>, area: Rect) {
    let status = app.status.as_deref().unwrap_or("q:quit");
    let status_bar = Paragraph::new(format!(" {status}"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::features::session::{ExerciseStep, NoopObserver, SessionRunner, Ticker, WorkoutPlan};

    fn app() -> App<NoopObserver> {
        let plan = WorkoutPlan {
            title: "Morning Flow".to_string(),
            focus: "Mobility".to_string(),
            difficulty: "Easy".to_string(),
            total_duration_minutes: Some(5),
            steps: vec![
                ExerciseStep::new("Cat Cow", "Slow breaths", ExerciseType::Mobility, 2),
                ExerciseStep::new("Child Pose", "", ExerciseType::Rest, 1),
            ],
        };
        let runner =
            SessionRunner::new(&plan, Ticker::new(Duration::from_millis(10)), NoopObserver)
                .unwrap();
        App::new(runner)
    }

    fn screen(app: &App<NoopObserver>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_renders_current_step() {
        let mut app = app();
        app.start(Instant::now());
        let text = screen(&app);
        assert!(text.contains("Morning Flow"));
        assert!(text.contains("Cat Cow"));
        assert!(text.contains("Up next: Child Pose"));
    }

    #[test]
    fn test_renders_completion() {
        let mut app = app();
        let t0 = Instant::now();
        app.start(t0);
        app.on_tick(t0 + Duration::from_millis(50));
        let text = screen(&app);
        assert!(text.contains("Session Complete!"));
    }

    #[test]
    fn test_type_colors() {
        assert_eq!(type_color(ExerciseType::Cardio), Color::Red);
        assert_eq!(type_color(ExerciseType::Rest), Color::Blue);
    }
}
