//! Overview screen implementation
//!
//! The main tracker screen: a financial summary panel, the three goal
//! gauges, the recent-trips table and a key help line. Owns the animated
//! gauges and retargets them from the ledger totals; the ledger itself
//! is read-only here.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::app::anim::AnimatedGauge;
use crate::app::state::TrackerState;
use crate::models::Ledger;
use crate::util::{format_money, Labels};
use crate::RECENT_TRIPS_SHOWN;

/// Overview screen component with one animated gauge per goal
#[derive(Debug, Default)]
pub struct OverviewScreen {
    daily: AnimatedGauge,
    weekly: AnimatedGauge,
    monthly: AnimatedGauge,
}

impl OverviewScreen {
    /// Create a new overview screen with gauges at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Retarget the gauges from current ledger totals. Unchanged targets
    /// leave in-flight animations alone.
    pub fn update_targets(&mut self, ledger: &Ledger) {
        let goals = ledger.goals();
        self.daily.set_target(percent_f64(ledger, goals.daily));
        self.weekly.set_target(percent_f64(ledger, goals.weekly));
        self.monthly.set_target(percent_f64(ledger, goals.monthly));
    }

    /// Advance the gauge animations
    pub fn tick(&mut self, dt: std::time::Duration) {
        self.daily.tick(dt);
        self.weekly.tick(dt);
        self.monthly.tick(dt);
    }

    /// Render the full overview screen
    pub fn render(&self, f: &mut Frame, state: &TrackerState, labels: &Labels) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(10), // Summary and goals panels
                Constraint::Min(6),     // Recent trips
                Constraint::Length(3),  // Help
            ])
            .split(f.size());

        self.render_title(f, chunks[0], labels);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.render_summary(f, panels[0], state.ledger(), labels);
        self.render_goals(f, panels[1], state.ledger(), labels);
        self.render_trips(f, chunks[2], state.ledger(), labels);
        self.render_help(f, chunks[3], labels);
    }

    fn render_title(&self, f: &mut Frame, area: Rect, labels: &Labels) {
        let title = Paragraph::new(labels.title)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_summary(&self, f: &mut Frame, area: Rect, ledger: &Ledger, labels: &Labels) {
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw(format!("{}: ", labels.total_earnings)),
                Span::styled(
                    format_money(ledger.total_earnings(), labels.currency),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "{}: {}",
                labels.gas_expenses,
                format_money(ledger.gas_total(), labels.currency)
            )),
            Line::from(format!(
                "{}: {} {}",
                labels.last_mileage,
                ledger.mileage(),
                labels.miles_unit
            )),
        ];

        let summary = Paragraph::new(lines).block(
            Block::default()
                .title(labels.financial_overview)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(summary, area);
    }

    fn render_goals(&self, f: &mut Frame, area: Rect, ledger: &Ledger, labels: &Labels) {
        let block = Block::default()
            .title(labels.goals)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
            ])
            .split(inner);

        let goals = ledger.goals();
        self.render_goal_gauge(f, rows[0], labels.daily_goal, goals.daily, &self.daily, labels);
        self.render_goal_gauge(f, rows[1], labels.weekly_goal, goals.weekly, &self.weekly, labels);
        self.render_goal_gauge(
            f,
            rows[2],
            labels.monthly_goal,
            goals.monthly,
            &self.monthly,
            labels,
        );
    }

    fn render_goal_gauge(
        &self,
        f: &mut Frame,
        area: Rect,
        name: &str,
        goal: Decimal,
        gauge: &AnimatedGauge,
        labels: &Labels,
    ) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let caption = Paragraph::new(format!("{}: {}", name, format_money(goal, labels.currency)));
        f.render_widget(caption, parts[0]);

        let percent = gauge.value();
        // The widget needs a 0..=1 ratio; the label keeps the true percent
        let ratio = (percent / 100.0).clamp(0.0, 1.0);
        let widget = Gauge::default()
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(ratio)
            .label(format!("{:.1}%", percent));
        f.render_widget(widget, parts[1]);
    }

    fn render_trips(&self, f: &mut Frame, area: Rect, ledger: &Ledger, labels: &Labels) {
        let block = Block::default()
            .title(labels.recent_trips)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if ledger.trips().is_empty() {
            let empty = Paragraph::new(labels.no_trips_yet)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        // Last few trips, newest first
        let rows: Vec<Row> = ledger
            .trips()
            .iter()
            .rev()
            .take(RECENT_TRIPS_SHOWN)
            .map(|trip| {
                Row::new(vec![
                    format!("{} {}", labels.trip, trip.id),
                    trip.time.clone(),
                    format_money(trip.earnings, labels.currency),
                    labels.time_of_day(trip.time_of_day).to_string(),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(10),
                Constraint::Length(12),
                Constraint::Min(10),
            ],
        )
        .block(block)
        .column_spacing(2);

        f.render_widget(table, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect, labels: &Labels) {
        let help = Line::from(vec![
            key_span("g"),
            Span::raw(format!(" {}  ", labels.add_gas)),
            key_span("m"),
            Span::raw(format!(" {}  ", labels.track_mileage)),
            key_span("t"),
            Span::raw(format!(" {}  ", labels.add_trip)),
            key_span("q"),
            Span::raw(format!(" {}", labels.quit)),
        ]);

        let widget = Paragraph::new(help)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, area);
    }
}

fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn percent_f64(ledger: &Ledger, goal: Decimal) -> f64 {
    ledger.progress_percent(goal).to_f64().unwrap_or(0.0)
}
