//! Screen layout for the timer, task box and task log

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::state::TimerState;
use crate::ui::app::{App, Focus};
use crate::ui::format::{format_clock, format_time, task_label};

pub fn draw(frame: &mut Frame, app: &App, state: &TimerState) {
    let [task_area, timer_area, controls_area, log_area, footer_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_task(frame, task_area, app, state);
    draw_timer(frame, timer_area, state);
    draw_controls(frame, controls_area, state);
    draw_log(frame, log_area, app, state);
    draw_footer(frame, footer_area, app, state);
}

fn draw_task(frame: &mut Frame, area: Rect, app: &App, state: &TimerState) {
    let editing = app.focus() == Focus::TaskInput && !state.edit_start_time;
    let border = if editing { Color::Yellow } else { Color::DarkGray };

    let text = if state.task.is_empty() && !editing {
        Line::styled("Enter your current task.", Style::default().fg(Color::DarkGray))
    } else if editing {
        Line::from(format!("{}▏", state.task))
    } else {
        Line::from(state.task.as_str())
    };

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Current Task ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(paragraph, area);
}

fn draw_timer(frame: &mut Frame, area: Rect, state: &TimerState) {
    let lines = if state.edit_start_time {
        vec![
            Line::from("Start seconds"),
            Line::styled(
                format!("{}▏", state.start_time),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]
    } else {
        let color = if state.is_finished() {
            Color::Red
        } else if state.running {
            Color::Green
        } else {
            Color::White
        };
        vec![
            Line::from(""),
            Line::styled(
                format_time(state.time),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_controls(frame: &mut Frame, area: Rect, state: &TimerState) {
    let button = |label: &'static str| {
        Span::styled(format!("[ {label} ]"), Style::default().add_modifier(Modifier::BOLD))
    };
    let line = Line::from(vec![
        button(if state.running { "Stop" } else { "Start" }),
        Span::raw("  "),
        button("Reset"),
        Span::raw("  "),
        button("Task Done"),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_log(frame: &mut Frame, area: Rect, app: &App, state: &TimerState) {
    if state.tasks.is_empty() {
        return;
    }

    let items: Vec<ListItem> = state
        .tasks
        .iter()
        .map(|task| {
            ListItem::new(format!(
                "{} - {}",
                task_label(&task.text),
                format_clock(task.time_end)
            ))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" Tasks ").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(app.selected());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, state: &TimerState) {
    let hint = if state.edit_start_time {
        "digits: set seconds  backspace: delete  enter/esc: done"
    } else if app.focus() == Focus::TaskInput {
        "type the task  enter/esc: done"
    } else {
        "space: start/stop  r: reset  d: task done  e: edit time  i: edit task  ↑↓ x: remove  q: quit"
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
