use crate::ui::app::{App, Focus};
use crate::ui::counter::CounterState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_sections, layout_regions};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HINT, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub const SAVE_HINT: &str = "Changes saved automatically.";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let counter = app.counter();

    frame.render_widget(Header::new(counter.step, counter.history.len()).widget(), header);
    frame.render_widget(Clear, body);

    let (controls, history, hint) = body_sections(body);
    frame.render_widget(Paragraph::new(control_lines(counter, app.focus())), controls);
    frame.render_widget(history_widget(counter, history), history);
    frame.render_widget(Paragraph::new(shortcut_hint()), hint);

    frame.render_widget(Footer::new(app.save_pending()).widget(footer), footer);
}

fn control_lines(counter: &CounterState, focus: Focus) -> Vec<Line<'static>> {
    let label = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
    vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled("Current Count: ", label),
            Span::styled(
                counter.count.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw(" "),
            button("Decrement", focus == Focus::Decrement),
            Span::raw("  "),
            button("Increment", focus == Focus::Increment),
            Span::raw("  "),
            button("Reset", focus == Focus::Reset),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw(" "),
            Span::styled("Step Value: ", Style::default().fg(TEXT)),
            button(&counter.step_input, focus == Focus::Step),
        ]),
        Line::from(Span::styled(format!(" {SAVE_HINT}"), Style::default().fg(HINT))),
    ]
}

fn button(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(ACCENT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT)
    };
    Span::styled(format!("[ {label} ]"), style)
}

/// History list, scrolled so the newest entries stay visible.
fn history_widget(counter: &CounterState, area: Rect) -> Paragraph<'static> {
    let visible = area.height.saturating_sub(2) as usize;
    let skip = counter.history.len().saturating_sub(visible);
    let index_width = counter.history.len().to_string().len();

    let lines: Vec<Line> = counter
        .history
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(index, value)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:>width$}. ", index + 1, width = index_width),
                    Style::default().fg(HINT),
                ),
                Span::styled(value.to_string(), Style::default().fg(TEXT)),
            ])
        })
        .collect();

    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Count History ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn shortcut_hint() -> Line<'static> {
    let key = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(HINT);
    Line::from(vec![
        Span::styled(" Use ", text),
        Span::styled("ArrowUp", key),
        Span::styled(" to increment and ", text),
        Span::styled("ArrowDown", key),
        Span::styled(" to decrement.", text),
    ])
}
