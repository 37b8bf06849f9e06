use crate::ui::theme::{GLOBAL_BORDER, STATUS_OK, STATUS_PENDING, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " ↑/↓: Count │ Tab: Focus │ Enter: Press │ 0-9: Step │ q: Quit";

pub struct Footer {
    save_pending: bool,
}

impl Footer {
    pub fn new(save_pending: bool) -> Self {
        Self { save_pending }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let (status, status_color) = if self.save_pending {
            ("● saving", STATUS_PENDING)
        } else {
            ("● saved", STATUS_OK)
        };
        let version = format!(" v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let used = HINTS.chars().count() + status.chars().count() + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(status, Style::default().fg(status_color)),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
