use crate::route::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LISTING_HINTS: &str = " ↑/↓: Move │ Enter: Open │ r: Reload │ q: Quit";
const DETAIL_HINTS: &str =
    " ←/→: Image │ 1-9: Thumbnail │ Tab: Color │ ↑/↓: Size │ Esc: Back │ r: Reload │ q: Quit";

pub struct Footer {
    route: Route,
}

impl Footer {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    pub fn hints(&self) -> &'static str {
        match self.route {
            Route::Listing => LISTING_HINTS,
            Route::Product(_) => DETAIL_HINTS,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: hints contain arrows and box drawing.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
