use crate::catalog::ProductSummary;
use crate::route::Route;
use crate::ui::app::App;
use crate::ui::detail::{DetailState, Selection};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{detail_columns, layout_regions};
use crate::ui::listing::ListingState;
use crate::ui::swatch::Swatches;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRICE_TEXT, SIZE_SELECTED,
    SIZE_UNAVAILABLE, STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const IMAGE_PLACEHOLDER: &str = "[no image]";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let title = app.detail.product().map(|product| product.name.clone());
    frame.render_widget(Header::new(app.route(), title).widget(), header);
    frame.render_widget(Clear, body);

    match app.route() {
        Route::Listing => draw_listing(frame, body, &app.listing, app.currency()),
        Route::Product(_) => draw_detail(frame, body, app),
    }

    frame.render_widget(Footer::new(app.route()).widget(footer), footer);
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn centered_message(frame: &mut Frame<'_>, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(panel(title));
    frame.render_widget(widget, area);
}

fn format_price(price: u64, currency: &str) -> String {
    format!("{} {}", price, currency)
}

fn draw_listing(frame: &mut Frame<'_>, area: Rect, state: &ListingState, currency: &str) {
    match state {
        ListingState::Loading { .. } => {
            centered_message(frame, area, "Products", vec![Line::from("Loading...")]);
        }
        ListingState::Failed { message } => {
            centered_message(
                frame,
                area,
                "Products",
                vec![
                    Line::from(Span::styled(
                        "Failed to load products",
                        Style::default().fg(STATUS_ERROR),
                    )),
                    Line::from(message.clone()),
                    Line::from(""),
                    Line::from("Press r to retry"),
                ],
            );
        }
        ListingState::Ready { products, focused } => {
            if products.is_empty() {
                centered_message(frame, area, "Products", vec![Line::from("No products")]);
                return;
            }
            let lines = listing_lines(products, *focused, currency);
            frame.render_widget(Paragraph::new(lines).block(panel("Products")), area);
        }
    }
}

/// One card per product: name, representative price, thumbnail reference.
pub fn listing_lines(
    products: &[ProductSummary],
    focused: usize,
    currency: &str,
) -> Vec<Line<'static>> {
    let name_width = products
        .iter()
        .map(|product| product.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(products.len());
    for (idx, product) in products.iter().enumerate() {
        let price = product
            .price
            .map(|price| format_price(price, currency))
            .unwrap_or_else(|| "—".to_string());
        let thumbnail = product
            .thumbnail
            .clone()
            .unwrap_or_else(|| IMAGE_PLACEHOLDER.to_string());
        let marker = if idx == focused { "▶ " } else { "  " };

        let mut line = Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(
                format!("{:<width$}", product.name, width = name_width),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("{:>10}", price), Style::default().fg(PRICE_TEXT)),
            Span::raw("  "),
            Span::styled(thumbnail, Style::default().fg(MUTED_TEXT)),
        ]);
        if idx == focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }
    lines
}

fn draw_detail(frame: &mut Frame<'_>, area: Rect, app: &App) {
    match &app.detail {
        DetailState::Uninitialized | DetailState::Loading { .. } => {
            centered_message(frame, area, "Product", vec![Line::from("Loading...")]);
        }
        DetailState::LoadFailed {
            product_id,
            message,
            ..
        } => {
            centered_message(
                frame,
                area,
                "Product",
                vec![
                    Line::from(Span::styled(
                        format!("Failed to load product {}", product_id),
                        Style::default().fg(STATUS_ERROR),
                    )),
                    Line::from(message.clone()),
                    Line::from(""),
                    Line::from("Press r to retry, Esc to go back"),
                ],
            );
        }
        DetailState::EmptyVariants { product, .. } => {
            centered_message(
                frame,
                area,
                &product.name,
                vec![Line::from("This product has no color variants to show")],
            );
        }
        DetailState::Ready(selection) => {
            let (viewer, info) = detail_columns(area);
            frame.render_widget(
                Paragraph::new(viewer_lines(selection))
                    .alignment(Alignment::Center)
                    .block(panel("Images")),
                viewer,
            );
            frame.render_widget(
                Paragraph::new(info_lines(selection, app.swatches(), app.currency()))
                    .wrap(Wrap { trim: true })
                    .block(panel(&selection.product().name)),
                info,
            );
        }
    }
}

/// Current image, position, arrows and the thumbnail strip.
pub fn viewer_lines(selection: &Selection) -> Vec<Line<'static>> {
    let count = selection.image_count();
    let index = selection.image_index();
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            selection.image().to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} - {} - image {}",
                selection.product().name,
                selection.color().name,
                index + 1
            ),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
    ];

    if count > 1 {
        lines.push(Line::from(format!("◀  {} / {}  ▶", index + 1, count)));
        lines.push(Line::from(""));
        let mut thumbs = Vec::with_capacity(count * 2);
        for n in 0..count {
            let style = if n == index {
                Style::default().fg(SIZE_SELECTED).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            thumbs.push(Span::styled(format!("[{}]", n + 1), style));
            thumbs.push(Span::raw(" "));
        }
        lines.push(Line::from(thumbs));
    }
    lines
}

/// Price, description, color swatches and the size picker.
pub fn info_lines(
    selection: &Selection,
    swatches: &Swatches,
    currency: &str,
) -> Vec<Line<'static>> {
    let color = selection.color();
    let mut lines = vec![
        Line::from(Span::styled(
            format_price(color.price, currency),
            Style::default().fg(PRICE_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            color.description.clone(),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Color: {}", color.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let mut swatch_spans = Vec::new();
    for variant in &selection.product().colors {
        let selected = variant.id == color.id;
        let mut style = Style::default().fg(swatches.color_for(&variant.name));
        if !variant.has_images() {
            style = style.add_modifier(Modifier::DIM);
        }
        let glyph = if selected { "(●)" } else { " ● " };
        swatch_spans.push(Span::styled(glyph, style));
        swatch_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(swatch_spans));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Size:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    if color.sizes.is_empty() {
        lines.push(Line::from(Span::styled(
            "No sizes available for this color",
            Style::default().fg(MUTED_TEXT),
        )));
    } else {
        let mut size_spans = Vec::new();
        for size in selection.sizes() {
            let style = if selection.size_id() == Some(size.id) {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(SIZE_SELECTED)
                    .add_modifier(Modifier::BOLD)
            } else if color.supports_size(size.id) {
                Style::default().fg(HEADER_TEXT)
            } else {
                Style::default()
                    .fg(SIZE_UNAVAILABLE)
                    .add_modifier(Modifier::CROSSED_OUT)
            };
            size_spans.push(Span::styled(format!(" {} ", size.label), style));
            size_spans.push(Span::raw(" "));
        }
        lines.push(Line::from(size_spans));
    }
    lines
}
