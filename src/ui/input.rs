use crate::route::Route;
use crate::ui::app::App;
use crate::ui::detail::ImageDirection;
use crate::ui::listing::ListingIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Char('q') {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::Char('r') {
        app.reload();
        return;
    }

    match app.route() {
        Route::Listing => handle_listing_key(app, key),
        Route::Product(_) => handle_detail_key(app, key),
    }
}

fn handle_listing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.listing_move(ListingIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => app.listing_move(ListingIntent::MoveDown),
        KeyCode::Home | KeyCode::Char('g') => app.listing_move(ListingIntent::Home),
        KeyCode::End | KeyCode::Char('G') => app.listing_move(ListingIntent::End),
        KeyCode::Enter => app.open_focused(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => app.navigate(Route::Listing),
        KeyCode::Left | KeyCode::Char('h') => app.navigate_image(ImageDirection::Previous),
        KeyCode::Right | KeyCode::Char('l') => app.navigate_image(ImageDirection::Next),
        KeyCode::Tab => app.cycle_color(true),
        KeyCode::BackTab => app.cycle_color(false),
        KeyCode::Down | KeyCode::Char('j') => app.cycle_size(true),
        KeyCode::Up | KeyCode::Char('k') => app.cycle_size(false),
        KeyCode::Char(ch) => {
            // Thumbnails are numbered from 1.
            if let Some(digit) = ch.to_digit(10) {
                if digit > 0 {
                    app.jump_to_image(digit as usize - 1);
                }
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
