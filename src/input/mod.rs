use macroquad::prelude::*;

use crate::application::Session;
use crate::application::viewport::clamp_window_size;
use crate::ui::{Appearance, Button};

/// Number keys map to registry patterns in order
const PATTERN_KEYS: [KeyCode; 9] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

/// Resize the grid when the window size changed since last frame.
/// Windows below the minimum are pushed back up to it.
pub fn sync_window_size(session: &mut Session) {
    let actual = (screen_width() as u32, screen_height() as u32);
    let size = clamp_window_size(actual.0, actual.1);
    if size != actual {
        request_new_screen_size(size.0 as f32, size.1 as f32);
    }
    if size != session.viewport().window_size() {
        session.resize_window(size.0, size.1);
    }
}

/// Zoom around the pointer with the mouse wheel
pub fn handle_zoom(session: &mut Session, mouse_pos: (f32, f32)) {
    let wheel = mouse_wheel().1;
    let notches = if wheel > 0.0 {
        1
    } else if wheel < 0.0 {
        -1
    } else {
        return;
    };
    session.zoom_at(mouse_pos, notches);
}

/// Left click toggles a cell in the game area or picks a theme in the panel
pub fn handle_mouse_click(
    session: &mut Session,
    appearance: &mut Appearance,
    theme_buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }

    if session.viewport().in_game_area(mouse_pos.0, mouse_pos.1) {
        session.toggle_cell_at(mouse_pos.0, mouse_pos.1);
    } else if let Some(idx) = theme_buttons.iter().position(|b| b.is_clicked(mouse_pos)) {
        appearance.select_theme(idx);
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard_input(session: &mut Session, appearance: &mut Appearance) {
    type KeyAction = (KeyCode, fn(&mut Session));

    let actions: [KeyAction; 10] = [
        (KeyCode::Space, Session::toggle_running),
        (KeyCode::R, Session::reset),
        (KeyCode::D, Session::randomize),
        (KeyCode::N, Session::step_once),
        (KeyCode::Up, |s| s.adjust_speed(1)),
        (KeyCode::Down, |s| s.adjust_speed(-1)),
        (KeyCode::Equal, |s| s.adjust_zoom_step(1)),
        (KeyCode::KpAdd, |s| s.adjust_zoom_step(1)),
        (KeyCode::Minus, |s| s.adjust_zoom_step(-1)),
        (KeyCode::KpSubtract, |s| s.adjust_zoom_step(-1)),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| action(session));

    // Save/load failures are already logged by the session
    if is_key_pressed(KeyCode::S) {
        let _ = session.save();
    }
    if is_key_pressed(KeyCode::L) {
        let _ = session.load();
    }

    if is_key_pressed(KeyCode::G) {
        appearance.toggle_grid();
    }
    if is_key_pressed(KeyCode::T) {
        appearance.cycle_theme();
    }

    if let Some(idx) = PATTERN_KEYS.iter().position(|key| is_key_pressed(*key)) {
        session.stamp_pattern_index(idx);
    }
}
