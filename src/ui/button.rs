use macroquad::prelude::*;

use super::{Rgb, to_color};

/// Clickable panel row, used for the theme list
#[derive(Clone, Debug)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
        }
    }

    /// Check if a point lies inside the button
    pub fn contains(&self, pos: (f32, f32)) -> bool {
        pos.0 >= self.x
            && pos.0 <= self.x + self.width
            && pos.1 >= self.y
            && pos.1 <= self.y + self.height
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }

    /// Draw the label with a bullet when selected and a fill when hovered
    pub fn draw(&self, text: Rgb, highlight: Rgb, selected: bool, mouse_pos: (f32, f32)) {
        if self.contains(mouse_pos) {
            draw_rectangle(self.x, self.y, self.width, self.height, to_color(highlight));
        }

        let marker = if selected { "> " } else { "  " };
        let font_size = (self.height - 4.0).clamp(12.0, 18.0);
        draw_text(
            &format!("{}{}", marker, self.text),
            self.x + 5.0,
            self.y + self.height * 0.75,
            font_size,
            to_color(text),
        );
    }
}
