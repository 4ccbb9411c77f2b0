mod button;
pub mod theme;

pub use button::Button;
pub use theme::{Appearance, Rgb, THEMES, Theme};

use macroquad::prelude::Color;

use crate::application::Session;
use crate::application::viewport::CONTROL_PANEL_WIDTH;
use crate::domain::presets;

pub const PADDING: f32 = 10.0;
pub const TITLE_HEIGHT: f32 = 40.0;
/// Space reserved at the bottom of the panel for live statistics
pub const STATS_HEIGHT: f32 = 50.0;
const MIN_ROW_HEIGHT: f32 = 14.0;
const MAX_ROW_HEIGHT: f32 = 22.0;

pub fn to_color((r, g, b): Rgb) -> Color {
    Color::from_rgba(r, g, b, 255)
}

/// Format large numbers with K/M suffixes
pub fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 10_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// One block of key help in the panel
pub struct HelpSection {
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// Key help for the panel, with the live zoom and speed values
pub fn help_sections(session: &Session) -> Vec<HelpSection> {
    let pattern_names: Vec<String> = presets::all_patterns()
        .iter()
        .enumerate()
        .map(|(idx, pattern)| format!("{} {}", idx + 1, pattern.name))
        .collect();

    vec![
        HelpSection {
            title: "Game Controls",
            lines: [
                "Space: Play/Pause",
                "R: Reset",
                "D: Random",
                "N: Step",
                "S: Save",
                "L: Load",
            ]
            .map(String::from)
            .to_vec(),
        },
        HelpSection {
            title: "View Options",
            lines: vec![
                format!("Wheel: Zoom ({}px)", session.viewport().cell_size()),
                format!("Up/Down: Speed ({}/s)", session.speed()),
                format!("+/-: Zoom step ({})", session.zoom_step()),
                "G: Grid lines".to_owned(),
                "T: Theme".to_owned(),
            ],
        },
        HelpSection {
            title: "Patterns",
            lines: pattern_names.chunks(2).map(|pair| pair.join("  ")).collect(),
        },
    ]
}

/// Row-based layout of the control panel.
///
/// Rows: status, blank, then each help section (header, lines, blank),
/// then the theme header and one row per theme. Trailing help sections
/// are dropped when the theme list would not fit otherwise.
pub struct PanelLayout {
    pub x: f32,
    pub width: f32,
    pub row_height: f32,
    /// Leading help sections that fit in the panel
    pub visible_sections: usize,
    pub theme_header_row: usize,
    window_height: f32,
}

impl PanelLayout {
    pub fn new(session: &Session, sections: &[HelpSection]) -> Self {
        let viewport = session.viewport();
        let (_, window_height) = viewport.window_size();
        let window_height = window_height as f32;

        let available = window_height - 2.0 * PADDING - TITLE_HEIGHT - STATS_HEIGHT;
        let header_row = |shown: usize| {
            2 + sections[..shown].iter().map(|s| s.lines.len() + 2).sum::<usize>()
        };
        let total_rows = |shown: usize| header_row(shown) + 1 + THEMES.len();

        let visible_sections = (0..=sections.len())
            .rev()
            .find(|&shown| total_rows(shown) as f32 * MIN_ROW_HEIGHT <= available)
            .unwrap_or(0);
        let theme_header_row = header_row(visible_sections);
        let row_height = (available / total_rows(visible_sections) as f32)
            .clamp(MIN_ROW_HEIGHT, MAX_ROW_HEIGHT);

        Self {
            x: viewport.game_area_width() as f32,
            width: CONTROL_PANEL_WIDTH as f32,
            row_height,
            visible_sections,
            theme_header_row,
            window_height,
        }
    }

    /// Top edge of a row
    pub fn row_y(&self, row: usize) -> f32 {
        PADDING + TITLE_HEIGHT + row as f32 * self.row_height
    }

    pub fn stats_y(&self) -> f32 {
        self.window_height - STATS_HEIGHT
    }

    /// One button per theme, in table order
    pub fn theme_buttons(&self) -> Vec<Button> {
        THEMES
            .iter()
            .enumerate()
            .map(|(idx, theme)| {
                Button::new(
                    self.x + PADDING,
                    self.row_y(self.theme_header_row + 1 + idx),
                    self.width - 2.0 * PADDING,
                    self.row_height,
                    theme.name,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Config;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(9_999), "9999");
        assert_eq!(format_number(12_500), "12.5K");
        assert_eq!(format_number(3_200_000), "3.2M");
    }

    #[test]
    fn test_pattern_help_pairs() {
        let session = Session::default();
        let sections = help_sections(&session);
        let patterns = &sections[2];
        assert_eq!(patterns.lines.len(), 5);
        assert_eq!(patterns.lines[0], "1 Glider  2 Blinker");
        assert_eq!(patterns.lines[4], "9 Acorn");
    }

    #[test]
    fn test_theme_buttons_inside_panel() {
        let session = Session::default();
        let sections = help_sections(&session);
        let layout = PanelLayout::new(&session, &sections);
        let buttons = layout.theme_buttons();

        assert_eq!(buttons.len(), THEMES.len());
        assert!(buttons[0].contains((layout.x + 20.0, layout.row_y(layout.theme_header_row + 1) + 1.0)));
        assert!(!buttons[0].contains((layout.x - 50.0, layout.row_y(layout.theme_header_row + 1) + 1.0)));
    }

    #[test]
    fn test_row_height_bounds() {
        let tall = Session::new(&Config { window_height: 4000, ..Config::default() });
        let sections = help_sections(&tall);
        assert_eq!(PanelLayout::new(&tall, &sections).row_height, MAX_ROW_HEIGHT);

        let short = Session::new(&Config { window_height: 300, ..Config::default() });
        let sections = help_sections(&short);
        assert!(PanelLayout::new(&short, &sections).row_height >= MIN_ROW_HEIGHT);
    }

    #[test]
    fn test_all_sections_shown_in_default_window() {
        let session = Session::default();
        let sections = help_sections(&session);
        let layout = PanelLayout::new(&session, &sections);
        assert_eq!(layout.visible_sections, sections.len());
    }

    #[test]
    fn test_short_window_keeps_theme_buttons_on_screen() {
        for height in [300, 420, 520] {
            let session = Session::new(&Config { window_height: height, ..Config::default() });
            let sections = help_sections(&session);
            let layout = PanelLayout::new(&session, &sections);
            assert!(layout.visible_sections <= sections.len());
            // Bottom edge of the last theme row
            let last = layout.row_y(layout.theme_header_row + 1 + THEMES.len());
            assert!(
                last <= layout.stats_y() - PADDING + 0.01,
                "theme list ends at {} past stats at {} for height {}",
                last,
                layout.stats_y(),
                height
            );
        }

        let session = Session::new(&Config { window_height: 300, ..Config::default() });
        let sections = help_sections(&session);
        assert_eq!(PanelLayout::new(&session, &sections).visible_sections, 0);
    }
}
