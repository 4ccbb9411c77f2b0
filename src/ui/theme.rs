use tracing::{info, warn};

/// Plain RGB triple; converted to a toolkit color only when drawing
pub type Rgb = (u8, u8, u8);

/// Color set used to paint the grid and the control panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub alive: Rgb,
    pub dead: Rgb,
    pub grid: Rgb,
    pub text: Rgb,
    pub panel: Rgb,
    pub highlight: Rgb,
    pub button: Rgb,
}

pub const THEMES: &[Theme] = &[
    Theme {
        name: "classic",
        alive: (50, 205, 50),
        dead: (15, 15, 15),
        grid: (30, 30, 30),
        text: (220, 220, 220),
        panel: (25, 25, 25),
        highlight: (40, 40, 40),
        button: (35, 35, 35),
    },
    Theme {
        name: "ocean",
        alive: (64, 224, 208),
        dead: (5, 15, 25),
        grid: (20, 35, 45),
        text: (220, 240, 255),
        panel: (10, 20, 30),
        highlight: (15, 30, 45),
        button: (12, 25, 35),
    },
    Theme {
        name: "desert",
        alive: (255, 140, 0),
        dead: (40, 20, 0),
        grid: (80, 40, 0),
        text: (255, 220, 180),
        panel: (30, 15, 0),
        highlight: (100, 50, 0),
        button: (60, 30, 0),
    },
    Theme {
        name: "matrix",
        alive: (0, 255, 0),
        dead: (0, 20, 0),
        grid: (0, 40, 0),
        text: (0, 255, 0),
        panel: (0, 10, 0),
        highlight: (0, 60, 0),
        button: (0, 30, 0),
    },
    Theme {
        name: "sunset",
        alive: (255, 170, 50),
        dead: (20, 10, 15),
        grid: (40, 20, 25),
        text: (255, 220, 200),
        panel: (25, 12, 18),
        highlight: (45, 22, 28),
        button: (35, 15, 20),
    },
    Theme {
        name: "neon",
        alive: (255, 50, 255),
        dead: (10, 5, 15),
        grid: (30, 15, 35),
        text: (200, 255, 255),
        panel: (15, 8, 20),
        highlight: (35, 18, 40),
        button: (25, 12, 30),
    },
    Theme {
        name: "grayscale",
        alive: (255, 255, 255),
        dead: (20, 20, 20),
        grid: (40, 40, 40),
        text: (200, 200, 200),
        panel: (10, 10, 10),
        highlight: (50, 50, 50),
        button: (30, 30, 30),
    },
    Theme {
        name: "forest",
        alive: (95, 255, 95),
        dead: (5, 15, 5),
        grid: (15, 35, 15),
        text: (220, 255, 220),
        panel: (8, 20, 8),
        highlight: (18, 40, 18),
        button: (12, 30, 12),
    },
];

/// Index of a theme by name, ignoring case
pub fn index_of(name: &str) -> Option<usize> {
    THEMES.iter().position(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// View preferences that only affect drawing: theme and grid lines
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Appearance {
    theme_index: usize,
    show_grid: bool,
}

impl Appearance {
    /// Unknown theme names fall back to the first theme
    pub fn new(theme: &str, show_grid: bool) -> Self {
        let theme_index = index_of(theme).unwrap_or_else(|| {
            warn!(theme, fallback = THEMES[0].name, "unknown theme");
            0
        });
        Self { theme_index, show_grid }
    }

    pub fn theme(&self) -> &'static Theme {
        &THEMES[self.theme_index]
    }

    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn select_theme(&mut self, index: usize) {
        if index < THEMES.len() && index != self.theme_index {
            self.theme_index = index;
            info!(theme = self.theme().name, "theme changed");
        }
    }

    /// Move to the next theme, wrapping around
    pub fn cycle_theme(&mut self) {
        self.select_theme((self.theme_index + 1) % THEMES.len());
    }

    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::new("classic", true)
    }
}
