use macroquad::prelude::*;

use crate::application::Session;
use crate::ui::{
    Appearance, Button, HelpSection, PADDING, PanelLayout, Theme, format_number, to_color,
};

/// Grid lines get too dense to read below this cell size
const GRID_LINE_MIN_CELL: u32 = 4;

/// Draw one full frame: cells, optional grid lines, control panel
pub fn draw_frame(
    session: &Session,
    appearance: &Appearance,
    layout: &PanelLayout,
    sections: &[HelpSection],
    theme_buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    let theme = appearance.theme();
    clear_background(to_color(theme.dead));

    draw_cells(session, theme);
    if appearance.show_grid() && session.viewport().cell_size() >= GRID_LINE_MIN_CELL {
        draw_grid_lines(session, theme);
    }
    draw_panel(session, appearance, layout, sections, theme_buttons, mouse_pos);
}

/// Draw the live cells, leaving a 1px gap so cells read as separate
pub fn draw_cells(session: &Session, theme: &Theme) {
    let viewport = session.viewport();
    let size = viewport.cell_size() as f32;
    let alive = to_color(theme.alive);

    for (x, y) in session.grid().live_cells() {
        let (screen_x, screen_y) = viewport.cell_origin(x, y);
        draw_rectangle(screen_x, screen_y, size - 1.0, size - 1.0, alive);
    }
}

fn draw_grid_lines(session: &Session, theme: &Theme) {
    let viewport = session.viewport();
    let size = viewport.cell_size() as f32;
    let area_width = viewport.game_area_width() as f32;
    let area_height = screen_height();
    let color = to_color(theme.grid);

    let columns = (area_width / size) as usize;
    let rows = (area_height / size) as usize;

    for col in 0..=columns {
        let x = col as f32 * size;
        draw_line(x, 0.0, x, area_height, 1.0, color);
    }
    for row in 0..=rows {
        let y = row as f32 * size;
        draw_line(0.0, y, area_width, y, 1.0, color);
    }
}

fn draw_panel(
    session: &Session,
    appearance: &Appearance,
    layout: &PanelLayout,
    sections: &[HelpSection],
    theme_buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    let theme = appearance.theme();
    let text = to_color(theme.text);
    let accent = to_color(theme.alive);
    let panel_height = screen_height();

    draw_rectangle(layout.x, 0.0, layout.width, panel_height, to_color(theme.panel));
    draw_line(layout.x, 0.0, layout.x, panel_height, 2.0, to_color(theme.grid));

    // Title, centered
    let title = "Game of Life";
    let title_size = measure_text(title, None, 28, 1.0);
    draw_text(
        title,
        layout.x + (layout.width - title_size.width) / 2.0,
        PADDING + title_size.height + 6.0,
        28.0,
        text,
    );

    let left = layout.x + PADDING + 5.0;
    let header_size = (layout.row_height + 2.0).min(20.0);
    let line_size = layout.row_height.min(17.0);
    let baseline = |row: usize| layout.row_y(row) + layout.row_height * 0.8;

    let status = if session.is_running() { "||  RUNNING" } else { ">  PAUSED" };
    draw_text(status, left, baseline(0), header_size, text);

    let mut row = 2;
    for section in sections.iter().take(layout.visible_sections) {
        draw_text(section.title, left, baseline(row), header_size, accent);
        row += 1;
        for line in &section.lines {
            draw_text(line, left + 7.0, baseline(row), line_size, text);
            row += 1;
        }
        row += 1;
    }

    draw_text("Themes", left, baseline(layout.theme_header_row), header_size, accent);
    for (idx, button) in theme_buttons.iter().enumerate() {
        button.draw(theme.text, theme.highlight, idx == appearance.theme_index(), mouse_pos);
    }

    // Live statistics pinned to the bottom
    let stats_y = layout.stats_y();
    let population = session.grid().population();
    draw_text(
        &format!("Active Cells: {}", format_number(population)),
        left,
        stats_y + 18.0,
        18.0,
        accent,
    );
    draw_text(
        &format!("Generation: {}", session.generation()),
        left,
        stats_y + 38.0,
        16.0,
        text,
    );
}
