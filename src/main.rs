use macroquad::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use life_panel::{
    Appearance, Config, Session, input, rendering,
    ui::{self, PanelLayout},
};

fn window_conf(config: &Config) -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = Config::path_from_env();
    let config = Config::load_or_default(&config_path);
    info!(
        config = %config_path.display(),
        cell_size = config.cell_size,
        speed = config.speed,
        "starting life panel"
    );

    macroquad::Window::from_config(window_conf(&config), run(config));
}

async fn run(config: Config) {
    let mut session = Session::new(&config);
    let mut appearance = Appearance::new(&config.theme, config.show_grid);

    loop {
        input::sync_window_size(&mut session);
        let mouse_pos = mouse_position();

        // Layout depends on window height and the live help values
        let sections = ui::help_sections(&session);
        let layout = PanelLayout::new(&session, &sections);
        let theme_buttons = layout.theme_buttons();

        input::handle_zoom(&mut session, mouse_pos);
        input::handle_mouse_click(&mut session, &mut appearance, &theme_buttons, mouse_pos);
        input::process_keyboard_input(&mut session, &mut appearance);

        session.tick(get_frame_time());

        rendering::draw_frame(
            &session,
            &appearance,
            &layout,
            &sections,
            &theme_buttons,
            mouse_pos,
        );

        next_frame().await;
    }
}
