use std::time::Duration;

use anyhow::{Context, Result};
use macroquad::Window;
use macroquad::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lyff::{Config, FrameClock, MacroquadCanvas, Simulation, Viewport, input, rendering};

fn window_conf(config: &Config) -> Result<Conf> {
    Ok(Conf {
        window_title: config.window.title.clone(),
        window_width: i32::try_from(config.window.width).context("window width")?,
        window_height: i32::try_from(config.window.height).context("window height")?,
        window_resizable: false,
        ..Default::default()
    })
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "lyff=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("loading configuration")?;
    let simulation = Simulation::from_config(&config).context("building initial field")?;

    info!(
        field = %format!("{}x{}", config.field.width, config.field.height),
        preset = %config.field.preset,
        fps = config.timing.frames_per_second,
        ups = config.timing.updates_per_second,
        "starting"
    );

    let conf = window_conf(&config)?;
    Window::from_config(conf, run(config, simulation));
    Ok(())
}

/// Poll input, advance the simulation, wait for the frame deadline, draw,
/// present. Runs until the window reports a close request.
async fn run(config: Config, mut simulation: Simulation) {
    prevent_quit();

    let viewport = Viewport::for_field(
        config.window.width as f32,
        config.window.height as f32,
        &simulation.field,
    );
    let mut canvas = MacroquadCanvas::new();
    let mut clock = FrameClock::new(config.timing.frames_per_second);
    let mut elapsed = Duration::ZERO;

    while !is_quit_requested() {
        simulation = input::process_keyboard_input(simulation);
        simulation.advance(elapsed);

        elapsed = clock.wait();
        rendering::render_frame(&simulation, &viewport, &mut canvas);

        next_frame().await;
    }

    info!(
        generation = simulation.field.generation(),
        population = simulation.field.population(),
        fps = clock.fps(),
        "close requested, shutting down"
    );
}
