use std::io;

use anyhow::Context;
use chrono::Local;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_booking_system::{
    config::Config,
    menu::config::{parse_config_line, ConfigInput},
    menu::{BookingMenu, ConfigMenu},
    models::{Movie, Screening, SeatingConfig},
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting GIC Cinemas booking system");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    // Настройка сеанса: из переменной окружения для скриптовых прогонов,
    // иначе интерактивно.
    let setup = match config.app.screening_preset.as_deref() {
        Some(preset) => match parse_config_line(preset, &config.seating) {
            Ok(ConfigInput::Setup(setup)) => Some(setup),
            Ok(ConfigInput::Exit) => None,
            Err(message) => anyhow::bail!("invalid SCREENING_PRESET: {message}"),
        },
        None => ConfigMenu::new(config.seating.clone()).run(&mut input, &mut output)?,
    };
    let Some(setup) = setup else {
        return Ok(());
    };

    info!(
        "Screening configured: '{}' with {} rows and {} seats per row",
        setup.title, setup.row_count, setup.seats_per_row
    );

    let seating_config = SeatingConfig::new(setup.row_count, setup.seats_per_row)
        .context("seating configuration rejected")?;
    let screening = Screening::new(
        Local::now().naive_local(),
        seating_config,
        Movie::new(setup.title),
    );

    let mut menu = BookingMenu::new(screening);
    menu.run(&mut input, &mut output)?;

    Ok(())
}
