mod cli;

use std::path::Path;
use crate::cli::CliConfig;
use clap::{crate_name, crate_version, Parser};
use log::info;
use noteful::app_setup::AppSetupFairing;
use noteful::config::figment::FigmentExt;
use noteful::error_exit;
use noteful::logging::init_logging;
use rocket::figment::Figment;

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("{e}");
        std::process::exit(1);
    }
    info!("{} {} starting up", crate_name!(), crate_version!());

    let cli_config = CliConfig::parse();
    let figment = server_figment(&cli_config.config_file);

    let result = rocket::execute(
        rocket::custom(figment)
            .attach(AppSetupFairing::new())
            .launch()
    );
    match result {
        Ok(_) => info!("{} shut down", crate_name!()),
        Err(e) => error_exit!("notefuld stopped with an error: {e}"),
    }
}

// Rocket's own settings first, then the noteful layers on top
fn server_figment(config_file: &Path) -> Figment {
    if !config_file.is_file() {
        error_exit!(
            "no configuration file at {}",
            config_file.display(),
        )
    }
    info!("reading configuration from {}", config_file.display());
    Figment::from(rocket::Config::default())
        .setup_app_config(config_file)
}
