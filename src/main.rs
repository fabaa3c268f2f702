use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand};
use eframe::{egui::ViewportBuilder, run_native};
use roosty_alarm::{config::Config, sound::RodioPlayer, AlarmClock};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// use this config file instead of the default one
    #[clap(long, global = true)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    command: Option<Command>,
}
#[derive(Subcommand)]
enum Command {
    /// write the default config file
    Init {
        /// overwrite an existing config file
        #[clap(long, short)]
        force: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    // initilize the logger
    simple_file_logger::init_logger!("roosty_alarm").expect("couldn't initialize logger");

    let args = Args::parse();
    let config_path = match args.config {
        Some(path) => Some(path),
        None => Config::config_path()
            .map_err(|e| log::warn!("{e}, settings won't be saved"))
            .ok(),
    };

    if let Some(Command::Init { force }) = args.command {
        let path = config_path
            .as_deref()
            .ok_or("no config path to initialize")?;
        if force || !path.exists() {
            Config::new().save(path)?;
            log::info!("wrote default config to {}", path.display());
        } else {
            log::info!("config already present at {}", path.display());
        }
    }

    let config = config_path
        .as_deref()
        .map_or_else(Config::default, Config::load_or_default);

    let native_options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Alarm Clock")
            .with_inner_size([400.0, 260.0]),
        ..Default::default()
    };

    let (tx, rx) = std::sync::mpsc::channel();
    // run the gui
    run_native(
        "Alarm Clock",
        native_options,
        Box::new(move |_| {
            Ok(Box::new(AlarmClock::new(
                config,
                config_path,
                RodioPlayer::new(tx),
                rx,
            )))
        }),
    )
    .map_err(std::convert::Into::into)
}
