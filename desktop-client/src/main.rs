mod command_sender;
mod config;
mod offline;
mod state;
mod ui;

use arcade_common::config::Validate;
use arcade_common::{SnakeSettings, log, logger};
use clap::Parser;
use eframe::egui;
use tokio::sync::mpsc;

pub use command_sender::CommandSender;
use config::{CONFIG_FILE, Config, get_config_manager};
use offline::run_snake_game;
use state::SharedState;
use ui::ArcadeApp;

#[derive(Parser)]
#[command(name = "toy_arcade", about = "Grid snake from the toy-rental arcade corner")]
struct Args {
    /// Path to the YAML config file
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    /// Overrides `snake.grid_size` from the config file
    #[arg(long)]
    grid_size: Option<u32>,

    /// Overrides `snake.tick_interval_ms` from the config file
    #[arg(long)]
    tick_interval_ms: Option<u32>,
}

impl Args {
    fn apply_overrides(&self, mut config: Config) -> Result<Config, String> {
        if let Some(grid_size) = self.grid_size {
            config.snake.grid_size = grid_size;
        }
        if let Some(tick_interval_ms) = self.tick_interval_ms {
            config.snake.tick_interval_ms = tick_interval_ms;
        }
        config
            .validate()
            .map_err(|e| format!("Invalid command line override: {}", e))?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Arcade".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);
    let config = args.apply_overrides(config_manager.get_config()?)?;
    let settings = SnakeSettings::from(&config.snake);
    let cell_size = config.window.cell_size as f32;

    log!(
        "Loaded config from {}: grid {}, tick {}ms",
        config_manager.config_path().display(),
        settings.grid_size,
        settings.tick_interval.as_millis()
    );

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log!("Failed to start game runtime: {}", e);
                shared_state_clone.set_error(format!("Failed to start game runtime: {}", e));
                return;
            }
        };
        rt.block_on(run_snake_game(shared_state_clone, command_rx, settings));
    });

    let board_size = config.snake.grid_size as f32 * cell_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_size + 80.0, board_size + 260.0])
            .with_title("SNAKE.IO - Toy Arcade"),
        ..Default::default()
    };

    eframe::run_native(
        "Toy Arcade",
        options,
        Box::new(move |cc| {
            shared_state.set_repaint_context(cc.egui_ctx.clone());
            Ok(Box::new(ArcadeApp::new(
                shared_state,
                CommandSender::new(command_tx),
                cell_size,
            )))
        }),
    )?;

    log!("Window closed");
    Ok(())
}
