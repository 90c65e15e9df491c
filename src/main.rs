use clap::{Args, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use datepicker::commands::{self, replay::ReplayOptions, PickerArgs};
use datepicker::config;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "datepicker")]
#[command(about = "Terminal date-range picker", long_about = "Terminal date-range picker\n\nIf no command is specified, the picker starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Picker options shared by `pick` and `replay`
#[derive(Args, Clone, Default)]
struct PickerFlags {
    /// Name tagging the emitted selection (defaults to the configured name)
    #[arg(short, long)]
    name: Option<String>,

    /// Initial selection: YYYY-MM-DD..YYYY-MM-DD, YYYY-MM-DD.. or none
    #[arg(short, long)]
    selected: Option<String>,

    /// Day whose month is shown when nothing is selected (defaults to today)
    #[arg(short, long)]
    anchor: Option<String>,

    /// Month pages shown side by side (1 or 2)
    #[arg(short, long)]
    months: Option<u8>,

    /// Earliest selectable day, YYYY-MM-DD
    #[arg(long)]
    min: Option<String>,

    /// Latest selectable day, YYYY-MM-DD
    #[arg(long)]
    max: Option<String>,
}

impl From<PickerFlags> for PickerArgs {
    fn from(flags: PickerFlags) -> Self {
        PickerArgs {
            name: flags.name,
            selected: flags.selected,
            anchor: flags.anchor,
            months: flags.months,
            min: flags.min,
            max: flags.max,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a range interactively and print it as JSON
    Pick {
        #[command(flatten)]
        picker: PickerFlags,
    },
    /// Run a scripted session and print every callback as a JSON line
    Replay {
        #[command(flatten)]
        picker: PickerFlags,

        /// Print the final calendar as plain text
        #[arg(short, long)]
        render: bool,

        /// Steps: next, prev, pick:DATE, set:RANGE, reset (or TURN_NEXT, SELECT_DAY:DATE, ...)
        steps: Vec<String>,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!();
    println!("[picker]");
    println!("name: {}", cfg.picker.name);
    println!("months_shown: {}", cfg.picker.months_shown);
    println!("week_start: {:?}", cfg.picker.week_start);
    println!("show_navigation: {}", cfg.picker.show_navigation);
    println!("date_format: {}", cfg.picker.date_format);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("range_fg: {:?}{}",
        cfg.theme.range_fg(),
        if cfg.theme.range_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
    println!("hover_fg: {:?}", cfg.theme.hover_fg);
    println!("muted_fg: {:?}", cfg.theme.muted_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(config: config::Config, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Config => {
            handle_config_command();
            Ok(())
        }
        Commands::Pick { picker } => {
            let options = commands::picker_options(&config.picker, &picker.into())?;
            commands::pick::run(&options, config.theme)
        }
        Commands::Replay { picker, render, steps } => {
            let options = ReplayOptions {
                picker: commands::picker_options(&config.picker, &picker.into())?,
                steps,
                render,
            };
            commands::replay::run(&options, &config.theme)
        }
    }
}

fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // If no subcommand, pick interactively with the configured defaults
    let command = cli.command.unwrap_or(Commands::Pick {
        picker: PickerFlags::default(),
    });

    if let Err(e) = execute_command(config, command) {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
