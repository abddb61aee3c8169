//! portfolio CLI
//!
//! Browse the portfolio page in the terminal or export it as a static file.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use humansize::{BINARY, format_size};

use portfolio_page::config::{DEFAULT_LOG_LEVEL, LogConfig, ViewConfig};
use portfolio_page::content::PAGE;
use portfolio_page::dark_mode::ThemeController;
use portfolio_page::export::{ExportFormat, render_page, write_page};
use portfolio_page::{logging, tui};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Ashfa Shakeel's portfolio, in the terminal or as a static page")]
#[command(version)]
struct Cli {
    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file (default: <cache dir>/portfolio-page/portfolio.log)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the page interactively (default)
    View {
        /// Animation frames per second (1-120)
        #[arg(long)]
        fps: Option<u16>,
    },

    /// Write the page to stdout or a file
    Export {
        /// Output format
        #[arg(long, value_enum, default_value = "html")]
        format: ExportFormatArg,

        /// Start the exported page in dark mode
        #[arg(long)]
        dark: bool,

        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// List section identifiers and their headings
    Sections,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ExportFormatArg {
    Html,
    Text,
    Json,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Html => ExportFormat::Html,
            ExportFormatArg::Text => ExportFormat::Text,
            ExportFormatArg::Json => ExportFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging is best-effort
    match LogConfig::from_args(&cli.log_level, cli.log_file) {
        Ok(config) => {
            if let Err(e) = logging::init(&config) {
                eprintln!("Warning: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: {}", e),
    }

    let result = match cli.command.unwrap_or(Commands::View { fps: None }) {
        Commands::View { fps } => cmd_view(fps),
        Commands::Export { format, dark, output } => cmd_export(format.into(), dark, output),
        Commands::Sections => cmd_sections(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

fn cmd_view(fps: Option<u16>) -> Result<(), String> {
    let config = ViewConfig::from_args(fps);
    tui::run::run(config).map_err(|e| e.to_string())
}

fn cmd_export(format: ExportFormat, dark: bool, output: Option<PathBuf>) -> Result<(), String> {
    let mut theme = ThemeController::new();
    if dark {
        theme.toggle_dark_mode();
    }

    match output {
        Some(path) => {
            let bytes = write_page(&path, format, &theme).map_err(|e| e.to_string())?;
            println!("Wrote {} to {}", format_size(bytes, BINARY), path.display());
        }
        None => {
            let rendered = render_page(format, &theme).map_err(|e| e.to_string())?;
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .map_err(|e| format!("Failed to write page: {}", e))?;
        }
    }
    Ok(())
}

fn cmd_sections() -> Result<(), String> {
    for (n, section) in PAGE.sections.iter().enumerate() {
        println!("{}  {:<11} {}", n + 1, section.id.as_str(), section.heading());
    }
    Ok(())
}
