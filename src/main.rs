use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;

use weekgrid::error_fmt::{AppError, IoResultExt, SettingsResultExt};
use weekgrid::render::{html, terminal};
use weekgrid::settings::{SETTINGS_FILE, expand_path};
use weekgrid::page::PageWarning;
use weekgrid::{Page, PageSettings};

#[derive(Parser)]
#[command(name = "weekgrid")]
#[command(about = "Render the weekly class schedule")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Settings file argument shared by every command
#[derive(Args, Clone)]
struct SettingsArgs {
    /// Path to the settings file (default: weekgrid.yml)
    #[arg(long, short)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the schedule page as an HTML document
    Html {
        /// Output file (prints to stdout if not provided)
        #[arg(long, short)]
        out: Option<String>,
        #[command(flatten)]
        settings: SettingsArgs,
    },
    /// Print the schedule as a table in the terminal
    Show {
        /// Disable colors and markdown styling
        #[arg(long)]
        no_color: bool,
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Html { out, settings } => write_html(out.as_deref(), &settings),
        Commands::Show { no_color, settings } => show_schedule(no_color, &settings),
    };

    if let Err(e) = result {
        eprint!("{}", e);
        std::process::exit(1);
    }
}

fn load_settings(args: &SettingsArgs) -> Result<PageSettings, AppError> {
    let raw = args.config.as_deref().unwrap_or(SETTINGS_FILE);
    let path = expand_path(raw);
    PageSettings::load(&path).with_path(&path.display().to_string())
}

fn build_page(page_settings: &PageSettings) -> Page {
    let (page, warnings) = Page::from_settings(page_settings);
    print_warnings(&warnings);
    page
}

fn print_warnings(warnings: &[PageWarning]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }
}

fn write_html(out: Option<&str>, args: &SettingsArgs) -> Result<(), AppError> {
    let page_settings = load_settings(args)?;
    let page = build_page(&page_settings);
    let document = html::render_page(&page, page_settings.tailwind_cdn)?;

    match out {
        Some(raw) => {
            let path = expand_path(raw);
            std::fs::write(&path, &document)
                .with_context(&format!("failed to write {}", path.display()))?;
            println!("wrote: {}", path.display().to_string().bright_green());
        }
        None => print!("{}", document),
    }

    Ok(())
}

fn show_schedule(no_color: bool, args: &SettingsArgs) -> Result<(), AppError> {
    let page_settings = load_settings(args)?;
    let page = build_page(&page_settings);
    print!("{}", terminal::render_page(&page, !no_color));
    Ok(())
}
