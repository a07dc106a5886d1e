//! wikigen - generative event-wiki builder

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use wikigen::html::OUTPUT_FILE;
use wikigen::settings::SETTINGS_FILE;
use wikigen::{Settings, generate_wiki, provider_for, write_page};

#[derive(Parser)]
#[command(name = "wikigen")]
#[command(version, about = "Generate a footnoted HTML wiki page for a historical event", long_about = None)]
#[command(after_help = "EXAMPLES:
    wikigen \"The Winter War of 1884\" \"A fictional war between several nations...\"
    wikigen \"The Winter War of 1884\" --file event.txt --open
    wikigen \"The Winter War of 1884\" \"...\" --api-key KEY --save-settings")]
struct Cli {
    /// Event title
    #[arg(value_name = "TITLE")]
    title: String,

    /// Event description
    #[arg(value_name = "TEXT", required_unless_present = "file", conflicts_with = "file")]
    text: Option<String>,

    /// Read the event description from a file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Output file
    #[arg(short, long, value_name = "PATH", default_value = OUTPUT_FILE)]
    output: PathBuf,

    /// Open the generated page in the default browser
    #[arg(long)]
    open: bool,

    /// Settings file
    #[arg(long, value_name = "PATH", default_value = SETTINGS_FILE)]
    settings: PathBuf,

    /// API key (overrides the settings file)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Token budget for the keyword call (overrides the settings file)
    #[arg(long, value_name = "N")]
    max_tokens: Option<u32>,

    /// Model identifier (overrides the settings file)
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Persist command-line overrides back to the settings file
    #[arg(long)]
    save_settings: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wikigen=info".parse().expect("valid directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> wikigen::Result<()> {
    let mut settings = Settings::load(&cli.settings);
    if let Some(ref api_key) = cli.api_key {
        settings.api_key = api_key.clone();
    }
    if let Some(max_tokens) = cli.max_tokens {
        settings.max_tokens = max_tokens;
    }
    if let Some(ref model) = cli.model {
        settings.model = model.clone();
    }
    if cli.save_settings {
        settings.save(&cli.settings)?;
    }

    let text = match (&cli.text, &cli.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => unreachable!("clap requires TEXT or --file"),
    };

    let provider = provider_for(&settings)?;
    let html = generate_wiki(provider.as_ref(), &cli.title, &text, &settings)?;
    write_page(&html, &cli.output)?;

    if !cli.quiet {
        println!("wrote {}", cli.output.display());
    }

    if cli.open && open::that(&cli.output).is_err() {
        eprintln!("could not open {}", cli.output.display());
    }

    Ok(())
}
