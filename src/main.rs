use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use wordmatch::config::Config;
use wordmatch::generator::passage::{FilePassage, FixedPassage, SamplePassages};
use wordmatch::generator::{PassageProvider, load_passage};
use wordmatch::session::input;
use wordmatch::session::{SessionResult, TypingSession};
use wordmatch::ui::theme::{AnnotatedTheme, PlainTheme, Theme};

#[derive(Parser, Debug)]
#[command(
    name = "wordmatch",
    version,
    about = "Replay keystrokes against a typing passage and report accuracy and speed"
)]
struct Cli {
    #[arg(short, long, conflicts_with = "file", help = "Passage text")]
    text: Option<String>,

    #[arg(short, long, help = "Read the passage from a UTF-8 file")]
    file: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = r"Keystrokes to replay; \b is backspace, \\ a literal backslash"
    )]
    keys: String,

    #[arg(short, long, help = "Elapsed minutes to score with instead of wall time")]
    minutes: Option<f64>,

    #[arg(long, help = "Print the result as JSON")]
    json: bool,

    #[arg(long, help = "Print the passage without inline markers")]
    plain: bool,

    #[arg(short, long, help = "Config file (defaults to the user config dir)")]
    config: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[arg(short, long, help = "Disable logging")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    log::debug!("arguments: {cli:?}");

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut provider: Box<dyn PassageProvider> = match (&cli.text, &cli.file) {
        (Some(text), _) => Box::new(FixedPassage::new(text.clone())),
        (None, Some(path)) => Box::new(FilePassage::new(path)),
        (None, None) => Box::new(SamplePassages::from_config(&config)),
    };
    let text = load_passage(provider.as_mut(), &config).context("no passage to type")?;

    let mut session = TypingSession::new(&text, config);
    for key in input::parse_script(&cli.keys) {
        if input::process_key(&mut session, key).is_none() {
            log::info!("passage complete, ignoring remaining keystrokes");
            break;
        }
    }

    let result = match cli.minutes {
        Some(minutes) => {
            let elapsed = Duration::try_from_secs_f64(minutes * 60.0)
                .with_context(|| format!("--minutes out of range: {minutes}"))?;
            SessionResult::new(
                session.stats(),
                &elapsed,
                session.passage.text(),
                session.is_complete(),
            )
        }
        None => session.result(),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let theme: &dyn Theme = if cli.plain { &PlainTheme } else { &AnnotatedTheme };
    println!("{}", theme.paint_all(&session.render(true)));
    println!("{}", result.summary());
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
