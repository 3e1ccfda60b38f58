use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use gallows::{
    app::{App, Control},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    dictionary::{spawn_load, Bundle},
    history::HistoryDb,
    logging::LoggingConfig,
    runtime::{CrosstermEventSource, FixedTicker, GameEvent, Runner},
    ui,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};
use tracing::{info, warn};

/// hangman in the terminal, with a definition for every word
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Guess the hidden word one letter at a time before the gallows is complete. Words and definitions come from a built-in dictionary or any JSON file of word/definition pairs."
)]
pub struct Cli {
    /// JSON file of "word": "definition" pairs (takes precedence over --bundle)
    #[clap(short = 'd', long)]
    dictionary: Option<PathBuf>,

    /// built-in dictionary to draw words from
    #[clap(short = 'b', long, value_enum)]
    bundle: Option<Bundle>,

    /// wrong guesses allowed; the next one loses the round
    #[clap(short = 's', long)]
    max_strikes: Option<usize>,

    /// shortest word (in letters) that can be chosen
    #[clap(long)]
    min_letters: Option<usize>,

    /// longest word (in letters) that can be chosen
    #[clap(long)]
    max_letters: Option<usize>,

    /// skip the animation after a win
    #[clap(long)]
    no_celebrate: bool,

    /// do not record finished rounds
    #[clap(long)]
    no_history: bool,

    /// store the given options as the new defaults
    #[clap(long)]
    save_config: bool,

    /// log filter for the log file; GALLOWS_LOG takes precedence
    #[clap(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    /// Overlay command line options on the stored config
    fn apply_to(&self, config: &mut Config) {
        if let Some(path) = &self.dictionary {
            config.dictionary_path = Some(path.clone());
        }
        if let Some(bundle) = self.bundle {
            config.bundle = bundle;
            if self.dictionary.is_none() {
                config.dictionary_path = None;
            }
        }
        if let Some(max_strikes) = self.max_strikes {
            config.max_strikes = max_strikes;
        }
        if let Some(min_letters) = self.min_letters {
            config.min_letters = min_letters;
        }
        if self.max_letters.is_some() {
            config.max_letters = self.max_letters;
        }
        if self.no_celebrate {
            config.celebrate = false;
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let mut config = store.load();
    cli.apply_to(&mut config);
    if let Err(err) = config.validate() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::ValueValidation, err.to_string()).exit();
    }
    if cli.save_config {
        store.save(&config)?;
    }

    LoggingConfig::new(cli.log_level.clone(), AppDirs::log_path()).init()?;
    info!(?config, "starting");

    let history = if cli.no_history {
        None
    } else {
        match HistoryDb::open_default() {
            Ok(db) => Some(db),
            Err(err) => {
                warn!(%err, "playing without round history");
                None
            }
        }
    };

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, history);
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());
    spawn_load(app.config.source(), app.config.word_filter(), runner.sender());

    let size = terminal.size().unwrap_or_default();
    app.set_viewport(size.width, size.height);
    terminal.draw(|f| ui::draw(app, f))?;

    loop {
        let redraw = match runner.step() {
            GameEvent::Tick => app.on_tick(),
            GameEvent::Resize => {
                let size = terminal.size().unwrap_or_default();
                app.set_viewport(size.width, size.height);
                true
            }
            GameEvent::DictionaryLoaded(result) => {
                app.on_dictionary_loaded(result);
                true
            }
            GameEvent::Key(key) => match app.handle_key(key) {
                Control::Quit => break,
                Control::Reload => {
                    spawn_load(app.config.source(), app.config.word_filter(), runner.sender());
                    true
                }
                Control::Continue => true,
            },
        };

        if redraw {
            terminal.draw(|f| ui::draw(app, f))?;
        }
    }

    info!("quitting");
    Ok(())
}
