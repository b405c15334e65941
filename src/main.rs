//! Text Adventure
//!
//! Loads a game directory and plays it in the terminal.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fs::File;
use std::io::{self, stdout};
use std::sync::Mutex;
use text_adventure::config::{GameConfig, UiMode};
use text_adventure::data::loader::{load_stop_words, load_world};
use text_adventure::parser::Normalizer;
use text_adventure::tui::{App, Console};
use text_adventure::{Game, GameOutcome, Result, VERSION};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(config: &GameConfig) -> Result<()> {
    let file_layer = match &config.log_file {
        Some(path) => {
            let file = File::create(path)?;
            Some(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };
    // stderr would scribble over the full-screen UI
    let stderr_layer = (config.log_file.is_none() && config.ui == UiMode::Console)
        .then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

fn run_console(mut game: Game, config: &GameConfig) -> Result<GameOutcome> {
    let mut console = Console::new(stdout().lock(), config.text_width).typing_speed(config.typing_cps);
    game.start(&mut console)?;
    game.run(io::stdin().lock(), &mut console)
}

fn run_tui(game: Game) -> Result<GameOutcome> {
    let mut app = App::new(game)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = (|| -> Result<()> {
        while app.running {
            terminal.draw(|frame| app.render(frame))?;
            if !app.handle_input()? {
                break;
            }
        }
        Ok(())
    })();

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(app.game.outcome().unwrap_or(GameOutcome::Quit))
}

fn main() -> Result<()> {
    let config = GameConfig::from_env()?;
    init_logging(&config)?;
    tracing::info!("Starting Text Adventure {}", VERSION);

    let stop_words = load_stop_words(&config.stop_words)?;
    let world = load_world(&config.game_dir)?;
    let title = world.title.clone();
    let game = Game::new(world, Normalizer::new(stop_words));

    let outcome = match config.ui {
        UiMode::Tui => run_tui(game)?,
        UiMode::Console => run_console(game, &config)?,
    };
    tracing::info!("Finished with {:?}", outcome);

    if config.ui == UiMode::Tui {
        let verdict = match outcome {
            GameOutcome::Won => "You made it. Well played!",
            GameOutcome::Quit => "Come back any time.",
        };
        println!("\n{title}");
        println!("{verdict}");
        println!("Thanks for playing!\n");
    }

    Ok(())
}
