use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use playroom::app::App;
use playroom::audio::{open_backend, AudioSession};
use playroom::core::constants::TICK_INTERVAL_MS;
use playroom::input::{handle_key, InputResult};
use playroom::ui;
use playroom::utils::build_info;
use playroom::utils::logging;
use playroom::utils::settings::{parse_args, HELP_TEXT};
use playroom::utils::{Command, Settings};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let overrides = match parse_args(&args) {
        Command::Run(overrides) => overrides,
        Command::Version => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Command::Help => {
            println!("{}", HELP_TEXT);
            std::process::exit(0);
        }
        Command::Invalid(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'playroom --help' for usage.");
            std::process::exit(1);
        }
    };

    // Logging is optional; the game runs without it
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::info!(version = %build_info::version_line(), "starting");

    let mut settings = Settings::load();
    settings.apply(&overrides);

    let mut audio = AudioSession::new(open_backend(&settings.asset_dir), settings.audio_options());
    audio.start();

    let mut app = App::new(settings.round_timing(), rand::thread_rng());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &mut audio);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    audio.shutdown();
    if let Err(e) = &result {
        tracing::error!(error = %e, "exited with error");
    }
    tracing::info!("goodbye");
    result
}

fn run<R: rand::Rng>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<R>,
    audio: &mut AudioSession,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, app, audio.is_enabled()))?;

        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if handle_key(key_event, app, audio) == InputResult::Quit {
                    return Ok(());
                }
            }
        }

        // Timers run on measured time, not poll count
        let now = Instant::now();
        let elapsed = now.duration_since(last_tick);
        last_tick = now;

        for round_event in app.tick(elapsed) {
            tracing::debug!(?round_event, "round event");
        }
        audio.tick(elapsed);
    }
}
