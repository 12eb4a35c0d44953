use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use drizzle_core::FRAME_INTERVAL_MS;
use drizzle_field::RainField;
use ratatui::DefaultTerminal;
use tracing::warn;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let terminal = ratatui::try_init()?;
    let result = App::new(time_seed()).run(terminal);
    ratatui::restore();
    result
}

/// Seed for this run's generator, captured once at startup.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Rain animation state.
    field: RainField,
    /// Start of the run, driving the animation clock.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`] seeded for this run.
    pub fn new(seed: u64) -> Self {
        Self {
            running: false,
            field: RainField::new(seed),
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.started = Instant::now();
        while self.running {
            let elapsed_ms = self.started.elapsed().as_millis() as u64;
            // A failed draw loses one frame, not the whole run
            if let Err(err) = terminal.draw(|frame| self.field.render(frame, elapsed_ms)) {
                warn!("skipping frame: {err}");
            }
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// The poll timeout doubles as the end-of-frame delay.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(FRAME_INTERVAL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
