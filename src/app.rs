//! App: terminal init, main loop, tick and key handling.

use crate::game::{Event as GameEvent, Session};
use crate::input::{Action, key_to_action};
use crate::theme::Theme;
use crate::{Args, highscore, ui};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

/// Render frame budget; also bounds input latency.
const FRAME_MS: u64 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Playing,
    GameOver,
}

pub struct App {
    theme: Theme,
    session: Session,
    screen: Screen,
    /// Whether the finished game set a new record; shown on the game-over popup.
    new_high_score: bool,
    last_tick: Instant,
}

impl App {
    pub fn new(args: &Args, theme: Theme) -> Self {
        let high_score = highscore::load();
        let session = Session::new(
            args.width as usize,
            args.height as usize,
            args.drop_interval_ms,
            high_score,
        );
        let screen = if args.no_splash {
            Screen::Playing
        } else {
            Screen::Splash
        };
        let mut app = Self {
            theme,
            session,
            screen,
            new_high_score: false,
            last_tick: Instant::now(),
        };
        if args.no_splash {
            app.session.start();
        }
        app
    }

    pub fn run(&mut self) -> Result<()> {
        use crossterm::{
            execute,
            terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
        };

        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal =
            ratatui::DefaultTerminal::new(ratatui::backend::CrosstermBackend::new(stdout))?;

        let result = self.run_loop(&mut terminal);

        execute!(std::io::stdout(), LeaveAlternateScreen)?;
        disable_raw_mode()?;
        result
    }

    fn run_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        self.last_tick = Instant::now();
        loop {
            terminal.draw(|f| {
                ui::draw(f, self.screen, &self.session, &self.theme, self.new_high_score);
            })?;

            if event::poll(Duration::from_millis(FRAME_MS))? {
                while event::poll(Duration::ZERO)? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        if self.handle_action(key_to_action(key)) {
                            return Ok(());
                        }
                    }
                }
            }

            let now = Instant::now();
            let delta = now.duration_since(self.last_tick);
            self.last_tick = now;
            let events = self.session.advance(delta.as_millis() as u64);
            self.handle_events(&events);
        }
    }

    /// Dispatch one action for the current screen. Returns true to quit.
    fn handle_action(&mut self, action: Action) -> bool {
        match self.screen {
            Screen::Splash => match action {
                Action::Quit => return true,
                Action::Start => {
                    self.session.start();
                    self.screen = Screen::Playing;
                }
                _ => {}
            },
            Screen::Playing => match action {
                Action::Quit => return true,
                Action::Pause => self.session.toggle_pause(),
                Action::Reset => self.restart(),
                Action::MoveLeft => self.session.move_left(),
                Action::MoveRight => self.session.move_right(),
                Action::RotateCw => self.session.rotate_cw(),
                Action::SoftDrop => {
                    let events = self.session.soft_drop();
                    self.handle_events(&events);
                }
                Action::Start | Action::None => {}
            },
            Screen::GameOver => match action {
                Action::Quit => return true,
                Action::Reset | Action::Start => self.restart(),
                _ => {}
            },
        }
        false
    }

    fn restart(&mut self) {
        self.session.reset();
        self.new_high_score = false;
        self.screen = Screen::Playing;
    }

    fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::GameOver {
                score,
                new_high_score,
            } = *event
            {
                self.screen = Screen::GameOver;
                self.new_high_score = new_high_score;
                if new_high_score {
                    // A failed write is not retried and never blocks play.
                    let _ = highscore::save(score);
                }
            }
        }
    }
}
