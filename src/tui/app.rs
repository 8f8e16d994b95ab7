//! Main console application.

use std::io;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info};

use crate::client::{DirectoryProvider, PasswordGateway, submission_outcome};
use crate::util::month_progress;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::{AppState, ClaimDetailState, CountState};

/// The interactive admin console.
pub struct App {
    provider: Box<dyn DirectoryProvider>,
    gateway: Arc<dyn PasswordGateway>,
    state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(provider: Box<dyn DirectoryProvider>, gateway: Arc<dyn PasswordGateway>) -> Self {
        let is_live = provider.is_live();
        Self {
            provider,
            gateway,
            state: AppState::new(is_live),
            should_quit: false,
        }
    }

    /// Runs the console until the user quits.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        if let Ok(size) = terminal.size() {
            self.state.terminal_width = size.width;
        }

        self.refresh();

        loop {
            terminal.draw(|frame| render(frame, &self.state))?;

            match events.next() {
                Ok(Event::Tick) => {
                    self.state.notices.prune(Instant::now());
                }
                Ok(Event::Key(key)) => match handle_key(&mut self.state, key) {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::Refresh => self.refresh(),
                    KeyAction::ChangePassword(request) => {
                        self.spawn_password_change(&events, request.current, request.new);
                    }
                    KeyAction::OpenClaimDetail(claim_id) => self.open_claim_detail(claim_id),
                    KeyAction::None => {}
                },
                Ok(Event::Resize(width)) => {
                    self.state.terminal_width = width;
                }
                Ok(Event::Password(outcome)) => {
                    self.state.apply_password_outcome(outcome);
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Re-fetches the directory tables and the dashboard figures.
    fn refresh(&mut self) {
        match self.provider.employees() {
            Ok(employees) => {
                info!("loaded {} employees", employees.len());
                self.state.employees.update(employees);
            }
            Err(e) => {
                error!("employee fetch failed: {}", e);
                self.state.notices.error(format!("Failed to load employees: {}", e));
            }
        }

        match self.provider.claims() {
            Ok(claims) => self.state.claims.update(claims),
            Err(e) => {
                error!("claims fetch failed: {}", e);
                self.state.notices.error(format!("Failed to load claims: {}", e));
            }
        }

        self.state.employee_count = match self.provider.employee_count() {
            Ok(n) => CountState::Known(n),
            Err(e) => {
                error!("employee count fetch failed: {}", e);
                CountState::Error
            }
        };

        self.state.month = month_progress(Local::now().date_naive());
    }

    /// Fetches a claim's images and opens the detail dialog.
    fn open_claim_detail(&mut self, claim_id: String) {
        let images = match self.provider.claim_images(&claim_id) {
            Ok(images) => images,
            Err(e) => {
                error!("claim detail fetch failed: {}", e);
                self.state
                    .notices
                    .error(format!("Failed to load claim details: {}", e));
                return;
            }
        };
        self.state.claim_detail = Some(ClaimDetailState {
            claim_id,
            images,
            index: 0,
        });
    }

    /// Performs the password change off the UI thread, reporting the outcome
    /// back through the event channel.
    fn spawn_password_change(&self, events: &EventHandler, current: String, new: String) {
        let gateway = Arc::clone(&self.gateway);
        let tx = events.sender();
        thread::spawn(move || {
            let result = gateway.change_password(&current, &new);
            if let Err(e) = &result {
                error!("password change request failed: {}", e);
            }
            // The UI thread may have exited already; the send result is moot.
            let _ = tx.send(Event::Password(submission_outcome(result)));
        });
    }
}
