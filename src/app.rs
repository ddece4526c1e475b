//! Application state and core logic

use crate::api::{ApiError, PredictionApi};
use crate::state::{AppState, Form, ReferenceData};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Completion of a network call, delivered back to the event loop
#[derive(Debug)]
pub enum ApiEvent {
    ReferenceLoaded(Result<ReferenceData, ApiError>),
    Predicted {
        /// Submission sequence number, for logging
        seq: u64,
        result: Result<Option<f64>, ApiError>,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Prediction service client
    api: Arc<dyn PredictionApi>,
    events_tx: mpsc::UnboundedSender<ApiEvent>,
    events_rx: mpsc::UnboundedReceiver<ApiEvent>,
    /// Number of submissions made so far
    submissions: u64,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Arc<dyn PredictionApi>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            api,
            events_tx,
            events_rx,
            submissions: 0,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Fetch option lists and defaults in the background.
    ///
    /// Called once at start-up; the result arrives as [`ApiEvent::ReferenceLoaded`].
    pub fn start_reference_load(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_reference_data().await;
            // Receiver lives as long as the app; a send error only means we are shutting down
            let _ = tx.send(ApiEvent::ReferenceLoaded(result));
        });
    }

    /// Submit the form for prediction in the background.
    ///
    /// Blank (and zero) fields are filled from the defaults before sending.
    /// Submissions are neither cancelled nor de-duplicated.
    pub fn submit(&mut self) {
        self.submissions += 1;
        let seq = self.submissions;
        let payload = self.state.submission_payload();
        tracing::info!("Submitting prediction request {seq} with {} fields", payload.len());
        tracing::debug!("Prediction payload {seq}: {payload:?}");

        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.predict(payload).await;
            let _ = tx.send(ApiEvent::Predicted { seq, result });
        });
    }

    /// Apply a finished network call to the state
    pub fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::ReferenceLoaded(Ok(data)) => {
                tracing::info!(
                    "Loaded reference data: {} option lists, {} defaults",
                    data.unique_values.len(),
                    data.default_values.len()
                );
                self.state.apply_reference_data(data);
            }
            ApiEvent::ReferenceLoaded(Err(err)) => {
                tracing::error!("Error fetching form data: {err}");
            }
            ApiEvent::Predicted {
                seq,
                result: Ok(price),
            } => {
                tracing::info!("Prediction {seq} returned {price:?}");
                self.state.set_predicted_price(price);
            }
            ApiEvent::Predicted {
                seq,
                result: Err(err),
            } => {
                tracing::error!("Prediction {seq} failed: {err}");
            }
        }
    }

    /// Apply every network result that has arrived, in arrival order
    pub fn drain_api_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_api_event(event);
        }
    }

    /// Handle a key press on the form
    pub fn handle_key(&mut self, key: KeyEvent) {
        let on_submit = self.state.form.is_submit_active();

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left => self.state.cycle_active_option(false),
            KeyCode::Right => self.state.cycle_active_option(true),
            KeyCode::Enter if on_submit => self.submit(),
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Char(c) => self.state.input_char(c),
            _ => {}
        }
    }
}
