use std::io::{BufRead, Write};

use tictactoe::{GridController, Request, Response};
use tracing::{debug, info, trace};

use crate::config::SessionConfig;
use crate::recording::Recorder;

/// A single interactive session, driven by JSON requests instead of clicks.
pub struct Session {
    controller: GridController,
    summary: SessionSummary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub applied: usize,
    pub rejected: usize,
}

impl Session {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            controller: GridController::with_default_symbol(config.default_symbol),
            summary: SessionSummary::default(),
        }
    }

    /// Gives access to the controller, e.g. to subscribe to state changes.
    pub fn controller_mut(&mut self) -> &mut GridController {
        &mut self.controller
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Applies one request. Returns `None` when the session should end.
    pub fn handle_request(&mut self, req: Request) -> Option<Response> {
        let result = match req {
            Request::ToggleCell { index } => self.controller.toggle_cell(index),
            Request::SelectSymbol { symbol } => self.controller.select_symbol_str(&symbol),
            Request::CurrentState => Ok(self.controller.current_state()),
            Request::Bye => return None,
        };
        let response = match result {
            Ok(state) => {
                self.summary.applied += 1;
                Response::from(state)
            }
            Err(err) => {
                self.summary.rejected += 1;
                Response::Rejected {
                    reason: err.to_string(),
                }
            }
        };
        Some(response)
    }

    /// Like [`Self::handle_request()`], but for a raw line of JSON.
    ///
    /// A line that is not a valid request is answered with a
    /// [`Response::Rejected`] and the session goes on.
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        match serde_json::from_str::<Request>(line) {
            Ok(req) => self.handle_request(req),
            Err(err) => {
                debug!(line, "Could not parse request");
                self.summary.rejected += 1;
                Some(Response::Rejected {
                    reason: format!("Invalid request: {}", err),
                })
            }
        }
    }

    /// Reads requests line by line until `Bye` or EOF, writing one response
    /// line per answered request.
    ///
    /// Returns an error only on IO failure, never for a rejected request.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        reader: R,
        mut writer: W,
        recorder: &mut Option<Recorder>,
    ) -> anyhow::Result<SessionSummary> {
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            trace!(request = %line, "Received request");
            let response = self.handle_line(line);
            if let Some(recorder) = recorder.as_mut() {
                recorder.store_interaction(line, response.as_ref());
            }
            let Some(response) = response else {
                info!("Session ended by request");
                break;
            };
            let response_json = serde_json::to_string(&response)?;
            trace!(response = %response_json, "Sending response");
            writeln!(writer, "{}", response_json)?;
            writer.flush()?;
        }

        if let Some(rec) = recorder.as_mut() {
            rec.write_recording()?;
        }
        Ok(self.summary)
    }
}
