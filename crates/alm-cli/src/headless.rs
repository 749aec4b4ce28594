//! Headless mode: JSON commands in, JSON events out, one per line.
//!
//! Usage: `echo '{"cmd":"navigate","route":"sprints"}' | alm headless`
//!
//! Navigation failures are reported as `error` events and never end the
//! loop; only `quit`, end of input, or an I/O error does.

use std::io::{BufRead, Write};

use alm_nav::{NavError, Router};
use anyhow::Result;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::screens::View;

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    Navigate {
        route: String,
        #[serde(default)]
        argument: Option<String>,
    },
    NavigatePath {
        path: String,
    },
    Up,
    Current,
    History,
    /// Dispatch the Nth action offered by the current view.
    Action {
        index: usize,
    },
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, serde_json::Error> {
    serde_json::from_str(line)
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// A router plus the view it last rendered.
///
/// `action` commands read from the cached view, so every screen is rendered
/// exactly once per transition.
pub struct Session<'r> {
    router: &'r mut Router<View>,
    view: Option<View>,
}

impl<'r> Session<'r> {
    /// Render the active entry once and cache it.
    pub fn new(router: &'r mut Router<View>) -> Result<Self, NavError> {
        let view = router.render_current()?;
        Ok(Self { router, view })
    }

    pub fn started_event(&self) -> Value {
        json!({
            "event": "started",
            "routes": self.router.graph().len(),
            "entry": self.router.current_entry(),
            "view": self.view,
        })
    }

    /// Apply one command and build the event describing the outcome.
    pub fn execute(&mut self, cmd: Command) -> Result<Value, NavError> {
        let (event, view) = match cmd {
            Command::Navigate { route, argument } => {
                ("navigated", self.router.navigate(&route, argument.as_deref())?)
            }
            Command::NavigatePath { path } => ("navigated", self.router.navigate_path(&path)?),
            Command::Up => ("navigated", self.router.navigate_up()?),
            Command::Current => ("current", self.view.clone()),
            Command::Action { index } => {
                let action = self
                    .view
                    .as_ref()
                    .and_then(|v| v.actions.get(index))
                    .map(|a| a.action.clone());
                match action {
                    Some(action) => ("navigated", self.router.dispatch(action)?),
                    None => return Ok(error_event(format!("no action at index {index}"))),
                }
            }
            Command::History => {
                return Ok(json!({
                    "event": "history",
                    "entries": self.router.history(),
                }))
            }
            Command::Quit => return Ok(json!({"event": "quit"})),
        };

        self.view = view;
        Ok(json!({
            "event": event,
            "entry": self.router.current_entry(),
            "view": self.view,
            "depth": self.router.depth(),
        }))
    }
}

// ---------------------------------------------------------------------------
// Loop
// ---------------------------------------------------------------------------

/// Drive `router` from `input` until `quit` or end of input.
///
/// Lines that are not valid UTF-8 are reported as `error` events; only a
/// read or write failure ends the loop early.
pub fn run<R: BufRead, W: Write>(
    router: &mut Router<View>,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let mut session = Session::new(router)?;
    emit(&mut out, &session.started_event())?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                emit(&mut out, &error_event(format!("invalid utf-8 in command: {e}")))?;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        let cmd = match parse_command(line) {
            Ok(cmd) => cmd,
            Err(e) => {
                emit(&mut out, &error_event(format!("unknown command: {line} ({e})")))?;
                continue;
            }
        };
        tracing::debug!(?cmd, "headless command");

        if cmd == Command::Quit {
            emit(&mut out, &json!({"event": "quit"}))?;
            break;
        }

        let event = session.execute(cmd).unwrap_or_else(|e| error_event(e.to_string()));
        emit(&mut out, &event)?;
    }

    Ok(())
}

fn error_event(message: String) -> Value {
    json!({"event": "error", "message": message})
}

fn emit<W: Write>(out: &mut W, value: &Value) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
