//! Text stand-ins for the app's screens.
//!
//! The real screens live outside this workspace; these render just enough
//! to show where the user is and which navigation actions are on offer.

use alm_nav::NavAction;
use serde::Serialize;

use crate::graph::routes;

/// A rendered screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub title: String,
    pub lines: Vec<String>,
    /// Navigation the screen offers, in display order.
    pub actions: Vec<ViewAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewAction {
    pub label: String,
    pub action: NavAction,
}

impl View {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    fn action(mut self, label: impl Into<String>, action: NavAction) -> Self {
        self.actions.push(ViewAction {
            label: label.into(),
            action,
        });
        self
    }

    /// Plain-text rendering used by the CLI.
    pub fn to_text(&self) -> String {
        let mut out = format!("== {} ==\n", self.title);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        for (i, a) in self.actions.iter().enumerate() {
            out.push_str(&format!("[{i}] {}\n", a.label));
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Demo data
// ---------------------------------------------------------------------------

const DEMO_SPRINTS: &[(&str, &str)] = &[("s-1", "Sprint 1: Habits"), ("s-2", "Sprint 2: Fitness")];
const DEMO_GOALS: &[(&str, &str)] = &[("g-1", "Run a half marathon"), ("g-2", "Read 12 books")];
const DEMO_TASKS: &[(&str, &str)] = &[
    ("t-1", "Morning run"),
    ("t-2", "Plan next sprint"),
    ("t-3", "Review budget"),
];

/// List screen: one line and one detail action per item.
fn list(title: &str, detail_route: &str, items: &[(&str, &str)]) -> View {
    items.iter().fold(View::new(title), |view, (id, name)| {
        view.line(format!("{id}  {name}"))
            .action(format!("Open {name}"), NavAction::with_argument(detail_route, *id))
    })
}

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

pub fn calendar() -> View {
    View::new("Calendar")
        .line("Today")
        .action("Daily check-up", NavAction::to(routes::DAILY_CHECKUP))
        .action("Sprints", NavAction::to(routes::SPRINTS))
        .action("Goals", NavAction::to(routes::GOALS))
        .action("Tasks", NavAction::to(routes::TASKS))
        .action("Settings", NavAction::to(routes::SETTINGS))
}

pub fn sprints() -> View {
    list("Sprints", routes::SPRINT_DETAIL, DEMO_SPRINTS)
        .action("Sprint review", NavAction::to(routes::SPRINT_REVIEW))
}

pub fn goals() -> View {
    list("Goals", routes::GOAL_DETAIL, DEMO_GOALS)
}

pub fn tasks() -> View {
    list("Tasks", routes::TASK_DETAIL, DEMO_TASKS)
}

pub fn daily_checkup() -> View {
    View::new("Daily Check-up").line("How did today go?")
}

pub fn sprint_review() -> View {
    View::new("Sprint Review").line("Nothing to review yet")
}

pub fn settings() -> View {
    View::new("Settings")
}
