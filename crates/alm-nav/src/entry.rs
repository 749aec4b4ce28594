use serde::{Deserialize, Serialize};

/// One activated route on the history stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Monotonic id assigned by the router; never reused within a router.
    pub id: u64,
    /// Route name (the template's static prefix).
    pub route: String,
    /// Concrete path the entry was activated with.
    pub path: String,
    /// Argument bound at activation. `None` for routes without a parameter;
    /// an empty string when lenient extraction fell back.
    pub argument: Option<String>,
}

impl NavEntry {
    /// The bound argument, or `""` when there is none.
    pub fn argument_or_default(&self) -> &str {
        self.argument.as_deref().unwrap_or("")
    }
}
