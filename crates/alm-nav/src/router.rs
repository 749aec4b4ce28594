use serde::{Deserialize, Serialize};
use std::fmt;

use crate::action::NavAction;
use crate::entry::NavEntry;
use crate::error::NavError;
use crate::graph::NavGraph;
use crate::route::{split_path, RouteTemplate};

// ---------------------------------------------------------------------------
// ArgumentPolicy
// ---------------------------------------------------------------------------

/// What to do when a route argument cannot be extracted from its path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentPolicy {
    /// Bind an empty string and carry on.
    #[default]
    Lenient,
    /// Fail the navigation with [`NavError::MalformedArgument`].
    Strict,
}

impl fmt::Display for ArgumentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentPolicy::Lenient => write!(f, "lenient"),
            ArgumentPolicy::Strict => write!(f, "strict"),
        }
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Owns the history stack and drives transitions over a [`NavGraph`].
///
/// Every successful transition renders the newly active destination and
/// returns the view (`None` for placeholders). A failed transition leaves
/// the stack exactly as it was.
///
/// Invariants once started:
/// - the stack is never empty;
/// - only the tail is pushed or popped.
pub struct Router<V> {
    graph: NavGraph<V>,
    back_stack: Vec<NavEntry>,
    next_id: u64,
    policy: ArgumentPolicy,
}

impl<V> Router<V> {
    /// Create an unstarted router with the lenient argument policy.
    pub fn new(graph: NavGraph<V>) -> Self {
        Self {
            graph,
            back_stack: Vec::new(),
            next_id: 0,
            policy: ArgumentPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ArgumentPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn graph(&self) -> &NavGraph<V> {
        &self.graph
    }

    pub fn policy(&self) -> ArgumentPolicy {
        self.policy
    }

    /// Reset history to a single entry for `route`.
    ///
    /// The start route must not require an argument.
    pub fn start(&mut self, route: &str) -> Result<Option<V>, NavError> {
        let template = self.lookup(route)?;
        let path = template.resolve(None)?;
        let entry = self.activate(route, path, None);

        self.back_stack.clear();
        self.back_stack.push(entry);
        tracing::debug!(route, "navigation started");
        Ok(self.render_top())
    }

    /// Start on the graph's configured start route.
    pub fn start_default(&mut self) -> Result<Option<V>, NavError> {
        let route = self.graph.start_route().to_string();
        self.start(&route)
    }

    /// Push `route`, substituting `argument` into its template.
    pub fn navigate(&mut self, route: &str, argument: Option<&str>) -> Result<Option<V>, NavError> {
        self.ensure_started()?;
        let template = self.lookup(route)?;
        let path = template.resolve(argument)?;
        let argument = self.bind_argument(template, &path)?;
        let entry = self.activate(route, path, argument);
        self.push(entry)
    }

    /// Push a concrete path such as `sprintDetail/42`.
    ///
    /// A path with no argument segment for a parameterised route is a
    /// missing argument. A segment that is present but empty or malformed
    /// goes through the argument policy.
    pub fn navigate_path(&mut self, path: &str) -> Result<Option<V>, NavError> {
        self.ensure_started()?;
        let (route, segment) = split_path(path);
        let template = self.lookup(route)?;
        match (template.requires_argument(), segment) {
            (true, None) => {
                return Err(NavError::MissingArgument {
                    route: route.to_string(),
                })
            }
            (false, Some(_)) => {
                return Err(NavError::UnexpectedArgument {
                    route: route.to_string(),
                })
            }
            _ => {}
        }
        let argument = self.bind_argument(template, path)?;
        let entry = self.activate(route, path.to_string(), argument);
        self.push(entry)
    }

    /// Pop the top entry and render the one beneath it.
    ///
    /// Fails with [`NavError::EmptyHistory`] at the root; the root entry is
    /// never popped.
    pub fn navigate_up(&mut self) -> Result<Option<V>, NavError> {
        self.ensure_started()?;
        if self.back_stack.len() <= 1 {
            return Err(NavError::EmptyHistory);
        }
        if let Some(popped) = self.back_stack.pop() {
            tracing::debug!(from = %popped.path, depth = self.back_stack.len(), "navigated up");
        }
        Ok(self.render_top())
    }

    /// Apply an action emitted by a screen.
    pub fn dispatch(&mut self, action: NavAction) -> Result<Option<V>, NavError> {
        match action {
            NavAction::Navigate { route, argument } => self.navigate(&route, argument.as_deref()),
            NavAction::Up => self.navigate_up(),
        }
    }

    /// The active entry, or `None` before `start`.
    pub fn current_entry(&self) -> Option<&NavEntry> {
        self.back_stack.last()
    }

    /// Re-render the active entry without changing history.
    pub fn render_current(&self) -> Result<Option<V>, NavError> {
        self.ensure_started()?;
        Ok(self.render_top())
    }

    /// Full history, oldest first.
    pub fn history(&self) -> &[NavEntry] {
        &self.back_stack
    }

    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    pub fn can_navigate_up(&self) -> bool {
        self.back_stack.len() > 1
    }

    // -- internals ----------------------------------------------------------

    fn ensure_started(&self) -> Result<(), NavError> {
        if self.back_stack.is_empty() {
            Err(NavError::NotStarted)
        } else {
            Ok(())
        }
    }

    fn lookup(&self, route: &str) -> Result<&RouteTemplate, NavError> {
        self.graph
            .template(route)
            .ok_or_else(|| NavError::UnknownRoute(route.to_string()))
    }

    fn bind_argument(
        &self,
        template: &RouteTemplate,
        path: &str,
    ) -> Result<Option<String>, NavError> {
        if !template.requires_argument() {
            return Ok(None);
        }
        match template.extract(path) {
            Some(arg) => Ok(Some(arg)),
            None => match self.policy {
                ArgumentPolicy::Lenient => {
                    tracing::warn!(path, "could not extract route argument, using empty string");
                    Ok(Some(String::new()))
                }
                ArgumentPolicy::Strict => Err(NavError::MalformedArgument {
                    path: path.to_string(),
                }),
            },
        }
    }

    fn activate(&mut self, route: &str, path: String, argument: Option<String>) -> NavEntry {
        let id = self.next_id;
        self.next_id += 1;
        NavEntry {
            id,
            route: route.to_string(),
            path,
            argument,
        }
    }

    fn push(&mut self, entry: NavEntry) -> Result<Option<V>, NavError> {
        tracing::debug!(
            route = %entry.route,
            path = %entry.path,
            depth = self.back_stack.len() + 1,
            "navigated"
        );
        self.back_stack.push(entry);
        Ok(self.render_top())
    }

    fn render_top(&self) -> Option<V> {
        self.back_stack.last().and_then(|entry| self.graph.render(entry))
    }
}

impl<V> fmt::Debug for Router<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("graph", &self.graph)
            .field("back_stack", &self.back_stack)
            .field("policy", &self.policy)
            .finish()
    }
}
