use std::collections::HashMap;
use std::fmt;

use crate::action::NavAction;
use crate::entry::NavEntry;
use crate::error::NavError;
use crate::route::RouteTemplate;

// ---------------------------------------------------------------------------
// Destination
// ---------------------------------------------------------------------------

/// What a route renders when it becomes the active entry.
pub enum Destination<V> {
    /// A screen that takes no input.
    Screen(Box<dyn Fn() -> V>),
    /// A detail screen keyed by the route argument. The second parameter is
    /// the action that pops back to the previous entry.
    Detail(Box<dyn Fn(&str, NavAction) -> V>),
    /// A registered route with no screen built yet. Navigation succeeds but
    /// nothing is rendered.
    Placeholder,
}

impl<V> Destination<V> {
    fn kind(&self) -> &'static str {
        match self {
            Destination::Screen(_) => "screen",
            Destination::Detail(_) => "detail",
            Destination::Placeholder => "placeholder",
        }
    }
}

impl<V> fmt::Debug for Destination<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Destination::{}", self.kind())
    }
}

// ---------------------------------------------------------------------------
// NavGraph
// ---------------------------------------------------------------------------

/// The route table: every registered template and the destination it renders.
///
/// Built once at startup through [`NavGraph::builder`] and immutable after.
pub struct NavGraph<V> {
    routes: Vec<(RouteTemplate, Destination<V>)>,
    index: HashMap<String, usize>,
    start_route: String,
}

impl<V> NavGraph<V> {
    pub fn builder() -> NavGraphBuilder<V> {
        NavGraphBuilder::new()
    }

    /// Route name the app opens on.
    pub fn start_route(&self) -> &str {
        &self.start_route
    }

    /// Look up a template by route name.
    pub fn template(&self, route: &str) -> Option<&RouteTemplate> {
        self.index.get(route).map(|&i| &self.routes[i].0)
    }

    pub fn destination(&self, route: &str) -> Option<&Destination<V>> {
        self.index.get(route).map(|&i| &self.routes[i].1)
    }

    pub fn contains(&self, route: &str) -> bool {
        self.index.contains_key(route)
    }

    /// Templates in registration order.
    pub fn templates(&self) -> impl Iterator<Item = &RouteTemplate> {
        self.routes.iter().map(|(t, _)| t)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Invoke the destination bound to `entry.route`.
    ///
    /// Returns `None` for placeholders and for routes that are not in the
    /// graph. Detail screens receive the entry's argument, or `""` if none
    /// was bound.
    pub fn render(&self, entry: &NavEntry) -> Option<V> {
        match self.destination(&entry.route)? {
            Destination::Screen(render) => Some(render()),
            Destination::Detail(render) => {
                Some(render(entry.argument_or_default(), NavAction::Up))
            }
            Destination::Placeholder => {
                tracing::debug!(
                    route = %entry.route,
                    path = %entry.path,
                    "placeholder destination, nothing rendered"
                );
                None
            }
        }
    }
}

impl<V> fmt::Debug for NavGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavGraph")
            .field("start_route", &self.start_route)
            .field(
                "routes",
                &self
                    .routes
                    .iter()
                    .map(|(t, d)| (t.to_string(), d.kind()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

// ---------------------------------------------------------------------------
// NavGraphBuilder
// ---------------------------------------------------------------------------

/// Declarative builder for a [`NavGraph`].
///
/// Registration errors are deferred: the first one is kept and returned from
/// [`build`](Self::build), so a whole table can be written as one chain.
pub struct NavGraphBuilder<V> {
    routes: Vec<(RouteTemplate, Destination<V>)>,
    index: HashMap<String, usize>,
    start_route: Option<String>,
    error: Option<NavError>,
}

impl<V> NavGraphBuilder<V> {
    fn new() -> Self {
        Self {
            routes: Vec::new(),
            index: HashMap::new(),
            start_route: None,
            error: None,
        }
    }

    /// Register a screen for a route without a parameter.
    pub fn screen(self, template: &str, render: impl Fn() -> V + 'static) -> Self {
        self.register(template, Some(false), Destination::Screen(Box::new(render)))
    }

    /// Register a detail screen for a parameterised route.
    pub fn detail(self, template: &str, render: impl Fn(&str, NavAction) -> V + 'static) -> Self {
        self.register(template, Some(true), Destination::Detail(Box::new(render)))
    }

    /// Register a route whose screen has not been built yet.
    pub fn placeholder(self, template: &str) -> Self {
        self.register(template, None, Destination::Placeholder)
    }

    /// Set the start route. Defaults to the first registered route.
    pub fn start(mut self, route: &str) -> Self {
        self.start_route = Some(route.to_string());
        self
    }

    pub fn build(self) -> Result<NavGraph<V>, NavError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let start_route = match self.start_route {
            Some(route) => route,
            None => self
                .routes
                .first()
                .map(|(t, _)| t.name().to_string())
                .ok_or(NavError::EmptyGraph)?,
        };

        let Some(&i) = self.index.get(&start_route) else {
            return Err(NavError::UnknownRoute(start_route));
        };
        if self.routes[i].0.requires_argument() {
            return Err(NavError::MissingArgument { route: start_route });
        }

        Ok(NavGraph {
            routes: self.routes,
            index: self.index,
            start_route,
        })
    }

    fn register(
        mut self,
        template: &str,
        parameterised: Option<bool>,
        destination: Destination<V>,
    ) -> Self {
        if self.error.is_some() {
            return self;
        }

        let parsed = match RouteTemplate::parse(template) {
            Ok(t) => t,
            Err(e) => {
                self.error = Some(e);
                return self;
            }
        };

        if let Some(expected) = parameterised {
            if parsed.requires_argument() != expected {
                let reason = if expected {
                    "detail destinations need a `{param}` segment"
                } else {
                    "screen destinations cannot take a parameter"
                };
                self.error = Some(NavError::InvalidTemplate {
                    template: template.to_string(),
                    reason: reason.to_string(),
                });
                return self;
            }
        }

        if self.index.contains_key(parsed.name()) {
            self.error = Some(NavError::DuplicateRoute(parsed.name().to_string()));
            return self;
        }

        tracing::trace!(template, kind = destination.kind(), "registered route");
        self.index.insert(parsed.name().to_string(), self.routes.len());
        self.routes.push((parsed, destination));
        self
    }
}
