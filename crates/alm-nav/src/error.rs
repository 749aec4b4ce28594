// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors raised while building a navigation graph or moving through it.
///
/// Every variant is fatal to the call that produced it and leaves the
/// router's history untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// Navigation targeted a route that is not in the graph.
    #[error("unknown route: `{0}`")]
    UnknownRoute(String),

    /// A parameterised route was requested without its argument.
    #[error("route `{route}` requires an argument")]
    MissingArgument {
        /// Name of the route that was requested.
        route: String,
    },

    /// An argument was supplied for a route that takes none.
    #[error("route `{route}` does not take an argument")]
    UnexpectedArgument {
        /// Name of the route that was requested.
        route: String,
    },

    /// The argument could not be extracted back out of the path.
    ///
    /// Only raised under [`ArgumentPolicy::Strict`](crate::ArgumentPolicy::Strict);
    /// the lenient policy substitutes an empty string instead.
    #[error("malformed argument in path `{path}`")]
    MalformedArgument {
        /// The concrete path that failed extraction.
        path: String,
    },

    /// `navigate_up` was called with only the root entry on the stack.
    #[error("cannot navigate up from the root entry")]
    EmptyHistory,

    /// The router was used before `start`.
    #[error("router has not been started")]
    NotStarted,

    /// The graph was built without registering any route.
    #[error("navigation graph has no routes")]
    EmptyGraph,

    /// Two destinations were registered under the same route name.
    #[error("duplicate route: `{0}`")]
    DuplicateRoute(String),

    /// A route template could not be parsed.
    #[error("invalid route template `{template}`: {reason}")]
    InvalidTemplate { template: String, reason: String },
}
