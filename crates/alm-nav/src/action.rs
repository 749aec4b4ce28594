use serde::{Deserialize, Serialize};

/// A navigation request emitted by a screen.
///
/// Screens return these instead of holding the router, and the owner of the
/// router applies them with [`Router::dispatch`](crate::Router::dispatch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavAction {
    Navigate {
        route: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        argument: Option<String>,
    },
    Up,
}

impl NavAction {
    pub fn to(route: impl Into<String>) -> Self {
        NavAction::Navigate {
            route: route.into(),
            argument: None,
        }
    }

    pub fn with_argument(route: impl Into<String>, argument: impl Into<String>) -> Self {
        NavAction::Navigate {
            route: route.into(),
            argument: Some(argument.into()),
        }
    }
}
