//! Navigation graph and back stack for the Agile Life Management app.
//!
//! The crate replaces a framework-owned navigation controller with two
//! explicit pieces:
//! - **[`NavGraph`]**: the route table, mapping each route template to the
//!   destination that renders it.
//! - **[`Router`]**: the history stack of [`NavEntry`] values, with
//!   `navigate` / `navigate_up` transitions that render the newly active
//!   destination.
//!
//! Screens never hold a reference to the router. Anything a screen wants to
//! trigger is expressed as a [`NavAction`] and handed back to
//! [`Router::dispatch`].

pub mod action;
pub mod entry;
pub mod error;
pub mod graph;
pub mod route;
pub mod router;

pub use action::NavAction;
pub use entry::NavEntry;
pub use error::NavError;
pub use graph::{Destination, NavGraph, NavGraphBuilder};
pub use route::RouteTemplate;
pub use router::{ArgumentPolicy, Router};
