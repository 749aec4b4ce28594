//! Agile Life Management navigation shell.
//!
//! Wires the app's fixed route table onto [`alm_nav::Router`] and exposes it
//! through a small CLI and a headless JSON line protocol.

pub mod config;
pub mod graph;
pub mod headless;
pub mod screens;
