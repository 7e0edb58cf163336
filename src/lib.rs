//! Food meme coin generator: prompt → image + recipe → launch form, plus an
//! address lookup view. Workflow state lives in plain types; `screens` and
//! `app` put a terminal UI on top of them.

pub mod api;
pub mod app;
pub mod chain;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod generation;
pub mod launch;
pub mod logging;
pub mod lookup;
pub mod notify;
pub mod prompt;
pub mod screens;
pub mod ui;
pub mod wallet;
