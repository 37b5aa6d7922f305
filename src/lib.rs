//! studydash - a terminal study dashboard.
//!
//! The core is headless: [`app::App`] owns the state store and the rendered
//! page, [`view`] turns state into view descriptions, and [`scheduler`]
//! drives the study timer and delayed chat replies on a virtual clock. The
//! [`ui`] and [`events`] modules connect that core to a crossterm terminal.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod i18n;
pub mod logging;
pub mod scheduler;
pub mod state;
pub mod storage;
pub mod ui;
pub mod view;

pub use app::App;
pub use config::Config;
pub use error::{DashError, Result};
