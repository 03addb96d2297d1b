//! Login and registration forms for Habitly.
//!
//! The validators in [`forms`] and the meter in [`strength`] are pure and
//! usable on their own; [`routes`] serves them over HTTP for the login and
//! registration screens.

pub mod config;
pub mod errors;
pub mod forms;
pub mod gateway;
pub mod logging;
pub mod routes;
pub mod screens;
pub mod security;
pub mod strength;
