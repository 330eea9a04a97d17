//! Desktop greeting screen
//!
//! A Dioxus desktop application that wires the state cells from
//! `greeting-core` into signals and draws the page they compose.

pub mod components;
pub mod config;
pub mod media;
