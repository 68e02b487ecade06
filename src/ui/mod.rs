//! Terminal front end: list and detail screens over the item view model.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod list;
pub mod mvi;
pub mod navigation;
pub mod render;
pub mod runtime;
pub mod screens;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
