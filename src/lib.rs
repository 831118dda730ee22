// Terminal portfolio library - exposes all core modules for testing

pub mod app;
pub mod content;
pub mod history;
pub mod input;
pub mod interpreter;
pub mod registry;
pub mod schema;
pub mod theme;
pub mod tracing_setup;
pub mod transcript;
pub mod view;
