pub mod api;
pub mod app;
pub mod components;
pub mod dom;
pub mod state;
