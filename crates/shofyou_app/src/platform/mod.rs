pub mod app;
pub mod browser;
pub mod effects;
pub mod logging;
