pub mod app;
pub mod greeting;
