pub mod chat;
pub mod cli;
pub mod completion;
pub mod config;
pub mod controller;
pub mod error;
pub mod images;
pub mod logging;
pub mod render;
pub mod weather;
