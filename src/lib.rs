pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod form;
pub mod model;
pub mod output;
pub mod shell;

#[cfg(test)]
mod tests;
