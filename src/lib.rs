pub mod config;
pub mod error;
pub mod fetcher;
pub mod geo;
pub mod models;
pub mod screens;
pub mod store;
