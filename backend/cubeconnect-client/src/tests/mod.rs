mod config;
mod models;
mod payload;
