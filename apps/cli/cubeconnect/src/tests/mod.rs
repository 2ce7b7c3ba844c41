mod error;
mod setup;
