mod errors;
mod health;
mod send;
