// Practice question bank served to the interview simulator.

pub mod bank;
pub mod handlers;
