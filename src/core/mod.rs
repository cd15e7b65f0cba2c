pub mod classifier;
pub mod clock;
pub mod day_off;
pub mod parser;
pub mod session;
