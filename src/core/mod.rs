pub mod calculator;
pub mod clock;
pub mod logic;
pub mod parser;
pub mod session;
