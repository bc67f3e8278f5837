pub mod access;
pub mod calculator;
pub mod clock;
pub mod habit;
pub mod log;
pub mod stats;
pub mod track;
pub mod user;
