pub mod alarm;
pub mod cli;
pub mod ehl;
pub mod error;
pub mod ical;
pub mod model;
pub mod output;
