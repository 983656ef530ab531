pub mod history;
pub mod quiz;
pub mod results;
pub mod setup;
pub mod welcome;
