pub mod homepage;
pub mod learn;
pub mod quiz;
pub mod stats;
