pub mod homepage;
pub mod layout;
pub mod learn;
pub mod quiz;
pub mod stats;

pub use layout::page;
