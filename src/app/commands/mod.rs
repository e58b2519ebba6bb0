pub mod categories;
pub mod generate;
pub mod preview;
