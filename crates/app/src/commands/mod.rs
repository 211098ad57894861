pub mod history;
pub mod quiz;
pub mod signs;
