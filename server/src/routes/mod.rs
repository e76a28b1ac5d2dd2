pub mod articles;
pub mod notes;
