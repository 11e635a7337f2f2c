// src/ui/widgets/mod.rs

pub mod footer;
pub mod input;
pub mod report; // flaw list and scanning spinner
pub mod suggestions;
pub mod summary;
