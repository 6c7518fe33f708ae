//! Output generators

pub mod cpp;
