//! Command implementations for the bundle-manifest CLI

pub mod check;
pub mod completions;
pub mod fold;
pub mod helpers;
pub mod inspect;
pub mod version;
