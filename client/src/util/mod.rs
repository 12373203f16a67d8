//! Pure helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep string and formatting rules out of components so
//! they can be tested without a browser.

pub mod city_id;
pub mod dropdown;
pub mod scorecard;
