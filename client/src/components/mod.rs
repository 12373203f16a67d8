//! Leptos views for the map page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from plain signals that the page's subscribers write.
//! None of them hold the view state; user choices go back through the page.

pub mod about_popup;
pub mod city_dropdown;
pub mod lots_toggle;
pub mod map_host;
pub mod scorecard;
pub mod share_link;
