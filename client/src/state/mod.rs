//! Shared client state: the selected city and the map it drives.
//!
//! SYSTEM CONTEXT
//! ==============
//! `view_state` is the single source of truth for which city is shown.
//! Every surface (dropdown, scorecard, share link, map) reacts to it through
//! an [`observable::Observable`] subscription, and `map_position` closes the
//! loop from map movement back to the view state.

pub mod map;
pub mod map_position;
pub mod observable;
pub mod view_state;
