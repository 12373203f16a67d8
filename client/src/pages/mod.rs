//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site has one page. It owns startup orchestration and delegates
//! rendering details to `components`.

pub mod map;
