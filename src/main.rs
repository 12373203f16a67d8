//! Browser entry point for the parking lot map.
//!
//! Built with `trunk` (see `index.html`); everything interesting lives in the
//! `client` and `mapview` crates.

fn main() {
    client::start();
}
