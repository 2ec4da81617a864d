//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The page owns exactly one piece of mutable state, the theme mode. It lives
//! here as a plain value type so the toggle rules stay testable outside a
//! reactive runtime; the page wraps it in an `RwSignal`.

pub mod theme;
