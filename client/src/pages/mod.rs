//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (initial load, polling) and
//! delegates rendering details to `components`.

pub mod parking;
