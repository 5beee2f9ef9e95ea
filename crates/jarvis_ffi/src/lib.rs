//! Flutter-facing bindings for `jarvis_core`.

pub mod api;
