//! Client facade: verb methods for single requests plus `queue`/`run` for
//! batches.
//!
//! Keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod blocking;
pub mod builder;
pub mod core;

pub use builder::ClientBuilder;
pub use core::Client;
