//! Android launcher icon generation.
//!
//! Takes one source image and writes `ic_launcher.png` and `ic_launcher_round.png`
//! into every `mipmap-*` density folder of an Android `res` directory, removing
//! stale `.png`, `.webp` and `.xml` launcher assets first.

pub mod config;
pub mod error;
pub mod icon_gen;

pub use config::{Density, FailurePolicy, IconConfig, DEFAULT_DENSITIES};
pub use error::IconError;
pub use icon_gen::{generate, DensityOutcome, GenerationReport};
