//! Output backends for fitted paths, used by the `freehand-fit` binary.
//!
//! Only built with the `cli` feature.

pub mod svg;
