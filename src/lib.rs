//! Framepost is a batch post-processing toolkit for rendered simulation
//! frame sequences.
//!
//! A sequence is a directory of PNG frames whose lexicographic filename
//! order IS the 1-based frame index. Each tool reads a directory (or curve
//! file), derives any global values once, then streams frames one at a time
//! into a sibling output directory. The tools:
//!
//! 1. **Overlay**: up to four corner-anchored multi-line text blocks with
//!    token substitution, emphasis sizing, and a derived elapsed-time label
//!    ([`overlay`])
//! 2. **Crop**: non-black bounding-box scan, fixed-box crop, centered
//!    square crop ([`crop`])
//! 3. **Fill / Reverse / Rotate**: black-background flatten, reversed
//!    renumbered copies, per-frame rotation from a curve file ([`fill`],
//!    [`reverse`], [`rotate`])
//! 4. **Curve**: rotation-curve file scaling, negation, and running-sum
//!    accumulation ([`curve`])
//! 5. **GeoTIFF**: PNG export with world-file sidecar, metadata strip
//!    ([`geotiff`])
//!
//! Design constraints shared by every tool:
//!
//! - **Sequential and synchronous**: one frame is fully read, transformed,
//!   and written before the next begins; no cross-frame mutable state.
//! - **Immutable configuration**: everything the frame loop needs is
//!   computed up front and passed in explicitly.
//! - **Per-item error isolation**: a frame that fails to decode or encode is
//!   reported and skipped; it never aborts the batch.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Crop tools: bounding-box scan, fixed-box crop, centered square.
pub mod crop;
/// Rotation-curve file tools.
pub mod curve;
/// Black-background flatten.
pub mod fill;
/// GeoTIFF export tools.
pub mod geotiff;
/// Corner text overlay renderer.
pub mod overlay;
/// Reversed, renumbered sequence copies.
pub mod reverse;
/// Per-frame rotation from a curve file.
pub mod rotate;
/// Frame-sequence plumbing shared by the directory tools.
pub mod sequence;

pub use foundation::error::{FramepostError, FramepostResult};
