//! Gesture-reactive morphing point cloud engine.
//!
//! Generates stochastic point distributions for a closed set of shapes and
//! advances a fixed budget of points toward them every frame, scaled by a
//! single external "tension" scalar in `[0, 1]`. Rendering, camera work,
//! and gesture capture live elsewhere; this crate only owns the buffers and
//! the math.

pub mod animator;
pub mod color;
pub mod config;
pub mod error;
pub mod rng;
pub mod shapes;
pub mod tension;

pub use animator::CloudAnimator;
pub use color::Rgb;
pub use config::CloudConfig;
pub use error::{CloudError, Result};
pub use rng::{SplitMix64, ThreadRandom, UnitRng};
pub use shapes::ShapeKind;
pub use tension::TensionSignal;
