//! Fixed-size vectors, orientation angles and matrices for game engine math.
//!
//! # Overview
//!
//! - [`Vector`] is an ordered tuple of `N` scalars with arithmetic and geometry (length, dot and
//!   cross products, interpolation, rotation).
//! - [`Angle`] holds the rotation components of an orientation (one for 2D, pitch/yaw/roll for 3D),
//!   with the unit ([`Radians`] or [`Degrees`]) encoded in its type. It converts to and from
//!   direction vectors.
//! - [`Matrix`] is an `R`x`C` grid of scalars with products, transposition and determinants.
//! - The [`math`] module and the [`Scalar`] trait provide the scalar operations all of the above
//!   are built on, for floating-point and signed integer element types alike.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be significantly
//!   simplified by relying on const generics to specify vector and matrix dimensions, and
//!   dimension mismatches become compile errors rather than runtime failures.
//! - Support only a single, row-major, unpadded data layout for matrices and vectors, further
//!   simplifying their API and their interop with flat buffers.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - No SIMD, and no general linear solvers. Determinants use cofactor expansion, which is fine for
//!   the 2x2 to 4x4 matrices used for transforms but not for anything larger.
//! - Nondeterminism is opt-in: random fills take a caller-provided [`fastrand::Rng`].
//!
//! # Errors and Logging
//!
//! Operations that can fail at runtime (normalizing a zero-length vector, copying to or from a flat
//! buffer of the wrong length) return [`Result`]. Messages are emitted through the [`log`] facade;
//! this crate never installs a logger.

mod angle;
mod approx_eq;
mod error;
pub mod math;
mod matrix;
pub mod random;
mod traits;
mod vector;

pub use angle::*;
pub use error::{Error, Result};
pub use matrix::*;
pub use random::Uniform;
pub use traits::*;
pub use vector::*;
