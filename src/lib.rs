//! Core numerical engine of a full-waveform-inversion forward propagator:
//! a time-stepping finite-difference solver for 3D elastic wave
//! propagation in a fully anisotropic medium on a rotated staggered grid.
//!
//! This crate is the pure kernel only. Shot-level memory allocation
//! policy beyond the reference implementation in [`alloc`], I/O of
//! source/receiver traces, MPI halo exchange, checkpointing, CLI argument
//! parsing and host/device data movement are external collaborators this
//! crate does not provide.

// error-chain's generated code predates rustc's check-cfg lint.
#![allow(unexpected_cfgs)]

pub mod alloc;
pub mod coeff;
pub mod density;
pub mod dim;
pub mod error;
pub mod fields;
pub mod propagator;
pub mod scell;
pub mod stencil;
pub mod stress_update;
pub mod texture;
pub mod vcell;

pub use fields::{Offset, Real, Subgrid};
pub use propagator::{stress_propagator, velocity_propagator, Bounds, Phase};
