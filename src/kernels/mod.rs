//! FFT Butterfly Kernels
//!
//! This module contains the per-stage butterfly kernels. The kernels are automatically
//! specialized at runtime for the available CPU features.
//!
//! ## Organization
//!
//! - `dit`: Decimation-in-Time kernels, one stage per call

pub mod dit;
