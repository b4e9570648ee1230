//! The allocator contract of spec §6: given a requested extent, choose a
//! pitch and allocate the full set of field bundles a shot needs.
//!
//! This is one of the named external collaborators spec §1 pushes out of
//! scope ("an allocator that returns the six field bundles"); the core
//! itself never allocates. This module still ships a reference
//! implementation so the crate is directly usable without a caller having
//! to supply their own, the same way the teacher crate's `Simulation::new`
//! owns sensible defaults for parameters external tooling could otherwise
//! override.

use crate::dim::{Dim, HALO};
use crate::error::{ErrorKind, Result};
use crate::fields::{CoeffField, Real, StressField, VelocityField};
use log::debug;

/// Requested grid extent, named `extent_t` in the reference implementation.
#[derive(Debug, Clone, Copy)]
pub struct Extent {
    pub zsize: usize,
    pub xsize: usize,
    pub ysize: usize,
}

/// Alignment (in elements) the pitch is rounded up to. Chosen to match a
/// 32-byte vector register width for `f32` fields.
const PITCH_ALIGN: usize = 8;

/// The six field bundles a shot needs, plus the geometry they share.
pub struct Shot {
    pub dim: Dim,
    pub velocity: VelocityField,
    pub stress: StressField,
    pub coeff: CoeffField,
    pub rho: ndarray::Array1<Real>,
}

/// Allocates all 58 arrays described in spec §3 for one shot, choosing a
/// pitch `>= zsize` rounded up to [`PITCH_ALIGN`].
///
/// Returns an error if the extent is too small to hold a halo on every
/// axis, since no interior point would ever be writable by the propagator.
pub fn allocate_shot(extent: Extent) -> Result<Shot> {
    if extent.zsize <= 2 * HALO || extent.xsize <= 2 * HALO || extent.ysize <= 2 * HALO {
        return Err(ErrorKind::InvalidExtent(format!(
            "extent {:?} leaves no interior for HALO={}",
            extent, HALO
        ))
        .into());
    }

    let pitch = round_up(extent.zsize, PITCH_ALIGN);
    debug!(
        "allocating shot: zsize={} pitch={} xsize={} ysize={}",
        extent.zsize, pitch, extent.xsize, extent.ysize
    );

    let dim = Dim {
        zsize: extent.zsize,
        xsize: extent.xsize,
        ysize: extent.ysize,
        pitch,
    };

    Ok(Shot {
        velocity: VelocityField::zeroed(&dim),
        stress: StressField::zeroed(&dim),
        coeff: CoeffField::zeroed(&dim),
        rho: ndarray::Array1::zeros(dim.len()),
        dim,
    })
}

fn round_up(value: usize, align: usize) -> usize {
    value.div_ceil(align) * align
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_is_rounded_up_and_at_least_zsize() {
        let shot = allocate_shot(Extent {
            zsize: 33,
            xsize: 16,
            ysize: 16,
        })
        .unwrap();
        assert!(shot.dim.pitch >= 33);
        assert_eq!(shot.dim.pitch % PITCH_ALIGN, 0);
    }

    #[test]
    fn pitch_equals_zsize_when_already_aligned() {
        let shot = allocate_shot(Extent {
            zsize: 32,
            xsize: 16,
            ysize: 16,
        })
        .unwrap();
        assert_eq!(shot.dim.pitch, 32);
    }

    #[test]
    fn rejects_extents_without_interior() {
        let result = allocate_shot(Extent {
            zsize: 4,
            xsize: 16,
            ysize: 16,
        });
        assert!(result.is_err());
    }

    #[test]
    fn allocates_all_58_arrays_with_matching_length() {
        let shot = allocate_shot(Extent {
            zsize: 32,
            xsize: 16,
            ysize: 16,
        })
        .unwrap();
        let n = shot.dim.len();
        assert_eq!(shot.velocity.tl.u.len(), n);
        assert_eq!(shot.stress.br.xy.len(), n);
        assert_eq!(shot.coeff.c66.len(), n);
        assert_eq!(shot.rho.len(), n);
    }
}
