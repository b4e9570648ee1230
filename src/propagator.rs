//! Propagator orchestration (spec §4.7): fires the 12 velocity-cell and 4
//! stress-cell composites in the fixed routing tables, forwarding an opaque
//! phase tag the surrounding scheduler uses to group asynchronous work.

use crate::dim::Dim;
use crate::fields::{Offset, Real, StressField, Subgrid, VelocityField};
use crate::fields::CoeffField;
use crate::scell;
use crate::vcell;
use log::{debug, trace};
use ndarray::Array1;

/// Opaque scheduling tag forwarded by the propagator without interpretation
/// (spec §4.7, §9 "Async phase tagging"). Equality/ordering is irrelevant to
/// the core; only the scheduler on the other side gives it meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phase(pub u32);

const FORW: Offset = Offset::Forward;
const BACK: Offset = Offset::Backward;

/// Interior sub-volume bounds, shared by both orchestrators.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub nz0: usize,
    pub nzf: usize,
    pub nx0: usize,
    pub nxf: usize,
    pub ny0: usize,
    pub nyf: usize,
}

/// Runs the 12 velocity-cell composites of spec §4.7's routing table,
/// advancing `v` from the current `s`/`c`/`rho` snapshot.
#[allow(clippy::too_many_arguments)]
pub fn velocity_propagator(
    v: &mut VelocityField,
    s: &StressField,
    _c: &CoeffField,
    rho: &Array1<Real>,
    dt: Real,
    dzi: Real,
    dxi: Real,
    dyi: Real,
    bounds: Bounds,
    dim: &Dim,
    phase: Phase,
) {
    debug!("velocity_propagator: bounds={:?} phase={:?}", bounds, phase);

    macro_rules! vcell {
        ($fn:ident, $target:expr, $szf:expr, $sxf:expr, $syf:expr, $sz_bias:expr, $sx_bias:expr, $sy_bias:expr) => {
            trace!("vcell {} phase={:?}", stringify!($fn), phase);
            vcell::$fn($target, $szf, $sxf, $syf, rho, dt, dzi, dxi, dyi, bounds, $sz_bias, $sx_bias, $sy_bias, dim);
        };
    }

    vcell!(compute_component_vcell_tl, &mut v.tl.w, &s.bl.zz, &s.tr.xz, &s.tl.yz, BACK, BACK, FORW);
    vcell!(compute_component_vcell_tr, &mut v.tr.w, &s.br.zz, &s.tl.xz, &s.tr.yz, BACK, FORW, BACK);
    vcell!(compute_component_vcell_bl, &mut v.bl.w, &s.tl.zz, &s.br.xz, &s.bl.yz, FORW, BACK, BACK);
    vcell!(compute_component_vcell_br, &mut v.br.w, &s.tr.zz, &s.bl.xz, &s.br.yz, FORW, FORW, FORW);

    vcell!(compute_component_vcell_tl, &mut v.tl.u, &s.bl.xz, &s.tr.xx, &s.tl.xy, BACK, BACK, FORW);
    vcell!(compute_component_vcell_tr, &mut v.tr.u, &s.br.xz, &s.tl.xx, &s.tr.xy, BACK, FORW, BACK);
    vcell!(compute_component_vcell_bl, &mut v.bl.u, &s.tl.xz, &s.br.xx, &s.bl.xy, FORW, BACK, BACK);
    vcell!(compute_component_vcell_br, &mut v.br.u, &s.tr.xz, &s.bl.xx, &s.br.xy, FORW, FORW, FORW);

    vcell!(compute_component_vcell_tl, &mut v.tl.v, &s.bl.yz, &s.tr.xy, &s.tl.yy, BACK, BACK, FORW);
    vcell!(compute_component_vcell_tr, &mut v.tr.v, &s.br.yz, &s.tl.xy, &s.tr.yy, BACK, FORW, BACK);
    vcell!(compute_component_vcell_bl, &mut v.bl.v, &s.tl.yz, &s.br.xy, &s.bl.yy, FORW, BACK, BACK);
    vcell!(compute_component_vcell_br, &mut v.br.v, &s.tr.yz, &s.bl.xy, &s.br.yy, FORW, FORW, FORW);
}

/// Runs the 4 stress-cell composites of spec §4.7's routing table,
/// advancing `s` from the current `v`/`c`/`rho` snapshot.
#[allow(clippy::too_many_arguments)]
pub fn stress_propagator(
    s: &mut StressField,
    v: &VelocityField,
    c: &CoeffField,
    _rho: &Array1<Real>,
    dt: Real,
    dzi: Real,
    dxi: Real,
    dyi: Real,
    bounds: Bounds,
    dim: &Dim,
    phase: Phase,
) {
    debug!("stress_propagator: bounds={:?} phase={:?}", bounds, phase);

    trace!("scell BR phase={:?}", phase);
    scell::compute_component_scell(Subgrid::Br, s, &v.tr, &v.bl, &v.br, c, dt, dzi, dxi, dyi, bounds, FORW, BACK, BACK, dim);

    trace!("scell BL phase={:?}", phase);
    scell::compute_component_scell(Subgrid::Bl, s, &v.tl, &v.br, &v.bl, c, dt, dzi, dxi, dyi, bounds, FORW, BACK, FORW, dim);

    trace!("scell TR phase={:?}", phase);
    scell::compute_component_scell(Subgrid::Tr, s, &v.br, &v.tl, &v.tr, c, dt, dzi, dxi, dyi, bounds, BACK, FORW, FORW, dim);

    trace!("scell TL phase={:?}", phase);
    scell::compute_component_scell(Subgrid::Tl, s, &v.bl, &v.tr, &v.tl, c, dt, dzi, dxi, dyi, bounds, BACK, BACK, BACK, dim);
}
