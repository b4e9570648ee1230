//! Field bundles of spec §3: the four-subgrid staggering, the velocity and
//! stress bundles, the 21-entry Voigt coefficient bundle, and density.

use crate::dim::Dim;
use ndarray::Array1;

/// IEEE-754 binary32, as mandated by spec §3 ("Scalar type").
pub type Real = f32;

/// One of the four half-cell-offset lattices a velocity or stress component
/// may live on (spec §3, GLOSSARY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subgrid {
    Tl,
    Tr,
    Bl,
    Br,
}

/// Directional bias of a stencil operator (spec §4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offset {
    Forward,
    Backward,
}

/// One flat field array, backed by an `ndarray::Array1` of length
/// `dim.len()`. Addressing within it always goes through [`Dim::idx`]; this
/// type adds no structure `Dim` doesn't already describe.
pub type FieldArray = Array1<Real>;

fn zeroed(dim: &Dim) -> FieldArray {
    Array1::zeros(dim.len())
}

/// Three particle-velocity components carried by one subgrid.
#[derive(Debug, Clone)]
pub struct VelocityCell {
    pub u: FieldArray,
    pub v: FieldArray,
    pub w: FieldArray,
}

impl VelocityCell {
    fn zeroed(dim: &Dim) -> Self {
        VelocityCell {
            u: zeroed(dim),
            v: zeroed(dim),
            w: zeroed(dim),
        }
    }
}

/// Six stress components carried by one subgrid (Voigt xx, yy, zz, xy, xz, yz).
#[derive(Debug, Clone)]
pub struct StressCell {
    pub xx: FieldArray,
    pub yy: FieldArray,
    pub zz: FieldArray,
    pub xy: FieldArray,
    pub xz: FieldArray,
    pub yz: FieldArray,
}

impl StressCell {
    fn zeroed(dim: &Dim) -> Self {
        StressCell {
            xx: zeroed(dim),
            yy: zeroed(dim),
            zz: zeroed(dim),
            xy: zeroed(dim),
            xz: zeroed(dim),
            yz: zeroed(dim),
        }
    }
}

/// The full velocity bundle `v_t`: four subgrids, three components each (12
/// arrays total).
#[derive(Debug, Clone)]
pub struct VelocityField {
    pub tl: VelocityCell,
    pub tr: VelocityCell,
    pub bl: VelocityCell,
    pub br: VelocityCell,
}

impl VelocityField {
    pub fn zeroed(dim: &Dim) -> Self {
        VelocityField {
            tl: VelocityCell::zeroed(dim),
            tr: VelocityCell::zeroed(dim),
            bl: VelocityCell::zeroed(dim),
            br: VelocityCell::zeroed(dim),
        }
    }

    pub fn cell(&self, q: Subgrid) -> &VelocityCell {
        match q {
            Subgrid::Tl => &self.tl,
            Subgrid::Tr => &self.tr,
            Subgrid::Bl => &self.bl,
            Subgrid::Br => &self.br,
        }
    }

    pub fn cell_mut(&mut self, q: Subgrid) -> &mut VelocityCell {
        match q {
            Subgrid::Tl => &mut self.tl,
            Subgrid::Tr => &mut self.tr,
            Subgrid::Bl => &mut self.bl,
            Subgrid::Br => &mut self.br,
        }
    }
}

/// The full stress bundle `s_t`: four subgrids, six components each (24
/// arrays total).
#[derive(Debug, Clone)]
pub struct StressField {
    pub tl: StressCell,
    pub tr: StressCell,
    pub bl: StressCell,
    pub br: StressCell,
}

impl StressField {
    pub fn zeroed(dim: &Dim) -> Self {
        StressField {
            tl: StressCell::zeroed(dim),
            tr: StressCell::zeroed(dim),
            bl: StressCell::zeroed(dim),
            br: StressCell::zeroed(dim),
        }
    }

    pub fn cell(&self, q: Subgrid) -> &StressCell {
        match q {
            Subgrid::Tl => &self.tl,
            Subgrid::Tr => &self.tr,
            Subgrid::Bl => &self.bl,
            Subgrid::Br => &self.br,
        }
    }

    pub fn cell_mut(&mut self, q: Subgrid) -> &mut StressCell {
        match q {
            Subgrid::Tl => &mut self.tl,
            Subgrid::Tr => &mut self.tr,
            Subgrid::Bl => &mut self.bl,
            Subgrid::Br => &mut self.br,
        }
    }
}

/// The 21 independent entries of the symmetric 6x6 Voigt stiffness matrix
/// (spec §3, GLOSSARY).
#[derive(Debug, Clone)]
pub struct CoeffField {
    pub c11: FieldArray,
    pub c12: FieldArray,
    pub c13: FieldArray,
    pub c14: FieldArray,
    pub c15: FieldArray,
    pub c16: FieldArray,
    pub c22: FieldArray,
    pub c23: FieldArray,
    pub c24: FieldArray,
    pub c25: FieldArray,
    pub c26: FieldArray,
    pub c33: FieldArray,
    pub c34: FieldArray,
    pub c35: FieldArray,
    pub c36: FieldArray,
    pub c44: FieldArray,
    pub c45: FieldArray,
    pub c46: FieldArray,
    pub c55: FieldArray,
    pub c56: FieldArray,
    pub c66: FieldArray,
}

impl CoeffField {
    pub fn zeroed(dim: &Dim) -> Self {
        CoeffField {
            c11: zeroed(dim),
            c12: zeroed(dim),
            c13: zeroed(dim),
            c14: zeroed(dim),
            c15: zeroed(dim),
            c16: zeroed(dim),
            c22: zeroed(dim),
            c23: zeroed(dim),
            c24: zeroed(dim),
            c25: zeroed(dim),
            c26: zeroed(dim),
            c33: zeroed(dim),
            c34: zeroed(dim),
            c35: zeroed(dim),
            c36: zeroed(dim),
            c44: zeroed(dim),
            c45: zeroed(dim),
            c46: zeroed(dim),
            c55: zeroed(dim),
            c56: zeroed(dim),
            c66: zeroed(dim),
        }
    }
}
