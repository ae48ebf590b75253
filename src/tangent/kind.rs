use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Defines the storage type of a tangent operator
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum TangentStorage {
    /// Linear map from symmetric tensors to symmetric tensors
    St2toSt2,

    /// Linear map from general tensors to symmetric tensors
    T2toSt2,

    /// Linear map from general tensors to general tensors
    T2toT2,
}

/// Defines the conventions of the consistent tangent operator of a finite strain behaviour
///
/// Notation: `F` is the deformation gradient, `J = det(F)`, `σ` the Cauchy stress,
/// `τ = J·σ` the Kirchhoff stress, `S` the second Piola-Kirchhoff stress, `P` the first
/// Piola-Kirchhoff stress, `E` the Green-Lagrange strain and `C = Fᵀ·F`. The `*Ddf` kinds
/// are derivatives with respect to the increment `ΔF` such that `F₁ = ΔF·F₀`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum TangentOperatorKind {
    /// Spatial moduli (push-forward of ∂S/∂E, without the 1/J factor)
    SpatialModuli,

    /// Moduli associated with the Truesdell rate of the Cauchy stress
    CTruesdell,

    /// Moduli associated with the Jaumann rate of the Kirchhoff stress
    CTauJaumann,

    /// Abaqus convention (Jaumann rate moduli of τ divided by J)
    Abaqus,

    /// Derivative of S with respect to E
    DsDegl,

    /// Derivative of S with respect to C
    DsDc,

    /// Derivative of S with respect to F
    DsDf,

    /// Derivative of S with respect to ΔF
    DsDdf,

    /// Derivative of τ with respect to F
    DtauDf,

    /// Derivative of τ with respect to ΔF
    DtauDdf,

    /// Derivative of σ with respect to F
    DsigDf,

    /// Derivative of σ with respect to ΔF
    DsigDdf,

    /// Derivative of P with respect to F
    DPk1Df,
}

impl TangentOperatorKind {
    /// Returns all supported kinds
    pub fn all() -> [TangentOperatorKind; 13] {
        [
            TangentOperatorKind::SpatialModuli,
            TangentOperatorKind::CTruesdell,
            TangentOperatorKind::CTauJaumann,
            TangentOperatorKind::Abaqus,
            TangentOperatorKind::DsDegl,
            TangentOperatorKind::DsDc,
            TangentOperatorKind::DsDf,
            TangentOperatorKind::DsDdf,
            TangentOperatorKind::DtauDf,
            TangentOperatorKind::DtauDdf,
            TangentOperatorKind::DsigDf,
            TangentOperatorKind::DsigDdf,
            TangentOperatorKind::DPk1Df,
        ]
    }

    /// Returns the storage type of the operator
    pub fn storage(&self) -> TangentStorage {
        match self {
            TangentOperatorKind::SpatialModuli
            | TangentOperatorKind::CTruesdell
            | TangentOperatorKind::CTauJaumann
            | TangentOperatorKind::Abaqus
            | TangentOperatorKind::DsDegl
            | TangentOperatorKind::DsDc => TangentStorage::St2toSt2,
            TangentOperatorKind::DPk1Df => TangentStorage::T2toT2,
            _ => TangentStorage::T2toSt2,
        }
    }

    /// Returns a description of the operator
    pub fn description(&self) -> &'static str {
        match self {
            TangentOperatorKind::SpatialModuli => "spatial moduli",
            TangentOperatorKind::CTruesdell => "moduli associated with the Truesdell rate of the Cauchy stress",
            TangentOperatorKind::CTauJaumann => "moduli associated with the Jaumann rate of the Kirchhoff stress",
            TangentOperatorKind::Abaqus => "tangent moduli of the Abaqus solver",
            TangentOperatorKind::DsDegl => {
                "derivative of the second Piola-Kirchhoff stress with respect to the Green-Lagrange strain"
            }
            TangentOperatorKind::DsDc => {
                "derivative of the second Piola-Kirchhoff stress with respect to the right Cauchy-Green tensor"
            }
            TangentOperatorKind::DsDf => {
                "derivative of the second Piola-Kirchhoff stress with respect to the deformation gradient"
            }
            TangentOperatorKind::DsDdf => {
                "derivative of the second Piola-Kirchhoff stress with respect to the deformation gradient increment"
            }
            TangentOperatorKind::DtauDf => {
                "derivative of the Kirchhoff stress with respect to the deformation gradient"
            }
            TangentOperatorKind::DtauDdf => {
                "derivative of the Kirchhoff stress with respect to the deformation gradient increment"
            }
            TangentOperatorKind::DsigDf => {
                "derivative of the Cauchy stress with respect to the deformation gradient"
            }
            TangentOperatorKind::DsigDdf => {
                "derivative of the Cauchy stress with respect to the deformation gradient increment"
            }
            TangentOperatorKind::DPk1Df => {
                "derivative of the first Piola-Kirchhoff stress with respect to the deformation gradient"
            }
        }
    }

    /// Returns the canonical flag (e.g., "DSIG_DF")
    pub fn flag(&self) -> &'static str {
        match self {
            TangentOperatorKind::SpatialModuli => "SPATIAL_MODULI",
            TangentOperatorKind::CTruesdell => "C_TRUESDELL",
            TangentOperatorKind::CTauJaumann => "C_TAU_JAUMANN",
            TangentOperatorKind::Abaqus => "ABAQUS",
            TangentOperatorKind::DsDegl => "DS_DEGL",
            TangentOperatorKind::DsDc => "DS_DC",
            TangentOperatorKind::DsDf => "DS_DF",
            TangentOperatorKind::DsDdf => "DS_DDF",
            TangentOperatorKind::DtauDf => "DTAU_DF",
            TangentOperatorKind::DtauDdf => "DTAU_DDF",
            TangentOperatorKind::DsigDf => "DSIG_DF",
            TangentOperatorKind::DsigDdf => "DSIG_DDF",
            TangentOperatorKind::DPk1Df => "DPK1_DF",
        }
    }
}

impl fmt::Display for TangentOperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

impl FromStr for TangentOperatorKind {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let flag = s.to_uppercase();
        TangentOperatorKind::all()
            .into_iter()
            .find(|kind| kind.flag() == flag)
            .ok_or("the tangent operator flag is not supported")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
