use super::{
    ddf_to_df, df_to_ddf, dpk1_df_to_dtau_df, ds_df_to_dtau_df, dsig_df_to_dtau_df, dtau_df_to_dpk1_df,
    dtau_df_to_ds_df, dtau_df_to_dsig_df, dtau_df_to_jaumann, jaumann_to_dtau_df, jaumann_to_spatial_moduli,
    pull_back_moduli, push_forward_moduli, spatial_moduli_to_jaumann,
};
use super::{TangentOperatorKind, TangentStorage};
use crate::algebra::{St2toSt2, Stensor, T2toSt2, T2toT2, Tensor};
use crate::StrError;

/// Holds the value of a tangent operator in one of the three storage types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TangentOperatorValue<const N: usize> {
    St2toSt2(St2toSt2<N>),
    T2toSt2(T2toSt2<N>),
    T2toT2(T2toT2<N>),
}

impl<const N: usize> TangentOperatorValue<N> {
    /// Returns the storage type
    pub fn storage(&self) -> TangentStorage {
        match self {
            TangentOperatorValue::St2toSt2(_) => TangentStorage::St2toSt2,
            TangentOperatorValue::T2toSt2(_) => TangentStorage::T2toSt2,
            TangentOperatorValue::T2toT2(_) => TangentStorage::T2toT2,
        }
    }
}

/// Holds the deformation and stress state at which the tangent operators are converted
#[derive(Clone, Copy, Debug)]
pub struct ConversionState<const N: usize> {
    /// Deformation gradient at the beginning of the time step (used by the `*Ddf` kinds)
    f0: Tensor<N>,

    /// Current deformation gradient
    f1: Tensor<N>,

    /// Cauchy stress at `f1`
    sig: Stensor<N>,

    /// Kirchhoff stress at `f1`
    tau: Stensor<N>,

    /// Determinant of `f1`
    jj: f64,
}

impl<const N: usize> ConversionState<N> {
    /// Allocates a new instance
    ///
    /// The deformation gradients must be invertible (this is not checked).
    ///
    /// * `f0` -- deformation gradient at the beginning of the time step
    /// * `f1` -- current deformation gradient
    /// * `sig` -- Cauchy stress at `f1`
    pub fn new(f0: &Tensor<N>, f1: &Tensor<N>, sig: &Stensor<N>) -> Self {
        ConversionState {
            f0: *f0,
            f1: *f1,
            sig: *sig,
            tau: sig.cauchy_to_kirchhoff(f1),
            jj: f1.det(),
        }
    }

    /// Returns the deformation gradient at the beginning of the time step
    pub fn initial_deformation_gradient(&self) -> &Tensor<N> {
        &self.f0
    }

    /// Returns the current deformation gradient
    pub fn deformation_gradient(&self) -> &Tensor<N> {
        &self.f1
    }

    /// Returns the Cauchy stress
    pub fn cauchy_stress(&self) -> &Stensor<N> {
        &self.sig
    }

    /// Returns the Kirchhoff stress
    pub fn kirchhoff_stress(&self) -> &Stensor<N> {
        &self.tau
    }
}

/// Holds a consistent tangent operator of a finite strain behaviour
///
/// The storage type of the value always matches the kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TangentOperator<const N: usize> {
    kind: TangentOperatorKind,
    value: TangentOperatorValue<N>,
}

impl<const N: usize> TangentOperator<N> {
    /// Allocates a new instance
    ///
    /// Returns an error if the storage type of the value does not match the kind.
    pub fn new(kind: TangentOperatorKind, value: TangentOperatorValue<N>) -> Result<Self, StrError> {
        if kind.storage() != value.storage() {
            return Err("the storage type of the value does not match the tangent operator kind");
        }
        Ok(TangentOperator { kind, value })
    }

    /// Allocates a new instance holding a linear map between symmetric tensors
    pub fn from_st2tost2(kind: TangentOperatorKind, value: St2toSt2<N>) -> Result<Self, StrError> {
        TangentOperator::new(kind, TangentOperatorValue::St2toSt2(value))
    }

    /// Allocates a new instance holding a linear map from general tensors to symmetric tensors
    pub fn from_t2tost2(kind: TangentOperatorKind, value: T2toSt2<N>) -> Result<Self, StrError> {
        TangentOperator::new(kind, TangentOperatorValue::T2toSt2(value))
    }

    /// Allocates a new instance holding a linear map between general tensors
    pub fn from_t2tot2(kind: TangentOperatorKind, value: T2toT2<N>) -> Result<Self, StrError> {
        TangentOperator::new(kind, TangentOperatorValue::T2toT2(value))
    }

    /// Returns the kind
    pub fn kind(&self) -> TangentOperatorKind {
        self.kind
    }

    /// Returns the value
    pub fn value(&self) -> &TangentOperatorValue<N> {
        &self.value
    }

    /// Returns the value if it is a linear map between symmetric tensors
    pub fn as_st2tost2(&self) -> Option<&St2toSt2<N>> {
        match &self.value {
            TangentOperatorValue::St2toSt2(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the value if it is a linear map from general tensors to symmetric tensors
    pub fn as_t2tost2(&self) -> Option<&T2toSt2<N>> {
        match &self.value {
            TangentOperatorValue::T2toSt2(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the value if it is a linear map between general tensors
    pub fn as_t2tot2(&self) -> Option<&T2toT2<N>> {
        match &self.value {
            TangentOperatorValue::T2toT2(v) => Some(v),
            _ => None,
        }
    }

    /// Converts the operator into another kind
    ///
    /// The moduli kinds (stored as st2tost2) are converted through the spatial moduli;
    /// the derivatives with respect to the deformation gradient are converted through
    /// `DTAU_DF`. Both groups are bridged by the Jaumann rate moduli of τ.
    pub fn convert(&self, to: TangentOperatorKind, state: &ConversionState<N>) -> Result<Self, StrError> {
        if to == self.kind {
            return Ok(*self);
        }
        let value = match to.storage() {
            TangentStorage::St2toSt2 => {
                let c = self.to_spatial_moduli(state)?;
                TangentOperatorValue::St2toSt2(from_spatial_moduli(to, &c, state)?)
            }
            TangentStorage::T2toSt2 => {
                let k = self.to_dtau_df(state)?;
                TangentOperatorValue::T2toSt2(from_dtau_df_to_t2tost2(to, &k, state)?)
            }
            TangentStorage::T2toT2 => {
                let k = self.to_dtau_df(state)?;
                TangentOperatorValue::T2toT2(dtau_df_to_dpk1_df(&k, &state.f1, &state.tau))
            }
        };
        TangentOperator::new(to, value)
    }

    /// Returns the spatial moduli equivalent to this operator
    fn to_spatial_moduli(&self, state: &ConversionState<N>) -> Result<St2toSt2<N>, StrError> {
        match (self.kind, &self.value) {
            (TangentOperatorKind::SpatialModuli, TangentOperatorValue::St2toSt2(c)) => Ok(*c),
            (TangentOperatorKind::CTruesdell, TangentOperatorValue::St2toSt2(c)) => Ok(*c * state.jj),
            (TangentOperatorKind::CTauJaumann, TangentOperatorValue::St2toSt2(c)) => {
                Ok(jaumann_to_spatial_moduli(c, &state.tau))
            }
            (TangentOperatorKind::Abaqus, TangentOperatorValue::St2toSt2(c)) => {
                Ok(jaumann_to_spatial_moduli(&(*c * state.jj), &state.tau))
            }
            (TangentOperatorKind::DsDegl, TangentOperatorValue::St2toSt2(c)) => Ok(push_forward_moduli(c, &state.f1)),
            (TangentOperatorKind::DsDc, TangentOperatorValue::St2toSt2(c)) => {
                Ok(push_forward_moduli(&(*c * 2.0), &state.f1))
            }
            (_, TangentOperatorValue::St2toSt2(_)) => {
                Err("the storage type of the value does not match the tangent operator kind")
            }
            _ => {
                let k = self.to_dtau_df(state)?;
                Ok(jaumann_to_spatial_moduli(&dtau_df_to_jaumann(&k, &state.f1), &state.tau))
            }
        }
    }

    /// Returns the derivative of the Kirchhoff stress with respect to F equivalent to this operator
    fn to_dtau_df(&self, state: &ConversionState<N>) -> Result<T2toSt2<N>, StrError> {
        let f0 = &state.f0;
        let f1 = &state.f1;
        let tau = &state.tau;
        match (self.kind, &self.value) {
            (TangentOperatorKind::DtauDf, TangentOperatorValue::T2toSt2(k)) => Ok(*k),
            (TangentOperatorKind::DtauDdf, TangentOperatorValue::T2toSt2(k)) => Ok(ddf_to_df(k, f0)),
            (TangentOperatorKind::DsigDf, TangentOperatorValue::T2toSt2(k)) => {
                Ok(dsig_df_to_dtau_df(k, f1, &state.sig))
            }
            (TangentOperatorKind::DsigDdf, TangentOperatorValue::T2toSt2(k)) => {
                Ok(dsig_df_to_dtau_df(&ddf_to_df(k, f0), f1, &state.sig))
            }
            (TangentOperatorKind::DsDf, TangentOperatorValue::T2toSt2(k)) => Ok(ds_df_to_dtau_df(k, f1, tau)),
            (TangentOperatorKind::DsDdf, TangentOperatorValue::T2toSt2(k)) => {
                Ok(ds_df_to_dtau_df(&ddf_to_df(k, f0), f1, tau))
            }
            (TangentOperatorKind::DPk1Df, TangentOperatorValue::T2toT2(d)) => Ok(dpk1_df_to_dtau_df(d, f1, tau)),
            (_, TangentOperatorValue::St2toSt2(_)) => {
                let c = self.to_spatial_moduli(state)?;
                Ok(jaumann_to_dtau_df(&spatial_moduli_to_jaumann(&c, tau), f1, tau))
            }
            _ => Err("the storage type of the value does not match the tangent operator kind"),
        }
    }
}

/// Converts the spatial moduli into a kind stored as st2tost2
fn from_spatial_moduli<const N: usize>(
    to: TangentOperatorKind,
    c: &St2toSt2<N>,
    state: &ConversionState<N>,
) -> Result<St2toSt2<N>, StrError> {
    match to {
        TangentOperatorKind::SpatialModuli => Ok(*c),
        TangentOperatorKind::CTruesdell => Ok(*c / state.jj),
        TangentOperatorKind::CTauJaumann => Ok(spatial_moduli_to_jaumann(c, &state.tau)),
        TangentOperatorKind::Abaqus => Ok(spatial_moduli_to_jaumann(c, &state.tau) / state.jj),
        TangentOperatorKind::DsDegl => Ok(pull_back_moduli(c, &state.f1)),
        TangentOperatorKind::DsDc => Ok(pull_back_moduli(c, &state.f1) * 0.5),
        _ => Err("the tangent operator kind is not stored as st2tost2"),
    }
}

/// Converts the derivative of τ with respect to F into a kind stored as t2tost2
fn from_dtau_df_to_t2tost2<const N: usize>(
    to: TangentOperatorKind,
    k: &T2toSt2<N>,
    state: &ConversionState<N>,
) -> Result<T2toSt2<N>, StrError> {
    let f0 = &state.f0;
    let f1 = &state.f1;
    let tau = &state.tau;
    match to {
        TangentOperatorKind::DtauDf => Ok(*k),
        TangentOperatorKind::DtauDdf => Ok(df_to_ddf(k, f0)),
        TangentOperatorKind::DsigDf => Ok(dtau_df_to_dsig_df(k, f1, &state.sig)),
        TangentOperatorKind::DsigDdf => Ok(df_to_ddf(&dtau_df_to_dsig_df(k, f1, &state.sig), f0)),
        TangentOperatorKind::DsDf => Ok(dtau_df_to_ds_df(k, f1, tau)),
        TangentOperatorKind::DsDdf => Ok(df_to_ddf(&dtau_df_to_ds_df(k, f1, tau), f0)),
        _ => Err("the tangent operator kind is not stored as t2tost2"),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
