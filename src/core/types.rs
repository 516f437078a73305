//! Core data types shared by the layout classifier and the sampler.

use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::SamplerError;

/// Row identifier inside the encoded training matrix.
pub type RowId = usize;

/// Ordinal of a discrete column among the discrete columns of a layout.
pub type DiscreteColumnId = usize;

/// Ordinal of a category within one discrete column.
pub type CategoryId = usize;

/// Numeric element of an encoded training matrix.
pub trait MatrixElement: Float + Send + Sync + fmt::Debug {}

impl<T> MatrixElement for T where T: Float + Send + Sync + fmt::Debug {}

/// Activation applied downstream to one encoded sub-block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationFn {
    /// Continuous value scaled into (-1, 1)
    Tanh,
    /// Categorical one-hot block
    Softmax,
}

impl fmt::Display for ActivationFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationFn::Tanh => write!(f, "tanh"),
            ActivationFn::Softmax => write!(f, "softmax"),
        }
    }
}

impl FromStr for ActivationFn {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tanh" => Ok(ActivationFn::Tanh),
            "softmax" => Ok(ActivationFn::Softmax),
            _ => Err(SamplerError::invalid_parameter(
                "activation_fn",
                s,
                "expected one of: tanh, softmax",
            )),
        }
    }
}

/// Width and activation of one sub-block of an encoded column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpanInfo {
    /// Number of encoded matrix columns covered by this span
    pub dim: usize,
    /// Activation tag of this span
    pub activation_fn: ActivationFn,
}

impl SpanInfo {
    /// Create a new span descriptor
    pub fn new(dim: usize, activation_fn: ActivationFn) -> Self {
        SpanInfo { dim, activation_fn }
    }

    /// One-hot span of `dim` categories
    pub fn softmax(dim: usize) -> Self {
        SpanInfo::new(dim, ActivationFn::Softmax)
    }

    /// Continuous span of width `dim`
    pub fn tanh(dim: usize) -> Self {
        SpanInfo::new(dim, ActivationFn::Tanh)
    }
}

/// Fixed condition requested by a caller: discrete column `discrete_column_id`
/// takes category `value_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnIdInfo {
    /// Discrete column ordinal
    pub discrete_column_id: DiscreteColumnId,
    /// Category ordinal within that column
    pub value_id: CategoryId,
}

impl ColumnIdInfo {
    /// Create a new condition descriptor
    pub fn new(discrete_column_id: DiscreteColumnId, value_id: CategoryId) -> Self {
        ColumnIdInfo {
            discrete_column_id,
            value_id,
        }
    }
}
