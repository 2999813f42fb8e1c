// Copyright (c) 2018-2019  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

/*!
Errores del cálculo del índice de seguridad de suministro
=========================================================

Error and Result types for the security index computation.

Structural errors (`ShapeMismatch`, `VectorLength`, `ScalarType`) are raised
by the validation step before any computation runs. Numerical errors
(`EmptyCarrierSet`, `NonPositiveShare`, `DegenerateCarrier`, `ZeroWeightSum`)
are raised while computing a grade and carry the offending carrier index or
dataset name. All failures are deterministic: recomputing with the same data
reproduces them.
*/

use std::fmt;

/// Error en el cálculo del índice de seguridad de suministro
///
/// Error type for the security index computation
#[derive(Debug, Clone, PartialEq)]
pub enum EssiError {
    /// Couldn't parse a value or a dataset line from a string
    ParseError(String),
    /// Structurally malformed input (duplicate carriers, ragged series, short time axis...)
    WrongInput(String),
    /// A time series dataset doesn't match the dimensions of the imports dataset
    ShapeMismatch {
        /// Name of the offending dataset
        dataset: String,
        /// Dimensions (timesteps, carriers) of the imports dataset
        expected: (usize, usize),
        /// Dimensions (timesteps, carriers) of the offending dataset
        found: (usize, usize),
    },
    /// A per-carrier vector doesn't have one entry per carrier
    VectorLength {
        /// Name of the offending vector
        vector: String,
        /// Expected number of entries
        expected: usize,
        /// Number of entries found
        found: usize,
    },
    /// sigma is not a single numeric value
    ScalarType(String),
    /// All carriers of a dataset have negligible integrated flow
    EmptyCarrierSet(String),
    /// A carrier share is too close to zero to compute its entropy term
    NonPositiveShare {
        /// Offending carrier (column index)
        carrier: usize,
        /// Share value found
        share: f32,
    },
    /// A carrier of the active set has degenerate storage or demand data
    DegenerateCarrier {
        /// Offending carrier (column index)
        carrier: usize,
        /// Cause of the degeneracy
        detail: String,
    },
    /// The weight vector adds up to zero
    ZeroWeightSum,
}

impl fmt::Display for EssiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EssiError::*;
        match self {
            ParseError(detail) => write!(f, "Could not parse value from \"{}\"", detail),
            WrongInput(detail) => write!(f, "Wrong input: {}", detail),
            ShapeMismatch {
                dataset,
                expected,
                found,
            } => write!(
                f,
                "IMPORTACION and {} must have the same dimensions ({}x{} != {}x{})",
                dataset, expected.0, expected.1, found.0, found.1
            ),
            VectorLength {
                vector,
                expected,
                found,
            } => write!(
                f,
                "{} must have one entry per energy carrier ({} != {})",
                vector, expected, found
            ),
            ScalarType(detail) => write!(f, "sigma must be a single numeric value ({})", detail),
            EmptyCarrierSet(dataset) => write!(
                f,
                "All energy carriers for {} are zero. The diversity index is undefined",
                dataset
            ),
            NonPositiveShare { carrier, share } => write!(
                f,
                "phi[{}] = {} but it needs to be positive to compute its log",
                carrier, share
            ),
            DegenerateCarrier { carrier, detail } => {
                write!(f, "Degenerate carrier {}: {}", carrier, detail)
            }
            ZeroWeightSum => write!(f, "The weights must add up to a positive value"),
        }
    }
}

impl std::error::Error for EssiError {}

impl From<std::num::ParseFloatError> for EssiError {
    fn from(err: std::num::ParseFloatError) -> Self {
        EssiError::ParseError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for EssiError {
    fn from(err: std::num::ParseIntError) -> Self {
        EssiError::ParseError(err.to_string())
    }
}

/// Resultado del cálculo, con error EssiError
///
/// Result type of the computation
pub type Result<T> = std::result::Result<T, EssiError>;
