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
Pesos de los subíndices
=======================

Weight vector used to compose the ESSI index from the five subindices
(SPG, SAG, AUG, SSG, AUT), in that order. Weights must be non-negative and
add up to a positive value for the composition to be defined.
*/

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{EssiError, Result};

/// Pesos por defecto (media simple de los cinco subíndices)
///
/// Default weights, the plain average of the five subindices
pub const WEIGHTS_DEFAULT: Weights = Weights([0.2, 0.2, 0.2, 0.2, 0.2]);

/// Pesos w1..w5 de los subíndices SPG, SAG, AUG, SSG y AUT
///
/// Weights w1..w5 for the SPG, SAG, AUG, SSG and AUT subindices
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weights(pub [f32; 5]);

impl Weights {
    /// Constructor con comprobación de que no hay pesos negativos
    ///
    /// Build the weight vector, rejecting negative entries
    pub fn new(values: [f32; 5]) -> Result<Self> {
        if values.iter().any(|w| *w < 0.0) {
            return Err(EssiError::WrongInput(format!(
                "the weights must be non-negative ({})",
                Weights(values)
            )));
        }
        Ok(Weights(values))
    }

    /// Suma de los pesos
    pub fn sum(&self) -> f32 {
        self.0.iter().sum()
    }
}

impl fmt::Display for Weights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().map(|w| format!("{:.2}", w)).join(", "))
    }
}

impl FromStr for Weights {
    type Err = EssiError;

    /// Get weights from "w1, w2, w3, w4, w5"
    fn from_str(s: &str) -> Result<Weights> {
        let vals = s
            .split(',')
            .map(str::trim)
            .map(f32::from_str)
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(|_| EssiError::ParseError(s.into()))?;

        match *vals.as_slice() {
            [w1, w2, w3, w4, w5] => Weights::new([w1, w2, w3, w4, w5]),
            _ => Err(EssiError::ParseError(format!(
                "five weights are needed and {} were found in \"{}\"",
                vals.len(),
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn weights_roundtrip() {
        let w = "0.1, 0.2, 0.3, 0.35, 0.05".parse::<Weights>().unwrap();
        assert_eq!(Weights([0.1, 0.2, 0.3, 0.35, 0.05]), w);
        assert_eq!("0.10, 0.20, 0.30, 0.35, 0.05", w.to_string());
        assert_eq!(1.0, w.sum());
    }

    #[test]
    fn weights_validation() {
        assert!("0.1, 0.2, 0.3".parse::<Weights>().is_err());
        assert!("0.1, 0.2, 0.3, 0.35, x".parse::<Weights>().is_err());
        assert!("0.1, 0.2, 0.3, 0.35, -0.05".parse::<Weights>().is_err());
        assert!(Weights::new([0.0, 0.0, 0.0, 0.0, 0.0]).is_ok());
    }
}
