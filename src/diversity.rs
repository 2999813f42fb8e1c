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
Conjunto activo e índice de diversidad
======================================

Active carrier set and diversity index of a flow dataset.

The active set M of a flow holds the carriers with non-negligible
integrated flow. Restricting the diversity and aggregation computations to
M avoids divisions by zero and log(0) for carriers that carry no flow.

The diversity index is the normalized Shannon entropy of the distribution
of integrated flow over the active carriers. It is 1 when the flow is
evenly spread over all active carriers and tends to 0 as the flow
concentrates in a single carrier.
*/

use crate::error::{EssiError, Result};
use crate::types::{Flow, TimeSeriesMatrix};
use crate::vecops::veckmul;

/// Umbral absoluto de flujo integrado para considerar activo un vector energético
///
/// Absolute threshold of integrated flow for a carrier to be active. The
/// threshold is not relative to the data magnitude.
pub const ACTIVE_THRESHOLD: f32 = 1e-4;

/// Cota inferior de las participaciones phi para poder calcular su logaritmo
///
/// Lower bound of the shares phi below which the entropy term is considered
/// numerically unstable and reported as a data anomaly
pub const SHARE_FLOOR: f32 = 1e-4;

/// Conjunto activo M: vectores energéticos con flujo integrado no despreciable
///
/// Active set M: indices of the carriers whose plain sum (integral with
/// dt = 1) exceeds `ACTIVE_THRESHOLD`
pub fn active_carriers(matrix: &TimeSeriesMatrix) -> Vec<usize> {
    matrix
        .integrate_by_columns(1.0)
        .iter()
        .enumerate()
        .filter(|(_, integral)| **integral > ACTIVE_THRESHOLD)
        .map(|(carrier, _)| carrier)
        .collect()
}

/// Participación phi de cada vector energético del conjunto activo
///
/// Share phi of each carrier of the set in the total integrated flow of the
/// set, a probability-like distribution (returned in set order)
pub fn carrier_shares(matrix: &TimeSeriesMatrix, dt: f32, set_m: &[usize]) -> Vec<f32> {
    let all_integrals = matrix.integrate_by_columns(dt);
    let integrals: Vec<f32> = set_m.iter().map(|i| all_integrals[*i]).collect();
    let total: f32 = integrals.iter().sum();
    veckmul(&integrals, 1.0 / total)
}

/// Índice de diversidad d: entropía de Shannon normalizada de las participaciones
///
/// Diversity index d of a flow over the carrier set M: the normalized
/// Shannon entropy `-sum(phi_i * ln(phi_i)) / ln(|M|)`, in `[0, 1]`.
///
/// A single-carrier set has no diversity and yields 0 (the concentration
/// limit of the entropy).
///
/// # Errors
///
/// * `EmptyCarrierSet` when M is empty (the entropy is undefined)
/// * `NonPositiveShare` when any share falls below `SHARE_FLOOR`, since the
///   log of a value near zero is numerically unstable and signals a data
///   anomaly worth surfacing
pub fn diversity_index(
    matrix: &TimeSeriesMatrix,
    dt: f32,
    set_m: &[usize],
    flow: Flow,
) -> Result<f32> {
    let shares = carrier_shares(matrix, dt, set_m);
    if shares.is_empty() {
        return Err(EssiError::EmptyCarrierSet(flow.to_string()));
    }
    for (position, phi) in shares.iter().enumerate() {
        if *phi < SHARE_FLOOR {
            return Err(EssiError::NonPositiveShare {
                carrier: set_m[position],
                share: *phi,
            });
        }
    }
    if shares.len() == 1 {
        return Ok(0.0);
    }
    let summand: f32 = shares.iter().map(|phi| phi * phi.ln()).sum();
    Ok(-summand / (shares.len() as f32).ln())
}
