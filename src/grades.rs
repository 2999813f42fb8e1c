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
Subíndices y compuesto del índice de seguridad de suministro
============================================================

Definición de los tipos Grades y SecurityIndex y de los métodos que
implementan el cálculo de los cinco subíndices (SPG, SAG, AUG, SSG, AUT) y
su composición ponderada en el índice ESSI.

Los cinco subíndices son funciones puras e independientes de los datos
validados; SPG y AUG reutilizan el conjunto activo y el índice de
diversidad. Un sistema con demanda total nula produce subíndices no
finitos, igual que la formulación de referencia.
*/

use serde::{Deserialize, Serialize};

use crate::dataset::EssiData;
use crate::diversity::{active_carriers, diversity_index};
use crate::error::{EssiError, Result};
use crate::types::{Flow, TimeSeriesMatrix, Weights};
use crate::vecops::{veclistsum, vecsum, vecvecdif, vecvecdiv, vecvecmul, vecvecsum};

/// Tolerancia de la comparación de cobertura de la demanda en cada paso
///
/// Floating point tolerance of the per-timestep supply feasibility
/// comparison of SAG and SSG
pub const FEAS_EPS: f32 = 1e-6;

// Below this, storage capacity or demand plus losses of an active carrier
// are degenerate for the theta adjustment
const DEGENERATE_EPS: f32 = 1e-4;

// Subindices, in composition order
// --------------------------------

/// Los cinco subíndices del índice de seguridad de suministro
///
/// The five subindices of the energy supply security index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Grades {
    /// Self-production grade
    pub spg: f32,
    /// Adequacy grade
    pub sag: f32,
    /// Autonomy grade
    pub aug: f32,
    /// Self-sufficiency grade
    pub ssg: f32,
    /// Autarky grade
    pub aut: f32,
}

/// Resultados del cálculo del índice de seguridad de suministro
///
/// Results of the security index computation: the five subindices, the
/// composite value and the parameters of the computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecurityIndex {
    /// Subindices SPG, SAG, AUG, SSG, AUT
    pub grades: Grades,
    /// Composite energy supply security index
    pub essi: f32,
    /// Weights used for the composition
    pub weights: Weights,
    /// Autarky scaling factor
    pub sigma: f32,
    /// Uniform time step
    pub dt: f32,
    /// Number of timesteps, T
    pub num_steps: usize,
    /// Number of energy carriers, N
    pub num_carriers: usize,
}

// --------------------------------------------------------------------
// Grade calculation functions
// --------------------------------------------------------------------

/// Subíndice de autoproducción SPG
///
/// Self-production grade: diversity-weighted net self-produced energy of
/// the active production carriers as a share of the total demand,
/// `SPG = d(P, M) * sum_M(intP_i - intL_i + Sto_end_i - Sto_start_i) / sum(intD)`
pub fn spg(data: &EssiData) -> Result<f32> {
    data.validate()?;
    let set_m = active_carriers(&data.P);
    let d = diversity_index(&data.P, data.dt, &set_m, Flow::PRODUCCION)?;

    let int_p = data.P.integrate_by_columns(data.dt);
    let int_l = data.L.integrate_by_columns(data.dt);
    let num: f32 = set_m
        .iter()
        .map(|&i| int_p[i] - int_l[i] + data.alm_fin[i] - data.alm_ini[i])
        .sum();
    let den = data.D.integrate_all_columns(data.dt);

    Ok(d * num / den)
}

/// Subíndice de adecuación SAG
///
/// Adequacy grade: fraction of timesteps where supply covers demand,
/// averaged per carrier with its share of the total demand of the timestep
/// and aggregated with the importance weights c,
/// `SAG = sum_i(c_i * a_i)` with
/// `a_i = (1/T) * sum_t(f(t,i) * D(t,i) / sum_j D(t,j))`.
///
/// The feasibility flag f counts imports and exports on the supply side:
/// `f(t,i) = 1` if `P + I + E + Sd - Sb - L >= D - FEAS_EPS`.
pub fn sag(data: &EssiData) -> Result<f32> {
    data.validate()?;
    let flags = coverage_flags(data, true);
    let fractions = demand_weighted_average(&flags, &data.D);
    Ok(vecsum(&vecvecmul(&data.coste, &fractions)))
}

/// Subíndice de autonomía AUG
///
/// Autonomy grade: import-diversity and storage-adjusted measure of the
/// independence of the system from imports,
/// `AUG = (1 - phi) + aP * d(I, M) * phi`, with M the intersection of the
/// active sets of imports and demand, phi the import share of the total
/// demand plus losses, and aP the allocation-weighted sum of the storage
/// self-sufficiency factors theta over M.
///
/// # Errors
///
/// * `EmptyCarrierSet` when no carrier has both active imports and demand
/// * `DegenerateCarrier` when the storage capacity n or the demand plus
///   losses of a carrier of M are negligible
pub fn aug(data: &EssiData) -> Result<f32> {
    data.validate()?;
    // Carriers with both non-negligible imports and demand
    let set_i = active_carriers(&data.I);
    let set_d = active_carriers(&data.D);
    let set_m: Vec<usize> = set_i.into_iter().filter(|i| set_d.contains(i)).collect();

    // Import diversity over the intersection set (fails on an empty set)
    let d = diversity_index(&data.I, data.dt, &set_m, Flow::IMPORTACION)?;

    // Import share phi of the total demand plus losses (all carriers)
    let int_i_all = data.I.integrate_all_columns(data.dt);
    let int_d_all = data.D.integrate_all_columns(data.dt);
    let int_l_all = data.L.integrate_all_columns(data.dt);
    let phi = int_i_all / (int_d_all + int_l_all);

    // Per carrier integrals for the storage adjustment theta
    let int_i = data.I.integrate_by_columns(data.dt);
    let int_dl = vecvecsum(
        &data.D.integrate_by_columns(data.dt),
        &data.L.integrate_by_columns(data.dt),
    );
    let int_i_m: f32 = set_m.iter().map(|&i| int_i[i]).sum();

    let mut a_p = 0.0;
    for &i in &set_m {
        let capacity = data.capacidad[i];
        if capacity < DEGENERATE_EPS {
            return Err(EssiError::DegenerateCarrier {
                carrier: i,
                detail: format!("the storage capacity n must not be zero (n = {})", capacity),
            });
        }
        if int_dl[i].abs() < DEGENERATE_EPS {
            return Err(EssiError::DegenerateCarrier {
                carrier: i,
                detail: "demand plus losses are negligible for a carrier of the active set"
                    .to_string(),
            });
        }
        let theta = (data.alm_fin[i] / (capacity * int_dl[i])).min(1.0);
        a_p += (data.reparto[i] + (1.0 - data.reparto[i]) * theta) * int_i[i] / int_i_m;
    }

    Ok((1.0 - phi) + a_p * d * phi)
}

/// Subíndice de autosuficiencia SSG
///
/// Self-sufficiency grade: as SAG but with the feasibility flag computed
/// without imports and with exports on the demand side,
/// `g(t,i) = 1` if `P + Sd - Sb - L - E >= D - FEAS_EPS`, and aggregated
/// without importance weights, `SSG = sum_i(a_i)`.
pub fn ssg(data: &EssiData) -> Result<f32> {
    data.validate()?;
    let flags = coverage_flags(data, false);
    Ok(vecsum(&demand_weighted_average(&flags, &data.D)))
}

/// Subíndice de autarquía AUT
///
/// Autarky grade: SSG rescaled by the external factor sigma
pub fn aut(data: &EssiData) -> Result<f32> {
    Ok(data.sigma * ssg(data)?)
}

// ///////////// Feasibility helpers (SAG / SSG) ////////////

// Per carrier feasibility flags (1.0 or 0.0 per timestep): supply covers
// demand within FEAS_EPS. With `with_imports` the supply side is
// P + I + E + Sd - Sb - L (SAG); without, P + Sd - Sb - L - E (SSG).
fn coverage_flags(data: &EssiData, with_imports: bool) -> Vec<Vec<f32>> {
    (0..data.num_carriers())
        .map(|i| {
            let lhs = if with_imports {
                vecvecdif(
                    &veclistsum(&[
                        data.P.col(i),
                        data.I.col(i),
                        data.E.col(i),
                        data.Sd.col(i),
                    ]),
                    &vecvecsum(data.Sb.col(i), data.L.col(i)),
                )
            } else {
                vecvecdif(
                    &vecvecsum(data.P.col(i), data.Sd.col(i)),
                    &veclistsum(&[data.Sb.col(i), data.L.col(i), data.E.col(i)]),
                )
            };
            lhs.iter()
                .zip(data.D.col(i))
                .map(|(supply, demand)| {
                    if *supply >= *demand - FEAS_EPS {
                        1.0
                    } else {
                        0.0
                    }
                })
                .collect()
        })
        .collect()
}

// Time average of the flags of each carrier, weighting each timestep by the
// share of the carrier in the total demand of the timestep. A timestep with
// zero total demand yields the IEEE division values, as in the reference
// formulation.
fn demand_weighted_average(flags: &[Vec<f32>], demand: &TimeSeriesMatrix) -> Vec<f32> {
    let total_demand = demand.row_sums();
    let num_steps = demand.num_steps() as f32;
    flags
        .iter()
        .enumerate()
        .map(|(i, flags_i)| {
            let weighted = vecvecdiv(&vecvecmul(flags_i, demand.col(i)), &total_demand);
            vecsum(&weighted) / num_steps
        })
        .collect()
}

// Composite index
// ---------------

/// Composición ponderada de los subíndices en el índice ESSI
///
/// Weighted composition of already computed subindices,
/// `ESSI = (w1*SPG + w2*SAG + w3*AUG + w4*SSG + w5*AUT) / sum(w)`.
/// The result is invariant under a uniform positive rescaling of the
/// weights.
///
/// # Errors
///
/// * `ZeroWeightSum` when the weights add up to zero
pub fn weighted_index(grades: &Grades, weights: &Weights) -> Result<f32> {
    let wsum = weights.sum();
    if wsum == 0.0 {
        return Err(EssiError::ZeroWeightSum);
    }
    let [w1, w2, w3, w4, w5] = weights.0;
    Ok(
        (w1 * grades.spg + w2 * grades.sag + w3 * grades.aug + w4 * grades.ssg + w5 * grades.aut)
            / wsum,
    )
}

/// Calcula el índice de seguridad de suministro energético
///
/// Compute the energy supply security index: validate the data, compute
/// the five subindices and compose them with the given weights.
///
/// * `data` - validated computation data
/// * `weights` - weights w1..w5 for SPG, SAG, AUG, SSG, AUT
///
/// # Errors
///
/// * Structural errors from the validation of `data`
/// * `ZeroWeightSum` when the weights add up to zero
/// * The numerical errors of the individual subindices
pub fn security_index(data: &EssiData, weights: &Weights) -> Result<SecurityIndex> {
    data.validate()?;
    if weights.sum() == 0.0 {
        return Err(EssiError::ZeroWeightSum);
    }
    let grades = Grades {
        spg: spg(data)?,
        sag: sag(data)?,
        aug: aug(data)?,
        ssg: ssg(data)?,
        aut: aut(data)?,
    };
    let essi = weighted_index(&grades, weights)?;
    Ok(SecurityIndex {
        grades,
        essi,
        weights: *weights,
        sigma: data.sigma,
        dt: data.dt,
        num_steps: data.num_steps(),
        num_carriers: data.num_carriers(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn matrix(value: f32) -> TimeSeriesMatrix {
        TimeSeriesMatrix::new(vec![vec![value; 4], vec![value; 4]]).unwrap()
    }

    // 2 carriers, 4 timesteps, dt = 1. Production covers the demand exactly,
    // imports cover half of it, no losses, exports or storage activity.
    fn base_data() -> EssiData {
        EssiData {
            I: matrix(1.0),
            P: matrix(2.0),
            D: matrix(2.0),
            E: matrix(0.0),
            L: matrix(0.0),
            Sb: matrix(0.0),
            Sd: matrix(0.0),
            alm_ini: vec![0.0, 0.0],
            alm_fin: vec![0.0, 0.0],
            reparto: vec![0.5, 0.5],
            coste: vec![0.5, 0.5],
            capacidad: vec![1.0, 1.0],
            dt: 1.0,
            sigma: 0.9,
        }
    }

    fn approx(value: f32, expected: f32) -> bool {
        (value - expected).abs() < 1e-6
    }

    #[test]
    fn spg_balanced_system() {
        // intP = 16 over the active set, intD = 16, d(P) = 1
        assert!(approx(spg(&base_data()).unwrap(), 1.0));
    }

    #[test]
    fn spg_accounts_for_storage_delta() {
        let mut data = base_data();
        data.alm_fin = vec![4.0, 4.0];
        // num = 16 + 8 = 24, den = 16
        assert!(approx(spg(&data).unwrap(), 1.5));
    }

    #[test]
    fn sag_with_full_coverage() {
        // every timestep is feasible, a_i = 0.5, c = [0.5, 0.5]
        assert_eq!(0.5, sag(&base_data()).unwrap());
    }

    #[test]
    fn sag_with_partial_coverage() {
        let mut data = base_data();
        // carrier 0 loses all its supply at the first two timesteps
        data.L =
            TimeSeriesMatrix::new(vec![vec![5.0, 5.0, 0.0, 0.0], vec![0.0; 4]]).unwrap();
        // a_0 = (1/4) * (0 + 0 + 0.5 + 0.5) = 0.25, a_1 = 0.5
        // SAG = 0.5 * 0.25 + 0.5 * 0.5 = 0.375
        // (losses also shrink the SPG numerator; only SAG is checked here)
        assert_eq!(0.375, sag(&data).unwrap());
    }

    #[test]
    fn ssg_ignores_imports() {
        let mut data = base_data();
        // without production the demand is only covered through imports
        data.P = matrix(0.0);
        data.I = matrix(2.0);
        assert_eq!(0.5, sag(&data).unwrap());
        assert_eq!(0.0, ssg(&data).unwrap());
    }

    #[test]
    fn ssg_and_aut() {
        let data = base_data();
        assert_eq!(1.0, ssg(&data).unwrap());
        assert_eq!(0.9, aut(&data).unwrap());
    }

    #[test]
    fn aug_without_storage() {
        // phi = 8/16, theta = 0, aP = 0.5, d(I) = 1
        assert!(approx(aug(&base_data()).unwrap(), 0.75));
    }

    #[test]
    fn aug_with_storage() {
        let mut data = base_data();
        data.alm_fin = vec![4.0, 4.0];
        // theta = 4 / (1 * 8) = 0.5, aP = 0.75
        assert!(approx(aug(&data).unwrap(), 0.875));
    }

    #[test]
    fn aug_with_degenerate_capacity() {
        let mut data = base_data();
        data.capacidad = vec![0.0, 1.0];
        match aug(&data) {
            Err(EssiError::DegenerateCarrier { carrier, .. }) => assert_eq!(0, carrier),
            other => panic!("se esperaba DegenerateCarrier y se obtuvo {:?}", other),
        }
    }

    #[test]
    fn aug_with_empty_intersection() {
        let mut data = base_data();
        data.I = matrix(0.0);
        match aug(&data) {
            Err(EssiError::EmptyCarrierSet(flow)) => assert_eq!("IMPORTACION", flow),
            other => panic!("se esperaba EmptyCarrierSet y se obtuvo {:?}", other),
        }
    }

    #[test]
    fn weighted_index_of_known_grades() {
        let grades = Grades {
            spg: 0.3,
            sag: 0.5,
            aug: 0.9,
            ssg: 0.7,
            aut: 0.1,
        };
        let weights = Weights([0.1, 0.2, 0.3, 0.35, 0.05]);
        assert!(approx(weighted_index(&grades, &weights).unwrap(), 0.65));
    }

    #[test]
    fn weighted_index_is_scale_invariant() {
        let grades = Grades {
            spg: 0.3,
            sag: 0.5,
            aug: 0.9,
            ssg: 0.7,
            aut: 0.1,
        };
        let weights = Weights([0.1, 0.2, 0.3, 0.35, 0.05]);
        let reference = weighted_index(&grades, &weights).unwrap();
        for k in &[2.0, 3.0, 10.0] {
            let scaled = Weights([
                k * weights.0[0],
                k * weights.0[1],
                k * weights.0[2],
                k * weights.0[3],
                k * weights.0[4],
            ]);
            assert!(approx(weighted_index(&grades, &scaled).unwrap(), reference));
        }
    }

    #[test]
    fn weighted_index_with_zero_weights() {
        let grades = Grades {
            spg: 0.3,
            sag: 0.5,
            aug: 0.9,
            ssg: 0.7,
            aut: 0.1,
        };
        assert_eq!(
            Err(EssiError::ZeroWeightSum),
            weighted_index(&grades, &Weights([0.0; 5]))
        );
    }

    #[test]
    fn security_index_is_pure() {
        let data = base_data();
        let weights = Weights([0.1, 0.2, 0.3, 0.35, 0.05]);
        let first = security_index(&data, &weights).unwrap();
        let second = security_index(&data, &weights).unwrap();
        // recomputation on identical inputs is bitwise identical
        assert_eq!(first, second);
    }
}
