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
Matriz de series temporales
===========================

Time series matrix with T rows (timesteps) and N columns (energy carriers),
stored as one values vector per carrier, and the time integration
primitives of the security index computation.

Integrals use a left Riemann sum with the uniform time step dt. Irregular
time axis spacing is not detected and silently produces incorrect
integrals.
*/

use crate::error::{EssiError, Result};
use crate::vecops::{veckmul, veclistsum, vecsum};

/// Matriz de series temporales (T pasos x N vectores energéticos)
///
/// Time series matrix (T timesteps x N energy carriers), stored by columns.
/// Column i holds the complete time series of carrier i.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesMatrix {
    cols: Vec<Vec<f32>>,
}

impl TimeSeriesMatrix {
    /// Construye la matriz a partir de sus columnas, comprobando que es rectangular
    ///
    /// Build the matrix from its columns. All columns must have the same length.
    pub fn new(cols: Vec<Vec<f32>>) -> Result<Self> {
        if let Some(first) = cols.first() {
            let num_steps = first.len();
            if cols.iter().any(|col| col.len() != num_steps) {
                return Err(EssiError::WrongInput(
                    "all carrier series must have the same number of timesteps".to_string(),
                ));
            }
        }
        Ok(Self { cols })
    }

    /// Matriz nula de T pasos y N vectores energéticos
    pub fn zeros(num_steps: usize, num_carriers: usize) -> Self {
        Self {
            cols: vec![vec![0.0; num_steps]; num_carriers],
        }
    }

    /// Número de pasos de cálculo (filas), T
    pub fn num_steps(&self) -> usize {
        self.cols.first().map_or(0, Vec::len)
    }

    /// Número de vectores energéticos (columnas), N
    pub fn num_carriers(&self) -> usize {
        self.cols.len()
    }

    /// Dimensiones (T, N)
    pub fn shape(&self) -> (usize, usize) {
        (self.num_steps(), self.num_carriers())
    }

    /// Serie temporal del vector energético i
    pub fn col(&self, i: usize) -> &[f32] {
        &self.cols[i]
    }

    /// Iterador sobre las series temporales de los vectores energéticos
    pub fn columns(&self) -> impl Iterator<Item = &[f32]> {
        self.cols.iter().map(Vec::as_slice)
    }

    /// Integral temporal de cada columna, para el paso de tiempo dt
    ///
    /// Time integral of each column: `dt * sum(column)` (left Riemann sum).
    /// The result is linear in dt.
    pub fn integrate_by_columns(&self, dt: f32) -> Vec<f32> {
        let sums: Vec<f32> = self.cols.iter().map(|col| vecsum(col)).collect();
        veckmul(&sums, dt)
    }

    /// Integral temporal de toda la matriz (suma de las integrales por columnas)
    ///
    /// Time integral of the whole matrix, the sum of the per-column integrals
    pub fn integrate_all_columns(&self, dt: f32) -> f32 {
        vecsum(&self.integrate_by_columns(dt))
    }

    /// Suma de los valores de todas las columnas en cada paso de cálculo
    ///
    /// Sum over all carriers for each timestep (a vector of length T)
    pub fn row_sums(&self) -> Vec<f32> {
        veclistsum(&self.cols.iter().map(Vec::as_slice).collect::<Vec<_>>())
    }
}
