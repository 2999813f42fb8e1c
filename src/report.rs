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
Conversión a formato simple
===========================

Muestra los resultados del cálculo en un formato simple y compacto.
*/

use crate::grades::SecurityIndex;

// ==================== Conversión a formato simple

/// Muestra en formato simple
///
/// Esta función usa un formato simple y compacto para representar los
/// resultados del cálculo del índice de seguridad de suministro
pub trait AsPlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

// ================= Implementaciones ====================

impl AsPlain for SecurityIndex {
    /// Está mostrando únicamente los resultados
    fn to_plain(&self) -> String {
        let SecurityIndex {
            grades,
            essi,
            weights,
            sigma,
            dt,
            num_steps,
            num_carriers,
        } = self;

        format!(
            "** Índice de seguridad de suministro energético

T = {num_steps} pasos, N = {num_carriers} vectores energéticos
dt = {dt:.2}
sigma = {sigma:.2}
pesos w = [{weights}]

** Subíndices:

- SPG (autoproducción): {spg:.4}
- SAG (adecuación): {sag:.4}
- AUG (autonomía): {aug:.4}
- SSG (autosuficiencia): {ssg:.4}
- AUT (autarquía): {aut:.4}

ESSI = {essi:.4}
",
            num_steps = num_steps,
            num_carriers = num_carriers,
            dt = dt,
            sigma = sigma,
            weights = weights,
            spg = grades.spg,
            sag = grades.sag,
            aug = grades.aug,
            ssg = grades.ssg,
            aut = grades.aut,
            essi = essi,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grades::Grades;
    use crate::types::Weights;

    #[test]
    fn plain_report() {
        let index = SecurityIndex {
            grades: Grades {
                spg: 0.3,
                sag: 0.5,
                aug: 0.9,
                ssg: 0.7,
                aut: 0.1,
            },
            essi: 0.65,
            weights: Weights([0.1, 0.2, 0.3, 0.35, 0.05]),
            sigma: 0.9,
            dt: 1.0,
            num_steps: 8760,
            num_carriers: 15,
        };
        let plain = index.to_plain();
        assert!(plain.contains("ESSI = 0.6500"));
        assert!(plain.contains("- SPG (autoproducción): 0.3000"));
        assert!(plain.contains("pesos w = [0.10, 0.20, 0.30, 0.35, 0.05]"));
        assert!(plain.contains("T = 8760 pasos, N = 15 vectores energéticos"));
    }
}
