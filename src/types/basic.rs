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
Etiquetas de los conjuntos de datos
===================================

Tags for the datasets of the security index computation: energy flow time
series (one matrix per flow) and per-carrier constant vectors.

The textual representation of the tags is the one used in the dataset file
format.
*/

use strum_macros::{Display, EnumString};

// -------------------- Flow

/// Flujo de energía representado por una serie temporal (una matriz T x N)
///
/// Energy flow represented by a time series dataset (a T x N matrix)
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Flow {
    /// Imported energy (I)
    IMPORTACION,
    /// On-site produced energy (P)
    PRODUCCION,
    /// Energy demand (D)
    DEMANDA,
    /// Exported energy (E)
    EXPORTACION,
    /// Conversion and distribution losses (L)
    PERDIDAS,
    /// Energy charged into storage (Sb)
    ALM_CARGA,
    /// Energy discharged from storage (Sd)
    ALM_DESCARGA,
}

impl Flow {
    /// Lista de flujos, en el orden del formato de archivo
    pub const FLOWS_ALL: [Flow; 7] = [
        Flow::IMPORTACION,
        Flow::PRODUCCION,
        Flow::DEMANDA,
        Flow::EXPORTACION,
        Flow::PERDIDAS,
        Flow::ALM_CARGA,
        Flow::ALM_DESCARGA,
    ];

    /// Storage flows may be omitted from a dataset and default to zero
    pub fn is_storage(self) -> bool {
        self == Flow::ALM_CARGA || self == Flow::ALM_DESCARGA
    }
}

// -------------------- VectorKind

/// Vector de constantes con un valor por vector energético
///
/// Per-carrier constant vector (one value per energy carrier)
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumString)]
pub enum VectorKind {
    /// Storage level at the start of the interval (Sto_start)
    ALM_INI,
    /// Storage level at the end of the interval (Sto_end)
    ALM_FIN,
    /// Autonomy allocation weight (a)
    REPARTO,
    /// Adequacy importance weight (c)
    COSTE,
    /// Nominal storage capacity (n)
    CAPACIDAD,
}

impl VectorKind {
    /// Lista de vectores de constantes, en el orden del formato de archivo
    pub const KINDS_ALL: [VectorKind; 5] = [
        VectorKind::ALM_INI,
        VectorKind::ALM_FIN,
        VectorKind::REPARTO,
        VectorKind::COSTE,
        VectorKind::CAPACIDAD,
    ];

    /// Storage levels may be omitted from a dataset and default to zero
    pub fn is_storage_level(self) -> bool {
        self == VectorKind::ALM_INI || self == VectorKind::ALM_FIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flow_roundtrip() {
        for flow in &Flow::FLOWS_ALL {
            assert_eq!(*flow, flow.to_string().parse::<Flow>().unwrap());
        }
        assert!("CONSUMO".parse::<Flow>().is_err());
    }

    #[test]
    fn vectorkind_roundtrip() {
        for kind in &VectorKind::KINDS_ALL {
            assert_eq!(*kind, kind.to_string().parse::<VectorKind>().unwrap());
        }
        assert!("PESOS".parse::<VectorKind>().is_err());
    }
}
