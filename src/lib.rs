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
Essi
====

This crate provides a library and binary that **compute the energy supply
security index (ESSI)** of a multi-carrier energy system from time series of
energy flows (imports, production, demand, exports, losses and storage
charge / discharge).

The index is the weighted average of five subindices:

- **SPG**, self-production grade: diversity-weighted share of the demand
  covered by net on-site production;
- **SAG**, adequacy grade: demand-weighted fraction of timesteps where supply
  (including imports) covers demand, aggregated with per-carrier importance
  weights;
- **AUG**, autonomy grade: import-diversity and storage-adjusted measure of
  independence from imports;
- **SSG**, self-sufficiency grade: demand-weighted fraction of timesteps
  where supply covers demand without imports;
- **AUT**, autarky grade: SSG rescaled by an external factor sigma.

It also holds the following assumptions:

- carriers are positionally aligned: column *i* refers to the same energy
  carrier in every dataset;
- the time axis has uniform spacing and integrals use a left Riemann sum;
  irregular spacing is not detected and produces incorrect integrals;
- all computations are pure, one-shot evaluations over an immutable dataset.

Este *crate* proporciona una biblioteca y un programa que **calculan el
índice de seguridad de suministro energético (ESSI)** de un sistema
energético multivector, a partir de las series temporales de los flujos de
energía (importación, producción, demanda, exportación, pérdidas y carga /
descarga del almacenamiento).

El índice es la media ponderada de cinco subíndices (SPG, SAG, AUG, SSG y
AUT), y se calcula en una única pasada sobre un conjunto de datos inmutable.

# Ejemplo

```rust
use std::fs::read_to_string;
use essi::*;
use essi::types::*;

// lectura de un archivo de datos de flujos energéticos
let dataset = read_to_string("test_data/essi_test_dataset.csv")
    .unwrap()
    .parse::<Dataset>()
    .unwrap();

// validación de dimensiones y construcción de los datos del cálculo
let data = EssiData::from_dataset(&dataset).unwrap();

// pesos de los subíndices (metadatos del archivo o valor por defecto)
let weights = dataset
    .get_meta_weights("ESSI_PESOS")
    .unwrap_or(WEIGHTS_DEFAULT);

// cálculo del índice de seguridad de suministro
let index = security_index(&data, &weights).unwrap();

// visualización compacta
println!("{}", index.to_plain());
```

*/

#![deny(missing_docs)]

mod dataset;
mod diversity;
mod grades;
mod report;
mod vecops;

pub mod error;
pub mod types;

pub use dataset::*;
pub use diversity::*;
pub use grades::*;
pub use report::*;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
