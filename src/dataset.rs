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
Conjunto de datos de flujos energéticos
=======================================

Define el tipo Dataset (lista de series de flujos + metadatos) y el tipo
EssiData (datos validados del cálculo) y sus traits.

El tipo `Dataset` modeliza el archivo de entrada, línea a línea, con sus
metadatos, y permite la lectura y escritura del formato textual. El tipo
`EssiData` es la instantánea inmutable que consume el motor de cálculo:
las siete matrices de flujos, los cinco vectores de constantes, el paso
de tiempo dt y el factor de autarquía sigma, con todas las dimensiones
comprobadas antes de calcular nada.

Hipótesis:

- los vectores energéticos están alineados posicionalmente en todos los
  flujos (la columna i es el mismo vector en todas las matrices);
- las series de carga y descarga del almacenamiento y los niveles inicial
  y final pueden omitirse, y se completan con ceros.
*/

use std::fmt;
use std::str;

use itertools::Itertools;

use crate::error::{EssiError, Result};
use crate::types::{CarrierVector, Flow, FlowSeries, Meta, MetaVec, TimeSeriesMatrix, VectorKind};

/// Etiqueta de la línea del eje temporal en el formato de archivo
pub const TIME_TAG: &str = "TIEMPO";

/// Clave de metadatos del factor de autarquía sigma
pub const META_SIGMA: &str = "ESSI_SIGMA";

// ==================== Dataset

/// Lista de datos de flujos energéticos con sus metadatos
///
/// List of energy flow data lines bundled with its metadata
///
/// #META ESSI_SIGMA: 0.9
/// TIEMPO, 0.00, 1.00, 2.00, 3.00
/// DEMANDA, 0, 16.39, 13.11, 8.20, 7.38
/// IMPORTACION, 0, 8.20, 6.56, 4.10, 3.69
/// COSTE, 1.00
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Dataset {
    /// Metadata
    pub dmeta: Vec<Meta>,
    /// Time axis (T timestamps with uniform spacing)
    pub time: Vec<f32>,
    /// Flow time series lines
    pub series: Vec<FlowSeries>,
    /// Per-carrier constant vector lines
    pub vectors: Vec<CarrierVector>,
}

impl MetaVec for Dataset {
    fn get_metavec(&self) -> &Vec<Meta> {
        &self.dmeta
    }
    fn get_mut_metavec(&mut self) -> &mut Vec<Meta> {
        &mut self.dmeta
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = self.dmeta.iter().map(|m| format!("{}", m)).collect();
        if !self.time.is_empty() {
            lines.push(format!(
                "{}, {}",
                TIME_TAG,
                self.time.iter().map(|v| format!("{:.2}", v)).join(", ")
            ));
        }
        lines.extend(self.series.iter().map(|s| format!("{}", s)));
        lines.extend(self.vectors.iter().map(|v| format!("{}", v)));
        write!(f, "{}", lines.join("\n"))
    }
}

impl str::FromStr for Dataset {
    type Err = EssiError;

    fn from_str(s: &str) -> Result<Dataset> {
        let s_nobom = if s.starts_with('\u{feff}') { &s[3..] } else { s };
        let lines: Vec<&str> = s_nobom.lines().map(str::trim).collect();

        let dmeta = lines
            .iter()
            .filter(|l| l.starts_with("#META"))
            .map(|l| l.parse())
            .collect::<Result<Vec<Meta>>>()?;

        let mut time: Vec<f32> = Vec::new();
        let mut series: Vec<FlowSeries> = Vec::new();
        let mut vectors: Vec<CarrierVector> = Vec::new();
        for line in lines
            .iter()
            .filter(|l| !(l.starts_with('#') || l.is_empty()))
        {
            let tag = line.split(',').next().unwrap_or("").trim();
            if tag == TIME_TAG {
                if !time.is_empty() {
                    return Err(EssiError::WrongInput(
                        "more than one TIEMPO line found".to_string(),
                    ));
                }
                time = line
                    .splitn(2, ',')
                    .nth(1)
                    .unwrap_or("")
                    .split(',')
                    .map(|v| v.trim().parse::<f32>())
                    .collect::<std::result::Result<Vec<f32>, _>>()?;
            } else if tag.parse::<Flow>().is_ok() {
                series.push(line.parse()?);
            } else if tag.parse::<VectorKind>().is_ok() {
                vectors.push(line.parse()?);
            } else {
                return Err(EssiError::ParseError((*line).to_string()));
            }
        }

        // All series must have the same number of timesteps
        if !series.is_empty() {
            let lens: Vec<_> = series.iter().map(|s| s.values.len()).collect();
            if lens.iter().max() != lens.iter().min() {
                return Err(EssiError::ParseError(
                    "the flow series have different numbers of timesteps".to_string(),
                ));
            }
        }

        Ok(Dataset {
            dmeta,
            time,
            series,
            vectors,
        })
    }
}

impl Dataset {
    /// Ensambla la matriz de series temporales de un flujo
    ///
    /// Assemble the time series matrix of a flow from its data lines.
    /// Carrier indices must be contiguous from 0 and without duplicates.
    /// An absent flow yields an empty (0 x 0) matrix.
    pub fn matrix(&self, flow: Flow) -> Result<TimeSeriesMatrix> {
        let mut flow_series: Vec<&FlowSeries> =
            self.series.iter().filter(|s| s.flow == flow).collect();
        flow_series.sort_by_key(|s| s.carrier);
        for (position, s) in flow_series.iter().enumerate() {
            if s.carrier != position {
                return Err(EssiError::WrongInput(format!(
                    "carrier indices for {} must be contiguous from 0 and without duplicates",
                    flow
                )));
            }
        }
        TimeSeriesMatrix::new(flow_series.iter().map(|s| s.values.clone()).collect())
    }

    /// Vector de constantes de un tipo dado, si está definido
    ///
    /// Constant vector of the given kind, when defined. More than one line
    /// of the same kind is an error.
    pub fn vector(&self, kind: VectorKind) -> Result<Option<&CarrierVector>> {
        let mut found = self.vectors.iter().filter(|v| v.kind == kind);
        let first = found.next();
        if found.next().is_some() {
            return Err(EssiError::WrongInput(format!(
                "more than one {} line found",
                kind
            )));
        }
        Ok(first)
    }
}

// ==================== EssiData

/// Datos validados del cálculo del índice de seguridad de suministro
///
/// Validated input data of the security index computation: an immutable
/// snapshot of the seven flow matrices (T timesteps x N carriers), the five
/// per-carrier constant vectors, the uniform time step and the autarky
/// factor. Instances are built once per analysis and never mutated.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct EssiData {
    /// Imported energy time series (I)
    pub I: TimeSeriesMatrix,
    /// On-site produced energy time series (P)
    pub P: TimeSeriesMatrix,
    /// Energy demand time series (D)
    pub D: TimeSeriesMatrix,
    /// Exported energy time series (E)
    pub E: TimeSeriesMatrix,
    /// Losses time series (L)
    pub L: TimeSeriesMatrix,
    /// Storage charge time series (Sb)
    pub Sb: TimeSeriesMatrix,
    /// Storage discharge time series (Sd)
    pub Sd: TimeSeriesMatrix,
    /// Storage level at the start of the interval, per carrier (Sto_start)
    pub alm_ini: Vec<f32>,
    /// Storage level at the end of the interval, per carrier (Sto_end)
    pub alm_fin: Vec<f32>,
    /// Autonomy allocation weight, per carrier (a)
    pub reparto: Vec<f32>,
    /// Adequacy importance weight, per carrier (c)
    pub coste: Vec<f32>,
    /// Nominal storage capacity, per carrier (n)
    pub capacidad: Vec<f32>,
    /// Uniform time step, derived from the time axis
    pub dt: f32,
    /// Autarky scaling factor
    pub sigma: f32,
}

impl EssiData {
    /// Construye y valida los datos del cálculo a partir de un Dataset
    ///
    /// Assemble and validate the computation data from a parsed dataset:
    ///
    /// - absent storage flows (ALM_CARGA, ALM_DESCARGA) and storage levels
    ///   (ALM_INI, ALM_FIN) are filled with zeros;
    /// - dt is derived from the first two entries of the time axis;
    /// - sigma is read from the ESSI_SIGMA metadata.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        let imports = dataset.matrix(Flow::IMPORTACION)?;
        let (num_steps, num_carriers) = imports.shape();

        let matrix_or_zeros = |flow: Flow| -> Result<TimeSeriesMatrix> {
            let m = dataset.matrix(flow)?;
            if flow.is_storage() && m.num_carriers() == 0 {
                Ok(TimeSeriesMatrix::zeros(num_steps, num_carriers))
            } else {
                Ok(m)
            }
        };
        let production = matrix_or_zeros(Flow::PRODUCCION)?;
        let demand = matrix_or_zeros(Flow::DEMANDA)?;
        let exports = matrix_or_zeros(Flow::EXPORTACION)?;
        let losses = matrix_or_zeros(Flow::PERDIDAS)?;
        let sto_charge = matrix_or_zeros(Flow::ALM_CARGA)?;
        let sto_discharge = matrix_or_zeros(Flow::ALM_DESCARGA)?;

        let vector_values = |kind: VectorKind| -> Result<Vec<f32>> {
            match dataset.vector(kind)? {
                Some(v) => Ok(v.values.clone()),
                None if kind.is_storage_level() => Ok(vec![0.0; num_carriers]),
                None => Err(EssiError::VectorLength {
                    vector: kind.to_string(),
                    expected: num_carriers,
                    found: 0,
                }),
            }
        };
        let alm_ini = vector_values(VectorKind::ALM_INI)?;
        let alm_fin = vector_values(VectorKind::ALM_FIN)?;
        let reparto = vector_values(VectorKind::REPARTO)?;
        let coste = vector_values(VectorKind::COSTE)?;
        let capacidad = vector_values(VectorKind::CAPACIDAD)?;

        // Time axis: same number of entries as the matrices and at least two
        // entries to derive the time step
        if dataset.time.len() != num_steps {
            return Err(EssiError::VectorLength {
                vector: TIME_TAG.to_string(),
                expected: num_steps,
                found: dataset.time.len(),
            });
        }
        if dataset.time.len() < 2 {
            return Err(EssiError::WrongInput(
                "the time axis needs at least two entries to derive dt".to_string(),
            ));
        }
        let dt = dataset.time[1] - dataset.time[0];

        // sigma must be a single numeric metadata value
        let sigma_str = dataset
            .get_meta(META_SIGMA)
            .ok_or_else(|| EssiError::ScalarType(format!("no {} metadata found", META_SIGMA)))?;
        if sigma_str.contains(',') {
            return Err(EssiError::ScalarType(format!(
                "more than one value found in \"{}\"",
                sigma_str
            )));
        }
        let sigma = sigma_str
            .trim()
            .parse::<f32>()
            .map_err(|_| EssiError::ScalarType(format!("found \"{}\"", sigma_str)))?;

        let data = EssiData {
            I: imports,
            P: production,
            D: demand,
            E: exports,
            L: losses,
            Sb: sto_charge,
            Sd: sto_discharge,
            alm_ini,
            alm_fin,
            reparto,
            coste,
            capacidad,
            dt,
            sigma,
        };
        data.validate()?;
        Ok(data)
    }

    /// Comprueba la consistencia estructural de los datos del cálculo
    ///
    /// Check the structural consistency of the computation data before any
    /// numeric work: every flow matrix must match the dimensions of the
    /// imports matrix, every constant vector must have one entry per
    /// carrier and sigma must be a finite number. Purely a precondition
    /// gate; it does no computation and has no side effects.
    pub fn validate(&self) -> Result<()> {
        let shape = self.I.shape();
        let matrices = [
            (Flow::PRODUCCION, &self.P),
            (Flow::DEMANDA, &self.D),
            (Flow::EXPORTACION, &self.E),
            (Flow::PERDIDAS, &self.L),
            (Flow::ALM_CARGA, &self.Sb),
            (Flow::ALM_DESCARGA, &self.Sd),
        ];
        for (flow, matrix) in &matrices {
            if matrix.shape() != shape {
                return Err(EssiError::ShapeMismatch {
                    dataset: flow.to_string(),
                    expected: shape,
                    found: matrix.shape(),
                });
            }
        }

        let num_carriers = shape.1;
        let vectors = [
            (VectorKind::ALM_INI, &self.alm_ini),
            (VectorKind::ALM_FIN, &self.alm_fin),
            (VectorKind::REPARTO, &self.reparto),
            (VectorKind::COSTE, &self.coste),
            (VectorKind::CAPACIDAD, &self.capacidad),
        ];
        for (kind, vector) in &vectors {
            if vector.len() != num_carriers {
                return Err(EssiError::VectorLength {
                    vector: kind.to_string(),
                    expected: num_carriers,
                    found: vector.len(),
                });
            }
        }

        if !self.sigma.is_finite() {
            return Err(EssiError::ScalarType(format!("found {}", self.sigma)));
        }
        Ok(())
    }

    /// Número de pasos de cálculo, T
    pub fn num_steps(&self) -> usize {
        self.I.num_steps()
    }

    /// Número de vectores energéticos, N
    pub fn num_carriers(&self) -> usize {
        self.I.num_carriers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TDATASET: &str = "#META ESSI_SIGMA: 0.9
TIEMPO, 0.00, 1.00, 2.00, 3.00
IMPORTACION, 0, 1.00, 1.00, 1.00, 1.00
IMPORTACION, 1, 1.00, 1.00, 1.00, 1.00
PRODUCCION, 0, 2.00, 2.00, 2.00, 2.00
PRODUCCION, 1, 2.00, 2.00, 2.00, 2.00
DEMANDA, 0, 2.00, 2.00, 2.00, 2.00
DEMANDA, 1, 2.00, 2.00, 2.00, 2.00
EXPORTACION, 0, 0.00, 0.00, 0.00, 0.00
EXPORTACION, 1, 0.00, 0.00, 0.00, 0.00
PERDIDAS, 0, 0.00, 0.00, 0.00, 0.00
PERDIDAS, 1, 0.00, 0.00, 0.00, 0.00
REPARTO, 0.50, 0.50
COSTE, 0.50, 0.50
CAPACIDAD, 1.00, 1.00";

    #[test]
    fn dataset_parse() {
        let dataset = TDATASET.parse::<Dataset>().unwrap();
        // roundtrip building from/to string
        assert_eq!(dataset.to_string(), TDATASET);
        assert_eq!(dataset.get_meta_f32(META_SIGMA), Some(0.9));
        assert_eq!(dataset.series.len(), 10);
        assert_eq!(dataset.vectors.len(), 3);
    }

    #[test]
    fn dataset_storage_defaults_to_zero() {
        let dataset = TDATASET.parse::<Dataset>().unwrap();
        let data = EssiData::from_dataset(&dataset).unwrap();
        assert_eq!(data.Sb, TimeSeriesMatrix::zeros(4, 2));
        assert_eq!(data.Sd, TimeSeriesMatrix::zeros(4, 2));
        assert_eq!(data.alm_ini, vec![0.0, 0.0]);
        assert_eq!(data.alm_fin, vec![0.0, 0.0]);
        assert_eq!(data.dt, 1.0);
        assert_eq!(data.sigma, 0.9);
    }

    #[test]
    fn dataset_shape_mismatch() {
        // DEMANDA has one carrier less than IMPORTACION
        let dataset = TDATASET
            .replace("DEMANDA, 1, 2.00, 2.00, 2.00, 2.00\n", "")
            .parse::<Dataset>()
            .unwrap();
        match EssiData::from_dataset(&dataset) {
            Err(EssiError::ShapeMismatch { dataset, .. }) => assert_eq!(dataset, "DEMANDA"),
            other => panic!("se esperaba ShapeMismatch y se obtuvo {:?}", other),
        }
    }

    #[test]
    fn dataset_vector_length() {
        let dataset = TDATASET
            .replace("COSTE, 0.50, 0.50", "COSTE, 0.50")
            .parse::<Dataset>()
            .unwrap();
        match EssiData::from_dataset(&dataset) {
            Err(EssiError::VectorLength { vector, .. }) => assert_eq!(vector, "COSTE"),
            other => panic!("se esperaba VectorLength y se obtuvo {:?}", other),
        }
    }

    #[test]
    fn dataset_missing_vector() {
        let dataset = TDATASET
            .replace("COSTE, 0.50, 0.50\n", "")
            .parse::<Dataset>()
            .unwrap();
        assert!(EssiData::from_dataset(&dataset).is_err());
    }

    #[test]
    fn dataset_sigma_errors() {
        // missing sigma metadata
        let dataset = TDATASET
            .replace("#META ESSI_SIGMA: 0.9\n", "")
            .parse::<Dataset>()
            .unwrap();
        match EssiData::from_dataset(&dataset) {
            Err(EssiError::ScalarType(_)) => (),
            other => panic!("se esperaba ScalarType y se obtuvo {:?}", other),
        }
        // sigma with more than one value
        let dataset = TDATASET
            .replace("ESSI_SIGMA: 0.9", "ESSI_SIGMA: 0.9, 0.8")
            .parse::<Dataset>()
            .unwrap();
        assert!(EssiData::from_dataset(&dataset).is_err());
    }

    #[test]
    fn dataset_duplicate_carrier() {
        let dataset = TDATASET
            .replace("PRODUCCION, 1,", "PRODUCCION, 0,")
            .parse::<Dataset>()
            .unwrap();
        assert!(EssiData::from_dataset(&dataset).is_err());
    }

    #[test]
    fn dataset_time_axis_errors() {
        // time axis with a wrong number of entries
        let dataset = TDATASET
            .replace(
                "TIEMPO, 0.00, 1.00, 2.00, 3.00",
                "TIEMPO, 0.00, 1.00, 2.00",
            )
            .parse::<Dataset>()
            .unwrap();
        match EssiData::from_dataset(&dataset) {
            Err(EssiError::VectorLength { vector, .. }) => assert_eq!(vector, TIME_TAG),
            other => panic!("se esperaba VectorLength y se obtuvo {:?}", other),
        }
    }

    #[test]
    fn dataset_unknown_tag() {
        assert!("CONSUMO, 0, 1.00, 2.00".parse::<Dataset>().is_err());
    }
}
