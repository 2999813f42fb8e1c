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
Líneas de datos del archivo de flujos energéticos
=================================================

Data lines of the dataset file:

- `FlowSeries`: the time series of one energy carrier for one flow, e.g.
  `DEMANDA, 0, 16.39, 13.11, 8.20 # electricidad`
- `CarrierVector`: a per-carrier constant vector, e.g.
  `ALM_FIN, 0.00, 4.00`

Carriers are positionally aligned across flows: carrier index i refers to
the same energy carrier in every dataset.
*/

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::{EssiError, Result};
use crate::types::{Flow, VectorKind};

// -------------------- FlowSeries

/// Serie temporal de un vector energético para un flujo de energía
///
/// Time series of one energy carrier (column index) for one energy flow
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSeries {
    /// Energy flow this series belongs to
    pub flow: Flow,
    /// Carrier column index (0-based, aligned across flows)
    pub carrier: usize,
    /// Energy values, one per timestep
    pub values: Vec<f32>,
    /// Comment
    pub comment: String,
}

impl fmt::Display for FlowSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valuelist = self.values.iter().map(|v| format!("{:.2}", v)).join(", ");
        let comment = if self.comment.is_empty() {
            "".to_string()
        } else {
            format!(" # {}", self.comment)
        };
        write!(f, "{}, {}, {}{}", self.flow, self.carrier, valuelist, comment)
    }
}

impl FromStr for FlowSeries {
    type Err = EssiError;

    fn from_str(s: &str) -> Result<FlowSeries> {
        let items: Vec<&str> = s.trim().splitn(2, '#').map(str::trim).collect();
        let comment = items.get(1).unwrap_or(&"").to_string();
        let items: Vec<&str> = items[0].split(',').map(str::trim).collect();
        if items.len() < 3 {
            return Err(EssiError::ParseError(format!(
                "Flow series needs a flow, a carrier index and at least one value: \"{}\"",
                s
            )));
        };
        let flow = items[0]
            .parse::<Flow>()
            .map_err(|_| EssiError::ParseError(s.into()))?;
        let carrier = items[1].parse::<usize>()?;
        let values = items[2..]
            .iter()
            .map(|v| v.parse::<f32>())
            .collect::<std::result::Result<Vec<f32>, _>>()?;
        Ok(FlowSeries {
            flow,
            carrier,
            values,
            comment,
        })
    }
}

// -------------------- CarrierVector

/// Vector de constantes, con un valor por vector energético
///
/// Per-carrier constant vector (one value per carrier, in carrier order)
#[derive(Debug, Clone, PartialEq)]
pub struct CarrierVector {
    /// Kind of constant vector
    pub kind: VectorKind,
    /// Values, one per carrier
    pub values: Vec<f32>,
    /// Comment
    pub comment: String,
}

impl fmt::Display for CarrierVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valuelist = self.values.iter().map(|v| format!("{:.2}", v)).join(", ");
        let comment = if self.comment.is_empty() {
            "".to_string()
        } else {
            format!(" # {}", self.comment)
        };
        write!(f, "{}, {}{}", self.kind, valuelist, comment)
    }
}

impl FromStr for CarrierVector {
    type Err = EssiError;

    fn from_str(s: &str) -> Result<CarrierVector> {
        let items: Vec<&str> = s.trim().splitn(2, '#').map(str::trim).collect();
        let comment = items.get(1).unwrap_or(&"").to_string();
        let items: Vec<&str> = items[0].split(',').map(str::trim).collect();
        if items.len() < 2 {
            return Err(EssiError::ParseError(format!(
                "Carrier vector needs a kind and at least one value: \"{}\"",
                s
            )));
        };
        let kind = items[0]
            .parse::<VectorKind>()
            .map_err(|_| EssiError::ParseError(s.into()))?;
        let values = items[1..]
            .iter()
            .map(|v| v.parse::<f32>())
            .collect::<std::result::Result<Vec<f32>, _>>()?;
        Ok(CarrierVector {
            kind,
            values,
            comment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flow_series_roundtrip() {
        let series = FlowSeries {
            flow: Flow::DEMANDA,
            carrier: 1,
            values: vec![16.39, 13.11, 8.2],
            comment: "gas natural".into(),
        };
        let seriesstr = "DEMANDA, 1, 16.39, 13.11, 8.20 # gas natural";
        assert_eq!(seriesstr, format!("{}", series));
        assert_eq!(
            seriesstr,
            format!("{}", seriesstr.parse::<FlowSeries>().unwrap())
        );
    }

    #[test]
    fn flow_series_errors() {
        assert!("DEMANDA, 1".parse::<FlowSeries>().is_err());
        assert!("CONSUMO, 1, 2.00".parse::<FlowSeries>().is_err());
        assert!("DEMANDA, x, 2.00".parse::<FlowSeries>().is_err());
    }

    #[test]
    fn carrier_vector_roundtrip() {
        let vector = CarrierVector {
            kind: VectorKind::ALM_FIN,
            values: vec![0.0, 4.0],
            comment: "".into(),
        };
        let vectorstr = "ALM_FIN, 0.00, 4.00";
        assert_eq!(vectorstr, format!("{}", vector));
        assert_eq!(
            vectorstr,
            format!("{}", vectorstr.parse::<CarrierVector>().unwrap())
        );
    }
}
