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

#[macro_use]
extern crate clap;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;
use std::str::FromStr;

use clap::{App, AppSettings, Arg};
use failure::Error;
use failure::ResultExt;

use essi::types::*;
use essi::*;

// Funciones auxiliares -----------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("Archivo {} no encontrado", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Error al leer el archivo")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) {
    let mut file = File::create(&path).unwrap_or_else(|err| {
        eprintln!(
            "ERROR: no se ha podido crear el archivo \"{}\": {}",
            path.display(),
            err
        );
        exit(exitcode::CANTCREAT);
    });
    if let Err(err) = file.write_all(content) {
        eprintln!("ERROR: no se ha podido escribir en {}: {}", path.display(), err);
        exit(exitcode::IOERR);
    }
}

/// Carga el conjunto de datos desde el archivo indicado
fn get_dataset(archivo: &str) -> Dataset {
    let path = Path::new(archivo);
    if let Ok(datasetstring) = readfile(path) {
        println!("Datos de flujos energéticos: \"{}\"", path.display());
        match datasetstring.parse::<Dataset>() {
            Ok(dataset) => dataset,
            Err(err) => {
                eprintln!(
                    "ERROR: Formato incorrecto del archivo de datos \"{}\" ({})",
                    archivo, err
                );
                exit(exitcode::DATAERR);
            }
        }
    } else {
        eprintln!(
            "ERROR: No se ha podido leer el archivo de datos de flujos energéticos {}",
            path.display()
        );
        exit(exitcode::IOERR);
    }
}

/// Obtén pesos de los subíndices
/// Argumentos de CLI > Metadatos del archivo de datos > Valor por defecto (WEIGHTS_DEFAULT)
fn get_weights(dataset: &mut Dataset, matches: &clap::ArgMatches<'_>) -> Weights {
    let weights;
    if let Some(values) = matches.values_of("pesos") {
        let valuelist = values.collect::<Vec<_>>().join(", ");
        weights = Weights::from_str(&valuelist).unwrap_or_else(|error| {
            eprintln!("ERROR: pesos no válidos ({})", error);
            exit(exitcode::DATAERR);
        });
        println!("Pesos de los subíndices (usuario): [{}]", weights);
    } else if dataset.has_meta("ESSI_PESOS") {
        weights = dataset.get_meta_weights("ESSI_PESOS").unwrap_or_else(|| {
            eprintln!("ERROR: los pesos de los metadatos no son válidos");
            exit(exitcode::DATAERR);
        });
        println!("Pesos de los subíndices (metadatos): [{}]", weights);
    } else {
        weights = WEIGHTS_DEFAULT;
        println!("Pesos de los subíndices (predefinidos): [{}]", weights);
    }
    // Actualiza metadato ESSI_PESOS al valor seleccionado
    dataset.set_meta("ESSI_PESOS", &weights.to_string());
    weights
}

/// Obtén factor de autarquía sigma
/// Argumentos de CLI > Metadatos del archivo de datos (sin valor por defecto)
fn get_sigma(dataset: &mut Dataset, matches: &clap::ArgMatches<'_>) {
    if matches.is_present("sigma") {
        let sigma = value_t!(matches, "sigma", f32).unwrap_or_else(|_| {
            eprintln!("ERROR: El factor de autarquía indicado no es un valor numérico válido");
            exit(exitcode::DATAERR);
        });
        println!("Factor de autarquía sigma (usuario): {:.2}", sigma);
        dataset.set_meta("ESSI_SIGMA", &format!("{}", sigma));
    } else if let Some(sigma) = dataset.get_meta_f32("ESSI_SIGMA") {
        println!("Factor de autarquía sigma (metadatos): {:.2}", sigma);
    } else {
        eprintln!(
            "ERROR: Sin datos suficientes para determinar el factor de autarquía sigma. \
             Debe definirse en los metadatos (ESSI_SIGMA) o en la interfaz (--sigma)"
        );
        exit(exitcode::USAGE);
    }
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("Essi")
        .bin_name("essi")
        .version(env!("CARGO_PKG_VERSION"))
        .author("
Copyright (c) 2018-2019 Ministerio de Fomento,
                        Instituto de CC. de la Construcción Eduardo Torroja (IETcc-CSIC)

Autores: Rafael Villar Burke <pachi@ietcc.csic.es>,
         Daniel Jiménez González <dani@ietcc.csic.es>
         Marta Sorribes Gil <msorribes@ietcc.csic.es>

Licencia: Publicado bajo licencia MIT.

")
        .about("Essi - Índice de seguridad de suministro energético (ESSI).")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("archivo_datos")
            .short("c")
            .long("archivo_datos")
            .value_name("ARCHIVO_DATOS")
            .required_unless("showlicense")
            .help("Archivo de datos de los flujos energéticos")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("pesos")
            .short("w")
            .long("pesos")
            .value_names(&["W1", "W2", "W3", "W4", "W5"])
            .help("Pesos de los subíndices SPG, SAG, AUG, SSG y AUT.\nP.e.: -w 0.1 0.2 0.3 0.35 0.05")
            .takes_value(true)
            .number_of_values(5)
            .display_order(2))
        .arg(Arg::with_name("sigma")
            .short("s")
            .long("sigma")
            .value_name("SIGMA")
            .help("Factor de autarquía sigma")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("ARCHIVO_SALIDA_JSON")
            .help("Archivo de salida de resultados detallados en formato JSON")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("licencia")
            .help("Muestra la licencia del programa (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Copyright (c) 2018-2019 Ministerio de Fomento
                        Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.

Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>
           Daniel Jiménez González <dani@ietcc.csic.es>
           Marta Sorribes Gil <msorribes@ietcc.csic.es>"
        );
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");

    if verbosity > 2 {
        println!("Opciones indicadas: ----------");
        println!("{:#?}", matches);
        println!("------------------------------");
    }

    println!("** Datos de entrada");

    // Datos de flujos energéticos ----------------------------------------------------------------
    let mut dataset = get_dataset(matches.value_of("archivo_datos").unwrap());

    if verbosity > 1 && !dataset.dmeta.is_empty() {
        println!("Metadatos del archivo de datos:");
        for meta in &dataset.dmeta {
            println!("  {}: {}", meta.key, meta.value);
        }
    }

    // Pesos de los subíndices --------------------------------------------------------------------
    // Argumentos de CLI > Metadatos del archivo > Valor por defecto
    let weights = get_weights(&mut dataset, &matches);

    // Factor de autarquía ------------------------------------------------------------------------
    // Argumentos de CLI > Metadatos del archivo (sin valor por defecto)
    get_sigma(&mut dataset, &matches);

    // Validación de dimensiones ------------------------------------------------------------------
    let data = EssiData::from_dataset(&dataset).unwrap_or_else(|error| {
        eprintln!(
            "ERROR: El archivo de datos no es estructuralmente consistente ({})",
            error
        );
        exit(exitcode::DATAERR);
    });

    if verbosity > 0 {
        println!(
            "Dimensiones: {} pasos x {} vectores energéticos, dt = {:.2}",
            data.num_steps(),
            data.num_carriers(),
            data.dt
        );
    }

    // Cálculo del índice -------------------------------------------------------------------------
    let index = security_index(&data, &weights).unwrap_or_else(|error| {
        eprintln!(
            "ERROR: No se ha podido calcular el índice de seguridad de suministro ({})",
            error
        );
        exit(exitcode::DATAERR);
    });

    // Salida de resultados -----------------------------------------------------------------------
    // Guardar resultados en formato json
    if matches.is_present("archivo_salida_json") {
        let path = Path::new(matches.value_of_os("archivo_salida_json").unwrap());
        if verbosity > 0 {
            println!("Resultados en formato JSON: {:?}", path.display());
        }
        let json = serde_json::to_string_pretty(&index).unwrap_or_else(|error| {
            eprintln!(
                "ERROR: No se han podido convertir los resultados al formato JSON ({})",
                error
            );
            exit(exitcode::DATAERR);
        });
        writefile(&path, json.as_bytes());
    }

    // Mostrar siempre en formato plain
    println!("{}", index.to_plain());
}
