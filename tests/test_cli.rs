#[test]
fn ejemplo_basico() {
    assert_cli::Assert::main_binary()
        .with_args(&["-c", "test_data/essi_test_dataset.csv"])
        .stdout()
        .contains("- SPG (autoproducción): 1.0000")
        .stdout()
        .contains("- SAG (adecuación): 0.5000")
        .stdout()
        .contains("- AUG (autonomía): 0.7500")
        .stdout()
        .contains("- SSG (autosuficiencia): 1.0000")
        .stdout()
        .contains("- AUT (autarquía): 0.9000")
        .stdout()
        .contains("ESSI = 0.8200")
        .unwrap();
}

#[test]
fn ejemplo_pesos_usuario() {
    // with all the weight on SPG the index equals the SPG subindex
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-c",
            "test_data/essi_test_dataset.csv",
            "-w",
            "1.0",
            "0.0",
            "0.0",
            "0.0",
            "0.0",
        ])
        .stdout()
        .contains("Pesos de los subíndices (usuario): [1.00, 0.00, 0.00, 0.00, 0.00]")
        .stdout()
        .contains("ESSI = 1.0000")
        .unwrap();
}

#[test]
fn ejemplo_sigma_usuario() {
    // sigma from the CLI overrides the dataset metadata
    assert_cli::Assert::main_binary()
        .with_args(&["-c", "test_data/essi_test_dataset.csv", "-s", "0.5"])
        .stdout()
        .contains("Factor de autarquía sigma (usuario): 0.50")
        .stdout()
        .contains("- AUT (autarquía): 0.5000")
        .unwrap();
}

#[test]
fn ejemplo_archivo_incorrecto() {
    assert_cli::Assert::main_binary()
        .with_args(&["-c", "test_data/no_existe.csv"])
        .fails()
        .unwrap();
}
