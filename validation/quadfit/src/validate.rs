use quadfit::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    /// Allowed error per coefficient, scaled by `max(1, |expected|)`.
    tolerance: f64,
    input: InputData,
    /// `None` when no finite fit exists and the solver must report non-finite coefficients.
    expected: Option<CoefficientData>,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    x: Vec<f64>,
    y: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct CoefficientData {
    a: f64,
    b: f64,
    c: f64,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    coefficients: CoefficientData,
    max_scaled_error: Option<f64>,
    r_squared: f64,
    passed: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let input_dir = root.join("../output/reference");
    let output_dir = root.join("../output/quadfit");

    if !input_dir.exists() {
        return Err(format!("input directory {:?} does not exist", input_dir).into());
    }

    fs::create_dir_all(&output_dir)?;

    let mut paths: Vec<PathBuf> = fs::read_dir(&input_dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    paths.retain(|p| p.extension().and_then(|s| s.to_str()) == Some("json"));
    paths.sort();

    if paths.is_empty() {
        return Err(format!("no reference cases in {:?}", input_dir).into());
    }

    let mut failed = Vec::new();
    for path in &paths {
        println!("Processing {:?}", path.file_name().unwrap_or_default());
        let data = process_file(path, &output_dir)?;
        if !data.result.passed {
            failed.push(data.name);
        }
    }

    println!("{} of {} cases passed", paths.len() - failed.len(), paths.len());
    if !failed.is_empty() {
        return Err(format!("failed cases: {}", failed.join(", ")).into());
    }

    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<ValidationData, Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    if data.input.x.len() != data.input.y.len() {
        return Err(format!(
            "{}: x has {} values but y has {}",
            data.name,
            data.input.x.len(),
            data.input.y.len()
        )
        .into());
    }

    let fit: QuadraticFit<f64> = data
        .input
        .x
        .iter()
        .copied()
        .zip(data.input.y.iter().copied())
        .collect();

    let coeffs = fit.coefficients();

    let (max_scaled_error, passed) = match &data.expected {
        Some(expected) => {
            let err = [
                (coeffs.a, expected.a),
                (coeffs.b, expected.b),
                (coeffs.c, expected.c),
            ]
            .iter()
            .map(|&(got, want)| (got - want).abs() / want.abs().max(1.0))
            .fold(0.0f64, f64::max);
            // NaN compares false, so a non-finite fit fails here.
            (Some(err), coeffs.is_finite() && err <= data.tolerance)
        }
        None => {
            if coeffs.is_finite() {
                log::warn!("{}: expected a non-finite fit, got {:?}", data.name, coeffs);
            }
            (None, !coeffs.is_finite())
        }
    };

    data.result = ResultData {
        coefficients: CoefficientData {
            a: coeffs.a,
            b: coeffs.b,
            c: coeffs.c,
        },
        max_scaled_error,
        r_squared: fit.diagnostics().r_squared,
        passed,
    };

    match max_scaled_error {
        Some(err) => println!(
            "  {}: max scaled error = {:.3e} (tolerance {:.0e}) {}",
            data.name,
            err,
            data.tolerance,
            if passed { "ok" } else { "FAILED" }
        ),
        None => println!(
            "  {}: non-finite fit expected {}",
            data.name,
            if passed { "ok" } else { "FAILED" }
        ),
    }

    let file_name = input_path
        .file_name()
        .ok_or_else(|| format!("{:?} has no file name", input_path))?;
    let output_path = output_dir.join(file_name);
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_path, output_json)?;

    Ok(data)
}
