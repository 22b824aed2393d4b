/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/
use crate::error::Error;
use crate::options::Options;
use approximation::{ApproximationOptions, LinearApproximation};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};
use weather::{EpwData, IsoWeatherData};

/// Reads an EPW file and calculates its ISO 13790 climate summary
pub fn summarize<P: AsRef<Path>>(epw_file: P, options: &Options) -> Result<IsoWeatherData, Error> {
    let epw = EpwData::from_file(epw_file)?;
    let iso = epw.to_iso_data_with(&options.radiation);
    info!("Calculated climate summary for {}", epw.name());
    Ok(iso)
}

/// Reads a [`LinearApproximation`] from a JSON file. If `options`
/// are given, they replace the ones in the file.
pub fn load_approximation<P: AsRef<Path>>(
    path: P,
    options: Option<&ApproximationOptions>,
) -> Result<LinearApproximation, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    let loaded: LinearApproximation = serde_json::from_reader(BufReader::new(file))?;
    debug!(
        "Loaded {} samples of {} dimensions from '{}'",
        loaded.len(),
        loaded.dimensions(),
        path.display()
    );

    match options {
        None => Ok(loaded),
        Some(options) => {
            let mut ret = LinearApproximation::with_options(loaded.dimensions(), *options)?;
            for sample in loaded.samples() {
                ret.add_vals(&sample.coordinates, sample.result)?;
            }
            Ok(ret)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_approximation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("samples.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(
            br#"{"dimensions": 1, "samples": [
                {"coordinates": [0.0], "result": 1.0},
                {"coordinates": [1.0], "result": 3.0}
            ]}"#,
        )
        .unwrap();

        let approx = load_approximation(&path, None).unwrap();
        assert_eq!(approx.len(), 2);
        assert_eq!(approx.options(), &ApproximationOptions::default());
        assert_eq!(approx.approximate(&[1.0]).unwrap(), 3.0);

        let options = ApproximationOptions {
            tolerance: 0.5,
            search_budget: 10,
        };
        let approx = load_approximation(&path, Some(&options)).unwrap();
        assert_eq!(approx.options(), &options);
        // Close enough
        assert_eq!(approx.approximate(&[1.2]).unwrap(), 3.0);
    }

    #[test]
    fn test_missing_files() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            load_approximation(dir.path().join("nope.json"), None),
            Err(Error::Io { .. })
        ));
        assert!(matches!(
            summarize(dir.path().join("nope.epw"), &Options::default()),
            Err(Error::Weather(weather::EpwError::Io { .. }))
        ));
    }
}
