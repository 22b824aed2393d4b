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
use crate::error::ApproximationError;
use crate::options::ApproximationOptions;
use crate::sample::{same, Sample};
use crate::search::{coefficients, filter_for_similarity};
use crate::Float;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Approximates a function of `N` variables from a set of samples.
///
/// Queries are answered by fitting a hyperplane through `N+1` (or
/// fewer, if some coordinates of the query are matched exactly by the
/// data) samples close to the query point, and evaluating it there. This
/// means that it interpolates within the data and extrapolates outside of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SerializedApproximation")]
pub struct LinearApproximation {
    dimensions: usize,
    options: ApproximationOptions,
    samples: Vec<Sample>,
}

/// What is read from files, before validation
#[derive(Deserialize)]
struct SerializedApproximation {
    dimensions: usize,
    #[serde(default)]
    options: ApproximationOptions,
    #[serde(default)]
    samples: Vec<Sample>,
}

impl TryFrom<SerializedApproximation> for LinearApproximation {
    type Error = ApproximationError;

    fn try_from(value: SerializedApproximation) -> Result<Self, Self::Error> {
        let mut ret = Self::with_options(value.dimensions, value.options)?;
        for sample in value.samples {
            ret.add_vals(&sample.coordinates, sample.result)?;
        }
        Ok(ret)
    }
}

impl LinearApproximation {
    /// Creates an empty approximation of a function of `dimensions` variables
    pub fn new(dimensions: usize) -> Result<Self, ApproximationError> {
        Self::with_options(dimensions, ApproximationOptions::default())
    }

    /// Creates an empty approximation with custom options
    pub fn with_options(
        dimensions: usize,
        options: ApproximationOptions,
    ) -> Result<Self, ApproximationError> {
        if dimensions == 0 {
            return Err(ApproximationError::ZeroDimensions);
        }
        Ok(Self {
            dimensions,
            options,
            samples: Vec::new(),
        })
    }

    /// The number of input variables
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The numerical options
    pub fn options(&self) -> &ApproximationOptions {
        &self.options
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Checks whether there are no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterates over the samples, in the order in which they were added
    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    fn check_dimensions(&self, coordinates: &[Float]) -> Result<(), ApproximationError> {
        if coordinates.len() != self.dimensions {
            return Err(ApproximationError::DimensionMismatch {
                expected: self.dimensions,
                found: coordinates.len(),
            });
        }
        Ok(())
    }

    fn find(&self, coordinates: &[Float]) -> Option<&Sample> {
        self.samples
            .iter()
            .find(|s| s.is_at(coordinates, self.options.tolerance))
    }

    /// Adds a sample.
    ///
    /// Adding the same sample twice does nothing; adding a different
    /// result at the same coordinates is an error, and leaves the data untouched.
    pub fn add_vals(
        &mut self,
        coordinates: &[Float],
        result: Float,
    ) -> Result<(), ApproximationError> {
        self.check_dimensions(coordinates)?;
        if let Some(existing) = self.find(coordinates) {
            if same(existing.result, result, self.options.tolerance) {
                return Ok(());
            }
            return Err(ApproximationError::ConflictingData {
                coordinates: coordinates.to_vec(),
                existing: existing.result,
                new: result,
            });
        }
        self.samples.push(Sample {
            coordinates: coordinates.to_vec(),
            result,
        });
        Ok(())
    }

    /// Estimates the value of the function at `coordinates`.
    ///
    /// A sample at `coordinates` is returned as is. Otherwise, the samples
    /// are sorted by distance and a hyperplane is fitted through the closest
    /// ones. Samples that differ from the query in fewer coordinates are
    /// tried first: first those that differ in only one coordinate, then
    /// in two, and so on.
    pub fn approximate(&self, coordinates: &[Float]) -> Result<Float, ApproximationError> {
        self.check_dimensions(coordinates)?;
        if self.samples.is_empty() {
            return Err(ApproximationError::NotEnoughData);
        }
        if let Some(s) = self.find(coordinates) {
            return Ok(s.result);
        }

        let mut sorted: Vec<(Float, &Sample)> = self
            .samples
            .iter()
            .map(|s| (s.distance(coordinates), s))
            .collect();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let tolerance = self.options.tolerance;
        let mut last_error = ApproximationError::NotEnoughData;
        for level in 1..=self.dimensions {
            let pool: Vec<&Sample> = sorted
                .iter()
                .map(|(_, s)| *s)
                .filter(|s| s.count_differences(coordinates, tolerance) <= level)
                .collect();
            if pool.is_empty() {
                trace!("No samples differ in {} coordinates or less", level);
                last_error = ApproximationError::NotEnoughData;
                continue;
            }

            match self.evaluate(&pool, coordinates) {
                Ok(v) => {
                    debug!(
                        "Approximated {:?} from {} samples differing in up to {} coordinates",
                        coordinates,
                        pool.len(),
                        level
                    );
                    return Ok(v);
                }
                Err(e) => {
                    trace!("Could not approximate at level {}: {}", level, e);
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }

    /// Fits a hyperplane through some of the samples in `pool`
    /// and evaluates it at `coordinates`
    fn evaluate(
        &self,
        pool: &[&Sample],
        coordinates: &[Float],
    ) -> Result<Float, ApproximationError> {
        let system = filter_for_similarity(
            pool,
            coordinates,
            self.options.tolerance,
            self.options.search_budget,
        )?;
        let c = coefficients(&system, self.dimensions)?;
        let anchor = system.points[0];
        trace!(
            "Anchor at {:?}; coefficients are {:?}",
            anchor.coordinates,
            c
        );

        let c_result = c[self.dimensions];
        if c_result.abs() <= self.options.tolerance {
            return Err(ApproximationError::NotEnoughData);
        }

        let mut ret = c_result * anchor.result;
        for (i, q) in coordinates.iter().enumerate() {
            ret -= c[i] * (q - anchor.coordinates[i]);
        }
        Ok(ret / c_result)
    }

    /// The sum of the results of all samples, divided by the number
    /// of dimensions. Returns 0 if there are no samples.
    pub fn average(&self) -> Float {
        let sum: Float = self.samples.iter().map(|s| s.result).sum();
        sum / self.dimensions as Float
    }

    /// The Euclidean distances from `coordinates` to the nearest and
    /// to the furthest samples
    pub fn nearest_furthest_neighbor_distances(
        &self,
        coordinates: &[Float],
    ) -> Result<(Float, Float), ApproximationError> {
        self.check_dimensions(coordinates)?;
        if self.samples.is_empty() {
            return Err(ApproximationError::NotEnoughData);
        }
        let ret = self.samples.iter().map(|s| s.distance(coordinates)).fold(
            (Float::INFINITY, Float::NEG_INFINITY),
            |(nearest, furthest), d| (nearest.min(d), furthest.max(d)),
        );
        Ok(ret)
    }
}

impl std::ops::Sub for &LinearApproximation {
    type Output = Result<LinearApproximation, ApproximationError>;

    /// The difference between the results of the samples that are
    /// present in both approximations. Samples present in only
    /// one of them are ignored.
    fn sub(self, rhs: Self) -> Self::Output {
        if self.dimensions != rhs.dimensions {
            return Err(ApproximationError::DimensionMismatch {
                expected: self.dimensions,
                found: rhs.dimensions,
            });
        }
        let mut ret = LinearApproximation::with_options(self.dimensions, self.options)?;
        for sample in self.samples.iter() {
            if let Some(other) = rhs.find(&sample.coordinates) {
                ret.add_vals(&sample.coordinates, sample.result - other.result)?;
            }
        }
        Ok(ret)
    }
}
