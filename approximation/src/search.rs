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
use crate::sample::{same, Sample};
use crate::Float;
use matrix::Matrix;
use tracing::trace;

/// A set of samples through which a single hyperplane is fitted
#[derive(Debug)]
pub(crate) struct ReducedSystem<'a> {
    /// Dimensions along which the samples differ from the query point. All
    /// other dimensions are matched, and their coefficient is zero.
    pub free: Vec<usize>,

    /// `free.len() + 1` samples. The first one is the anchor.
    pub points: Vec<&'a Sample>,
}

/// Chooses, from `pool` (sorted by distance), the samples through which the
/// hyperplane will be fitted.
///
/// Dimensions in which every sample equals the query drop out of the problem.
/// A dimension that does not vary across the pool (and does not match the query)
/// cannot be solved for.
pub(crate) fn filter_for_similarity<'a>(
    pool: &[&'a Sample],
    query: &[Float],
    tolerance: Float,
    budget: usize,
) -> Result<ReducedSystem<'a>, ApproximationError> {
    let first = pool.first().ok_or(ApproximationError::NotEnoughData)?;

    let mut free = Vec::with_capacity(query.len());
    for (dimension, q) in query.iter().enumerate() {
        let matched = pool
            .iter()
            .all(|s| same(s.coordinates[dimension], *q, tolerance));
        if matched {
            continue;
        }
        let constant = pool
            .iter()
            .all(|s| same(s.coordinates[dimension], first.coordinates[dimension], tolerance));
        if constant {
            return Err(ApproximationError::InsufficientDiversity { dimension });
        }
        free.push(dimension);
    }

    let target = free.len() + 1;
    if pool.len() < target {
        return Err(ApproximationError::NotEnoughData);
    }

    let chosen = find_minimal_differences(pool, &free, target, tolerance, budget)?;
    Ok(ReducedSystem {
        free,
        points: chosen.into_iter().map(|i| pool[i]).collect(),
    })
}

/// Recursive search of `target` samples whose differences with the first
/// of them (i.e., the anchor) are linearly independent over the `free`
/// dimensions. Candidates are tried in the order of `pool`, so the closest
/// points are preferred.
///
/// Returns the positions of the chosen samples within `pool`.
pub(crate) fn find_minimal_differences(
    pool: &[&Sample],
    free: &[usize],
    target: usize,
    tolerance: Float,
    budget: usize,
) -> Result<Vec<usize>, ApproximationError> {
    let mut search = Search {
        pool,
        free,
        target,
        tolerance,
        budget,
        best: Vec::new(),
    };
    let mut chosen = Vec::with_capacity(target);
    search.recurse(&mut chosen, 0);

    if search.best.len() == target {
        trace!("Found {} samples", target);
        return Ok(search.best);
    }

    let dimension = search.uncovered_dimension();
    trace!(
        "Found only {} of {} samples; dimension {} is not covered",
        search.best.len(),
        target,
        dimension
    );
    Err(ApproximationError::InsufficientDiversity { dimension })
}

struct Search<'a, 'b> {
    pool: &'b [&'a Sample],
    free: &'b [usize],
    target: usize,
    tolerance: Float,

    /// Remaining calls to `recurse`
    budget: usize,

    /// The largest set found so far
    best: Vec<usize>,
}

impl<'a, 'b> Search<'a, 'b> {
    /// Returns `true` when the target is reached
    fn recurse(&mut self, chosen: &mut Vec<usize>, next: usize) -> bool {
        if self.budget == 0 {
            return false;
        }
        self.budget -= 1;

        if chosen.len() > self.best.len() {
            self.best = chosen.clone();
        }
        if chosen.len() == self.target {
            return true;
        }

        for candidate in next..self.pool.len() {
            if !chosen.is_empty() && !self.raises_rank(chosen, candidate) {
                continue;
            }
            chosen.push(candidate);
            if self.recurse(chosen, candidate + 1) {
                return true;
            }
            chosen.pop();
            if self.budget == 0 {
                break;
            }
        }
        false
    }

    /// Differences between the samples in `chosen` (except the first one) and the
    /// first one, over the free dimensions. One row per sample.
    fn differences(&self, chosen: &[usize]) -> Matrix {
        let ncols = self.free.len();
        let (anchor, rest) = match chosen.split_first() {
            Some(v) => v,
            None => return Matrix::zeroes(0, ncols),
        };
        let anchor = self.pool[*anchor];
        let mut data = Vec::with_capacity(rest.len() * ncols);
        for i in rest {
            let s = self.pool[*i];
            for d in self.free {
                data.push(s.coordinates[*d] - anchor.coordinates[*d]);
            }
        }
        Matrix::from_data(rest.len(), ncols, data)
    }

    /// Checks whether adding `candidate` to `chosen` increases
    /// the rank of their differences.
    fn raises_rank(&self, chosen: &[usize], candidate: usize) -> bool {
        let mut with_candidate = chosen.to_vec();
        with_candidate.push(candidate);
        let m = self.differences(&with_candidate);
        m.rank(self.tolerance) == m.size().0
    }

    /// The first free dimension that is not spanned by the
    /// best set found
    fn uncovered_dimension(&self) -> usize {
        let differences = self.differences(&self.best);
        let (nrows, ncols) = differences.size();
        let rank = differences.rank(self.tolerance);
        for (position, dimension) in self.free.iter().enumerate() {
            let mut data = differences.as_slice().to_vec();
            data.extend((0..ncols).map(|c| if c == position { 1.0 } else { 0.0 }));
            let extended = Matrix::from_data(nrows + 1, ncols, data);
            if extended.rank(self.tolerance) > rank {
                return *dimension;
            }
        }
        self.free.first().copied().unwrap_or(0)
    }
}

/// Calculates the coefficients of the hyperplane
/// $`c_0 (x_0 - a_0) + ... + c_{N-1} (x_{N-1} - a_{N-1}) + c_N (y - a_y) = 0`$
/// that goes through the points of `system`, where $`a`$ is the anchor.
///
/// Each coefficient is a signed minor of the matrix of differences
/// between the points and the anchor. Matched dimensions get a zero.
pub(crate) fn coefficients(
    system: &ReducedSystem,
    dimensions: usize,
) -> Result<Vec<Float>, ApproximationError> {
    let k = system.free.len();
    let (anchor, rest) = system
        .points
        .split_first()
        .ok_or(ApproximationError::NotEnoughData)?;
    if rest.len() != k {
        return Err(ApproximationError::NotEnoughData);
    }

    let mut data = Vec::with_capacity(k * (k + 1));
    for p in rest {
        for d in system.free.iter() {
            data.push(p.coordinates[*d] - anchor.coordinates[*d]);
        }
        data.push(p.result - anchor.result);
    }
    let differences = Matrix::from_data(k, k + 1, data);

    let mut ret = vec![0.0; dimensions + 1];
    for column in 0..=k {
        let others: Vec<usize> = (0..=k).filter(|c| *c != column).collect();
        let det = differences
            .select_columns(&others)
            .and_then(|m| m.determinant())
            .map_err(ApproximationError::Matrix)?;
        let sign = if column % 2 == 0 { 1.0 } else { -1.0 };
        let position = if column < k {
            system.free[column]
        } else {
            dimensions
        };
        ret[position] = sign * det;
    }
    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn samples(data: &[(&[Float], Float)]) -> Vec<Sample> {
        data.iter()
            .map(|(c, r)| Sample {
                coordinates: c.to_vec(),
                result: *r,
            })
            .collect()
    }

    #[test]
    fn test_matched_dimensions_drop_out() {
        let s = samples(&[(&[0., 5.], 1.), (&[1., 5.], 2.), (&[2., 5.], 3.)]);
        let pool: Vec<&Sample> = s.iter().collect();
        let system = filter_for_similarity(&pool, &[0.5, 5.], 0., 100).unwrap();
        assert_eq!(system.free, vec![0]);
        assert_eq!(system.points.len(), 2);
        assert_eq!(system.points[0].coordinates, vec![0., 5.]);
        assert_eq!(system.points[1].coordinates, vec![1., 5.]);
    }

    #[test]
    fn test_constant_dimension() {
        let s = samples(&[(&[0., 5.], 1.), (&[1., 5.], 2.)]);
        let pool: Vec<&Sample> = s.iter().collect();
        let e = filter_for_similarity(&pool, &[0.5, 4.], 0., 100).unwrap_err();
        assert_eq!(e, ApproximationError::InsufficientDiversity { dimension: 1 });
    }

    #[test]
    fn test_too_few_points() {
        let s = samples(&[(&[0., 0.], 1.), (&[1., 1.], 2.)]);
        let pool: Vec<&Sample> = s.iter().collect();
        let e = filter_for_similarity(&pool, &[0.5, 0.2], 0., 100).unwrap_err();
        assert_eq!(e, ApproximationError::NotEnoughData);

        let e = filter_for_similarity(&[], &[0.5, 0.2], 0., 100).unwrap_err();
        assert_eq!(e, ApproximationError::NotEnoughData);
    }

    #[test]
    fn test_skip_collinear() {
        // The second closest point is aligned with the first two
        let s = samples(&[
            (&[0., 0.], 0.),
            (&[1., 1.], 2.),
            (&[2., 2.], 4.),
            (&[3., 0.], 3.),
        ]);
        let pool: Vec<&Sample> = s.iter().collect();
        let chosen = find_minimal_differences(&pool, &[0, 1], 3, 0., 100).unwrap();
        assert_eq!(chosen, vec![0, 1, 3]);
    }

    #[test]
    fn test_all_collinear() {
        let s = samples(&[(&[0., 0.], 0.), (&[1., 1.], 2.), (&[2., 2.], 4.)]);
        let pool: Vec<&Sample> = s.iter().collect();
        let e = find_minimal_differences(&pool, &[0, 1], 3, 0., 100).unwrap_err();
        // The differences span (1,1), so (1,0) is missing
        assert_eq!(e, ApproximationError::InsufficientDiversity { dimension: 0 });
    }

    #[test]
    fn test_budget() {
        let s = samples(&[(&[0.], 0.), (&[1.], 2.)]);
        let pool: Vec<&Sample> = s.iter().collect();
        assert!(find_minimal_differences(&pool, &[0], 2, 0., 1).is_err());
        assert!(find_minimal_differences(&pool, &[0], 2, 0., 3).is_ok());
    }

    #[test]
    fn test_coefficients_line() {
        let s = samples(&[(&[0.], 0.), (&[1.], 10.)]);
        let system = ReducedSystem {
            free: vec![0],
            points: s.iter().collect(),
        };
        let c = coefficients(&system, 1).unwrap();
        assert_eq!(c, vec![10., -1.]);
    }

    #[test]
    fn test_coefficients_plane() {
        // y = x + 2z, with a matched dimension in the middle
        let s = samples(&[
            (&[0., 7., 1.], 2.),
            (&[0., 7., 0.], 0.),
            (&[1., 7., 1.], 3.),
        ]);
        let system = ReducedSystem {
            free: vec![0, 2],
            points: s.iter().collect(),
        };
        let c = coefficients(&system, 3).unwrap();
        assert_eq!(c.len(), 4);
        assert_eq!(c[1], 0.);
        // Normalized, the hyperplane is x + 2z - y = 0
        assert_relative_eq!(c[0] / -c[3], 1.);
        assert_relative_eq!(c[2] / -c[3], 2.);
    }
}
