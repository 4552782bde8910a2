//! Event detection over a finished trajectory.
//!
//! Scans time-aligned position series for pericentre passages (three-point
//! local minima of the relative distance) and near-collinear
//! star-planet-moon alignments, and derives the mean number of lunar orbits
//! between consecutive alignments. The input is a deterministic, noise-free
//! simulated series, so no smoothing is applied anywhere.

use serde::Serialize;

use crate::simulation::states::NVec2;

/// Default alignment threshold: 1.5 degrees, in radians.
pub const DEFAULT_ALIGNMENT_THRESHOLD: f64 = 1.5 * std::f64::consts::PI / 180.0;

/// Derived summary of a simulation run.
///
/// `mean_orbits_between_alignments` is `None` (absent, not zero) when fewer
/// than two alignments or no pericentre passages were observed.
#[derive(Debug, Clone, Serialize)]
pub struct OrbitalMetrics {
    pub moon_orbit_count: usize,
    pub mean_orbits_between_alignments: Option<f64>,
    pub alignment_times: Vec<f64>,
    pub pericentre_times: Vec<f64>,
}

/// Indices of strict three-point local minima of `distances`.
///
/// Only interior samples qualify: the first and last samples are never
/// flagged, even when smaller than their single neighbor.
pub fn pericentre_indices(distances: &[f64]) -> Vec<usize> {
    let mut indices = Vec::new();
    for i in 1..distances.len().saturating_sub(1) {
        if distances[i] < distances[i - 1] && distances[i] < distances[i + 1] {
            indices.push(i);
        }
    }
    indices
}

/// Pericentre passage times of the minor body relative to its reference.
pub fn detect_pericentre_passages(
    times: &[f64],
    minor_positions: &[NVec2],
    reference_positions: &[NVec2],
) -> Vec<f64> {
    let distances: Vec<f64> = minor_positions
        .iter()
        .zip(reference_positions.iter())
        .map(|(m, r)| (m - r).norm())
        .collect();
    pericentre_indices(&distances)
        .into_iter()
        .map(|i| times[i])
        .collect()
}

/// Times at which reference, primary, and minor bodies are nearly collinear.
///
/// Flags a sample when the angle between (primary - reference) and
/// (minor - primary) is at most `threshold` radians. Samples where either
/// vector vanishes are skipped; they are degenerate geometry, not errors.
pub fn detect_alignments(
    times: &[f64],
    reference_positions: &[NVec2],
    primary_positions: &[NVec2],
    minor_positions: &[NVec2],
    threshold: f64,
) -> Vec<f64> {
    let mut alignments = Vec::new();
    for idx in 0..times.len() {
        let sp = primary_positions[idx] - reference_positions[idx];
        let pm = minor_positions[idx] - primary_positions[idx];
        let sp_norm = sp.norm();
        let pm_norm = pm.norm();
        if sp_norm == 0.0 || pm_norm == 0.0 {
            continue;
        }

        // The quotient can overshoot [-1, 1] by a few ulps
        let cos_angle = (sp.dot(&pm) / (sp_norm * pm_norm)).clamp(-1.0, 1.0);
        if cos_angle.acos() <= threshold {
            alignments.push(times[idx]);
        }
    }
    alignments
}

/// Mean number of pericentre passages strictly inside each consecutive
/// alignment interval. Both inputs must be sorted ascending.
///
/// `None` when fewer than two alignments or no pericentres exist; callers
/// must not treat that as zero.
pub fn mean_orbits_between(alignments: &[f64], pericentres: &[f64]) -> Option<f64> {
    if alignments.len() < 2 || pericentres.is_empty() {
        return None;
    }

    let mut total = 0usize;
    let mut intervals = 0usize;
    for pair in alignments.windows(2) {
        let lo = pericentres.partition_point(|&t| t <= pair[0]);
        let hi = pericentres.partition_point(|&t| t < pair[1]);
        total += hi.saturating_sub(lo);
        intervals += 1;
    }
    Some(total as f64 / intervals as f64)
}

/// Compute derived orbital metrics for a star-planet-moon trajectory.
///
/// Pericentres are passages of the minor body around the primary; alignments
/// are near-collinear reference-primary-minor configurations within
/// `threshold` radians.
pub fn summarise_metrics(
    times: &[f64],
    reference_positions: &[NVec2],
    primary_positions: &[NVec2],
    minor_positions: &[NVec2],
    threshold: f64,
) -> OrbitalMetrics {
    let pericentre_times = detect_pericentre_passages(times, minor_positions, primary_positions);
    let alignment_times = detect_alignments(
        times,
        reference_positions,
        primary_positions,
        minor_positions,
        threshold,
    );

    let mean = mean_orbits_between(&alignment_times, &pericentre_times);

    OrbitalMetrics {
        moon_orbit_count: pericentre_times.len(),
        mean_orbits_between_alignments: mean,
        alignment_times,
        pericentre_times,
    }
}
