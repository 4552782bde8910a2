//! Mechanical energy diagnostic.

use crate::simulation::states::NVec2;

/// Kinetic and potential energy of one snapshot.
///
/// Kinetic is `1/2 sum m_i |v_i|^2`; potential sums `-g m_i m_j / |r_ij|`
/// over unordered pairs. `g` must match the gravitational constant used by
/// the acceleration model. Calling this per snapshot builds an energy-vs-time
/// accuracy profile; the integrators never consume it.
pub fn total_energy(
    positions: &[NVec2],
    velocities: &[NVec2],
    masses: &[f64],
    g: f64,
) -> (f64, f64) {
    let kinetic: f64 = velocities
        .iter()
        .zip(masses.iter())
        .map(|(v, m)| 0.5 * m * v.norm_squared())
        .sum();

    let mut potential = 0.0;
    let n = masses.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let r = (positions[i] - positions[j]).norm();
            potential -= g * masses[i] * masses[j] / r;
        }
    }

    (kinetic, potential)
}
