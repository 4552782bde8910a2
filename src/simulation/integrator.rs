//! Fixed-step time integrators for the three-body system.
//!
//! Provides the symplectic velocity-Verlet (leapfrog) scheme, the classic
//! 4th-order Runge-Kutta scheme, and a name-based dispatcher. Both
//! integrators are driven by an [`AccelSet`], advance a private working copy
//! of the caller's state, and record every snapshot into a [`Trajectory`].

use crate::error::{SimError, SimResult};
use crate::simulation::forces::AccelSet;
use crate::simulation::states::{NVec2, SystemState, Trajectory};

fn step_count(duration: f64, dt: f64) -> usize {
    (duration / dt).ceil() as usize
}

/// Integrate with velocity-Verlet over `ceil(duration/dt)` steps.
///
/// One new force evaluation per step, with the exact update ordering that
/// makes the scheme symplectic and time-reversible:
///
/// ```text
/// x_k = x_{k-1} + v_{k-1} dt + 1/2 a_{k-1} dt^2
/// a_k = accel(x_k)            // velocities still at v_{k-1}
/// v_k = v_{k-1} + 1/2 (a_{k-1} + a_k) dt
/// ```
pub fn leapfrog(state: &SystemState, duration: f64, dt: f64, forces: &AccelSet) -> Trajectory {
    let n_steps = step_count(duration, dt);
    let n = state.bodies.len();

    let mut times = Vec::with_capacity(n_steps + 1);
    let mut positions = Vec::with_capacity(n_steps + 1);
    let mut velocities = Vec::with_capacity(n_steps + 1);
    times.push(state.t);
    positions.push(state.positions());
    velocities.push(state.velocities());

    // Private working copy: repeatedly overwritten to feed the force
    // evaluations; the caller's state is never touched.
    let mut work = state.clone();

    let mut accel = vec![NVec2::zeros(); n];
    forces.accumulate_accels(work.t, &work, &mut accel);

    for step in 1..=n_steps {
        let prev_x = &positions[step - 1];
        let prev_v = &velocities[step - 1];

        // x_k = x_{k-1} + v_{k-1} dt + 1/2 a_{k-1} dt^2
        let new_x: Vec<NVec2> = prev_x
            .iter()
            .zip(prev_v.iter())
            .zip(accel.iter())
            .map(|((&x, &v), &a)| x + dt * v + 0.5 * dt * dt * a)
            .collect();

        // a_k from the new positions, velocities unchanged for this evaluation
        work.update(&new_x, prev_v);
        work.t += dt;
        let mut new_accel = vec![NVec2::zeros(); n];
        forces.accumulate_accels(work.t, &work, &mut new_accel);

        // v_k = v_{k-1} + 1/2 (a_{k-1} + a_k) dt
        let new_v: Vec<NVec2> = prev_v
            .iter()
            .zip(accel.iter().zip(new_accel.iter()))
            .map(|(&v, (&a0, &a1))| v + 0.5 * dt * (a0 + a1))
            .collect();

        times.push(work.t);
        positions.push(new_x);
        velocities.push(new_v);
        accel = new_accel;
    }

    Trajectory {
        times,
        positions,
        velocities,
    }
}

/// Integrate with classic 4th-order Runge-Kutta over `ceil(duration/dt)`
/// steps.
///
/// Four force evaluations per step on the coupled first-order system
/// (dx/dt = v, dv/dt = a). Each stage temporarily writes an intermediate
/// position/velocity into the working copy, evaluates the accelerations
/// there, and discards the intermediate state. Not symplectic: higher local
/// order, but energy drifts secularly over long runs.
pub fn rk4(state: &SystemState, duration: f64, dt: f64, forces: &AccelSet) -> Trajectory {
    let n_steps = step_count(duration, dt);
    let n = state.bodies.len();

    let mut times = Vec::with_capacity(n_steps + 1);
    let mut positions = Vec::with_capacity(n_steps + 1);
    let mut velocities = Vec::with_capacity(n_steps + 1);
    times.push(state.t);
    positions.push(state.positions());
    velocities.push(state.velocities());

    let mut work = state.clone();

    // One buffer per stage, reused across steps
    let mut a1 = vec![NVec2::zeros(); n];
    let mut a2 = vec![NVec2::zeros(); n];
    let mut a3 = vec![NVec2::zeros(); n];
    let mut a4 = vec![NVec2::zeros(); n];

    for step in 1..=n_steps {
        let pos = positions[step - 1].clone();
        let vel = velocities[step - 1].clone();
        let t0 = times[step - 1];

        // Stage 1: derivatives at the start of the step
        // k1_pos = v, k1_vel = a(x)
        work.update(&pos, &vel);
        work.t = t0;
        forces.accumulate_accels(work.t, &work, &mut a1);

        // Stage 2: midpoint using k1
        // k2_pos = v + dt/2 k1_vel, k2_vel = a(x + dt/2 k1_pos)
        let v2: Vec<NVec2> = vel
            .iter()
            .zip(a1.iter())
            .map(|(&v, &a)| v + 0.5 * dt * a)
            .collect();
        let p2: Vec<NVec2> = pos
            .iter()
            .zip(vel.iter())
            .map(|(&x, &v)| x + 0.5 * dt * v)
            .collect();
        work.update(&p2, &v2);
        work.t = t0 + 0.5 * dt;
        forces.accumulate_accels(work.t, &work, &mut a2);

        // Stage 3: midpoint using k2
        let v3: Vec<NVec2> = vel
            .iter()
            .zip(a2.iter())
            .map(|(&v, &a)| v + 0.5 * dt * a)
            .collect();
        let p3: Vec<NVec2> = pos
            .iter()
            .zip(v2.iter())
            .map(|(&x, &v)| x + 0.5 * dt * v)
            .collect();
        work.update(&p3, &v3);
        work.t = t0 + 0.5 * dt;
        forces.accumulate_accels(work.t, &work, &mut a3);

        // Stage 4: full step using k3
        let v4: Vec<NVec2> = vel
            .iter()
            .zip(a3.iter())
            .map(|(&v, &a)| v + dt * a)
            .collect();
        let p4: Vec<NVec2> = pos
            .iter()
            .zip(v3.iter())
            .map(|(&x, &v)| x + dt * v)
            .collect();
        work.update(&p4, &v4);
        work.t = t0 + dt;
        forces.accumulate_accels(work.t, &work, &mut a4);

        // Combine with weights 1, 2, 2, 1 scaled by dt/6.
        // The stage position-derivatives are the stage velocities:
        // k1_pos = vel, k2_pos = v2, k3_pos = v3, k4_pos = v4.
        let sixth = dt / 6.0;
        let new_x: Vec<NVec2> = (0..n)
            .map(|i| pos[i] + sixth * (vel[i] + 2.0 * v2[i] + 2.0 * v3[i] + v4[i]))
            .collect();
        let new_v: Vec<NVec2> = (0..n)
            .map(|i| vel[i] + sixth * (a1[i] + 2.0 * a2[i] + 2.0 * a3[i] + a4[i]))
            .collect();

        times.push(t0 + dt);
        positions.push(new_x);
        velocities.push(new_v);
    }

    Trajectory {
        times,
        positions,
        velocities,
    }
}

/// Select an integrator by case-insensitive name and run it.
///
/// `"leapfrog"` and `"verlet"` select velocity-Verlet, `"rk4"` the
/// Runge-Kutta scheme. Any other name is rejected outright; there is no
/// silent fallback and no partial output.
pub fn integrate(
    state: &SystemState,
    duration: f64,
    dt: f64,
    method: &str,
    forces: &AccelSet,
) -> SimResult<Trajectory> {
    match method.to_ascii_lowercase().as_str() {
        "leapfrog" | "verlet" => Ok(leapfrog(state, duration, dt, forces)),
        "rk4" => Ok(rk4(state, duration, dt, forces)),
        _ => Err(SimError::UnknownIntegrator {
            name: method.to_string(),
        }),
    }
}
