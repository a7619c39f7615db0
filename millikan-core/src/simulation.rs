//! Synthetic run generator
//!
//! Produces realistic-looking runs for demos and tests by running the
//! forward model on a random droplet, perturbing the velocities the way a
//! stopwatch would, and then estimating radius and charge back from the
//! perturbed velocities. The estimate therefore carries measurement error
//! relative to the droplet that generated it, just like a real run.
//!
//! ## Randomness
//!
//! The random source is always injected. Tests pass a seeded generator
//! (any `rand::Rng`, e.g. `ChaCha8Rng::seed_from_u64(42)`) and get the same
//! runs every time; the `std` default ([`simulate_run_unseeded`]) uses the
//! thread-local generator and the system clock.
//!
//! ## Draw Order
//!
//! Four uniform draws per run, in this order: radius, rise fraction, fall
//! noise, rise noise. Changing the order changes every seeded sequence.

use rand::Rng;

use crate::{
    constants::simulation::{
        SIM_RADIUS_MIN_M, SIM_RADIUS_SPAN_M, SIM_RISE_FRACTION_MIN, SIM_RISE_FRACTION_SPAN,
    },
    measurement::RunMeasurement,
    model,
    params::{ChargeParams, InverseParams, SimulationParams, TerminalVelocityParams},
    time::TimeSource,
};

/// The droplet behind a synthetic run, before measurement noise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundTruth {
    /// Radius the run was generated from (m)
    pub radius: f64,
    /// Noise-free fall velocity (m/s)
    pub v_down: f64,
    /// Noise-free rise velocity (m/s)
    pub v_up: f64,
    /// Charge implied by the noise-free velocities (C)
    pub charge: f64,
}

/// Generate one synthetic run
pub fn simulate_run<R, C>(params: &SimulationParams, rng: &mut R, clock: &C) -> RunMeasurement
where
    R: Rng + ?Sized,
    C: TimeSource + ?Sized,
{
    simulate_run_with_truth(params, rng, clock).0
}

/// Generate one synthetic run along with the droplet that produced it
pub fn simulate_run_with_truth<R, C>(
    params: &SimulationParams,
    rng: &mut R,
    clock: &C,
) -> (RunMeasurement, GroundTruth)
where
    R: Rng + ?Sized,
    C: TimeSource + ?Sized,
{
    let medium = params.medium;
    let electric_field = params.electric_field();

    let true_radius = SIM_RADIUS_MIN_M + rng.gen::<f64>() * SIM_RADIUS_SPAN_M;
    let true_v_down = model::terminal_velocity(
        &TerminalVelocityParams::new(true_radius, params.rho_oil).with_medium(medium),
    );
    let true_v_up =
        true_v_down * (SIM_RISE_FRACTION_MIN + rng.gen::<f64>() * SIM_RISE_FRACTION_SPAN);

    let v_down = apply_noise(true_v_down, params.noise_scale, rng);
    let v_up = apply_noise(true_v_up, params.noise_scale, rng);

    let t_down = params.fall_distance / v_down;
    let t_up = params.rise_distance / v_up;

    let radius = model::radius_from_terminal_velocity(
        &InverseParams::new(v_down, params.rho_oil).with_medium(medium),
    );
    let charge = model::charge_from_velocities(
        &ChargeParams::new(radius, v_down, v_up, electric_field).with_medium(&medium),
    );

    let truth = GroundTruth {
        radius: true_radius,
        v_down: true_v_down,
        v_up: true_v_up,
        charge: model::charge_from_velocities(
            &ChargeParams::new(true_radius, true_v_down, true_v_up, electric_field)
                .with_medium(&medium),
        ),
    };

    log_debug!(
        "Simulated run: r_true={:.4e} m, r_est={:.4e} m, q_est={:.4e} C",
        true_radius,
        radius,
        charge
    );

    let run = RunMeasurement {
        timestamp: clock.now(),
        electric_field,
        v_down,
        v_up,
        t_down,
        t_up,
        radius,
        charge,
        voltage: params.voltage,
        plate_distance: params.plate_distance,
        fall_distance: params.fall_distance,
        rise_distance: params.rise_distance,
    };

    (run, truth)
}

/// Generate one run with the thread-local generator and the system clock
#[cfg(feature = "std")]
pub fn simulate_run_unseeded(params: &SimulationParams) -> RunMeasurement {
    simulate_run(params, &mut rand::thread_rng(), &crate::time::SystemClock)
}

/// Multiply by `1 + u·scale` with `u` uniform in [-1, 1)
fn apply_noise<R: Rng + ?Sized>(value: f64, scale: f64, rng: &mut R) -> f64 {
    value * (1.0 + (rng.gen::<f64>() - 0.5) * scale * 2.0)
}

/// Caller-owned simulation context: settings, random source and clock
///
/// ```rust
/// use millikan_core::{FixedClock, SimulationParams, Simulator};
/// use rand::rngs::mock::StepRng;
///
/// let mut sim = Simulator::new(SimulationParams::classroom(), StepRng::new(0, 1 << 40), FixedClock::new(0));
/// let runs: Vec<_> = sim.runs(3).collect();
/// assert_eq!(runs.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator<R, C> {
    params: SimulationParams,
    rng: R,
    clock: C,
}

impl<R: Rng, C: TimeSource> Simulator<R, C> {
    /// Bundle settings with a random source and clock
    pub fn new(params: SimulationParams, rng: R, clock: C) -> Self {
        Self { params, rng, clock }
    }

    /// Apparatus settings
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Replace the apparatus settings, keeping the generator state
    pub fn set_params(&mut self, params: SimulationParams) {
        self.params = params;
    }

    /// Mutable access to the clock (e.g. to advance a fixed clock)
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Next synthetic run
    pub fn next_run(&mut self) -> RunMeasurement {
        simulate_run(&self.params, &mut self.rng, &self.clock)
    }

    /// Next synthetic run with its generating droplet
    pub fn next_run_with_truth(&mut self) -> (RunMeasurement, GroundTruth) {
        simulate_run_with_truth(&self.params, &mut self.rng, &self.clock)
    }

    /// The next `count` runs
    pub fn runs(&mut self, count: usize) -> impl Iterator<Item = RunMeasurement> + '_ {
        (0..count).map(move |_| self.next_run())
    }

    /// Take the generator and clock back
    pub fn into_parts(self) -> (SimulationParams, R, C) {
        (self.params, self.rng, self.clock)
    }
}

#[cfg(feature = "std")]
impl Simulator<rand::rngs::ThreadRng, crate::time::SystemClock> {
    /// Production simulator: thread-local generator, wall clock
    pub fn unseeded(params: SimulationParams) -> Self {
        Self::new(params, rand::thread_rng(), crate::time::SystemClock)
    }
}
