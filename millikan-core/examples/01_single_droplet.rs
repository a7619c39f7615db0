//! Single Droplet Example
//!
//! This example walks one droplet through the whole reduction: stopwatch
//! times become velocities, the fall velocity becomes a radius, and the
//! fall/rise pair becomes a charge.
//!
//! ## What You'll Learn
//!
//! - Converting lab-form units into SI
//! - Solving for the radius from the terminal fall velocity
//! - Estimating the charge and its elementary multiple
//! - Catching bad input with the checked layer
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_single_droplet
//! ```

use millikan_core::{
    checked,
    model::{self, cunningham_correction},
    units::{m_to_um, mm_to_m},
    ChargeParams, InverseParams, Medium, PhysicsError, RiseParams,
};

fn main() {
    println!("Millikan Single Droplet Example");
    println!("===============================\n");

    // Apparatus as entered on the lab form
    let voltage = 500.0; // V
    let plate_distance = mm_to_m(10.0);
    let travel = mm_to_m(1.0);
    let rho_oil = 886.0; // kg/m³
    let medium = Medium::standard_air();

    // Stopwatch readings for one droplet
    let t_down = 8.1; // s, field off
    let t_up = 15.7; // s, field on

    let v_down = travel / t_down;
    let v_up = travel / t_up;
    let field = model::electric_field(voltage, plate_distance);

    println!("Measured:");
    println!("  Fall: {:.3} mm in {:.1} s -> {:.3e} m/s", travel * 1e3, t_down, v_down);
    println!("  Rise: {:.3} mm in {:.1} s -> {:.3e} m/s", travel * 1e3, t_up, v_up);
    println!("  Field: {:.0} V/m", field);
    println!();

    // Radius from the fall velocity (fixed six-pass solve)
    let radius = model::radius_from_terminal_velocity(
        &InverseParams::new(v_down, rho_oil).with_medium(medium),
    );
    let env = medium.environment;
    let slip = cunningham_correction(radius, env.temperature_k, env.pressure_pa);
    println!("Droplet:");
    println!("  Radius: {:.3} µm", m_to_um(radius));
    println!("  Slip correction: {:.4}", slip);

    // Charge from both velocities
    let charge = model::charge_from_velocities(
        &ChargeParams::new(radius, v_down, v_up, field).with_medium(&medium),
    );
    let ratio = charge / millikan_core::constants::ELEMENTARY_CHARGE;
    println!("  Charge: {:.3} ×1e-19 C", charge / 1e-19);
    println!("  q / e: {:.2} (nearest {})", ratio, ratio.round());
    println!();

    // What rise would exactly n elementary charges give?
    println!("Expected rise velocity per charge count:");
    for n in 1..=4 {
        let q = f64::from(n) * millikan_core::constants::ELEMENTARY_CHARGE;
        let v = model::rise_velocity_for_charge(
            &RiseParams::new(radius, v_down, q, field).with_medium(&medium),
        );
        println!("  n={n}: {:.3e} m/s", v);
    }
    println!();

    // The checked layer turns nonsense into errors instead of ∞/NaN
    println!("Checked layer:");
    let cases: [(&str, ChargeParams); 3] = [
        ("plates shorted", ChargeParams::new(radius, v_down, v_up, 0.0)),
        ("negative fall", ChargeParams::new(radius, -v_down, v_up, field)),
        ("no droplet", ChargeParams::new(0.0, v_down, v_up, field)),
    ];
    for (label, params) in &cases {
        match checked::charge_from_velocities(params) {
            Ok(q) => println!("  {label}: {q:.3e} C"),
            Err(PhysicsError::ZeroField) => println!("  {label}: rejected, no field"),
            Err(e) => println!("  {label}: rejected, {e}"),
        }
    }
}
