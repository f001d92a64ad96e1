//! Unit tests for restitution-based collision resolution

use carom_core::collision::resolve;
use carom_core::engine::Body;
use carom_core::tests::test_helpers::approx_eq;

#[test]
fn test_equal_masses_elastic_exchange() {
    // m1 = m2 = 2, v1 = 3, v2 = -2, e = 1: the velocities swap
    let left = Body::new(2.0, 3.0, 2.0);
    let right = Body::new(2.0, -2.0, 8.0);
    let (v1, v2) = resolve(&left, &right, 1.0);
    assert!(approx_eq(v1, -2.0, 1e-5));
    assert!(approx_eq(v2, 3.0, 1e-5));
}

#[test]
fn test_equal_masses_perfectly_inelastic() {
    // e = 0: both leave at the common velocity (m1*v1 + m2*v2)/(m1 + m2) = 0.5
    let left = Body::new(2.0, 3.0, 2.0);
    let right = Body::new(2.0, -2.0, 8.0);
    let (v1, v2) = resolve(&left, &right, 0.0);
    assert!(approx_eq(v1, 0.5, 1e-5));
    assert!(approx_eq(v2, 0.5, 1e-5));
}

#[test]
fn test_intermediate_restitution() {
    // m1 = m2 = 2, v1 = 3, v2 = -2, e = 0.5:
    // v1' = ((2 - 1)*3 + 1.5*2*(-2)) / 4 = (3 - 6) / 4 = -0.75
    // v2' = (1.5*2*3 + (2 - 1)*(-2)) / 4 = (9 - 2) / 4 = 1.75
    let left = Body::new(2.0, 3.0, 2.0);
    let right = Body::new(2.0, -2.0, 8.0);
    let (v1, v2) = resolve(&left, &right, 0.5);
    assert!(approx_eq(v1, -0.75, 1e-5));
    assert!(approx_eq(v2, 1.75, 1e-5));
}

#[test]
fn test_mismatched_masses_elastic() {
    // m1 = 1, v1 = 4, m2 = 6, v2 = -0.5, e = 1:
    // v1' = ((1 - 6)*4 + 2*6*(-0.5)) / 7 = (-20 - 6) / 7 = -26/7
    // v2' = (2*1*4 + (6 - 1)*(-0.5)) / 7 = (8 - 2.5) / 7 = 5.5/7
    let left = Body::new(1.0, 4.0, 1.5);
    let right = Body::new(6.0, -0.5, 8.5);
    let (v1, v2) = resolve(&left, &right, 1.0);
    assert!(approx_eq(v1, -26.0 / 7.0, 1e-5));
    assert!(approx_eq(v2, 5.5 / 7.0, 1e-5));
}

#[test]
fn test_momentum_conserved_across_restitution_range() {
    let left = Body::new(1.5, 2.5, 3.0);
    let right = Body::new(4.0, -1.0, 6.0);
    let before = left.momentum() + right.momentum();
    for e in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let (v1, v2) = resolve(&left, &right, e);
        let after = left.mass * v1 + right.mass * v2;
        assert!(
            approx_eq(before, after, 1e-4),
            "momentum drifted at e = {}: {} -> {}",
            e,
            before,
            after
        );
    }
}

#[test]
fn test_kinetic_energy_never_increases() {
    let left = Body::new(1.5, 2.5, 3.0);
    let right = Body::new(4.0, -1.0, 6.0);
    let before = left.kinetic_energy() + right.kinetic_energy();
    for e in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let (v1, v2) = resolve(&left, &right, e);
        let after = 0.5 * left.mass * v1 * v1 + 0.5 * right.mass * v2 * v2;
        assert!(
            after <= before + 1e-4,
            "kinetic energy grew at e = {}: {} -> {}",
            e,
            before,
            after
        );
    }
}

#[test]
fn test_kinetic_energy_preserved_only_when_elastic() {
    let left = Body::new(1.5, 2.5, 3.0);
    let right = Body::new(4.0, -1.0, 6.0);
    let before = left.kinetic_energy() + right.kinetic_energy();

    let (v1, v2) = resolve(&left, &right, 1.0);
    let elastic = 0.5 * left.mass * v1 * v1 + 0.5 * right.mass * v2 * v2;
    assert!(approx_eq(elastic, before, 1e-4));

    let (v1, v2) = resolve(&left, &right, 0.5);
    let damped = 0.5 * left.mass * v1 * v1 + 0.5 * right.mass * v2 * v2;
    assert!(damped < before - 1e-3, "e = 0.5 must dissipate energy");
}
