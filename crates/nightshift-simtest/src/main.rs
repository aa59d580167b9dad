//! Night Shift Headless Simulation Harness
//!
//! Validates the pure logic and the night engine without rendering or
//! audio. Runs entirely in-process.
//!
//! Usage:
//!   cargo run -p nightshift-simtest
//!   cargo run -p nightshift-simtest -- --verbose

use nightshift_core::prelude::*;
use nightshift_logic::constants::{ai_tick_interval_ms, night_aggression};
use nightshift_logic::power::{apply_drain, compute_drain, Actuators};

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Night Shift Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Static configuration tables
    results.extend(validate_config_tables(verbose));

    // 2. Drain formula sweep
    results.extend(validate_drain_formula(verbose));

    // 3. Scripted win night (48 one-second ticks at 8 s hours)
    results.extend(validate_win_night(verbose));

    // 4. Forced door-attack loss
    results.extend(validate_door_attack(verbose));

    // 5. Blackout path
    results.extend(validate_blackout(verbose));

    // 6. Invariant sweep over seeded random nights
    results.extend(validate_invariant_sweep(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn check(results: &mut Vec<TestResult>, name: &str, passed: bool, detail: String) {
    results.push(TestResult {
        name: name.into(),
        passed,
        detail,
    });
}

fn start_custom_night(settings: GameSettings, seed: u64) -> NightEngine {
    let mut engine = NightEngine::with_seed(seed);
    engine.open_custom_setup();
    engine.start_custom(settings);
    engine.advance(4000);
    engine
}

// ── 1. Configuration tables ─────────────────────────────────────────────

fn validate_config_tables(_verbose: bool) -> Vec<TestResult> {
    println!("--- Configuration Tables ---");
    let mut results = Vec::new();

    let expected = [(1, (2, 1)), (2, (6, 4)), (3, (8, 8)), (4, (12, 10)), (5, (16, 15))];
    let table_ok = expected
        .iter()
        .all(|&(night, pair)| night_aggression(night) == pair);
    check(
        &mut results,
        "aggression_table",
        table_ok && night_aggression(6) == (20, 20),
        "nights 1-5 hand-tuned, 6+ maxed".into(),
    );

    let cadence_ok = ai_tick_interval_ms(1) == 4500
        && ai_tick_interval_ms(5) == 2500
        && ai_tick_interval_ms(7) == 2000;
    check(
        &mut results,
        "ai_cadence",
        cadence_ok,
        format!(
            "night 1 = {} ms, night 5 = {} ms, floor = {} ms",
            ai_tick_interval_ms(1),
            ai_tick_interval_ms(5),
            ai_tick_interval_ms(7)
        ),
    );

    let settings = GameSettings::for_night(3);
    check(
        &mut results,
        "night_settings",
        settings.blue_ai == 8 && settings.red_ai == 8 && settings.validate().is_empty(),
        "table-built settings validate cleanly".into(),
    );

    results
}

// ── 2. Drain formula ────────────────────────────────────────────────────

fn validate_drain_formula(_verbose: bool) -> Vec<TestResult> {
    println!("--- Drain Formula ---");
    let mut results = Vec::new();

    let idle = Actuators::default();
    check(
        &mut results,
        "base_drain",
        (compute_drain(&idle, 1) - 0.2).abs() < 1e-9,
        format!("idle night-1 drain = {:.2}/s", compute_drain(&idle, 1)),
    );

    // Enabling any single actuator must strictly increase drain.
    let variants = [
        Actuators { left_door_closed: true, ..idle },
        Actuators { right_door_closed: true, ..idle },
        Actuators { left_light_on: true, ..idle },
        Actuators { right_light_on: true, ..idle },
        Actuators { camera_open: true, ..idle },
    ];
    let monotone = variants
        .iter()
        .all(|v| compute_drain(v, 2) > compute_drain(&idle, 2));
    check(
        &mut results,
        "drain_monotonicity",
        monotone,
        "each actuator strictly increases drain".into(),
    );

    // Fixed 0.95/s drain empties a full reserve on tick 106.
    let mut power = 100.0;
    let mut ticks = 0u32;
    while power > 0.0 && ticks < 1000 {
        power = apply_drain(power, 0.95);
        ticks += 1;
    }
    check(
        &mut results,
        "exhaustion_tick_count",
        ticks == 106,
        format!("0.95/s drains 100 in {} ticks (expected 106)", ticks),
    );

    results
}

// ── 3. Scripted win night ───────────────────────────────────────────────

fn validate_win_night(verbose: bool) -> Vec<TestResult> {
    println!("--- Win Night ---");
    let mut results = Vec::new();

    let settings = GameSettings {
        night: 1,
        blue_ai: 0,
        red_ai: 0,
        starting_power: 100,
        hour_length_ms: 8000,
    };
    let mut engine = start_custom_night(settings, 11);

    let mut tick = 0u32;
    while engine.session().view == View::Game && tick < 100 {
        engine.advance(1000);
        tick += 1;
        if verbose {
            println!(
                "    tick {:>2}: time {:.3}, power {:.1}",
                tick,
                engine.session().time,
                engine.session().power
            );
        }
    }

    check(
        &mut results,
        "win_after_48_ticks",
        tick == 48 && engine.session().view == View::Win,
        format!("shift ended on tick {} in {:?}", tick, engine.session().view),
    );
    check(
        &mut results,
        "time_clamped_to_six",
        engine.session().time == 6.0,
        format!("final time = {}", engine.session().time),
    );
    let completed = engine
        .drain_signals()
        .contains(&Signal::NightCompleted { night: 1 });
    check(
        &mut results,
        "completion_signal",
        completed,
        "NightCompleted emitted".into(),
    );

    results
}

// ── 4. Door attack ──────────────────────────────────────────────────────

fn validate_door_attack(_verbose: bool) -> Vec<TestResult> {
    println!("--- Door Attack ---");
    let mut results = Vec::new();

    let settings = GameSettings {
        night: 1,
        blue_ai: 20,
        red_ai: 0,
        starting_power: 100,
        hour_length_ms: 10_000_000,
    };
    let mut engine = start_custom_night(settings, 5);
    engine.session_mut().blue.location = 7;
    engine.advance(ai_tick_interval_ms(1));

    let session = engine.session();
    check(
        &mut results,
        "open_door_jumpscare",
        session.view == View::Jumpscare
            && session.jumpscare_source == Some(AntagonistId::Blue)
            && session.jumpscare_cause == Some(FailureCause::DoorAttack),
        format!("{:?} by {:?}", session.jumpscare_cause, session.jumpscare_source),
    );

    // Same setup with the left door closed: repelled to the stage.
    let mut engine = start_custom_night(settings, 5);
    engine.toggle_door(Side::Left);
    engine.session_mut().blue.location = 7;
    engine.advance(ai_tick_interval_ms(1));

    let session = engine.session();
    check(
        &mut results,
        "closed_door_repels",
        session.view == View::Game && session.blue.at_stage(),
        format!("blue at {} in {:?}", session.blue.location, session.view),
    );

    results
}

// ── 5. Blackout ─────────────────────────────────────────────────────────

fn validate_blackout(_verbose: bool) -> Vec<TestResult> {
    println!("--- Blackout ---");
    let mut results = Vec::new();

    let settings = GameSettings {
        night: 1,
        blue_ai: 0,
        red_ai: 0,
        starting_power: 100,
        hour_length_ms: 10_000_000,
    };
    let mut engine = start_custom_night(settings, 9);
    engine.toggle_door(Side::Left);
    engine.toggle_light(Side::Left);

    // 1.0/s drain: 100 ticks to zero.
    for _ in 0..100 {
        engine.advance(1000);
    }
    let session = engine.session();
    check(
        &mut results,
        "blackout_at_tick_100",
        session.power == 0.0 && session.actuators == Actuators::default(),
        format!("power {}, actuators reset", session.power),
    );

    let mut outage_tick = None;
    for tick in 1..=200u32 {
        engine.advance(1000);
        if engine.session().view != View::Game {
            outage_tick = Some(tick);
            break;
        }
    }
    let session = engine.session();
    check(
        &mut results,
        "outage_loss_fires",
        outage_tick.is_some()
            && session.jumpscare_cause == Some(FailureCause::PowerOutage)
            && session.jumpscare_source == Some(AntagonistId::Blue),
        format!("loss after {:?} blackout ticks", outage_tick),
    );

    results
}

// ── 6. Invariant sweep ──────────────────────────────────────────────────

fn validate_invariant_sweep(verbose: bool) -> Vec<TestResult> {
    println!("--- Invariant Sweep ---");
    let mut results = Vec::new();

    let mut violations = Vec::new();
    let mut nights_run = 0u32;

    for seed in 0..20u64 {
        let night = 1 + (seed % 5) as u32;
        let mut engine = NightEngine::with_seed(seed);
        engine.start_night(night);
        engine.advance(4000);
        nights_run += 1;

        for step in 0..1200u32 {
            match step % 11 {
                0 => engine.toggle_door(Side::Left),
                3 => engine.toggle_camera(),
                5 => engine.toggle_light(Side::Right),
                7 => engine.toggle_door(Side::Right),
                9 => engine.toggle_light(Side::Left),
                _ => {}
            }
            engine.advance(500);

            let s = engine.session();
            if !(0.0..=100.0).contains(&s.power) {
                violations.push(format!("seed {}: power {} out of range", seed, s.power));
            }
            if !(0.0..=6.0).contains(&s.time) {
                violations.push(format!("seed {}: time {} out of range", seed, s.time));
            }
            if !s.blue.path.contains(&s.blue.location) || !s.red.path.contains(&s.red.location) {
                violations.push(format!("seed {}: antagonist off its path", seed));
            }
            if s.actuators.left_light_on && s.actuators.right_light_on {
                violations.push(format!("seed {}: both lights on", seed));
            }
            if s.actuators.camera_open && s.actuators.any_light_on() {
                violations.push(format!("seed {}: camera open with a light on", seed));
            }
            if s.view != View::Game {
                break;
            }
        }

        if verbose {
            if let Ok(snapshot) = engine
                .snapshot_json()
                .and_then(|json| serde_json::from_str::<serde_json::Value>(&json))
            {
                println!(
                    "  seed {:>2} night {}: view={} power={} time={}",
                    seed, night, snapshot["view"], snapshot["power"], snapshot["time"]
                );
            }
        }
    }

    check(
        &mut results,
        "invariants_hold",
        violations.is_empty(),
        if violations.is_empty() {
            format!("{} seeded nights, no violations", nights_run)
        } else {
            violations.join("; ")
        },
    );

    // Determinism: same seed, same script, identical snapshots.
    let script = |engine: &mut NightEngine| {
        engine.toggle_door(Side::Right);
        for _ in 0..40 {
            engine.advance(750);
        }
    };
    let settings = GameSettings::for_night(3);
    let mut a = start_custom_night(settings, 77);
    let mut b = start_custom_night(settings, 77);
    script(&mut a);
    script(&mut b);
    let identical = a.snapshot_json().ok() == b.snapshot_json().ok();
    check(
        &mut results,
        "seeded_determinism",
        identical,
        "identical seeds and scripts produce identical snapshots".into(),
    );

    results
}
