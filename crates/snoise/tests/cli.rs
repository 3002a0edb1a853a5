#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::process::Command;

use assert_cmd::{
    assert::{Assert, OutputAssertExt},
    cargo::CommandCargoExt,
};
use seednoise::{Seed, cell3_range, perlin2};

#[allow(deprecated)]
fn run(args: &[&str]) -> Assert {
    let mut cmd = Command::cargo_bin("snoise").expect("binary exists");
    cmd.args(args).env_remove("RUST_LOG");
    cmd.assert()
}

fn stdout(assert: &Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn sample_prints_value() {
    let assert = run(&["sample", "--seed", "42", "perlin2", "0.2", "-0.3"]).success();
    let printed: f64 = stdout(&assert).trim().parse().expect("a number");
    assert_eq!(printed, perlin2(&Seed::new(42), &[0.2, -0.3]));
}

#[test]
fn seed_defaults_to_zero() {
    let assert = run(&["sample", "cell3_range", "1.5", "-2.25", "3"]).success();
    let printed: f64 = stdout(&assert).trim().parse().expect("a number");
    assert_eq!(printed, cell3_range(&Seed::new(0), &[1.5, -2.25, 3.0]));
}

#[test]
fn same_seed_same_output() {
    let args = ["sample", "-s", "7", "open_simplex3", "0.1", "0.2", "0.3"];
    let first = stdout(&run(&args).success());
    let second = stdout(&run(&args).success());
    assert_eq!(first, second);
}

#[test]
fn unknown_name_fails() {
    run(&["sample", "perlin9", "0", "0"]).failure().code(1);
}

#[test]
fn wrong_coordinate_count_fails() {
    let assert = run(&["sample", "cell4_value", "0", "0"]).failure().code(1);
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf-8 stderr");
    assert!(stderr.contains("takes 4 coordinates, got 2"), "{stderr}");
}

#[test]
fn list_shows_every_function() {
    let out = stdout(&run(&["list"]).success());
    for name in seednoise::registry::NOISE_NAMES {
        assert!(out.contains(&format!("- {name} — ")), "missing {name}");
    }
}

#[test]
fn verbose_logs_to_stderr() {
    let assert = run(&["-vv", "sample", "perlin3", "0.5", "0.5", "0.5"]).success();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf-8 stderr");
    assert!(stderr.contains("sampling"), "{stderr}");
}
