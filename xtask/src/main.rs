//! Custom cargo commands for the seomark crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz <t>  - Run a fuzz target for 60s (needs cargo-fuzz + nightly)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["score_calculation", "highlight_markup", "optimization_parsing"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (fmt + tests + clippy + constants)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run a fuzz target: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("seomark Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking formatting...");
    run_cargo(&["fmt", "--all", "--", "--check"])?;
    println!("✓ Formatting clean\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Verifying scoring constants...");
    verify_constants()?;
    println!("✓ Coverage dominates length bonus\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("usage: cargo xtask fuzz <{}>", FUZZ_TARGETS.join("|"));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target {:?}, expected one of {:?}", target, FUZZ_TARGETS);
    }

    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(project_root()?)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// One more matched keyword must outweigh the gap between the length bonuses.
fn verify_constants() -> Result<()> {
    let root = project_root()?;
    let core_rs = std::fs::read_to_string(root.join("src/scoring/core.rs"))
        .context("Failed to read src/scoring/core.rs")?;

    let keyword = extract_const(&core_rs, "KEYWORD_MATCH_SCORE")?;
    let in_range = extract_const(&core_rs, "IN_RANGE_LENGTH_BONUS")?;
    let out_of_range = extract_const(&core_rs, "OUT_OF_RANGE_LENGTH_BONUS")?;

    if out_of_range == 0 {
        bail!("OUT_OF_RANGE_LENGTH_BONUS must be positive so non-empty input never scores 0");
    }
    if in_range < out_of_range {
        bail!(
            "IN_RANGE_LENGTH_BONUS={} is below OUT_OF_RANGE_LENGTH_BONUS={}",
            in_range,
            out_of_range
        );
    }
    if keyword <= in_range - out_of_range {
        bail!(
            "KEYWORD_MATCH_SCORE={} does not dominate the length bonus gap {}",
            keyword,
            in_range - out_of_range
        );
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Result<u32> {
    // Look for "pub const NAME: u32 = 10;"
    let prefix = format!("pub const {}: u32 =", name);
    for line in content.lines() {
        if let Some(rest) = line.trim().strip_prefix(&prefix) {
            let value = rest.trim().trim_end_matches(';').trim();
            return value
                .parse()
                .with_context(|| format!("{} has non-numeric value {:?}", name, value));
        }
    }
    bail!("constant {} not found", name)
}
