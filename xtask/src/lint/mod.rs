use crate::prelude::*;
use error::Result;

pub mod error;

/// Code quality checks
#[derive(Debug, clap::Parser)]
#[command(
    long_about = "Run code quality checks for the workspace.

This command runs the following checks in order:

1. cargo fmt - Code formatting (auto-fix with --fix)
2. cargo check - Compilation check
3. cargo clippy - Linting with all warnings treated as errors
4. cargo test - Run all tests including doctests
5. cargo machete - Unused dependencies detection

Every check runs even when an earlier one fails, so a single pass
reports everything that needs fixing."
)]
pub struct LintCommand {
    /// Auto-fix formatting issues
    #[arg(long)]
    pub fix: bool,

    /// Skip cargo test
    #[arg(long)]
    pub no_test: bool,
}

/// A cargo invocation whose exit status decides pass or fail.
struct CargoCheck {
    label: &'static str,
    args: &'static [&'static str],
    /// Appended after `--quiet` handling, e.g. clippy's `-- -D warnings`.
    trailing: &'static [&'static str],
    passed: &'static str,
    failed: &'static str,
    hint: &'static str,
}

const CHECK: CargoCheck = CargoCheck {
    label: "cargo check",
    args: &["check", "--all-targets"],
    trailing: &[],
    passed: "Cargo check passed",
    failed: "Cargo check failed",
    hint: "Please fix compilation errors before proceeding",
};

const CLIPPY: CargoCheck = CargoCheck {
    label: "cargo clippy",
    args: &["clippy", "--all-targets"],
    trailing: &["--", "-D", "warnings"],
    passed: "Clippy checks passed",
    failed: "Clippy checks failed",
    hint: "Please fix clippy warnings before proceeding",
};

const TEST: CargoCheck = CargoCheck {
    label: "cargo test",
    args: &["test", "--workspace"],
    trailing: &[],
    passed: "All tests passed",
    failed: "Tests failed",
    hint: "Please fix failing tests before proceeding",
};

pub async fn run(command: LintCommand, global: crate::Global) -> Result<()> {
    use error::require_command;

    require_command("cargo", "Required for Rust development: https://rustup.rs/")?;
    require_command(
        "cargo-machete",
        "Required for unused dependency checks: cargo install cargo-machete",
    )?;

    if !global.is_silent() {
        aprintln!("{}", p_b("Running code quality checks..."));
        aprintln!();
    }

    let mut results = vec![
        run_cargo_fmt(&command, &global).await?,
        run_cargo(&CHECK, &global).await?,
        run_cargo(&CLIPPY, &global).await?,
    ];
    if !command.no_test {
        results.push(run_cargo(&TEST, &global).await?);
    }
    results.push(run_cargo_machete(&global).await?);

    aprintln!();
    if results.iter().all(|passed| *passed) {
        aprintln!("{} {}", p_g("✅"), p_g("All checks passed!"));
        Ok(())
    } else {
        aprintln!("{} {}", p_r("❌"), p_r("Some checks failed"));
        if !global.is_silent() {
            aprintln!();
            aprintln!("{}", p_b("Quick fixes:"));
            aprintln!("  • {} - Format code", p_c("cargo xtask lint --fix"));
            aprintln!("  • {} - Auto-fix clippy issues", p_c("cargo clippy --fix"));
        }
        Err(error::LintError::ChecksFailed)
    }
}

async fn run_cargo_fmt(command: &LintCommand, global: &crate::Global) -> Result<bool> {
    if !global.is_silent() {
        aprintln!("{} {}", p_b("🔧"), p_b("Running cargo fmt..."));
    }

    let check = tokio::process::Command::new("cargo")
        .args(["fmt", "--all", "--check"])
        .output()
        .await?;

    if check.status.success() {
        if !global.is_silent() {
            aprintln!("{} Code formatting is correct", p_g("✅"));
        }
        return Ok(true);
    }

    if !command.fix {
        aprintln!(
            "{} Code formatting check failed. Run with --fix to auto-format",
            p_r("❌")
        );
        return Ok(false);
    }

    let status = tokio::process::Command::new("cargo")
        .args(["fmt", "--all"])
        .status()
        .await?;

    if status.success() {
        if !global.is_silent() {
            aprintln!("{} Code formatted", p_g("✅"));
        }
        Ok(true)
    } else {
        aprintln!("{} cargo fmt failed", p_r("❌"));
        Ok(false)
    }
}

async fn run_cargo(check: &CargoCheck, global: &crate::Global) -> Result<bool> {
    if !global.is_silent() {
        aprintln!("{} {}", p_b("🔧"), p_b(&format!("Running {}...", check.label)));
    }

    let mut cmd = tokio::process::Command::new("cargo");
    cmd.args(check.args);
    if !global.is_verbose() {
        cmd.arg("--quiet");
    }
    cmd.args(check.trailing);

    if cmd.status().await?.success() {
        if !global.is_silent() {
            aprintln!("{} {}", p_g("✅"), check.passed);
        }
        Ok(true)
    } else {
        aprintln!("{} {}", p_r("❌"), check.failed);
        aprintln!("{}", p_r(check.hint));
        Ok(false)
    }
}

async fn run_cargo_machete(global: &crate::Global) -> Result<bool> {
    if !global.is_silent() {
        aprintln!("{} {}", p_b("🔧"), p_b("Running cargo machete..."));
    }

    let output = tokio::process::Command::new("cargo")
        .arg("machete")
        .output()
        .await?;

    // machete splits its report between stdout and stderr
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let clean = output.status.success()
        && (stdout.contains("didn't find any unused") || stderr.contains("didn't find any unused"));

    if clean {
        if !global.is_silent() {
            aprintln!("{} No unused dependencies found", p_g("✅"));
        }
        return Ok(true);
    }

    aprintln!("{} Unused dependencies detected", p_r("❌"));
    aprintln!("{}", p_r("Please remove unused dependencies from Cargo.toml"));
    if global.is_verbose() {
        if !stdout.is_empty() {
            aprintln!("Output: {}", stdout);
        }
        if !stderr.is_empty() {
            aprintln!("Errors: {}", stderr);
        }
    }
    Ok(false)
}
