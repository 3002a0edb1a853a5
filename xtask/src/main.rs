//! Project automation tasks.
//!
//! Run via `cargo xtask <command>`.

use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
    process::{self, Command},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use seednoise::{
    cell::Metric,
    registry::{self, Family},
};
use xshell::{Shell, cmd};

/// Header text up to the first noise declaration.
const HEADER_PREAMBLE: &str = "#ifndef SEEDNOISE_H
#define SEEDNOISE_H

#include <stdint.h>

#ifdef __cplusplus
extern \"C\" {
#endif

/* Opaque seed table. */
typedef struct Seed Seed;

Seed *noise_seed_new(uint32_t seed);
void noise_seed_delete(Seed *seed);
";

/// Header text after the last noise declaration.
const HEADER_POSTAMBLE: &str = "
#ifdef __cplusplus
}
#endif

#endif /* SEEDNOISE_H */
";

/// Command line interface for the `xtask` helper.
#[derive(Debug, Parser)]
#[command(name = "xtask")]
struct Cli {
    /// Task to run.
    #[command(subcommand)]
    command: CommandName,
}

/// Supported automation commands.
#[derive(Debug, Subcommand)]
enum CommandName {
    /// Format the workspace and run the linter.
    Tidy,
    /// Run tests using cargo nextest, or cargo test when nextest is missing.
    Test,
    /// Run the criterion benchmarks.
    Bench,
    /// Regenerate the C header from the noise registry.
    Header {
        /// Fail if the header is out of date instead of rewriting it.
        #[arg(long)]
        check: bool,
    },
}

/// Common repository paths computed relative to the `xtask` crate.
#[derive(Debug, Clone)]
struct RepoPaths {
    /// Repository root directory.
    root: PathBuf,
    /// C header for the FFI crate.
    header: PathBuf,
}

impl RepoPaths {
    /// Discover repository paths from `CARGO_MANIFEST_DIR`.
    fn discover() -> Result<Self> {
        let xtask_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let root = xtask_dir
            .parent()
            .context("xtask crate must live at <repo>/xtask")?
            .to_path_buf();

        Ok(Self {
            header: root
                .join("crates")
                .join("seednoise-ffi")
                .join("include")
                .join("seednoise.h"),
            root,
        })
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

/// Dispatch the selected `xtask` command.
fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = RepoPaths::discover()?;

    match cli.command {
        CommandName::Tidy => tidy(&paths),
        CommandName::Test => test(&paths),
        CommandName::Bench => bench(&paths),
        CommandName::Header { check } => header(&paths, check),
    }
}

/// Run `cargo fmt` and the workspace linter.
fn tidy(paths: &RepoPaths) -> Result<()> {
    format_workspace(paths)?;
    lint_workspace(paths)?;
    format_workspace(paths)?;
    Ok(())
}

/// Run tests using cargo nextest when installed, then the doctests.
fn test(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    if has_command("cargo-nextest")? {
        cmd!(sh, "cargo nextest run --all").run()?;
        cmd!(sh, "cargo test --doc --all").run()?;
    } else {
        cmd!(sh, "cargo test --all").run()?;
    }
    Ok(())
}

/// Run the benchmarks of the noise library.
fn bench(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(sh, "cargo bench -p seednoise").run()?;
    Ok(())
}

/// Write, or with `check` verify, the generated C header.
fn header(paths: &RepoPaths, check: bool) -> Result<()> {
    let rendered = render_header();
    let path = &paths.header;

    if check {
        let current = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if current != rendered {
            bail!("{} is out of date; run `cargo xtask header`", path.display());
        }
        println!("{} is up to date", path.display());
        return Ok(());
    }

    fs::write(path, rendered).with_context(|| format!("failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

/// Section comment for a family in the header.
fn section_title(family: Family) -> &'static str {
    match family {
        Family::Perlin => "Perlin noise, in [-1, 1]",
        Family::OpenSimplex => "Simplex-grid noise, in [-1, 1]",
        Family::Cell(Metric::Euclidean, _) => "Cell noise (Euclidean distance)",
        Family::Cell(Metric::Manhattan, _) => "Cell noise (Manhattan distance)",
    }
}

/// Render the C header, one declaration per registered noise function.
fn render_header() -> String {
    let mut out = String::from(HEADER_PREAMBLE);
    let mut previous: Option<Family> = None;

    for noise in registry::REGISTRY {
        let family = noise.family();
        match previous {
            Some(prev) if prev == family => {}
            Some(prev) if section_title(prev) == section_title(family) => out.push('\n'),
            _ => out.push_str(&format!("\n/* {} */\n", section_title(family))),
        }
        previous = Some(family);

        let args = ["x", "y", "z", "w"][..noise.dimension()]
            .iter()
            .map(|axis| format!("double {axis}"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "double noise_{}(const Seed *seed, {args});\n",
            noise.key()
        ));
    }

    out.push_str(HEADER_POSTAMBLE);
    out
}

/// Format the Rust workspace using rustfmt.
fn format_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;

    let config = paths.root.join("rustfmt-nightly.toml");
    if config.is_file() {
        cmd!(sh, "cargo +nightly fmt --all -- --config-path {config}").run()?;
        return Ok(());
    }

    cmd!(sh, "cargo +nightly fmt --all").run()?;
    Ok(())
}

/// Run clippy across the workspace, applying safe fixes.
fn lint_workspace(paths: &RepoPaths) -> Result<()> {
    let sh = repo_shell(paths)?;
    cmd!(
        sh,
        "cargo clippy -q --fix --all --all-targets --all-features --allow-dirty --tests --examples"
    )
    .run()?;
    Ok(())
}

/// Create a verbose shell rooted at the repository root.
fn repo_shell(paths: &RepoPaths) -> Result<Shell> {
    let sh = Shell::new()?;
    sh.change_dir(&paths.root);
    Ok(sh)
}

/// Return `true` when `name` is found on `$PATH`.
fn has_command(name: &str) -> Result<bool> {
    match Command::new(name).arg("--help").output() {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err).with_context(|| format!("failed to probe for {name}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_current() {
        let paths = RepoPaths::discover().unwrap();
        let current = fs::read_to_string(&paths.header).unwrap();
        assert_eq!(current, render_header());
    }

    #[test]
    fn header_sections() {
        let rendered = render_header();
        assert_eq!(rendered.matches("/* Cell noise").count(), 2);
        assert!(
            rendered.contains("double noise_open_simplex2(const Seed *seed, double x, double y);")
        );
        assert!(rendered.ends_with("#endif /* SEEDNOISE_H */\n"));
    }
}
