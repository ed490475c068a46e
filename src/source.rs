//! Listing retrieval: finding an `ls`, deciding how to drive it, and running it.
//!
//! GNU `ls` supports everything the adaptive formatter relies on
//! (`--group-directories-first`, `--time-style=long-iso`). Other implementations
//! (BSD `ls` on macOS, busybox) get the passthrough strategy: their output is
//! printed as-is.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use crate::config::ColorWhen;
use crate::error::CdlsError;

/// Programs tried in order. `gls` is GNU ls as installed by Homebrew.
const CANDIDATES: &[&str] = &["gls", "ls"];

/// How the listing is produced and what happens to its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// GNU ls with the fixed field layout, formatted into columns
    Adaptive { program: PathBuf },
    /// Any other ls; output is printed unprocessed
    Passthrough { program: PathBuf },
}

/// What to list and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub directory: PathBuf,
    pub show_hidden: bool,
    pub color: ColorWhen,
}

impl Strategy {
    /// Search `PATH` for a usable listing program.
    pub fn detect() -> Result<Self, CdlsError> {
        for candidate in CANDIDATES {
            if let Ok(program) = which::which(candidate) {
                return Ok(Self::for_program(program));
            }
        }
        Err(CdlsError::NoListingProgram)
    }

    /// Use a specific program (from `listing-command`), still checking its dialect.
    pub fn with_program(name: &str) -> Result<Self, CdlsError> {
        let program = which::which(name).map_err(|_| CdlsError::ListingProgramNotFound {
            program: name.to_string(),
        })?;
        Ok(Self::for_program(program))
    }

    fn for_program(program: PathBuf) -> Self {
        let strategy = if is_gnu_ls(&program) {
            Self::Adaptive { program }
        } else {
            Self::Passthrough { program }
        };
        log::debug!("Listing strategy: {strategy:?}");
        strategy
    }

    /// Downgrade to passthrough, keeping the program.
    pub fn into_passthrough(self) -> Self {
        match self {
            Self::Adaptive { program } | Self::Passthrough { program } => {
                Self::Passthrough { program }
            }
        }
    }

    pub fn program(&self) -> &Path {
        match self {
            Self::Adaptive { program } | Self::Passthrough { program } => program,
        }
    }

    pub fn is_adaptive(&self) -> bool {
        matches!(self, Self::Adaptive { .. })
    }

    /// Arguments for listing `request` with this strategy.
    pub fn args(&self, request: &ListingRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-l".into(), "-h".into()];
        if request.show_hidden {
            args.push("-A".into());
        }
        if self.is_adaptive() {
            args.push(format!("--color={}", request.color).into());
            args.push("--group-directories-first".into());
            args.push("--time-style=long-iso".into());
        }
        // Directory names starting with '-' must not be read as options
        args.push("--".into());
        args.push(request.directory.as_os_str().to_owned());
        args
    }

    /// Run the listing program and return what it printed.
    ///
    /// GNU ls exits 1 for minor problems (an entry it cannot stat) and still
    /// prints the listing; that output is kept and its stderr returned as
    /// warnings. Anything else non-zero, or exit 1 with nothing listed, fails.
    pub fn list(&self, request: &ListingRequest) -> Result<Listing, CdlsError> {
        let mut cmd = Command::new(self.program());
        cmd.args(self.args(request));
        // Keep the long-iso date layout independent of the user's locale
        cmd.env("LC_TIME", "C");

        let program = self.program().display().to_string();
        let output = run(&mut cmd).map_err(|e| CdlsError::ListingSpawnFailed {
            program: program.clone(),
            error: e.to_string(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let exit_code = output.status.code();

        if output.status.success() {
            return Ok(Listing { stdout, stderr });
        }
        if is_partial_listing(exit_code, &stdout) {
            for line in stderr.lines() {
                log::warn!("{program}: {line}");
            }
            return Ok(Listing { stdout, stderr });
        }

        Err(CdlsError::ListingFailed {
            program,
            directory: request.directory.clone(),
            stderr,
            exit_code,
        })
    }
}

/// Output of a listing program that ran well enough to show something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub stdout: String,
    /// Problems reported alongside the listing; empty on a clean run
    pub stderr: String,
}

impl Listing {
    pub fn has_warnings(&self) -> bool {
        !self.stderr.trim().is_empty()
    }
}

/// ls exit status 1 means "minor problems"; 2 and above mean "serious trouble".
fn is_partial_listing(exit_code: Option<i32>, stdout: &str) -> bool {
    exit_code == Some(1) && !stdout.trim().is_empty()
}

/// Whether `program --version` identifies GNU coreutils.
fn is_gnu_ls(program: &Path) -> bool {
    let mut cmd = Command::new(program);
    cmd.arg("--version");
    match run(&mut cmd) {
        Ok(output) if output.status.success() => {
            looks_like_gnu_version(&String::from_utf8_lossy(&output.stdout))
        }
        _ => false,
    }
}

fn looks_like_gnu_version(version_output: &str) -> bool {
    version_output.contains("GNU coreutils")
}

/// Execute a command with timing and debug logging.
///
/// Every external program cdls starts goes through here, so `-v` shows each
/// invocation and how long it took:
///
/// ```text
/// $ /usr/bin/ls -l -h --color=always --group-directories-first --time-style=long-iso -- /srv
/// [cdls-trace] cmd="/usr/bin/ls ..." dur=3.1ms ok=true
/// ```
pub fn run(cmd: &mut Command) -> std::io::Result<std::process::Output> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
    let cmd_str = if args.is_empty() {
        program
    } else {
        format!("{} {}", program, args.join(" "))
    };

    log::debug!("$ {cmd_str}");

    let t0 = Instant::now();
    let result = cmd.output();
    let duration_ms = t0.elapsed().as_secs_f64() * 1000.0;

    match &result {
        Ok(output) => log::debug!(
            "[cdls-trace] cmd=\"{}\" dur={:.1}ms ok={}",
            cmd_str,
            duration_ms,
            output.status.success()
        ),
        Err(e) => log::debug!(
            "[cdls-trace] cmd=\"{}\" dur={:.1}ms err=\"{}\"",
            cmd_str,
            duration_ms,
            e
        ),
    }

    result
}
