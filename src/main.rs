// Copyright Warn-Gate Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A drop-in compiler wrapper that tees the compiler's stderr and fails the
//! build as soon as it sees a warning that isn't on the approved list.
//!
//! Invoked as `warn-gate <compiler> <args...>`; everything after our own
//! argv[0] is handed to the real compiler untouched.

use std::ffi::OsString;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::session::GateSession;

mod allowlist;
mod call_compiler;
mod gate;
mod session;
mod util;

/// Environment variable used to control this tool's log tracing.
const LOG_ENV_VAR: &str = "WARN_GATE_LOG";

fn main() -> ExitCode {
    init_logger();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    if args.is_empty() {
        util::error("no compiler command given");
        println!("usage: warn-gate <compiler> <compiler args...>");
        return ExitCode::FAILURE;
    }

    let session = GateSession::new(args);
    match session.run_compiler() {
        Ok(code) => exit_code(code),
        Err(error) => {
            util::error(&format!("{error:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Logging is off unless requested through the environment, so the stderr tee
/// stays byte-clean for whatever is consuming our output.
fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env(LOG_ENV_VAR))
        .with_writer(std::io::stderr)
        .init();
}

/// Map a subprocess-style exit code onto our own.
fn exit_code(code: i32) -> ExitCode {
    // Anything outside u8 range (shouldn't happen on unix) collapses to failure.
    u8::try_from(code).map(ExitCode::from).unwrap_or(ExitCode::FAILURE)
}
