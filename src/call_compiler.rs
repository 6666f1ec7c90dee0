// Copyright Warn-Gate Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};
use tracing::debug;

use crate::gate::{self, Verdict};
use crate::session::GateSession;
use crate::util;

impl GateSession {
    /// Launch the real compiler and police its stderr. Returns the exit code
    /// the wrapper should report: the compiler's own code when the build is
    /// clean (or only has allowed warnings), or the OS error number when the
    /// compiler could not be launched at all. A forbidden warning does not
    /// return: it removes the output artifact and exits the process with 1.
    pub fn run_compiler(&self) -> Result<i32> {
        let compiler = &self.args[0];

        let mut cmd = Command::new(compiler);
        cmd.args(&self.args[1..])
            // Pin the child's locale so the `warning:` token and the
            // file:line formatting are stable across build hosts.
            .env("LANG", "en_US.UTF-8")
            .stderr(Stdio::piped());

        debug!(cmd = %util::render_command(&cmd).to_string_lossy(), "spawn");

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => return Ok(self.report_launch_failure(e)),
        };

        // The child inherits stdout; stderr is ours to tee and inspect.
        let stderr = child.stderr.take().expect("stderr was piped");
        let mut reader = BufReader::new(stderr);
        let stdout = std::io::stdout();

        let mut buf = Vec::new();
        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .context("failed reading compiler stderr")?;
            if n == 0 {
                break;
            }

            // Echo the raw bytes first: the tee must be faithful even when the
            // line turns out to be fatal, or isn't valid UTF-8.
            {
                let mut handle = stdout.lock();
                handle.write_all(&buf).context("failed echoing compiler stderr")?;
            }

            let line = String::from_utf8_lossy(&buf);
            match gate::verdict(line.trim_end_matches(['\n', '\r'])) {
                Verdict::Clean => {}
                Verdict::Allowed(sig) => debug!(%sig, "allowed warning"),
                Verdict::Forbidden(sig) => {
                    util::error(&format!("forbidden warning: {sig}"));
                    self.remove_output_artifact();
                    // Fail fast: the rest of the compiler's output is moot,
                    // and dropping our end of the pipe will stop the child.
                    std::process::exit(1);
                }
            }
        }

        let status = child.wait().context("failed waiting for compiler")?;
        debug!(?status, "compiler finished");
        Ok(status.code().unwrap_or(1))
    }

    /// The compiler never started. For a missing executable, the usual cause
    /// is a bad PATH, so say so; anything else gets the rendered command and
    /// the raw error. Either way the OS error number becomes our exit code.
    fn report_launch_failure(&self, e: std::io::Error) -> i32 {
        let compiler = self.args[0].to_string_lossy();
        if e.kind() == std::io::ErrorKind::NotFound {
            util::error(&format!("{compiler}: {e}"));
            if which::which(self.args[0].as_os_str()).is_err() {
                println!("Is your PATH set correctly?");
            }
        } else {
            let rendered: Vec<_> =
                self.args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
            util::error(&format!("{}: {e}", rendered.join(" ")));
        }
        e.raw_os_error().unwrap_or(1)
    }
}
