// Copyright Warn-Gate Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ffi::OsString;
use std::path::PathBuf;

/// Contains everything about a single wrapper invocation: the argument vector
/// destined for the real compiler and the output artifact we may have to
/// clean up if the gate rejects a warning.
pub struct GateSession {
    /// The full compiler command: `args[0]` is the compiler, the rest its flags.
    pub args: Vec<OsString>,

    /// The path following a literal `-o` token, if any. This file belongs to
    /// the compiler, but on a forbidden warning we delete it so an aborted
    /// build can't leave a half-written object behind.
    pub output_artifact: Option<PathBuf>,
}

impl GateSession {
    pub fn new(args: Vec<OsString>) -> Self {
        let output_artifact = extract_output_artifact(&args);
        GateSession { args, output_artifact }
    }

    /// Delete the output artifact, if we know one. A file that was never
    /// written is fine; any other failure is worth a diagnostic but must not
    /// mask the gate verdict.
    pub fn remove_output_artifact(&self) {
        if let Some(ofile) = &self.output_artifact {
            match std::fs::remove_file(ofile) {
                Ok(()) => tracing::debug!(ofile = %ofile.display(), "removed output artifact"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    crate::util::warning(&format!(
                        "could not remove {}: {}",
                        ofile.display(),
                        e
                    ));
                }
            }
        }
    }
}

/// Find the value following the first literal `-o` in the argument vector.
/// A missing `-o`, or a trailing `-o` with nothing after it, is tolerated
/// silently: compilers invoked without an output file are none of our business.
fn extract_output_artifact(args: &[OsString]) -> Option<PathBuf> {
    let i = args.iter().position(|a| a == "-o")?;
    args.get(i + 1).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    // conversions to/from OsString are rough, simplify the test code below
    fn x(args: Vec<&str>) -> Vec<OsString> {
        args.iter().map(|x| x.into()).collect()
    }

    #[test]
    fn check_output_artifact_extraction() {
        // usual case
        assert_eq!(
            extract_output_artifact(&x(vec!["gcc", "-c", "foo.c", "-o", "foo.o"])),
            Some(PathBuf::from("foo.o"))
        );
        // no -o at all
        assert_eq!(extract_output_artifact(&x(vec!["gcc", "-c", "foo.c"])), None);
        // trailing -o is tolerated
        assert_eq!(extract_output_artifact(&x(vec!["gcc", "foo.c", "-o"])), None);
        // first occurrence wins
        assert_eq!(
            extract_output_artifact(&x(vec!["gcc", "-o", "a.o", "-o", "b.o"])),
            Some(PathBuf::from("a.o"))
        );
        // -o glued to its value is a different token, not ours to interpret
        assert_eq!(extract_output_artifact(&x(vec!["gcc", "-ofoo.o", "foo.c"])), None);
        assert_eq!(extract_output_artifact(&x(vec![])), None);
    }

    #[test]
    fn check_session_captures_artifact() {
        let s = GateSession::new(x(vec!["cc", "-o", "out/main.o", "main.c"]));
        assert_eq!(s.output_artifact, Some(PathBuf::from("out/main.o")));
        assert_eq!(s.args.len(), 4);
    }
}
