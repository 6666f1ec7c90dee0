// Copyright Warn-Gate Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Signature extraction and the gate verdict. This is the pure half of the
//! wrapper: given one line of compiler stderr, decide whether it carries a
//! warning signature and whether that signature is acceptable.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::allowlist;

/// Matches the head of a compiler diagnostic that carries a warning, e.g.
/// `drivers/net/virtio_net.c:382:12: warning: ignoring return value ...`.
/// Capture 1 is the `basename:line` signature; the directory prefix and the
/// optional column are discarded.
static WARNING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:.*/)?([^/]+\.[a-z]+:\d+):(?:\d+:)? warning:").unwrap()
});

/// What the gate concluded about one line of stderr.
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict<'a> {
    /// No warning signature on this line.
    Clean,
    /// A warning at a site the allowlist accepts.
    Allowed(&'a str),
    /// A warning at a site nobody approved. Fatal.
    Forbidden(&'a str),
}

/// Extract the `basename:line` signature from a warning line, if there is one.
pub fn signature(line: &str) -> Option<&str> {
    WARNING_RE.captures(line).map(|c| c.get(1).unwrap().as_str())
}

pub fn verdict(line: &str) -> Verdict<'_> {
    match signature(line) {
        None => Verdict::Clean,
        Some(sig) if allowlist::is_allowed(sig) => Verdict::Allowed(sig),
        Some(sig) => Verdict::Forbidden(sig),
    }
}
