// Copyright Warn-Gate Contributors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed set of warning sites the build tolerates. Keys are
//! `basename:line`; each entry names the lint it excuses. Adding an entry is
//! a deliberate act: the warning was reviewed and judged harmless.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static ALLOWED_WARNINGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "vdso.c:128",            // -Wstringop-overflow=
        "regcache-rbtree.c:36",  // -Wpacked-not-aligned
        "sctp.h:350",            // -Wpacked-not-aligned
        "sctp.h:669",            // -Wpacked-not-aligned
        "sctp.h:670",            // -Wpacked-not-aligned
        "sctp.h:682",            // -Wpacked-not-aligned
        "sctp.h:683",            // -Wpacked-not-aligned
        "sctp.h:724",            // -Wpacked-not-aligned
        "sctp.h:730",            // -Wpacked-not-aligned
        "sctp.h:837",            // -Wpacked-not-aligned
        "sctp.h:843",            // -Wpacked-not-aligned
        "compat.h:51",           // -Wattribute-alias
        "compat.c:537",          // -Wpacked-not-aligned
        "compat.c:539",          // -Wpacked-not-aligned
        "compat.c:543",          // -Wpacked-not-aligned
        "compat.c:545",          // -Wpacked-not-aligned
        "compat.c:547",          // -Wpacked-not-aligned
        "compat.c:551",          // -Wpacked-not-aligned
        "compat.c:557",          // -Wpacked-not-aligned
        "exec.c:1223",           // -Wsizeof-pointer-memaccess
        "printk.c:140",          // -Wstringop-truncation
        "printk.c:143",          // -Wstringop-truncation
        "lkdtm_bugs.c:89",       // -Wstringop-overflow=
        "ip_tunnel.c:264",       // -Wstringop-overflow=
        "cfg80211.c:4170",       // -Wstringop-truncation
        "virtio_net.c:382",      // -Wunused-result
        "virtio_net.c:796",      // -Wunused-result
        "syscalls.h:211",        // -Wattribute-alias
        "secureboot.c:19",       // -Wduplicate-decl-specifier
        "secureboot.c:22",       // -Wduplicate-decl-specifier
        "rx.c:208",              // -Wpacked-not-aligned
        "kernel.h:771",          // comparison of distinct pointer types lacks a cast
    ])
});

/// Whether a `basename:line` signature is an accepted warning site.
pub fn is_allowed(signature: &str) -> bool {
    ALLOWED_WARNINGS.contains(signature)
}
