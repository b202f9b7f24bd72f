// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! A prototype command that says hello.
//!
//! The whole program is one line of output: [GREETING], newline terminated,
//! written once to standard output regardless of the arguments given.
//!
//! ```
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut out = Vec::new();
//!     heyworld::run(["heyworld", "--help"], &mut out)?;
//!     assert_eq!(out, "👋 Hey, world.\n".as_bytes());
//!     Ok(())
//! }
//! ```

use std::io::Write;

use anyhow::{Context, Result};

/// The line printed on every invocation, without its terminator.
pub const GREETING: &str = "👋 Hey, world.";

/// Writes [GREETING] and a newline to `out`, then flushes it.
pub fn greet<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{GREETING}").context("failed to write greeting")?;
    out.flush().context("failed to flush greeting")?;
    Ok(())
}

/// Runs the program. `argv` is accepted and never looked at; the only
/// effect is a single [greet] on `out`.
pub fn run<I, W>(_argv: I, out: &mut W) -> Result<()>
where
    I: IntoIterator,
    W: Write,
{
    greet(out)
}
