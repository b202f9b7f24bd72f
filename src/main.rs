// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::env;
use std::io;

use anyhow::Result;

fn main() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    heyworld::run(env::args_os(), &mut out)
}
