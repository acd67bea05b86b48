/*
 * @file build.rs
 * @brief Cargo build script placing the RP2350 memory layout
 * @author Kevin Thomas
 * @date 2025
 *
 * MIT License
 *
 * Copyright (c) 2025 Kevin Thomas
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Build script that places the RP2350 memory layout on the linker path.
//!
//! # Details
//! The firmware links with cortex-m-rt's `link.x`, which pulls in
//! `memory.x` from the search path. The layout is embedded here and
//! written to OUT_DIR so the crate builds from any working directory.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Linker memory layout for the RP2350 (2 MiB flash, 512 KiB striped RAM).
const MEMORY_LAYOUT: &[u8] = include_bytes!("memory.x");

/// Build script entry point.
fn main() {
    let out_dir = out_dir();
    write_memory_layout(&out_dir);
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Returns the cargo OUT_DIR path.
fn out_dir() -> PathBuf {
    PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR for build scripts"))
}

/// Writes memory.x into the output directory.
///
/// # Arguments
/// * `out` - Path to output directory
fn write_memory_layout(out: &Path) {
    fs::write(out.join("memory.x"), MEMORY_LAYOUT).expect("failed to write memory.x to OUT_DIR");
}
