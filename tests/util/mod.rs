#![allow(dead_code, unused_imports)]

/// Re-export some common utilities for system tests
pub use {
    anyhow::Result,
    assert_cmd::{prelude::*, Command},
    predicates::prelude::*,
    pretty_assertions::{
        assert_eq as pretty_assert_eq, assert_ne as pretty_assert_ne,
        assert_str_eq as pretty_assert_str_eq,
    },
    std::{fmt::Display, process::Output},
    testresult::{TestError, TestResult},
};

pub use regex_util::*;

pub mod regex_util;

pub const BIN_NAME: &str = "scp-demo";

/// Exit status of a usage error (unknown flag, malformed value)
pub const EXIT_USAGE: i32 = 2;
/// Exit status of every other failure
pub const EXIT_FAILURE: i32 = 1;

/// Convenience to return stdout/stderr without risking switching them (if instead a tuple of two Strings were used)
pub struct StdoutStderr {
    pub stdout: String,
    pub stderr: String,
}

/// The binary with environment overrides cleared, ready for arguments
pub fn bin_cmd() -> Result<Command> {
    let mut cmd = Command::cargo_bin(BIN_NAME)?;
    cmd.env_remove("SCP_DEMO_ALLOW_ZERO_PORT")
        .env_remove("SCP_DEMO_QUIET");
    Ok(cmd)
}

/// Run the binary with `args` and return its raw output
pub fn run_bin<I, S>(args: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut cmd = bin_cmd()?;
    cmd.args(args);
    Ok(cmd.output()?)
}

/// Converts process output to `stdout` and `stderr` Strings, asserting the process exited with `expected_code`
/// (and printing diagnostics if it didn't).
pub fn process_output_to_stdio_with_code(
    output: Output,
    expected_code: i32,
) -> Result<StdoutStderr> {
    let Output {
        status,
        stdout,
        stderr,
    } = output;

    let stdout = String::from_utf8(stdout)?;
    let stderr = String::from_utf8(stderr)?;

    assert_eq!(
        status.code(),
        Some(expected_code),
        "Unexpected exit status: {status}\n - stdout: {stdout}\n - stderr: {stderr}"
    );

    Ok(StdoutStderr { stdout, stderr })
}

/// Like [`process_output_to_stdio_with_code`] but expects the process to succeed
pub fn process_output_to_stdio_if_success(output: Output) -> Result<StdoutStderr> {
    process_output_to_stdio_with_code(output, 0)
}
