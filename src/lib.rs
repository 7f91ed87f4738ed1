// Performance lints
#![warn(variant_size_differences)]
#![warn(
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,
    clippy::mutex_integer,
    clippy::mem_forget,
    clippy::maybe_infinite_iter
)]

pub mod config;
pub mod error;
pub mod path_spec;
pub mod resolve;
pub mod transfer;

pub mod run;
