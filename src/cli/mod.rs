//! Command-line interface.
//!
//! `main` parses the arguments before touching the terminal:
//!
//! ```ignore
//! use miniapp::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args().skip(1))? {
//!     CliCommand::Run(config) => { /* start the UI */ }
//!     CliCommand::Version | CliCommand::Help => { /* print and exit */ }
//! }
//! ```

pub mod args;

pub use args::{parse_args, usage, CliCommand};
