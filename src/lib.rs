//! docfetch library
//!
//! This crate provides the core functionality for the `docfetch` binary.
//!
//! ## Overview
//!
//! One run downloads the documentation endpoint once and branches on the response:
//!
//! - [`downloader`] - Issues the single GET request and reads the whole body
//! - [`models`] - Response classification (JSON notice vs. binary archive) and the run outcome
//! - [`notice`] - Decides whether a JSON body is an expiration notice
//! - [`extractor`] - Extracts the ZIP archive into the output directory
//! - [`fetcher`] - Ties the steps together and checks for the marker file
//! - [`report`] - Console lines and exit status for a finished run
//! - [`cli`] - Command-line parsing and the default run
//! - [`config`] - Endpoint, output directory and marker file
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use docfetch::{config::FetcherConfig, fetcher::Fetcher, report};
//!
//! # async fn example() {
//! let fetcher = Fetcher::new(FetcherConfig::default().with_output_dir("docs")).unwrap();
//! let result = fetcher.run().await;
//! let code = report::print_result(&result);
//! # let _ = code;
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod downloader;
pub mod errors;
pub mod extractor;
pub mod fetcher;
pub mod logging;
pub mod models;
pub mod notice;
pub mod report;
pub mod ui;
