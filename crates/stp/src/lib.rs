//! `stp` - inspect SteinLib STP files from the command line.
//!
//! The binary is a thin layer over the [`steinlib`] parser: every command
//! opens its input, runs a visitor over it and prints what the visitor saw.

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod inspect;
pub mod output;
