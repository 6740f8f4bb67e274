//! Main module for papier library functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod logging;
pub mod parsing;
pub mod processor;
