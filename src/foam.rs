//! Main module for foamdict library functionality

pub mod ast;
pub mod config;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod query;
pub mod testing;
