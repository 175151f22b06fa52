//! Workspace-level integration tests for the FiraScript interpreter.

mod composition;
mod include;
mod numerals;
mod scenarios;
