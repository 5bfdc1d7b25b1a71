//! Builder API for ergonomic machine construction.
//!
//! This module provides the fluent builder and declaration macros for
//! creating machines with minimal boilerplate while keeping all
//! validation at construction time.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
