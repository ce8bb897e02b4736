//! Prelude module - common imports for hisab users
//!
//! ```rust
//! use hisab::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellAddress,
    CellValue,
    Column,
    // Session
    Command,
    // I/O types
    CsvReader,
    CsvWriter,
    // Error types
    Error,
    Grid,
    Line,
    LineOperation,
    MenuAction,
    Number,
    Outcome,
    Result,
    Session,
    ShareDecision,
    ShareOptions,
};
