//! Tallysheet - accounting functions for a spreadsheet engine
//! ---
//!
//! Implements the `ODOO.*` accounting cell functions (credit, debit,
//! balance, fiscal year boundaries, account groups) on top of a host
//! accounting data layer, plus the period parser that turns user input
//! such as `Q1/2022` or `12/2022` into a structured date range.
//!

extern crate pest;
#[macro_use]
extern crate pest_derive;

/// The six accounting cell functions and their registration.
pub mod functions;

/// The data contract the host accounting layer fulfills.
pub mod host;

/// Period strings and the [`DateRange`][period::DateRange] sum type.
pub mod period;

/// Cell function registry.
pub mod registry;

/// Date serial conversions, 1900 date system.
pub mod serial;

/// Cell value boxing and coercion.
pub mod value;

mod parser;

pub use functions::register_accounting_functions;
pub use host::{AccountingData, CompanyId};
pub use period::{parse_period, DateRange};
pub use registry::{ArgSpec, Function, FunctionRegistry};
pub use value::Value;
