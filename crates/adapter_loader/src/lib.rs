//! # adapter_loader (A: Adapter)
//!
//! Batch loading of company exposure records from CSV files.
//!
//! The expected layout is the company-level export of the mining asset
//! database:
//!
//! | Column | Required |
//! |--------|----------|
//! | `Company` | yes |
//! | `HQ Country` | no |
//! | `Mines` | no |
//! | `Total Emissions (tCO₂)` | yes |
//! | `Production (t)` | no |
//! | `Portfolio Intensity` | no (blank reads as 0) |
//!
//! Any other column, such as the `$50/t`…`$200/t` cost columns, is ignored
//! because costs are recomputed by the engine.
//!
//! ## Example
//!
//! ```
//! use adapter_loader::read_company_exposures;
//!
//! let data = "Company,Total Emissions (tCO₂),Portfolio Intensity\nAlpha,1200.5,0.021\n";
//! let companies = read_company_exposures(data.as_bytes()).unwrap();
//!
//! assert_eq!(companies[0].name(), "Alpha");
//! assert_eq!(companies[0].total_emissions(), 1200.5);
//! ```

#![deny(missing_docs)]

mod error;
mod loader;

pub use error::{LoaderError, LoaderResult};
pub use loader::{load_company_exposures, read_company_exposures};
