//! Column projection and row filtering for simple comma-separated tables.
//!
//! ```no_run
//! use csv_processor::{CsvProcessor, LocalEnvLoader, OutputConfig};
//!
//! let config = OutputConfig::from_loader(&LocalEnvLoader::new());
//! let processor = CsvProcessor::new(config);
//! let out = processor.process_data("a,b,c\n1,2,3\n4,5,6", "c,a", "a>1")?;
//! assert_eq!(out.text, "a,c\n4,6");
//! # Ok::<(), csv_processor::ProcessError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod processor;

pub use config::{EnvLoader, LocalEnvLoader, OutputConfig};
pub use data::filter::{parse_filters, Filter, Operator};
pub use data::model::Table;
pub use error::{ProcessError, Result};
pub use processor::{save_csv_file, CsvProcessor, ProcessedOutput};
