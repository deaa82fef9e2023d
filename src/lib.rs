pub mod config;
pub mod counties;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod pipeline;
pub mod sanitize;

pub use config::RunOptions;
pub use error::{Result, TownlandError};
pub use pipeline::RunSummary;

/// Load the input dataset named in `options` and split it into one file
/// per county.
pub fn process_file(options: &RunOptions) -> Result<RunSummary> {
    let dataset = pipeline::load_dataset(&options.input)?;
    Ok(pipeline::run(&dataset, options))
}
