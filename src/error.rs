use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TownlandError>;

#[derive(Debug, Error)]
pub enum TownlandError {
    #[error("No input file specified. Please specify an input file with --input=path")]
    MissingInput,

    #[error(
        "Input file {} does not exist or cannot be read. Please check that the path exists and try again.",
        .0.display()
    )]
    InputNotFound(PathBuf),

    #[error("No output directory specified. Please specify an output directory with --output=path/to/directory/")]
    MissingOutputDir,

    #[error(
        "Output directory {} does not exist. Please check that the path exists and try again.",
        .0.display()
    )]
    OutputDirNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse input as JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Input GeoJSON is not a FeatureCollection")]
    NotFeatureCollection,

    #[error("County specified was invalid: '{0}'. Check and try again (run --counties to see list of valid counties)")]
    InvalidCounty(String),

    #[error("Malformed townland feature: {0}")]
    MalformedFeature(#[from] geojson::Error),

    #[error("Feature has no '{key}' property")]
    MissingProperty { key: &'static str },

    #[error("Failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}
