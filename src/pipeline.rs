use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use geojson::{Feature, FeatureCollection};
use serde_json::Value as JsonValue;
use tracing::{debug, error, info, warn};

use crate::config::RunOptions;
use crate::counties::{OUTPUT_EXTENSION, OUTPUT_PREFIX, REDUCED_INFIX};
use crate::error::{Result, TownlandError};
use crate::filter::features_in_county;
use crate::geometry::reduce_feature_geometry;
use crate::sanitize::sanitize;

/// Sanitized townlands for one county, ready to serialize.
pub struct CountyExtract {
    pub collection: FeatureCollection,
    pub skipped: usize,
}

/// What happened to one county during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyReport {
    pub county: &'static str,
    pub features: usize,
    pub skipped: usize,
    pub path: PathBuf,
    pub written: bool,
}

#[derive(Debug)]
pub struct CountyFailure {
    pub county: &'static str,
    pub error: TownlandError,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<CountyReport>,
    pub failures: Vec<CountyFailure>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total_features(&self) -> usize {
        self.reports.iter().map(|r| r.features).sum()
    }
}

/// Read the whole townland dataset.
///
/// Invalid JSON, or a top level that is not a FeatureCollection, is fatal.
/// Individual features that fail to parse are skipped with a warning.
pub fn load_dataset(path: &Path) -> Result<FeatureCollection> {
    info!("Loading file: {}", path.display());
    let file = File::open(path).map_err(|source| TownlandError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let value: JsonValue = serde_json::from_reader(reader).map_err(TownlandError::Parse)?;
    let collection = collection_from_value(value)?;
    info!("Found {} features in file", collection.features.len());
    Ok(collection)
}

/// Build a FeatureCollection from parsed JSON, tolerating features that
/// leave out their `"type": "Feature"` member.
pub fn collection_from_value(value: JsonValue) -> Result<FeatureCollection> {
    let mut object = match value {
        JsonValue::Object(object) => object,
        _ => return Err(TownlandError::NotFeatureCollection),
    };
    if object.get("type").and_then(JsonValue::as_str) != Some("FeatureCollection") {
        return Err(TownlandError::NotFeatureCollection);
    }
    let raw_features = match object.remove("features") {
        Some(JsonValue::Array(features)) => features,
        _ => return Err(TownlandError::NotFeatureCollection),
    };

    let mut features = Vec::with_capacity(raw_features.len());
    for (index, raw) in raw_features.into_iter().enumerate() {
        match feature_from_value(raw) {
            Ok(feature) => features.push(feature),
            Err(e) => warn!(index, "Skipping townland: {}", e),
        }
    }

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

fn feature_from_value(mut raw: JsonValue) -> Result<Feature> {
    if let JsonValue::Object(object) = &mut raw {
        object
            .entry("type")
            .or_insert_with(|| JsonValue::from("Feature"));
    }
    Ok(Feature::from_json_value(raw)?)
}

/// `<dir>/townlands_[reduced_]<county>.geojson`
pub fn output_path(output_dir: &Path, county: &str, reduce: bool) -> PathBuf {
    let infix = if reduce { REDUCED_INFIX } else { "" };
    output_dir.join(format!(
        "{}{}{}.{}",
        OUTPUT_PREFIX, infix, county, OUTPUT_EXTENSION
    ))
}

/// Filter, sanitize and optionally round the townlands of one county.
pub fn extract_county(dataset: &FeatureCollection, county: &str, reduce: bool) -> CountyExtract {
    let sanitized = sanitize(features_in_county(dataset, county));
    let mut features = sanitized.features;

    if reduce {
        reduce_feature_geometry(&mut features);
    }

    CountyExtract {
        collection: FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        },
        skipped: sanitized.skipped,
    }
}

/// Compact JSON text for an output collection.
pub fn serialize_collection(collection: &FeatureCollection) -> Result<String> {
    serde_json::to_string(collection).map_err(TownlandError::Serialize)
}

/// Write one county file in a single call, replacing whatever was there.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| TownlandError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn process_county(
    dataset: &FeatureCollection,
    county: &'static str,
    options: &RunOptions,
) -> Result<CountyReport> {
    let extract = extract_county(dataset, county, options.reduce);
    let path = output_path(&options.output_dir, county, options.reduce);
    let contents = serialize_collection(&extract.collection)?;

    let mut report = CountyReport {
        county,
        features: extract.collection.features.len(),
        skipped: extract.skipped,
        path,
        written: false,
    };

    if options.dry_run {
        info!(
            "Dry run: {} townlands for {} not written to {}",
            report.features,
            county,
            report.path.display()
        );
    } else {
        write_output(&report.path, &contents)?;
        report.written = true;
        info!(
            "Written {} townlands to {}",
            report.features,
            report.path.display()
        );
    }
    if report.skipped > 0 {
        debug!("{} townlands skipped for {}", report.skipped, county);
    }

    Ok(report)
}

/// Run the given counties in order. A failed county is recorded and the
/// rest still run.
pub fn run_counties(
    dataset: &FeatureCollection,
    options: &RunOptions,
    counties: &[&'static str],
) -> RunSummary {
    let mut summary = RunSummary::default();

    for &county in counties {
        info!("Extracting townlands for {}", county);
        match process_county(dataset, county, options) {
            Ok(report) => summary.reports.push(report),
            Err(e) => {
                error!("Failed to process {}: {}", county, e);
                summary.failures.push(CountyFailure { county, error: e });
            }
        }
    }

    info!(
        "Processed {} counties, {} townlands, {} failures",
        counties.len(),
        summary.total_features(),
        summary.failures.len()
    );
    summary
}

/// Run the counties selected by `options`: one if `--county` was given,
/// otherwise the whole fixed list.
pub fn run(dataset: &FeatureCollection, options: &RunOptions) -> RunSummary {
    run_counties(dataset, options, options.counties())
}
