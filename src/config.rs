use std::fs::File;
use std::path::{Path, PathBuf};

use crate::counties::{find_county, COUNTIES};
use crate::error::{Result, TownlandError};

/// Validated options for one run. Built once and never changed.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub reduce: bool,
    pub dry_run: bool,
    /// Restricts the run to one county. `None` means all of them.
    pub county: Option<&'static str>,
}

impl RunOptions {
    /// Check the input file and output directory before any work starts.
    pub fn new(
        input: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        reduce: bool,
        dry_run: bool,
    ) -> Result<Self> {
        let input = input.ok_or(TownlandError::MissingInput)?;
        if !is_readable_file(&input) {
            return Err(TownlandError::InputNotFound(input));
        }

        let output_dir = output_dir.ok_or(TownlandError::MissingOutputDir)?;
        if !output_dir.is_dir() {
            return Err(TownlandError::OutputDirNotFound(output_dir));
        }

        Ok(Self {
            input,
            output_dir,
            reduce,
            dry_run,
            county: None,
        })
    }

    /// Restrict the run to a single county, checked against the known list.
    pub fn with_county(mut self, name: Option<&str>) -> Result<Self> {
        if let Some(name) = name {
            let county =
                find_county(name).ok_or_else(|| TownlandError::InvalidCounty(name.to_string()))?;
            self.county = Some(county);
        }
        Ok(self)
    }

    /// Counties this run covers, in processing order.
    pub fn counties(&self) -> &[&'static str] {
        match &self.county {
            Some(county) => std::slice::from_ref(county),
            None => &COUNTIES,
        }
    }
}

fn is_readable_file(path: &Path) -> bool {
    path.is_file() && File::open(path).is_ok()
}
