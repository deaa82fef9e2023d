//! Property stripping and renaming for townland features.

use geojson::{Feature, JsonObject};
use tracing::warn;

use crate::counties::{ENGLISH_NAME_KEY, OUTPUT_NAME_KEY, PROPERTIES_TO_KEEP};
use crate::error::{Result, TownlandError};

/// Features that made it through sanitizing, plus how many were dropped.
#[derive(Debug, Default)]
pub struct Sanitized {
    pub features: Vec<Feature>,
    pub skipped: usize,
}

/// Replace every feature's properties with only the allow-listed keys.
/// A feature with no properties ends up with an empty object.
pub fn clean_properties(features: &mut [Feature]) {
    for feature in features.iter_mut() {
        let kept: JsonObject = feature
            .properties
            .take()
            .unwrap_or_default()
            .into_iter()
            .filter(|(key, _)| PROPERTIES_TO_KEEP.contains(&key.as_str()))
            .collect();
        feature.properties = Some(kept);
    }
}

/// Move `TD_ENGLISH` to `name`. Leaves the feature unchanged and returns
/// `MissingProperty` when there is nothing to move.
pub fn rename_name_key(feature: &mut Feature) -> Result<()> {
    let properties = feature
        .properties
        .as_mut()
        .ok_or(TownlandError::MissingProperty { key: ENGLISH_NAME_KEY })?;
    let name = properties
        .remove(ENGLISH_NAME_KEY)
        .ok_or(TownlandError::MissingProperty { key: ENGLISH_NAME_KEY })?;
    properties.insert(OUTPUT_NAME_KEY.to_string(), name);
    Ok(())
}

/// Clean then rename. Features that cannot be renamed are dropped with a
/// warning so the rest of the county still gets written.
pub fn sanitize(mut features: Vec<Feature>) -> Sanitized {
    clean_properties(&mut features);

    let mut sanitized = Sanitized {
        features: Vec::with_capacity(features.len()),
        skipped: 0,
    };
    for (index, mut feature) in features.into_iter().enumerate() {
        match rename_name_key(&mut feature) {
            Ok(()) => sanitized.features.push(feature),
            Err(e) => {
                warn!(index, id = ?feature.id, "Skipping townland: {}", e);
                sanitized.skipped += 1;
            }
        }
    }
    sanitized
}
