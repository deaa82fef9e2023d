use geojson::{Feature, FeatureCollection};

use crate::counties::COUNTY_KEY;

/// Collect the features whose `COUNTY` property equals the upper-cased
/// county name. Matching is exact string equality; the dataset is untouched.
pub fn features_in_county(dataset: &FeatureCollection, county: &str) -> Vec<Feature> {
    let county = county.to_uppercase();

    dataset
        .features
        .iter()
        .filter(|feature| {
            feature
                .property(COUNTY_KEY)
                .and_then(|value| value.as_str())
                .map_or(false, |value| value == county)
        })
        .cloned()
        .collect()
}
