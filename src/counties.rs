/// Counties processed by the pipeline, in output order.
pub const COUNTIES: [&str; 26] = [
    "carlow", "cavan", "clare", "cork", "donegal", "dublin", "galway", "kerry", "kildare",
    "kilkenny", "laois", "leitrim", "limerick", "longford", "louth", "mayo", "meath",
    "monaghan", "offaly", "roscommon", "sligo", "tipperary", "waterford", "westmeath",
    "wexford", "wicklow",
];

// Property keys in the source dataset
pub const COUNTY_KEY: &str = "COUNTY";
pub const ENGLISH_NAME_KEY: &str = "TD_ENGLISH";
pub const IRISH_NAME_KEY: &str = "TD_GAEILGE";

/// Key `TD_ENGLISH` is moved to in the output files.
pub const OUTPUT_NAME_KEY: &str = "name";

/// Properties that survive cleaning. Everything else is dropped.
pub const PROPERTIES_TO_KEEP: [&str; 2] = [ENGLISH_NAME_KEY, IRISH_NAME_KEY];

pub const OUTPUT_PREFIX: &str = "townlands_";
pub const REDUCED_INFIX: &str = "reduced_";
pub const OUTPUT_EXTENSION: &str = "geojson";

/// Look up a county by name in any case, returning its canonical form.
pub fn find_county(name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();
    COUNTIES.iter().copied().find(|county| *county == name)
}

fn capitalize(county: &str) -> String {
    let mut chars = county.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Supported counties in three columns, as printed by `--counties`.
pub fn county_table() -> String {
    let mut table = String::from("List of counties:\n");
    for row in COUNTIES.chunks(3) {
        let cells: Vec<String> = row
            .iter()
            .map(|county| format!("{:<15}", capitalize(county)))
            .collect();
        table.push_str(cells.concat().trim_end());
        table.push('\n');
    }
    table.push_str("Note that the counties in Northern Ireland are not included here.\n");
    table
}
