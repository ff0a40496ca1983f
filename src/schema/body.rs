use serde::{Deserialize, Serialize};

/// A body stored in a dataset.
///
/// Fields
/// -----------------
/// * `name`: Display name, also used to build the tabular header (`<name>_RA`, ...).
/// * `horizons_id`: JPL Horizons `COMMAND` identifier the source table was fetched with,
///   when known (e.g. `"199"` for Mercury, `"90000030"` for Halley).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizons_id: Option<String>,
}

impl BodyDescriptor {
    pub fn new(name: impl Into<String>, horizons_id: impl Into<String>) -> Self {
        BodyDescriptor {
            name: name.into(),
            horizons_id: Some(horizons_id.into()),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        BodyDescriptor {
            name: name.into(),
            horizons_id: None,
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}
