//! Wire types exchanged with the area service.
//!
//! DESIGN
//! ======
//! These mirror the JSON bodies of `get_areas` and `obscured_areas` exactly.
//! Geometry is in reference-resolution pixels (see `util::geometry`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named rectangular region on the stream.
///
/// `left`/`right` and `top`/`bottom` are stored in the order the user clicked
/// them and are not guaranteed to be sorted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Area {
    /// Query-string arguments for `add_area`.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, String); 5] {
        [
            ("name", self.name.clone()),
            ("left", self.left.to_string()),
            ("right", self.right.to_string()),
            ("top", self.top.to_string()),
            ("bottom", self.bottom.to_string()),
        ]
    }
}

/// Body of `GET /get_areas`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaList {
    pub areas: Vec<Area>,
}

/// Body of `GET /obscured_areas`: area name to "is obscured".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObscuredAreas {
    pub areas: BTreeMap<String, bool>,
}
