//! Theme override.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque theme descriptor handed to the front-end untouched.
///
/// Only its shape is checked: a palette is always a record, e.g.
/// `{ light: { primary: { r, g, b }, ... }, dark: { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Map<String, Value>);

impl Palette {
    /// Looks up a top-level entry such as `light` or `dark`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}
