//! Summary metrics extracted from RCSB entry and polymer-entity records.
//!
//! Every field is looked up by JSON pointer. A missing key at any level,
//! a `null`, an empty string or an empty array all collapse to
//! [`PLACEHOLDER`]. Unit suffixes are only appended to present values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Text shown for any field the service did not provide.
pub const PLACEHOLDER: &str = "not available";

/// Unit suffix for molecular weight.
pub const WEIGHT_UNIT: &str = "Da";

/// Unit suffix for resolution.
pub const RESOLUTION_UNIT: &str = "Å";

const TITLE: &str = "/struct/title";
const MOLECULAR_WEIGHT: &str = "/rcsb_entry_info/molecular_weight";
const CHAIN_COUNT: &str = "/rcsb_entry_info/polymer_entity_count_protein";
const RESOLUTION: &str = "/rcsb_entry_info/resolution_combined";
const METHOD: &str = "/exptl/0/method";
const ORGANISM: &str = "/rcsb_entity_source_organism/0/organism_scientific_name";

/// The six display fields of one structure lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinSummary {
    /// Entry title.
    pub name: String,
    /// Molecular weight with unit suffix.
    pub molecular_weight: String,
    /// Number of distinct protein entities.
    pub chain_count: String,
    /// Combined resolution with unit suffix.
    pub resolution: String,
    /// Experimental method (X-RAY DIFFRACTION, SOLUTION NMR, ...).
    pub experimental_method: String,
    /// Source organism of the first polymer entity.
    pub organism: String,
}

/// One labeled value on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    /// Display label.
    pub label: &'static str,
    /// Display value.
    pub value: String,
}

impl ProteinSummary {
    /// Builds a summary from the entry record and, when it was retrieved,
    /// the polymer-entity record.
    pub fn from_records(entry: &Value, entity: Option<&Value>) -> Self {
        Self {
            name: field(entry, TITLE, None),
            molecular_weight: field(entry, MOLECULAR_WEIGHT, Some(WEIGHT_UNIT)),
            chain_count: field(entry, CHAIN_COUNT, None),
            resolution: field(entry, RESOLUTION, Some(RESOLUTION_UNIT)),
            experimental_method: field(entry, METHOD, None),
            organism: entity.map_or_else(|| PLACEHOLDER.to_string(), |e| field(e, ORGANISM, None)),
        }
    }

    /// The four dashboard metrics, laid out as two columns of two.
    pub fn metric_columns(&self) -> [[Metric; 2]; 2] {
        [
            [
                Metric {
                    label: "Molecular weight",
                    value: self.molecular_weight.clone(),
                },
                Metric {
                    label: "Chain count",
                    value: self.chain_count.clone(),
                },
            ],
            [
                Metric {
                    label: "Resolution",
                    value: self.resolution.clone(),
                },
                Metric {
                    label: "Experimental method",
                    value: self.experimental_method.clone(),
                },
            ],
        ]
    }

    /// All six fields as `(label, value)` pairs, in display order.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("Name", self.name.as_str()),
            ("Molecular weight", self.molecular_weight.as_str()),
            ("Chain count", self.chain_count.as_str()),
            ("Resolution", self.resolution.as_str()),
            ("Experimental method", self.experimental_method.as_str()),
            ("Organism", self.organism.as_str()),
        ]
    }
}

fn field(record: &Value, pointer: &str, unit: Option<&str>) -> String {
    match (record.pointer(pointer).and_then(render_value), unit) {
        (Some(text), Some(unit)) => format!("{text} {unit}"),
        (Some(text), None) => text,
        (None, _) => PLACEHOLDER.to_string(),
    }
}

/// Renders a JSON value as display text, or `None` when it counts as missing.
///
/// Arrays are joined with ", " (the RCSB `resolution_combined` field is a
/// list); elements that are themselves missing are skipped.
pub fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(render_value).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        Value::Object(map) if map.is_empty() => None,
        Value::Object(_) => Some(value.to_string()),
    }
}
