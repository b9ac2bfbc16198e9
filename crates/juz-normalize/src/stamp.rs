//! Default metadata keys on quiz items.

use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StampReport {
    pub items_changed: usize,
    pub keys_added: usize,
}

impl StampReport {
    pub fn changed(&self) -> bool {
        self.keys_added > 0
    }
}

/// Add an empty-string value for every key `item` lacks.
///
/// Existing values are never overwritten. Returns the number of keys added;
/// non-object items get none.
pub fn stamp_item<S: AsRef<str>>(item: &mut Value, keys: &[S]) -> usize {
    let Some(object) = item.as_object_mut() else {
        return 0;
    };
    let mut added = 0;
    for key in keys {
        let key = key.as_ref();
        if !object.contains_key(key) {
            object.insert(key.to_string(), Value::String(String::new()));
            added += 1;
        }
    }
    added
}

/// Stamp every item of a juz document.
pub fn stamp_document<S: AsRef<str>>(document: &mut Value, keys: &[S]) -> StampReport {
    let mut report = StampReport::default();
    let Some(items) = document.get_mut("items").and_then(Value::as_array_mut) else {
        return report;
    };
    for item in items {
        let added = stamp_item(item, keys);
        if added > 0 {
            report.items_changed += 1;
            report.keys_added += added;
        }
    }
    report
}
