//! Layering of YAML configuration values.
//!
//! `config.local.yml` is laid over `config.yml` before deserializing, so a
//! local file only needs the keys it changes.
//!
//! # Merge Rules
//!
//! - Mappings merge key by key
//! - Sequences (such as `search_roots`) are replaced whole
//! - A `null` in the overlay drops the key, restoring its default
//! - Anything else in the overlay wins

use serde_yaml::Value;

/// Lay `overlay` over `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    let (Value::Mapping(base_map), Value::Mapping(overlay_map)) = (base, overlay) else {
        return overlay.clone();
    };

    let mut merged = base_map.clone();
    for (key, value) in overlay_map {
        if value.is_null() {
            merged.remove(key);
            continue;
        }
        let next = match base_map.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }
    Value::Mapping(merged)
}

/// Merge configs in order; the last one has the highest priority.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}
