//! Path mutation over JSON values
//!
//! [`set_at_path`] and [`remove_at_path`] take the value by ownership and
//! return the edited value, so callers that keep their own copy never observe
//! the edit. Missing or `null` intermediate keys are materialized as empty
//! objects; scalars on the path are an error rather than being overwritten.

use casestudy_schema::{segment_index, DocumentPath, PathError};
use serde_json::{Map, Value};

/// Set `value` at `path`, creating intermediate objects as needed
///
/// A final index equal to the array length appends.
///
/// # Errors
/// - [`PathError::EmptyPath`] for the root path
/// - [`PathError::IndexOutOfRange`] / [`PathError::ExpectedIndex`] for bad array segments
/// - [`PathError::NotAContainer`] when a scalar sits on the path
pub fn set_at_path(mut root: Value, path: &DocumentPath, value: Value) -> Result<Value, PathError> {
    let Some((last, parents)) = path.segments().split_last() else {
        return Err(PathError::EmptyPath);
    };

    let mut current = &mut root;
    for (depth, segment) in parents.iter().enumerate() {
        current = descend_or_create(current, segment, || prefix(path, depth))?;
    }

    let at = || prefix(path, parents.len());
    if current.is_null() {
        *current = Value::Object(Map::new());
    }
    match current {
        Value::Object(map) => {
            map.insert(last.clone(), value);
        }
        Value::Array(items) => {
            let index = array_index(last, at)?;
            match index.cmp(&items.len()) {
                std::cmp::Ordering::Less => items[index] = value,
                std::cmp::Ordering::Equal => items.push(value),
                std::cmp::Ordering::Greater => {
                    return Err(PathError::IndexOutOfRange {
                        path: at(),
                        index,
                        len: items.len(),
                    })
                }
            }
        }
        _ => return Err(PathError::NotAContainer { path: at() }),
    }

    Ok(root)
}

/// Remove the value at `path`
///
/// Returns the edited root and the removed value. A missing key anywhere on
/// the path is not an error and removes nothing.
///
/// # Errors
/// Same as [`set_at_path`], except that missing keys are tolerated
pub fn remove_at_path(
    mut root: Value,
    path: &DocumentPath,
) -> Result<(Value, Option<Value>), PathError> {
    let removed = remove_in_place(&mut root, path)?;
    Ok((root, removed))
}

fn remove_in_place(root: &mut Value, path: &DocumentPath) -> Result<Option<Value>, PathError> {
    let Some((last, parents)) = path.segments().split_last() else {
        return Err(PathError::EmptyPath);
    };

    let mut current = root;
    for (depth, segment) in parents.iter().enumerate() {
        match descend(current, segment, || prefix(path, depth))? {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }

    let at = || prefix(path, parents.len());
    match current {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(map.remove(last)),
        Value::Array(items) => {
            let index = array_index(last, at)?;
            if index >= items.len() {
                return Err(PathError::IndexOutOfRange {
                    path: at(),
                    index,
                    len: items.len(),
                });
            }
            Ok(Some(items.remove(index)))
        }
        _ => Err(PathError::NotAContainer { path: at() }),
    }
}

/// Read the value at `path`, `None` when any segment is missing
#[must_use]
pub fn get_at_path<'a>(root: &'a Value, path: &DocumentPath) -> Option<&'a Value> {
    path.iter().try_fold(root, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment_index(segment).and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Whether `stored` still carries everything in `written`
///
/// Keys present only in `stored` (filled-in defaults) are ignored, and a
/// `null` in `written` matches an absent or defaulted value.
#[must_use]
pub fn retains(stored: Option<&Value>, written: &Value) -> bool {
    match (written, stored) {
        (Value::Null, _) => true,
        (Value::Object(fields), Some(Value::Object(kept))) => fields
            .iter()
            .all(|(key, value)| retains(kept.get(key), value)),
        (Value::Array(items), Some(Value::Array(kept))) => {
            items.len() == kept.len()
                && items.iter().zip(kept).all(|(value, k)| retains(Some(k), value))
        }
        (_, stored) => stored == Some(written),
    }
}

fn descend_or_create<'a>(
    current: &'a mut Value,
    segment: &str,
    at: impl Fn() -> String,
) -> Result<&'a mut Value, PathError> {
    if current.is_null() {
        *current = Value::Object(Map::new());
    }
    match current {
        Value::Object(map) => {
            let slot = map
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if slot.is_null() {
                *slot = Value::Object(Map::new());
            }
            Ok(slot)
        }
        Value::Array(items) => {
            let len = items.len();
            let index = array_index(segment, &at)?;
            items.get_mut(index).ok_or_else(|| PathError::IndexOutOfRange {
                path: at(),
                index,
                len,
            })
        }
        _ => Err(PathError::NotAContainer { path: at() }),
    }
}

fn descend<'a>(
    current: &'a mut Value,
    segment: &str,
    at: impl Fn() -> String,
) -> Result<Option<&'a mut Value>, PathError> {
    match current {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(map.get_mut(segment)),
        Value::Array(items) => {
            let len = items.len();
            let index = array_index(segment, &at)?;
            items
                .get_mut(index)
                .map(Some)
                .ok_or_else(|| PathError::IndexOutOfRange {
                    path: at(),
                    index,
                    len,
                })
        }
        _ => Err(PathError::NotAContainer { path: at() }),
    }
}

fn array_index(segment: &str, at: impl Fn() -> String) -> Result<usize, PathError> {
    segment_index(segment).ok_or_else(|| PathError::ExpectedIndex {
        path: at(),
        segment: segment.to_string(),
    })
}

fn prefix(path: &DocumentPath, depth: usize) -> String {
    path.segments()[..depth].join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn p(s: &str) -> DocumentPath {
        s.parse().unwrap()
    }

    #[test]
    fn retains_ignores_added_defaults() {
        let stored = json!({"title": "X", "icon": "", "points": []});
        assert!(retains(Some(&stored), &json!({"title": "X"})));
        assert!(retains(Some(&stored), &json!({"title": "X", "label": null})));
        assert!(!retains(Some(&stored), &json!({"title": "X", "titel": "Y"})));
        assert!(!retains(None, &json!("Acme")));
        assert!(retains(None, &json!(null)));
        assert!(!retains(Some(&json!([1])), &json!([1, 2])));
    }

    #[test]
    fn set_creates_intermediates() {
        let out = set_at_path(json!({}), &p("architecture.coreStack"), json!([1])).unwrap();
        assert_eq!(out, json!({"architecture": {"coreStack": [1]}}));
    }

    #[test]
    fn set_keeps_siblings() {
        let root = json!({"meta": {"title": "a", "date": "d"}});
        let out = set_at_path(root, &p("meta.title"), json!("b")).unwrap();
        assert_eq!(out, json!({"meta": {"title": "b", "date": "d"}}));
    }

    #[test]
    fn set_replaces_null_intermediate() {
        let out = set_at_path(json!({"header": null}), &p("header.icon"), json!("Zap")).unwrap();
        assert_eq!(out, json!({"header": {"icon": "Zap"}}));
    }

    #[test]
    fn set_into_array() {
        let root = json!({"items": [{"t": 1}, {"t": 2}]});
        let out = set_at_path(root, &p("items.1.t"), json!(9)).unwrap();
        assert_eq!(out, json!({"items": [{"t": 1}, {"t": 9}]}));

        let out = set_at_path(out, &p("items.2"), json!({"t": 3})).unwrap();
        assert_eq!(out["items"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn set_rejects_bad_array_segments() {
        let root = json!({"items": []});
        assert!(matches!(
            set_at_path(root.clone(), &p("items.4.t"), json!(1)),
            Err(PathError::IndexOutOfRange { index: 4, len: 0, .. })
        ));
        assert!(matches!(
            set_at_path(root, &p("items.x"), json!(1)),
            Err(PathError::ExpectedIndex { .. })
        ));
    }

    #[test]
    fn set_refuses_to_overwrite_scalar() {
        let root = json!({"meta": {"title": "t"}});
        assert_eq!(
            set_at_path(root, &p("meta.title.x"), json!(1)),
            Err(PathError::NotAContainer {
                path: "meta.title".into()
            })
        );
    }

    #[test]
    fn set_root_is_error() {
        assert_eq!(
            set_at_path(json!({}), &DocumentPath::root(), json!(1)),
            Err(PathError::EmptyPath)
        );
    }

    #[test]
    fn remove_key_and_index() {
        let root = json!({"roadmap": {"ux": [], "status": ""}, "list": [1, 2, 3]});
        let (root, removed) = remove_at_path(root, &p("roadmap.ux")).unwrap();
        assert_eq!(removed, Some(json!([])));
        assert_eq!(root["roadmap"], json!({"status": ""}));

        let (root, removed) = remove_at_path(root, &p("list.0")).unwrap();
        assert_eq!(removed, Some(json!(1)));
        assert_eq!(root["list"], json!([2, 3]));
    }

    #[test]
    fn remove_missing_is_noop() {
        let root = json!({"meta": {}});
        let (out, removed) = remove_at_path(root.clone(), &p("deployment.steps")).unwrap();
        assert_eq!(out, root);
        assert!(removed.is_none());
    }

    #[test]
    fn get_reads_nested() {
        let root = json!({"features": {"items": [{"icon": "Zap"}]}});
        assert_eq!(get_at_path(&root, &p("features.items.0.icon")), Some(&json!("Zap")));
        assert_eq!(get_at_path(&root, &p("features.items.1.icon")), None);
        assert_eq!(get_at_path(&root, &DocumentPath::root()), Some(&root));
    }
}
