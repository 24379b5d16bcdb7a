//! JSON-pointer helpers for the unused-key report.

use serde_json::Value;

/// Normalize JSON pointer:
/// - must begin with "/"
/// - no trailing "/" unless it's just "/"
pub(crate) fn normalize_pointer(p: &str) -> String {
    let mut s = p.trim().to_string();
    if s.is_empty() {
        return "/".to_string();
    }
    if !s.starts_with('/') {
        s.insert(0, '/');
    }
    while s.ends_with('/') && s.len() > 1 {
        s.pop();
    }
    s
}

/// Return true if `prefix` is a JSON-pointer prefix of `leaf`.
///
/// "/a/b" consumes "/a/b" and "/a/b/c" but NOT "/a/bc"; "/" consumes everything.
pub(crate) fn is_prefix_pointer(prefix: &str, leaf: &str) -> bool {
    if prefix == "/" || leaf == prefix {
        return true;
    }
    leaf.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('/'))
}

pub(crate) fn collect_leaf_pointers(v: &Value, prefix: &str, out: &mut Vec<String>) {
    match v {
        Value::Object(map) => {
            for (k, vv) in map.iter() {
                let next = format!("{}/{}", prefix, escape_pointer_token(k));
                collect_leaf_pointers(vv, &next, out);
            }
        }
        Value::Array(arr) => {
            for (i, vv) in arr.iter().enumerate() {
                let next = format!("{}/{}", prefix, i);
                collect_leaf_pointers(vv, &next, out);
            }
        }
        _ => {
            let p = if prefix.is_empty() {
                "/".to_string()
            } else {
                prefix.to_string()
            };
            out.push(p);
        }
    }
}

fn escape_pointer_token(s: &str) -> String {
    s.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefix_respects_segment_boundaries() {
        assert!(is_prefix_pointer("/server", "/server/addr"));
        assert!(is_prefix_pointer("/server", "/server"));
        assert!(!is_prefix_pointer("/server", "/servers/addr"));
        assert!(is_prefix_pointer("/", "/anything"));
    }

    #[test]
    fn normalize_adds_leading_and_strips_trailing_slash() {
        assert_eq!(normalize_pointer("seed/"), "/seed");
        assert_eq!(normalize_pointer(""), "/");
    }

    #[test]
    fn leaves_include_array_indices_and_escapes() {
        let mut out = Vec::new();
        collect_leaf_pointers(&json!({ "a/b": [1, { "c": true }] }), "", &mut out);
        out.sort();
        assert_eq!(out, vec!["/a~1b/0", "/a~1b/1/c"]);
    }
}
