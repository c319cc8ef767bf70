use std::collections::BTreeMap;

pub fn value_lines(values: &[i32]) -> Vec<String> {
    values.iter().map(|v| format!("value = {}", v)).collect()
}

pub fn indexed_lines(values: &[i32]) -> Vec<String> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("index: {} value: {}", i, v))
        .collect()
}

pub fn index_lines(values: &[i32]) -> Vec<String> {
    (0..values.len()).map(|i| format!("index only = {}", i)).collect()
}

/// Byte offset and character of every code point in `s`.
pub fn char_positions(s: &str) -> Vec<(usize, char)> {
    s.char_indices().collect()
}

/// Look up `key`, falling back to 0. The flag says whether the key existed.
pub fn lookup(map: &BTreeMap<String, i32>, key: &str) -> (i32, bool) {
    match map.get(key) {
        Some(&value) => (value, true),
        None => (0, false),
    }
}

/// `{k: v, ...}` in key order.
pub fn render_map(map: &BTreeMap<String, i32>) -> String {
    let entries: Vec<String> = map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
    format!("{{{}}}", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ages() -> BTreeMap<String, i32> {
        let mut m = BTreeMap::new();
        m.insert("alice".to_string(), 23);
        m.insert("bob".to_string(), 34);
        m
    }

    #[test]
    fn array_renderers() {
        let values = [7, 8];
        assert_eq!(value_lines(&values), vec!["value = 7", "value = 8"]);
        assert_eq!(indexed_lines(&values), vec!["index: 0 value: 7", "index: 1 value: 8"]);
        assert_eq!(index_lines(&values), vec!["index only = 0", "index only = 1"]);
    }

    #[test]
    fn char_positions_are_byte_offsets() {
        assert_eq!(char_positions("go"), vec![(0, 'g'), (1, 'o')]);
        assert_eq!(char_positions("é!"), vec![(0, 'é'), (2, '!')]);
    }

    #[test]
    fn lookup_reports_presence() {
        let m = ages();
        assert_eq!(lookup(&m, "bob"), (34, true));
        assert_eq!(lookup(&m, "ashrith"), (0, false));
    }

    #[test]
    fn delete_then_render() {
        let mut m = ages();
        assert_eq!(m.remove("bob"), Some(34));
        assert_eq!(render_map(&m), "{alice: 23}");
        assert_eq!(render_map(&BTreeMap::new()), "{}");
    }
}
