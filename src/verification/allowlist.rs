/// Mutable static fields injected by instrumentation tools (JaCoCo coverage probes)
pub const DEFAULT_ALLOWED_MUTABLE_STATIC_FIELDS: &[&str] = &["$jacocoData"];

/// Field names exempt from the mutable static field check.
///
/// Names are matched exactly, including case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    names: Vec<String>,
}

impl AllowList {
    /// Creates an allow-list without any entries
    #[must_use]
    pub fn empty() -> Self {
        AllowList { names: Vec::new() }
    }

    /// Adds `name`; adding a name twice has no effect
    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.names.push(name);
        }
    }

    /// Returns true if `name` is exempt
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|allowed| allowed == name)
    }

    /// Iterates the exempt names in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for AllowList {
    fn default() -> Self {
        AllowList {
            names: DEFAULT_ALLOWED_MUTABLE_STATIC_FIELDS
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entries() {
        let allowed = AllowList::default();
        assert!(allowed.contains("$jacocoData"));
        assert!(!allowed.contains("$jacocodata"));
        assert!(!allowed.contains("jacocoData"));
        assert!(!allowed.contains(""));
    }

    #[test]
    fn test_insert() {
        let mut allowed = AllowList::empty();
        assert!(!allowed.contains("$jacocoData"));

        allowed.insert("__timeline");
        allowed.insert("__timeline");
        assert!(allowed.contains("__timeline"));
        assert_eq!(allowed.iter().collect::<Vec<_>>(), vec!["__timeline"]);
    }
}
