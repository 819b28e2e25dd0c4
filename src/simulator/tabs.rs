//! Tab Set Module
//! Mutually exclusive simulator panels with exactly one active.

/// Ordered tab identifiers and the index of the active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    ids: Vec<String>,
    active: usize,
}

impl TabSet {
    /// Build from panel ids. The panel named by `initially_active` starts
    /// active, falling back to the first. Returns `None` with no panels.
    pub fn new(ids: Vec<String>, initially_active: Option<&str>) -> Option<Self> {
        if ids.is_empty() {
            return None;
        }
        let active = initially_active
            .and_then(|id| ids.iter().position(|t| t == id))
            .unwrap_or(0);
        Some(Self { ids, active })
    }

    pub fn active_id(&self) -> &str {
        &self.ids[self.active]
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == id
    }

    /// Make `id` the active tab. Unknown ids leave the state unchanged and
    /// return false.
    pub fn activate(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|t| t == id) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => false,
        }
    }

    /// Active flag per tab, in tab order.
    pub fn projection(&self) -> Vec<(&str, bool)> {
        self.ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i == self.active))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(active: Option<&str>) -> TabSet {
        let ids = ["dashboard", "inventory", "sales"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        TabSet::new(ids, active).unwrap()
    }

    #[test]
    fn test_initial_active_tab() {
        assert_eq!(tabs(Some("sales")).active_id(), "sales");
        assert_eq!(tabs(None).active_id(), "dashboard");
        assert_eq!(tabs(Some("missing")).active_id(), "dashboard");
        assert!(TabSet::new(Vec::new(), None).is_none());
    }

    #[test]
    fn test_exactly_one_active_after_activation() {
        let mut set = tabs(None);
        for id in ["inventory", "sales", "dashboard"] {
            assert!(set.activate(id));
            let active: Vec<&str> = set
                .projection()
                .into_iter()
                .filter(|(_, on)| *on)
                .map(|(id, _)| id)
                .collect();
            assert_eq!(active, vec![id]);
        }
    }

    #[test]
    fn test_unknown_tab_is_ignored() {
        let mut set = tabs(Some("inventory"));
        assert!(!set.activate("reports"));
        assert_eq!(set.active_id(), "inventory");
    }
}
