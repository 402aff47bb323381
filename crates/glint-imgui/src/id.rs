use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Stable identifier of a window or widget across frames.
///
/// Built from the owning window's title and the widget label. Everything
/// after `##` in a label is hashed but never displayed, so two widgets with
/// the same visible text can still be told apart.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Id(u64);

impl Id {
    pub fn new(scope: &str, label: &str) -> Self {
        let mut h = DefaultHasher::new();
        scope.hash(&mut h);
        label.hash(&mut h);
        Id(h.finish())
    }

    /// Id of a top-level window.
    pub fn window(title: &str) -> Self {
        Id::new("", title)
    }

    /// Derives the id of a sub-element, e.g. one channel of a color editor.
    pub fn with(self, part: &str) -> Self {
        let mut h = DefaultHasher::new();
        self.0.hash(&mut h);
        part.hash(&mut h);
        Id(h.finish())
    }
}

/// Visible part of a label.
pub fn display_label(label: &str) -> &str {
    match label.find("##") {
        Some(i) => &label[..i],
        None => label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_inputs_same_id() {
        assert_eq!(Id::new("Debug", "Draw Rect"), Id::new("Debug", "Draw Rect"));
    }

    #[test]
    fn scope_separates_equal_labels() {
        assert_ne!(Id::new("Debug", "Radius"), Id::new("Other", "Radius"));
    }

    #[test]
    fn hidden_suffix_changes_id_not_text() {
        assert_ne!(Id::new("w", "Go##a"), Id::new("w", "Go##b"));
        assert_eq!(display_label("Go##a"), "Go");
        assert_eq!(display_label("##only"), "");
        assert_eq!(display_label("Plain"), "Plain");
    }

    #[test]
    fn derived_ids_differ_per_part() {
        let base = Id::new("w", "Color");
        assert_ne!(base.with("R"), base.with("G"));
        assert_ne!(base.with("R"), base);
    }
}
