//! Archive post filtering
//!
//! The archive page filters its post list by pet kind. "all" is the
//! passthrough key; otherwise an item is visible iff its kind matches the
//! active filter. Exactly one filter button is active at a time.

use serde::{Deserialize, Serialize};

pub const FILTER_ALL: &str = "all";

/// A post list item with the pet kind it is tagged with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostItem {
    pub id: String,
    pub pet: String,
}

/// Per-item visibility for the renderer to apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostVisibility {
    pub id: String,
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct PostFilter {
    items: Vec<PostItem>,
    active: String,
}

impl PostFilter {
    pub fn new(items: Vec<PostItem>) -> Self {
        Self {
            items,
            active: FILTER_ALL.to_string(),
        }
    }

    /// Switch the active filter and recompute every item's visibility.
    /// Any key is accepted; one that matches nothing simply hides all.
    pub fn apply(&mut self, filter: &str) -> Vec<PostVisibility> {
        self.active = filter.to_string();

        self.items
            .iter()
            .map(|item| PostVisibility {
                id: item.id.clone(),
                visible: filter == FILTER_ALL || item.pet == filter,
            })
            .collect()
    }

    pub fn active(&self) -> &str {
        &self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> PostFilter {
        PostFilter::new(vec![
            PostItem {
                id: "post-1".to_string(),
                pet: "dog".to_string(),
            },
            PostItem {
                id: "post-2".to_string(),
                pet: "cat".to_string(),
            },
            PostItem {
                id: "post-3".to_string(),
                pet: "dog".to_string(),
            },
        ])
    }

    #[test]
    fn test_all_shows_everything() {
        let mut filter = filter();
        let visible = filter.apply(FILTER_ALL);
        assert!(visible.iter().all(|v| v.visible));
    }

    #[test]
    fn test_kind_filter_matches_exactly() {
        let mut filter = filter();
        let visible = filter.apply("dog");

        assert_eq!(
            visible,
            vec![
                PostVisibility {
                    id: "post-1".to_string(),
                    visible: true
                },
                PostVisibility {
                    id: "post-2".to_string(),
                    visible: false
                },
                PostVisibility {
                    id: "post-3".to_string(),
                    visible: true
                },
            ]
        );
        assert_eq!(filter.active(), "dog");
    }

    #[test]
    fn test_unmatched_kind_hides_all() {
        let mut filter = filter();
        let visible = filter.apply("bird");
        assert!(visible.iter().all(|v| !v.visible));
    }
}
