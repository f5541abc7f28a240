//! Listing Utilities
//!
//! Helpers for maintaining the locally displayed content list. The
//! list is a best-effort mirror of server state: items are only ever
//! added or removed whole, never edited in place.

use crate::models::ContentItem;

/// Put a freshly created item at the front of the list
pub fn prepend(items: &mut Vec<ContentItem>, item: ContentItem) {
    items.insert(0, item);
}

/// Drop the item with the given id, keeping everything else in order
pub fn remove_by_id(items: &mut Vec<ContentItem>, id: u32) {
    items.retain(|item| item.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, title: &str) -> ContentItem {
        ContentItem {
            id,
            title: title.to_string(),
            description: format!("description {}", id),
            image_url: None,
            created_at: None,
        }
    }

    #[test]
    fn prepend_puts_the_new_item_first() {
        let mut items = vec![make_item(1, "A"), make_item(2, "B")];

        prepend(&mut items, make_item(3, "C"));

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, 3);
        assert_eq!(items[1].id, 1);
        assert_eq!(items[2].id, 2);
    }

    #[test]
    fn prepend_into_empty_list() {
        // Create into [] yields a single-element list
        let mut items = Vec::new();
        prepend(&mut items, make_item(2, "B"));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 2);
        assert_eq!(items[0].title, "B");
    }

    #[test]
    fn remove_keeps_the_remaining_order() {
        let mut items = vec![make_item(1, "A"), make_item(2, "B"), make_item(3, "C")];

        remove_by_id(&mut items, 2);

        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn remove_the_only_item_empties_the_list() {
        // Delete of id 1 from [{id:1}] yields []
        let mut items = vec![make_item(1, "A")];
        remove_by_id(&mut items, 1);
        assert!(items.is_empty());
    }

    #[test]
    fn remove_with_unknown_id_changes_nothing() {
        let mut items = vec![make_item(1, "A"), make_item(2, "B")];
        remove_by_id(&mut items, 99);
        assert_eq!(items.len(), 2);
    }
}
