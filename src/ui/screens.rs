//! View-model-to-view bindings.
//!
//! These turn the item list and navigation state into plain view structs;
//! `render` only draws what these return.

use crate::model::{find_item, Item};
use crate::nav::Route;
use crate::ui::list::ListCursor;

pub const LIST_TITLE: &str = "Item List";
pub const DETAILS_TITLE: &str = "Item Details";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Label of the row's open button.
    pub button: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub rows: Vec<ListRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: i64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List(ListView),
    /// `None` when the route's id matches no loaded item.
    Details(Option<DetailView>),
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::List(_) => LIST_TITLE,
            Screen::Details(_) => DETAILS_TITLE,
        }
    }
}

pub fn list_view(items: &[Item], cursor: ListCursor) -> ListView {
    let rows = items
        .iter()
        .enumerate()
        .map(|(idx, item)| ListRow {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
            button: item.title.clone(),
            selected: idx == cursor.selected,
        })
        .collect();
    ListView { rows }
}

/// Resolve a details route against the loaded items.
///
/// Returns `None` for a non-details route, a missing id, or an id that is
/// not in `items` (including while the list is still empty).
pub fn detail_view(items: &[Item], route: &Route) -> Option<DetailView> {
    let Route::Details { item_id: Some(id) } = route else {
        return None;
    };
    find_item(items, *id).map(|item| DetailView {
        id: item.id,
        title: item.title.clone(),
        description: item.description.clone(),
    })
}

pub fn bind(items: &[Item], route: &Route, cursor: ListCursor) -> Screen {
    match route {
        Route::List => Screen::List(list_view(items, cursor)),
        Route::Details { .. } => Screen::Details(detail_view(items, route)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item {
                id: 3,
                title: "Three".to_string(),
                description: "third".to_string(),
            },
            Item {
                id: 7,
                title: "Seven".to_string(),
                description: "lucky".to_string(),
            },
        ]
    }

    #[test]
    fn list_view_has_one_row_per_item() {
        let view = list_view(&items(), ListCursor { selected: 1 });
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].title, "Three");
        assert_eq!(view.rows[1].button, "Seven");
        assert!(!view.rows[0].selected);
        assert!(view.rows[1].selected);
    }

    #[test]
    fn empty_list_has_no_rows() {
        let view = list_view(&[], ListCursor::default());
        assert!(view.rows.is_empty());
    }

    #[test]
    fn detail_view_finds_item() {
        let view = detail_view(&items(), &Route::details(7)).expect("item 7");
        assert_eq!(view.title, "Seven");
        assert_eq!(view.description, "lucky");
    }

    #[test]
    fn detail_view_absent_or_invalid_id_is_none() {
        assert!(detail_view(&items(), &Route::details(999)).is_none());
        assert!(detail_view(&items(), &Route::Details { item_id: None }).is_none());
        assert!(detail_view(&[], &Route::details(7)).is_none());
    }

    #[test]
    fn bind_picks_screen_by_route() {
        assert_eq!(
            bind(&items(), &Route::List, ListCursor::default()).title(),
            LIST_TITLE
        );
        assert_eq!(
            bind(&items(), &Route::details(999), ListCursor::default()),
            Screen::Details(None)
        );
    }
}
