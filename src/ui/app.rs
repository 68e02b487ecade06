use crate::model::Item;
use crate::nav::Route;
use crate::observable::Subscriber;
use crate::ui::list::{ListCursor, ListIntent, ListReducer};
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{NavIntent, NavReducer, NavState};
use crate::ui::screens::{self, Screen};
use crate::viewmodel::FetchStatus;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Requests from the UI thread to the async side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Refresh,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    items: Subscriber<Vec<Item>>,
    status: Subscriber<FetchStatus>,
    nav: NavState,
    cursor: ListCursor,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(items: Subscriber<Vec<Item>>, status: Subscriber<FetchStatus>) -> Self {
        Self {
            should_quit: false,
            items,
            status,
            nav: NavState::default(),
            cursor: ListCursor::default(),
            command_sender: None,
        }
    }

    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn items(&self) -> Arc<Vec<Item>> {
        self.items.get()
    }

    pub fn status(&self) -> Arc<FetchStatus> {
        self.status.get()
    }

    pub fn route(&self) -> &Route {
        self.nav.current()
    }

    pub fn cursor(&self) -> ListCursor {
        self.cursor
    }

    pub fn can_go_back(&self) -> bool {
        !self.nav.is_at_root()
    }

    /// Bind the current route to a view.
    pub fn screen(&self) -> Screen {
        screens::bind(&self.items.get(), self.nav.current(), self.cursor)
    }

    /// The item list was republished; keep the cursor in range.
    pub fn on_items_changed(&mut self) {
        let len = self.items.take().len();
        dispatch_mvi!(self, cursor, ListReducer, ListIntent::Clamp { len });
    }

    pub fn move_up(&mut self) {
        let len = self.items.get().len();
        dispatch_mvi!(self, cursor, ListReducer, ListIntent::MoveUp { len });
    }

    pub fn move_down(&mut self) {
        let len = self.items.get().len();
        dispatch_mvi!(self, cursor, ListReducer, ListIntent::MoveDown { len });
    }

    /// Activate the selected row's button. Does nothing on an empty list.
    pub fn open_selected(&mut self) {
        let id = self.items.get().get(self.cursor.selected).map(|item| item.id);
        if let Some(id) = id {
            self.navigate(Route::details(id));
        }
    }

    pub fn navigate(&mut self, route: Route) {
        dispatch_mvi!(self, nav, NavReducer, NavIntent::Open(route));
    }

    pub fn back(&mut self) {
        dispatch_mvi!(self, nav, NavReducer, NavIntent::Back);
    }

    pub fn request_refresh(&mut self) {
        if let Some(sender) = &self.command_sender {
            if sender.try_send(UiCommand::Refresh).is_err() {
                tracing::debug!("Refresh command dropped, queue full or closed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observable::{self, Publisher};

    fn item(id: i64) -> Item {
        Item {
            id,
            title: format!("title {id}"),
            description: format!("description {id}"),
        }
    }

    fn make_app() -> (App, Publisher<Vec<Item>>, Publisher<FetchStatus>) {
        let (items_tx, items) = observable::channel(Vec::new());
        let (status_tx, status) = observable::channel(FetchStatus::Idle);
        (App::new(items, status), items_tx, status_tx)
    }

    #[test]
    fn open_selected_navigates_to_item_details() {
        let (mut app, items, _status) = make_app();
        items.publish(vec![item(1), item(7)]);
        app.on_items_changed();
        app.move_down();
        app.open_selected();
        assert_eq!(app.route(), &Route::details(7));
        assert!(app.can_go_back());
    }

    #[test]
    fn open_selected_on_empty_list_stays_on_list() {
        let (mut app, _items, _status) = make_app();
        app.open_selected();
        assert_eq!(app.route(), &Route::List);
    }

    #[test]
    fn back_returns_to_list() {
        let (mut app, _items, _status) = make_app();
        app.navigate(Route::details(3));
        app.back();
        assert_eq!(app.route(), &Route::List);
        app.back();
        assert_eq!(app.route(), &Route::List);
    }

    #[test]
    fn shrinking_list_clamps_cursor() {
        let (mut app, items, _status) = make_app();
        items.publish(vec![item(1), item(2), item(3)]);
        app.on_items_changed();
        app.move_up();
        assert_eq!(app.cursor().selected, 2);
        items.publish(vec![item(4)]);
        app.on_items_changed();
        assert_eq!(app.cursor().selected, 0);
    }

    #[tokio::test]
    async fn request_refresh_sends_command() {
        let (mut app, _items, _status) = make_app();
        let (tx, mut rx) = mpsc::channel(4);
        app.attach_commands(tx);
        app.request_refresh();
        assert_eq!(rx.recv().await, Some(UiCommand::Refresh));
    }
}
