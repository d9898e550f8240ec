//! Paged list of the token mappings held by the gateway.

use std::{collections::HashSet, fmt, sync::Arc};

use iced::{
    event::{self, Event},
    keyboard::{self, key::Named, Key},
    window, Subscription, Task,
};
use tracing::{debug, error, warn};

use super::toast::Toasts;
use crate::{
    convert::format_local,
    services::gateway::{Error, Gateway, Mapping},
};

pub const TOKEN_DELETED: &str = "Token deleted";
pub const TOKEN_COPIED: &str = "Token copied to clipboard";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
}

impl PageSize {
    pub const ALL: [PageSize; 2] = [PageSize::Ten, PageSize::Twenty];

    pub fn rows(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} per page", self.rows())
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Refresh button press, ignored while a refresh is pending.
    Refresh,
    /// Refresh requested by the console itself, always performed.
    Reload,
    Refreshed(Result<Vec<Mapping>, Error>),
    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,
    Deleted(String, Result<(), Error>),
    PageSize(PageSize),
    NextPage,
    PreviousPage,
    Filter(String),
    CopyToken(String),
}

#[derive(Debug, Default)]
pub struct MappingsGrid {
    rows: Vec<Mapping>,
    page: usize,
    page_size: PageSize,
    filter: String,
    pending_refreshes: usize,
    deleting: HashSet<String>,
    confirm: Option<String>,
    error: Option<String>,
}

impl MappingsGrid {
    pub fn rows(&self) -> &[Mapping] {
        &self.rows
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_loading(&self) -> bool {
        self.pending_refreshes > 0
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.contains(id)
    }

    /// Id of the row waiting for the deletion to be confirmed.
    pub fn confirming(&self) -> Option<&str> {
        self.confirm.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Rows matching the filter, case-insensitive, over every text column.
    pub fn filtered(&self) -> Vec<&Mapping> {
        let needle = self.filter.trim().to_lowercase();
        if needle.is_empty() {
            return self.rows.iter().collect();
        }
        self.rows
            .iter()
            .filter(|m| {
                let created_at = m.created_at.as_ref().map(format_local).unwrap_or_default();
                [
                    m.id.as_str(),
                    m.cipher_text.as_str(),
                    m.wrapped_key.as_str(),
                    m.ttl.as_str(),
                    created_at.as_str(),
                ]
                .iter()
                .any(|v| v.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn pages(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size.rows()).max(1)
    }

    /// Rows of the current page.
    pub fn visible(&self) -> Vec<&Mapping> {
        let size = self.page_size.rows();
        self.filtered()
            .into_iter()
            .skip(self.page * size)
            .take(size)
            .collect()
    }

    fn clamp_page(&mut self) {
        self.page = self.page.min(self.pages() - 1);
    }

    /// Fetches every mapping and replaces the displayed rows with them.
    pub fn refresh(&mut self, gateway: &Arc<dyn Gateway>) -> Task<Message> {
        self.pending_refreshes += 1;
        Task::perform(load(gateway.clone()), Message::Refreshed)
    }

    pub fn update(
        &mut self,
        gateway: &Arc<dyn Gateway>,
        message: Message,
        toasts: &mut Toasts,
    ) -> Task<Message> {
        match message {
            Message::Refresh => {
                if !self.is_loading() {
                    return self.refresh(gateway);
                }
            }
            Message::Reload => return self.refresh(gateway),
            Message::Refreshed(res) => {
                self.pending_refreshes = self.pending_refreshes.saturating_sub(1);
                match res {
                    Ok(rows) => {
                        debug!("Loaded {} mappings", rows.len());
                        self.rows = rows;
                        self.error = None;
                        self.clamp_page();
                    }
                    Err(e) => {
                        error!("Failed to load mappings: {}", e);
                        toasts.error(e.to_string());
                        self.error = Some(e.to_string());
                    }
                }
            }
            Message::RequestDelete(id) => {
                if !self.deleting.contains(&id) {
                    self.confirm = Some(id);
                }
            }
            Message::CancelDelete => {
                self.confirm = None;
            }
            Message::ConfirmDelete => {
                let Some(id) = self.confirm.take() else {
                    return Task::none();
                };
                if !self.deleting.insert(id.clone()) {
                    return Task::none();
                }
                return Task::perform(delete(gateway.clone(), id), |(id, res)| {
                    Message::Deleted(id, res)
                });
            }
            Message::Deleted(id, res) => {
                self.deleting.remove(&id);
                match res {
                    Ok(()) => {
                        self.rows.retain(|m| m.id != id);
                        self.clamp_page();
                        toasts.success(TOKEN_DELETED);
                    }
                    Err(e) => {
                        warn!("Failed to delete token {}: {}", id, e);
                        toasts.error(format!("Failed to delete token {}: {}", id, e));
                    }
                }
            }
            Message::PageSize(size) => {
                self.page_size = size;
                self.clamp_page();
            }
            Message::NextPage => {
                if self.page + 1 < self.pages() {
                    self.page += 1;
                }
            }
            Message::PreviousPage => {
                self.page = self.page.saturating_sub(1);
            }
            Message::Filter(filter) => {
                self.filter = filter;
                self.page = 0;
            }
            Message::CopyToken(id) => {
                toasts.success(TOKEN_COPIED);
                return iced::clipboard::write(id);
            }
        }
        Task::none()
    }

    /// Whether Escape is routed to the grid, only while a deletion waits for
    /// confirmation.
    pub fn listens_to_keys(&self) -> bool {
        self.confirm.is_some()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.listens_to_keys() {
            iced::event::listen_with(escape_cancels)
        } else {
            Subscription::none()
        }
    }
}

pub async fn load(gateway: Arc<dyn Gateway>) -> Result<Vec<Mapping>, Error> {
    gateway.list_mappings().await
}

/// Deletes the mapping `id`, handing the id back with the result.
pub async fn delete(gateway: Arc<dyn Gateway>, id: String) -> (String, Result<(), Error>) {
    let res = gateway.delete_mapping(&id).await;
    (id, res)
}

fn escape_cancels(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::CancelDelete),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{
        fake::{mapping, FakeGateway},
        modal::tests::key_press,
        toast::Kind,
    };
    use iced::keyboard::Modifiers;

    fn gateway() -> Arc<dyn Gateway> {
        Arc::new(FakeGateway::default())
    }

    fn rows(n: usize) -> Vec<Mapping> {
        (0..n).map(|i| mapping(&format!("tok-{}", i))).collect()
    }

    fn ids(grid: &MappingsGrid) -> Vec<String> {
        grid.visible().iter().map(|m| m.id.clone()).collect()
    }

    fn kinds(toasts: &Toasts) -> Vec<Kind> {
        toasts.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_refresh_replaces_rows() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut grid = MappingsGrid::default();

        let _ = grid.update(&gateway, Message::Refresh, &mut toasts);
        assert!(grid.is_loading());
        let _ = grid.update(&gateway, Message::Refreshed(Ok(rows(3))), &mut toasts);
        assert!(!grid.is_loading());
        assert_eq!(grid.rows().len(), 3);

        let _ = grid.update(&gateway, Message::Refresh, &mut toasts);
        let _ = grid.update(
            &gateway,
            Message::Refreshed(Ok(vec![mapping("other")])),
            &mut toasts,
        );
        assert_eq!(ids(&grid), vec!["other"]);
    }

    #[test]
    fn test_refresh_button_ignored_while_loading() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut grid = MappingsGrid::default();

        let _ = grid.update(&gateway, Message::Refresh, &mut toasts);
        let _ = grid.update(&gateway, Message::Refresh, &mut toasts);
        let _ = grid.update(&gateway, Message::Refreshed(Ok(rows(1))), &mut toasts);
        assert!(!grid.is_loading());

        // Reloads triggered by the console are always performed.
        let _ = grid.update(&gateway, Message::Refresh, &mut toasts);
        let _ = grid.update(&gateway, Message::Reload, &mut toasts);
        let _ = grid.update(&gateway, Message::Refreshed(Ok(rows(1))), &mut toasts);
        assert!(grid.is_loading());
        let _ = grid.update(&gateway, Message::Refreshed(Ok(rows(2))), &mut toasts);
        assert!(!grid.is_loading());
        assert_eq!(grid.rows().len(), 2);
    }

    #[test]
    fn test_refresh_failure_keeps_rows() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut grid = MappingsGrid::default();
        let _ = grid.update(&gateway, Message::Refreshed(Ok(rows(2))), &mut toasts);

        let _ = grid.update(&gateway, Message::Refresh, &mut toasts);
        let _ = grid.update(
            &gateway,
            Message::Refreshed(Err(Error::SessionExpired)),
            &mut toasts,
        );
        assert_eq!(grid.rows().len(), 2);
        assert_eq!(grid.error(), Some("Session expired, please sign in again"));
        assert_eq!(kinds(&toasts), vec![Kind::Error]);

        let _ = grid.update(&gateway, Message::Refreshed(Ok(rows(2))), &mut toasts);
        assert_eq!(grid.error(), None);
    }

    #[test]
    fn test_delete_success() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut grid = MappingsGrid::default();
        let _ = grid.update(&gateway, Message::Refreshed(Ok(rows(3))), &mut toasts);

        let _ = grid.update(&gateway, Message::RequestDelete("tok-1".into()), &mut toasts);
        assert_eq!(grid.confirming(), Some("tok-1"));
        let _ = grid.update(&gateway, Message::ConfirmDelete, &mut toasts);
        assert_eq!(grid.confirming(), None);
        assert!(grid.is_deleting("tok-1"));
        // Nothing removed before the gateway answers.
        assert!(ids(&grid).contains(&"tok-1".to_string()));

        // A second deletion of the same row is refused while in flight.
        let _ = grid.update(&gateway, Message::RequestDelete("tok-1".into()), &mut toasts);
        assert_eq!(grid.confirming(), None);

        let _ = grid.update(
            &gateway,
            Message::Deleted("tok-1".into(), Ok(())),
            &mut toasts,
        );
        assert_eq!(ids(&grid), vec!["tok-0", "tok-2"]);
        assert!(!grid.is_deleting("tok-1"));
        assert_eq!(toasts.iter().next().map(|t| t.text.as_str()), Some(TOKEN_DELETED));
    }

    #[test]
    fn test_delete_failure() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut grid = MappingsGrid::default();
        let _ = grid.update(&gateway, Message::Refreshed(Ok(rows(2))), &mut toasts);

        let _ = grid.update(&gateway, Message::RequestDelete("tok-0".into()), &mut toasts);
        let _ = grid.update(&gateway, Message::ConfirmDelete, &mut toasts);
        let _ = grid.update(
            &gateway,
            Message::Deleted(
                "tok-0".into(),
                Err(Error::Http {
                    status: 500,
                    message: "boom".into(),
                }),
            ),
            &mut toasts,
        );
        assert_eq!(ids(&grid), vec!["tok-0", "tok-1"]);
        assert!(!grid.is_deleting("tok-0"));
        assert_eq!(
            toasts.iter().next().map(|t| t.text.as_str()),
            Some("Failed to delete token tok-0: Error 500 boom")
        );
    }

    #[test]
    fn test_cancel_delete() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut grid = MappingsGrid::default();
        let _ = grid.update(&gateway, Message::Refreshed(Ok(rows(1))), &mut toasts);
        let _ = grid.update(&gateway, Message::RequestDelete("tok-0".into()), &mut toasts);
        let _ = grid.update(&gateway, Message::CancelDelete, &mut toasts);
        assert_eq!(grid.confirming(), None);
        let _ = grid.update(&gateway, Message::ConfirmDelete, &mut toasts);
        assert!(!grid.is_deleting("tok-0"));
    }

    #[test]
    fn test_pagination() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut grid = MappingsGrid::default();
        let _ = grid.update(&gateway, Message::Refreshed(Ok(rows(25))), &mut toasts);
        assert_eq!(grid.pages(), 3);
        assert_eq!(grid.visible().len(), 10);

        for _ in 0..5 {
            let _ = grid.update(&gateway, Message::NextPage, &mut toasts);
        }
        assert_eq!(grid.page(), 2);
        assert_eq!(grid.visible().len(), 5);

        let _ = grid.update(&gateway, Message::PageSize(PageSize::Twenty), &mut toasts);
        assert_eq!(grid.pages(), 2);
        assert_eq!(grid.page(), 1);

        let _ = grid.update(&gateway, Message::Refreshed(Ok(rows(4))), &mut toasts);
        assert_eq!(grid.page(), 0);
        let _ = grid.update(&gateway, Message::PreviousPage, &mut toasts);
        assert_eq!(grid.page(), 0);

        let _ = grid.update(&gateway, Message::Refreshed(Ok(Vec::new())), &mut toasts);
        assert_eq!(grid.pages(), 1);
        assert!(grid.visible().is_empty());
    }

    #[test]
    fn test_filter() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut grid = MappingsGrid::default();
        let _ = grid.update(&gateway, Message::Refreshed(Ok(rows(12))), &mut toasts);
        let _ = grid.update(&gateway, Message::NextPage, &mut toasts);

        let _ = grid.update(&gateway, Message::Filter("CIPHER-TOK-1".into()), &mut toasts);
        assert_eq!(grid.page(), 0);
        assert_eq!(ids(&grid), vec!["tok-1", "tok-10", "tok-11"]);

        let _ = grid.update(&gateway, Message::Filter("  ".into()), &mut toasts);
        assert_eq!(grid.filtered().len(), 12);
    }

    #[test]
    fn test_copy_token() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut grid = MappingsGrid::default();
        let _ = grid.update(&gateway, Message::CopyToken("tok-0".into()), &mut toasts);
        assert_eq!(toasts.iter().next().map(|t| t.text.as_str()), Some(TOKEN_COPIED));
    }

    #[tokio::test]
    async fn test_load_and_delete_through_gateway() {
        let fake = Arc::new(FakeGateway::with_mappings(&["a", "b"]));
        let gateway: Arc<dyn Gateway> = fake.clone();
        let mut toasts = Toasts::default();
        let mut grid = MappingsGrid::default();

        let _ = grid.refresh(&gateway);
        let rows = load(gateway.clone()).await;
        let _ = grid.update(&gateway, Message::Refreshed(rows), &mut toasts);
        assert_eq!(ids(&grid), vec!["a", "b"]);

        let _ = grid.update(&gateway, Message::RequestDelete("a".into()), &mut toasts);
        let _ = grid.update(&gateway, Message::ConfirmDelete, &mut toasts);
        let (id, res) = delete(gateway.clone(), "a".to_string()).await;
        assert_eq!(id, "a");
        assert_eq!(res, Ok(()));
        let _ = grid.update(&gateway, Message::Deleted(id, res), &mut toasts);
        assert_eq!(ids(&grid), vec!["b"]);

        let rows = load(gateway.clone()).await.unwrap();
        assert_eq!(
            rows.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["b"]
        );
        assert_eq!(
            fake.calls(),
            vec!["list_mappings", "delete_mapping", "list_mappings"]
        );
    }

    #[tokio::test]
    async fn test_failed_delete_through_gateway() {
        let gateway: Arc<dyn Gateway> = Arc::new(FakeGateway::failing(Error::SessionExpired));
        let mut toasts = Toasts::default();
        let mut grid = MappingsGrid::default();
        let _ = grid.update(&gateway, Message::Refreshed(Ok(rows(2))), &mut toasts);

        let _ = grid.update(&gateway, Message::RequestDelete("tok-0".into()), &mut toasts);
        let _ = grid.update(&gateway, Message::ConfirmDelete, &mut toasts);
        let (id, res) = delete(gateway.clone(), "tok-0".to_string()).await;
        assert_eq!(res, Err(Error::SessionExpired));
        let _ = grid.update(&gateway, Message::Deleted(id, res), &mut toasts);
        assert_eq!(ids(&grid), vec!["tok-0", "tok-1"]);

        assert_eq!(load(gateway).await, Err(Error::SessionExpired));
    }

    #[test]
    fn test_escape_cancels_confirmation() {
        let gateway = gateway();
        let mut toasts = Toasts::default();
        let mut grid = MappingsGrid::default();
        let _ = grid.update(&gateway, Message::Refreshed(Ok(rows(1))), &mut toasts);
        assert!(!grid.listens_to_keys());

        let _ = grid.update(&gateway, Message::RequestDelete("tok-0".into()), &mut toasts);
        assert!(grid.listens_to_keys());
        let msg = escape_cancels(
            key_press(Key::Named(Named::Escape), Modifiers::empty()),
            event::Status::Ignored,
            window::Id::unique(),
        );
        assert!(matches!(msg, Some(Message::CancelDelete)));
        assert!(escape_cancels(
            key_press(Key::Named(Named::Tab), Modifiers::empty()),
            event::Status::Ignored,
            window::Id::unique(),
        )
        .is_none());

        let _ = grid.update(&gateway, msg.unwrap(), &mut toasts);
        assert!(!grid.listens_to_keys());
    }
}
