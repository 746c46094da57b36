//! Reactive state of one list page: the fetched collection plus the
//! filter/group/page state, with reload, export and local patching.

use std::future::Future;

use contracts::shared::api_error::ApiError;
use contracts::shared::data_view::{patch_by_id, Exportable, ListView, ListViewState, Searchable};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::export::download_csv;
use crate::system::auth::session::Session;

pub struct ListController<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub view: RwSignal<ListViewState>,
    pub loading: RwSignal<bool>,
    /// Fetch/mutation failure shown above the table.
    pub error: RwSignal<Option<String>>,
    /// Non-error banner, e.g. "nothing to export".
    pub notice: RwSignal<Option<String>>,
}

// Signals are Copy whatever `T` is; derive would demand `T: Copy`.
impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: Searchable + Exportable + Clone + Send + Sync + 'static,
{
    pub fn new(page_size: usize) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            view: RwSignal::new(ListViewState::new(page_size)),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
        }
    }

    /// Replaces the whole collection with a fresh fetch.
    ///
    /// Auth failures sign the admin out; any failure leaves the collection
    /// empty. `loading` is cleared on both paths.
    pub fn reload<F, Fut>(&self, session: Session, fetch: F)
    where
        F: FnOnce(Session) -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let this = *self;
        this.loading.set(true);
        this.error.set(None);

        spawn_local(async move {
            match fetch(session).await {
                Ok(items) => {
                    log::debug!("loaded {} {} records", items.len(), T::ENTITY);
                    this.items.set(items);
                }
                Err(err) => {
                    this.items.set(Vec::new());
                    if !session.handle_error(&err) {
                        this.error.set(Some(err.user_message()));
                    }
                }
            }
            this.loading.set(false);
        });
    }

    /// Current page, grouped for display.
    pub fn list_view(&self) -> Signal<ListView<T>> {
        let this = *self;
        Signal::derive(move || this.items.with(|all| this.view.with(|v| v.compute(all))))
    }

    /// Number of records matching the current filters.
    pub fn filtered_count(&self) -> Signal<usize> {
        let this = *self;
        Signal::derive(move || this.items.with(|all| this.view.with(|v| v.filtered(all).len())))
    }

    /// Downloads every record matching the current filters, not only the
    /// visible page.
    pub fn export(&self) {
        let rows = self
            .items
            .with_untracked(|all| self.view.with_untracked(|v| v.filtered(all)));
        match download_csv(&rows) {
            Ok(_) => self.notice.set(None),
            Err(message) => {
                log::warn!("{} export skipped: {}", T::ENTITY, message);
                self.notice.set(Some(message));
            }
        }
    }

    /// Applies a local edit to one record. Returns `false` if it is gone.
    pub fn patch<F>(&self, id: &str, patch: F) -> bool
    where
        F: FnOnce(&mut T),
    {
        self.items
            .try_update(|items| patch_by_id(items, id, patch))
            .unwrap_or(false)
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.items
            .with_untracked(|items| items.iter().find(|i| i.record_id() == id).cloned())
    }
}
