use crate::shared::icons::icon;
use contracts::shared::data_view::Page;
use leptos::prelude::*;

/// The numbers a pager needs, detached from the row type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageInfo {
    /// 1-indexed
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    /// First and last row number on this page, `(0, 0)` when empty
    pub range: (usize, usize),
}

impl<T> From<&Page<T>> for PageInfo {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            total_pages: page.total_pages,
            total_count: page.total_count,
            range: page.range(),
        }
    }
}

/// Prev/next pager over 1-indexed pages.
///
/// Buttons disable themselves at the bounds; the label reads
/// "Showing 11–20 of 30 · page 2 / 3".
#[component]
pub fn PaginationControls(
    #[prop(into)]
    page_info: Signal<PageInfo>,

    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_first = move || page_info.with(|p| p.page <= 1);
    let at_last = move || page_info.with(|p| p.page >= p.total_pages);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = page_info.with_untracked(|p| p.page);
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let p = page_info.get();
                    format!(
                        "Showing {}–{} of {} · page {} / {}",
                        p.range.0,
                        p.range.1,
                        p.total_count,
                        p.page,
                        p.total_pages.max(1),
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let (page, total) = page_info.with_untracked(|p| (p.page, p.total_pages));
                    if page < total {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
