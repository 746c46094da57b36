use contracts::domain::a003_product::{validate_review, Product, REVIEW_DECISIONS, REVIEW_STATUSES};
use contracts::domain::common::StatusChange;
use contracts::shared::data_view::{distinct_values, placeholder};
use contracts::shared::mutation::ModalState;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_product::api;
use crate::domain::a003_product::ui::details::ProductDetails;
use crate::shared::components::list_toolbar::{choices_with_all, ListToolbar};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PageInfo;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::status_change_form::StatusChangeForm;
use crate::shared::components::table::TableCellMoney;
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;

const PAGE_SIZE: usize = 10;
const COLUMNS: &str = "7";

#[component]
pub fn ProductReviewList() -> impl IntoView {
    let session = use_session();
    let list = ListController::<Product>::new(PAGE_SIZE);
    let list_view = list.list_view();

    let detail = RwSignal::new(Option::<Product>::None);
    let review_modal = RwSignal::new(ModalState::<StatusChange>::Closed);

    let load = move || list.reload(session, api::fetch_for_review);
    load();

    let categories = Signal::derive(move || list.items.with(|all| distinct_values(all, "category")));

    let render_row = move |product: Product| {
        let for_detail = product.clone();
        let name = placeholder(product.name.as_deref());
        let mut decision = StatusChange::new(product.id.clone(), name.clone(), None);
        decision.update.remark = product.review_remark.clone();
        let seller_name = product.seller_name();
        let category_name = product.category_name();
        let price = product.price.clone();
        let review_status = product.review_status_or_pending().to_string();
        let created_at = format_optional_date(product.created_at.as_deref());

        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <a href="#" class="table__link" on:click=move |e| {
                            e.prevent_default();
                            detail.set(Some(for_detail.clone()));
                        }>
                            {name}
                        </a>
                    </TableCellLayout>
                </TableCell>
                <TableCell><TableCellLayout truncate=true>{seller_name}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout>{category_name}</TableCellLayout></TableCell>
                <TableCellMoney value=price />
                <TableCell>
                    <TableCellLayout>
                        <StatusBadge status=review_status />
                    </TableCellLayout>
                </TableCell>
                <TableCell><TableCellLayout>{created_at}</TableCellLayout></TableCell>
                <TableCell>
                    <TableCellLayout>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| review_modal.set(ModalState::open_edit(decision.clone()))
                        >
                            {icon("eye")}
                            " Review"
                        </Button>
                    </TableCellLayout>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <PageFrame page_id="a003_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Product review" count=list.filtered_count() />

            <div class="page__content">
                <ListToolbar
                    view_state=list.view
                    page_info=Signal::derive(move || list_view.with(|lv| PageInfo::from(&lv.page)))
                    loading=list.loading
                    on_refresh=Callback::new(move |_| load())
                    on_export=Callback::new(move |_| list.export())
                    search_placeholder="Product, seller or category..."
                    status_choices=choices_with_all("All statuses", REVIEW_STATUSES)
                    category_choices=vec![("", "All categories")]
                    category_options=categories
                />

                {move || list.error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
                {move || list.notice.get().map(|msg| view! { <div class="alert alert--warning">{msg}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=180.0>"Product"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Seller"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Category"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Price"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Review"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Submitted"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = list_view.get().page.items;
                                if rows.is_empty() && !list.loading.get() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan=COLUMNS>
                                                <div class="table__empty">"No products waiting for review"</div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                rows.into_iter().map(render_row).collect_view().into_any()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || detail.get().map(|product| view! {
                <ProductDetails product=product on_close=Callback::new(move |_| detail.set(None)) />
            })}

            <Show when=move || review_modal.with(|m| m.is_open())>
                <StatusChangeForm
                    modal=review_modal
                    statuses=REVIEW_DECISIONS
                    validate=validate_review
                    send=api::review_product
                    on_saved=Callback::new(move |_| load())
                    title="Review"
                    save_text="Submit review"
                />
            </Show>
        </PageFrame>
    }
}
