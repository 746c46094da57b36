use contracts::domain::a001_customer::{
    extra_statuses, Customer, CustomerUpdateDto, CUSTOMER_GROUP_FIELDS, CUSTOMER_STATUSES,
};
use contracts::shared::data_view::{placeholder, Group};
use contracts::shared::mutation::{ConfirmState, InFlight, ModalState};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_customer::api;
use crate::domain::a001_customer::ui::details::{CustomerDetails, CustomerEditForm};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::list_toolbar::{choices_with_all, Choices, ListToolbar};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PageInfo;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::mutation_flow::confirm_delete;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;

const PAGE_SIZE: usize = 10;
const COLUMNS: &str = "7";

fn gender_choices() -> Choices {
    vec![("", "All"), ("male", "Male"), ("female", "Female"), ("other", "Other")]
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let session = use_session();
    let list = ListController::<Customer>::new(PAGE_SIZE);
    let list_view = list.list_view();

    let detail = RwSignal::new(Option::<Customer>::None);
    let modal = RwSignal::new(ModalState::<CustomerUpdateDto>::Closed);
    let confirm = RwSignal::new(ConfirmState::Idle);
    let in_flight = RwSignal::new(InFlight::default());

    let load = move || list.reload(session, api::fetch_customers);
    load();

    let extra_status_options = Signal::derive(move || list.items.with(|all| extra_statuses(all)));

    let on_delete_confirmed = Callback::new(move |_| {
        confirm_delete(session, confirm, in_flight, api::delete_customer, move |result| {
            match result {
                Ok(()) => load(),
                Err(e) => list.error.set(Some(e.user_message())),
            }
        });
    });

    let grouped = Signal::derive(move || list.view.with(|v| !v.group_key.is_none()));

    let render_row = move |customer: Customer| {
        let id = customer.id.clone();
        let id_for_busy = id.clone();
        let for_detail = customer.clone();
        let for_edit = CustomerUpdateDto::from(&customer);
        let label = customer.display_name();
        let busy = Signal::derive(move || in_flight.with(|f| f.contains(&id_for_busy)));
        let display_name = customer.display_name();
        let email = placeholder(customer.email.as_deref());
        let mobile = placeholder(customer.mobile.as_deref());
        let occupation = placeholder(customer.occupation.as_deref());
        let status = customer.status.clone().unwrap_or_default();
        let created_at = format_optional_date(customer.created_at.as_deref());

        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <a href="#" class="table__link" on:click=move |e| {
                            e.prevent_default();
                            detail.set(Some(for_detail.clone()));
                        }>
                            {display_name}
                        </a>
                    </TableCellLayout>
                </TableCell>
                <TableCell><TableCellLayout truncate=true>{email}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout>{mobile}</TableCellLayout></TableCell>
                <TableCell><TableCellLayout>{occupation}</TableCellLayout></TableCell>
                <TableCell>
                    <TableCellLayout>
                        <StatusBadge status=status />
                    </TableCellLayout>
                </TableCell>
                <TableCell><TableCellLayout>{created_at}</TableCellLayout></TableCell>
                <TableCell>
                    <TableCellLayout>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| modal.set(ModalState::open_edit(for_edit.clone()))
                        >
                            {icon("edit")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            disabled=busy
                            on_click=move |_| confirm.set(ConfirmState::request(id.clone(), label.clone()))
                        >
                            {icon("delete")}
                        </Button>
                    </TableCellLayout>
                </TableCell>
            </TableRow>
        }
    };

    let render_group = move |group: Group<Customer>| {
        let label = group.label.clone();
        let label_for_toggle = label.clone();
        let label_for_state = label.clone();
        let count = group.items.len();
        let expanded = Signal::derive(move || list.view.with(|v| v.collapsed.is_expanded(&label_for_state)));

        let header = grouped.get_untracked().then(|| view! {
            <TableRow>
                <TableCell attr:colspan=COLUMNS>
                    <div
                        class="table__group-header"
                        on:click=move |_| list.view.update(|v| v.collapsed.toggle(&label_for_toggle))
                    >
                        {move || if expanded.get() { icon("chevron-down") } else { icon("chevron-right") }}
                        <strong>{label.clone()}</strong>
                        <span class="table__group-count">{format!("({})", count)}</span>
                    </div>
                </TableCell>
            </TableRow>
        });
        let items = StoredValue::new(group.items);

        view! {
            {header}
            <Show when=move || expanded.get()>
                {move || items.get_value().into_iter().map(render_row).collect_view()}
            </Show>
        }
    };

    view! {
        <PageFrame page_id="a001_customer--list" category=PAGE_CAT_LIST>
            <PageHeader title="Customers" count=list.filtered_count() />

            <div class="page__content">
                <ListToolbar
                    view_state=list.view
                    page_info=Signal::derive(move || list_view.with(|lv| PageInfo::from(&lv.page)))
                    loading=list.loading
                    on_refresh=Callback::new(move |_| load())
                    on_export=Callback::new(move |_| list.export())
                    search_placeholder="Name, email or mobile..."
                    status_choices=choices_with_all("All statuses", CUSTOMER_STATUSES)
                    status_options=extra_status_options
                    category_label="Gender"
                    category_choices=gender_choices()
                    group_choices=CUSTOMER_GROUP_FIELDS.to_vec()
                />

                {move || list.error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
                {move || list.notice.get().map(|msg| view! { <div class="alert alert--warning">{msg}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Mobile"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Occupation"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Joined"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let groups = list_view.get().groups;
                                if groups.is_empty() && !list.loading.get() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan=COLUMNS>
                                                <div class="table__empty">"No customers match the current filters"</div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                groups.into_iter().map(render_group).collect_view().into_any()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || detail.get().map(|customer| view! {
                <CustomerDetails customer=customer on_close=Callback::new(move |_| detail.set(None)) />
            })}

            <Show when=move || modal.with(|m| m.is_open())>
                <CustomerEditForm modal=modal on_saved=Callback::new(move |_| load()) />
            </Show>

            <ConfirmDialog
                confirm=confirm
                title="Delete customer?"
                on_confirm=on_delete_confirmed
            />
        </PageFrame>
    }
}
