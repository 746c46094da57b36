//! Order detail modal with the inline delivery charge editor.

use contracts::domain::a002_order::{parse_delivery_charge, Order};
use contracts::domain::common::status_label;
use contracts::shared::data_view::placeholder;
use contracts::shared::mutation::InFlight;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_order::api;
use crate::shared::components::detail_field::DetailField;
use crate::shared::components::table::{money_text, TableCellMoney};
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::list_controller::ListController;
use crate::shared::modal::Modal;
use crate::shared::mutation_flow::run_guarded;
use crate::system::auth::context::use_session;

#[component]
fn DeliveryChargeEditor(
    order_id: String,
    current: Option<f64>,
    list: ListController<Order>,
    in_flight: RwSignal<InFlight>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let input = RwSignal::new(current.map(|c| c.to_string()).unwrap_or_default());
    let error = RwSignal::new(Option::<String>::None);

    let id_for_busy = order_id.clone();
    let busy = Signal::derive(move || in_flight.with(|f| f.contains(&id_for_busy)));

    let on_save = move |_| {
        let dto = match parse_delivery_charge(&input.get_untracked()) {
            Ok(dto) => dto,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);

        let id = order_id.clone();
        let charge = dto.delivery_charge;
        let call = api::update_delivery_charge(session, id.clone(), dto);
        run_guarded(session, in_flight, id.clone(), call, move |result| match result {
            Ok(()) => {
                list.patch(&id, |order| order.apply_delivery_charge(charge));
                on_changed.run(());
            }
            Err(e) => error.set(Some(e.user_message())),
        });
    };

    view! {
        <div class="form__group">
            <Label>"Delivery charge"</Label>
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                <Input value=input disabled=busy placeholder="0" />
                <Button appearance=ButtonAppearance::Primary size=ButtonSize::Small on_click=on_save disabled=busy>
                    {move || if busy.get() { "Saving..." } else { "Update" }}
                </Button>
            </Flex>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

/// Looks the order up in `list` on every change, so the delivery charge
/// patch and later refetches show up while the modal is open.
#[component]
pub fn OrderDetails(
    order_id: String,
    list: ListController<Order>,
    in_flight: RwSignal<InFlight>,
    on_changed: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let order = Signal::derive(move || {
        list.items
            .with(|items| items.iter().find(|o| o.id == order_id).cloned())
    });

    let title = Signal::derive(move || {
        order
            .get()
            .map(|o| format!("Order {}", o.number()))
            .unwrap_or_else(|| "Order".to_string())
    });

    view! {
        <Modal title=title on_close=on_close>
            {move || match order.get() {
                None => view! { <div class="table__empty">"This order is no longer in the list"</div> }.into_any(),
                Some(o) => {
                    let lines = o.items.clone();
                    view! {
                        <div class="detail-grid">
                            <DetailField label="Order ID" value=o.number().to_string() />
                            <DetailField label="Customer" value=o.customer_name() />
                            <DetailField label="Email" value=o.customer_email() />
                            <DetailField
                                label="Mobile"
                                value=placeholder(o.customer.as_ref().and_then(|c| c.mobile.as_deref()))
                            />
                            <DetailField label="Status" value=status_label(o.status.as_deref().unwrap_or_default()) />
                            <DetailField
                                label="Payment"
                                value=status_label(o.payment_status.as_deref().unwrap_or_default())
                            />
                            <DetailField label="Payment method" value=placeholder(o.payment_method.as_deref()) />
                            <DetailField label="Shipping address" value=o.shipping_address_text() />
                            <DetailField label="Delivery charge" value=money_text(o.delivery_charge) />
                            <DetailField label="Total" value=money_text(o.computed_total()) />
                            <DetailField label="Placed" value=format_optional_datetime(o.created_at.as_deref()) />
                        </div>

                        <h3 class="modal-section-title">"Items"</h3>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Product"</TableHeaderCell>
                                    <TableHeaderCell>"Qty"</TableHeaderCell>
                                    <TableHeaderCell>"Price"</TableHeaderCell>
                                    <TableHeaderCell>"Line total"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {lines
                                    .into_iter()
                                    .map(|line| {
                                        let product_name = placeholder(line.product_name.as_deref());
                                        let quantity = line.quantity.map(|q| q.to_string()).unwrap_or_else(|| placeholder(None));
                                        let price = line.price.clone();
                                        let line_total = line.line_total();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {product_name}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {quantity}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCellMoney value=price />
                                                <TableCellMoney value=line_total />
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>

                        <DeliveryChargeEditor
                            order_id=o.id.clone()
                            current=o.delivery_charge
                            list=list
                            in_flight=in_flight
                            on_changed=on_changed
                        />
                    }
                    .into_any()
                }
            }}
        </Modal>
    }
}
