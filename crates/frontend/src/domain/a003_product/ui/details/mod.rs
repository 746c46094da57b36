use contracts::domain::a003_product::Product;
use contracts::domain::common::status_label;
use contracts::shared::data_view::placeholder;
use leptos::prelude::*;

use crate::shared::components::detail_field::DetailField;
use crate::shared::components::table::money_text;
use crate::shared::date_utils::format_optional_datetime;
use crate::shared::modal::Modal;

#[component]
pub fn ProductDetails(product: Product, on_close: Callback<()>) -> impl IntoView {
    let title = format!("Product: {}", placeholder(product.name.as_deref()));
    let images = product.images.clone();

    view! {
        <Modal title=title on_close=on_close>
            <div class="detail-grid">
                <DetailField label="Name" value=placeholder(product.name.as_deref()) />
                <DetailField label="Seller" value=product.seller_name() />
                <DetailField
                    label="Seller email"
                    value=placeholder(product.seller.as_ref().and_then(|s| s.email.as_deref()))
                />
                <DetailField label="Category" value=product.category_name() />
                <DetailField label="Price" value=money_text(product.price) />
                <DetailField
                    label="Stock"
                    value=product.stock.map(|s| s.to_string()).unwrap_or_else(|| placeholder(None))
                />
                <DetailField label="Review status" value=status_label(product.review_status_or_pending()) />
                <DetailField label="Remark" value=placeholder(product.review_remark.as_deref()) />
                <DetailField label="Submitted" value=format_optional_datetime(product.created_at.as_deref()) />
            </div>

            <h3 class="modal-section-title">"Description"</h3>
            <p class="detail-text">{placeholder(product.description.as_deref())}</p>

            {(!images.is_empty()).then(|| view! {
                <div class="image-strip">
                    {images
                        .into_iter()
                        .map(|src| view! { <img class="image-strip__item" src=src alt="Product image" /> })
                        .collect_view()}
                </div>
            })}
        </Modal>
    }
}
