//! Titles for every tab key. `None` means the key is not a page.

pub fn tab_label_for_key(key: &str) -> Option<&'static str> {
    let label = match key {
        "d400_overview" => "Dashboard",

        "a001_customer" => "Customers",
        "a002_order" => "Orders",
        "a003_product" => "Product review",
        "a004_support_ticket" => "Buyer support",
        "a005_promo_code" => "Promo codes",
        "a006_sme_profile" => "SME",
        "a007_fpo_profile" => "FPO",
        "a008_banner" => "Banners",

        _ => return None,
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_have_labels() {
        assert_eq!(tab_label_for_key("a001_customer"), Some("Customers"));
        assert_eq!(tab_label_for_key("d400_overview"), Some("Dashboard"));
    }

    #[test]
    fn unknown_key_has_no_label() {
        assert_eq!(tab_label_for_key("a099_missing"), None);
        assert_eq!(tab_label_for_key(""), None);
    }
}
