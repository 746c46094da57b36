pub mod a001_customer;
pub mod a002_order;
pub mod a003_product;
pub mod a004_support_ticket;
pub mod a005_promo_code;
pub mod a006_sme_profile;
pub mod a007_fpo_profile;
pub mod a008_banner;
pub mod common;
