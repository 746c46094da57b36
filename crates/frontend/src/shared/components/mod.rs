pub mod bar_chart;
pub mod confirm_dialog;
pub mod date_input;
pub mod detail_field;
pub mod list_toolbar;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod status_badge;
pub mod status_change_form;
pub mod table;
