pub mod api_error;
pub mod data_view;
pub mod lenient;
pub mod mutation;
