pub mod api;
pub mod create_page;
pub mod form_stub;
pub mod list_page;
