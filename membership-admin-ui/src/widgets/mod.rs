pub mod detail_panel;
pub mod empty_state;
pub mod header;
pub mod member_table;
pub mod pagination;
pub mod reject_dialog;
pub mod search_bar;
pub mod status_badge;
