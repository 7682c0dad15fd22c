pub mod app_reducer;
pub mod collection_reducer;
