pub mod app;
pub mod collection;

pub use app::AppState;
pub use collection::Collection;
