pub mod board_service;
pub use board_service::{BoardService, Notification};
pub mod edit_session;
pub use edit_session::EditSession;
pub mod funnel;
pub mod search;
pub use search::Debouncer;
