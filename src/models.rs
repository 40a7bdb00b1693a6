pub mod lead;
pub use lead::{Lead, NewLeadPayload, Note, UpdateLeadPayload};
pub mod stage;
pub use stage::Stage;
pub mod user;
pub use user::{Role, User};
