pub mod leads_api;
pub use leads_api::LeadsApi;
