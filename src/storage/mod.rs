mod error;
mod loose;
mod schema;
mod store;

pub use error::StoreError;
pub use store::ProfileStore;
