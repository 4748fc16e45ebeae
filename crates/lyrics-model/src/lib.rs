pub mod error;
pub mod query;
pub mod response;
pub mod search;

pub use error::*;
pub use query::*;
pub use response::*;
pub use search::*;
