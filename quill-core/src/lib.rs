mod column_mapping;
mod decode_kind;
mod dialect;
mod error;
mod record;
mod sql_writer;
mod statement;
mod util;

pub use column_mapping::*;
pub use decode_kind::*;
pub use dialect::*;
pub use error::*;
pub use record::*;
pub use sql_writer::*;
pub use statement::*;
pub use util::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
