mod error;
mod loader;
mod reader;
mod schema;
mod summary;
mod table;

pub use error::MafError;
pub use loader::MafLoader;
pub use reader::{count_comment_lines, open_maf_reader};
pub use schema::{
    MafSchema, MAF_COLUMN_NAMES, REFERENCE_ALLELE, TUMOR_SEQ_ALLELE1, TUMOR_SEQ_ALLELE2,
};
pub use summary::{AlleleClass, AlleleSummary};
pub use table::{MafRecord, MafTable};
