//! Resolves lab-specific column headers to canonical field names.
//!
//! An alias table (`canonical,alias` per line) lists every known spelling of
//! each canonical field. Given the headers of one dataset, the resolver picks
//! the header that stands for each canonical field.

pub mod alias;
pub mod error;
pub mod resolve;

pub use alias::AliasTable;
pub use error::NameError;
pub use resolve::{
    CaseMode, NOT_FOUND_SUFFIX, NameMap, Resolver, get_name, get_name_dict, is_not_found,
};
