pub mod error;
pub mod sort;

pub use error::SortError;
pub use sort::{
    sort, sort_by, sort_by_key, Sorter, Strategy, RECURSIVE_MERGE_LIMIT, RECURSIVE_MERGE_MAX_LIMIT,
};
