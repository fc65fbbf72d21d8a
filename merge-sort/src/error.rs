use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    #[display(
        fmt = "recursive merge of {} elements exceeds the limit of {}",
        len,
        limit
    )]
    RecursionLimit { len: usize, limit: usize },
}

impl std::error::Error for SortError {}
