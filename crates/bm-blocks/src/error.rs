//! Error types for bm-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error(
        "Found {count} generated sections; remove the duplicates by hand so only one start marker remains"
    )]
    MultipleSections { count: usize },
}
