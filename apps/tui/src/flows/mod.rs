// User-facing flows that mutate the facility store.

pub mod add;
pub mod delete;
pub mod export;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("Facility name is required")]
    EmptyName,
    #[error("Unknown category selection: {0}")]
    UnknownCategory(usize),
}
