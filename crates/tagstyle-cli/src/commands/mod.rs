//! Command implementations for tagstyle-cli

pub mod edit;
pub mod resolve;

pub use edit::{
    run_add, run_copy, run_default, run_delete, run_duplicate, run_rename, run_set,
};
pub use resolve::{run_list, run_resolve};
