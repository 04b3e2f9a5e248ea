pub mod plan;

pub use plan::{print_project_entries, print_project_plan, print_run_plan};
