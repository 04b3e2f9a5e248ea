mod command;
mod language;
mod path_info;

pub use command::{CompileCommand, ProjectPlan, ResolvedCommandPair, RunPlan};
pub use language::LanguageId;
pub use path_info::PathInfo;
