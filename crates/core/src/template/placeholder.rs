use serde::Serialize;
use std::fmt;

/// The closed set of tokens recognized inside a command template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Placeholder {
    File,
    OutDir,
    Out,
    Workspace,
}

impl Placeholder {
    pub const ALL: [Placeholder; 4] = [
        Placeholder::File,
        Placeholder::OutDir,
        Placeholder::Out,
        Placeholder::Workspace,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::File => "<file>",
            Placeholder::OutDir => "<outDir>",
            Placeholder::Out => "<out>",
            Placeholder::Workspace => "<workspace>",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.token() == token)
    }

    pub fn description(self) -> &'static str {
        match self {
            Placeholder::File => "absolute path to the source file",
            Placeholder::OutDir => "absolute path to the compile output directory",
            Placeholder::Out => "source file name without its extension",
            Placeholder::Workspace => "absolute path to the workspace root",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
