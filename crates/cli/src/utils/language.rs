use std::path::Path;

/// Extension to language id, using the identifiers editors report
const EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    ("c", "c"),
    ("h", "c"),
    ("cpp", "cpp"),
    ("cc", "cpp"),
    ("cxx", "cpp"),
    ("hpp", "cpp"),
    ("m", "objective-c"),
    ("mm", "objective-cpp"),
    ("rs", "rust"),
    ("go", "go"),
    ("java", "java"),
    ("kt", "kotlin"),
    ("cs", "csharp"),
    ("swift", "swift"),
    ("zig", "zig"),
    ("py", "python"),
    ("js", "javascript"),
    ("mjs", "javascript"),
    ("cjs", "javascript"),
    ("ts", "typescript"),
    ("rb", "ruby"),
    ("php", "php"),
    ("pl", "perl"),
    ("lua", "lua"),
    ("r", "r"),
    ("jl", "julia"),
    ("dart", "dart"),
    ("hs", "haskell"),
    ("sh", "shellscript"),
    ("bash", "shellscript"),
    ("ps1", "powershell"),
    ("bat", "bat"),
];

/// Language id for a file, from its extension.
///
/// Unknown extensions fall back to the lowercased extension itself; files
/// without an extension get the empty id.
pub fn detect_language_id(path: &Path) -> String {
    let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
        return String::new();
    };
    let extension = extension.to_ascii_lowercase();

    EXTENSION_LANGUAGES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, language)| language.to_string())
        .unwrap_or(extension)
}
