/// Starter configuration written by `file-runner init`
pub fn create_default_config() -> String {
    r#"{
  "runCommands": {
    "python": "python -u <file>",
    "javascript": "node <file>",
    "typescript": "npx tsx <file>",
    "go": "go run <file>",
    "ruby": "ruby <file>",
    "php": "php <file>",
    "lua": "lua <file>",
    "shellscript": "bash <file>",
    "powershell": "pwsh -File <file>"
  },
  "compileCommands": {
    "c": {
      "compile": "gcc <file> -o <outDir>/<out>",
      "run": "<outDir>/<out>"
    },
    "cpp": {
      "compile": "g++ -std=c++17 <file> -o <outDir>/<out>",
      "run": "<outDir>/<out>"
    },
    "rust": {
      "compile": "rustc <file> -o <outDir>/<out>",
      "run": "<outDir>/<out>"
    },
    "java": {
      "compile": "javac -d <outDir> <file>",
      "run": "java -cp <outDir> <out>"
    }
  },
  "projectCommands": {
    "npm": "npm start",
    "yarn": "yarn start",
    "pnpm": "pnpm start",
    "cargo": "cargo run --manifest-path <workspace>/Cargo.toml",
    "make": "make -C <workspace>"
  },
  "compileOutDir": "out",
  "projectDefaultCommand": "npm"
}
"#
    .to_string()
}
