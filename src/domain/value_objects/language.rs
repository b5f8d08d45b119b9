//! Language value object - the runtime the application's entry point runs on

use serde::{Deserialize, Serialize};

/// Source language of the scaffolded application
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python (pip + requirements.txt)
    #[default]
    #[serde(alias = "py")]
    #[value(alias = "py")]
    Python,
    /// Plain shell script, no dependency manifest
    #[serde(alias = "sh")]
    #[value(alias = "sh")]
    Bash,
    /// Node.js (npm + package.json)
    #[serde(alias = "js", alias = "node")]
    #[value(aliases = ["js", "node"])]
    Javascript,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Python, Language::Bash, Language::Javascript];

    /// Parse a user-supplied name (case-insensitive, accepts the short aliases)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "python" | "py" => Some(Self::Python),
            "bash" | "sh" => Some(Self::Bash),
            "javascript" | "js" | "node" => Some(Self::Javascript),
            _ => None,
        }
    }

    /// File extension of the entry-point source file
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Python => "py",
            Language::Bash => "sh",
            Language::Javascript => "js",
        }
    }

    /// Interpreter that runs the entry point inside the container
    pub fn interpreter(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Bash => "bash",
            Language::Javascript => "node",
        }
    }

    /// Dependency manifest copied next to the source, if the language has one
    pub fn dependency_manifest(&self) -> Option<&'static str> {
        match self {
            Language::Python => Some("requirements.txt"),
            Language::Bash => None,
            Language::Javascript => Some("package.json"),
        }
    }

    /// Shell command installing the dependency manifest
    pub fn install_command(&self) -> Option<&'static str> {
        match self {
            Language::Python => {
                Some("pip install --upgrade pip && pip install -r requirements.txt")
            }
            Language::Bash => None,
            Language::Javascript => Some("npm install"),
        }
    }

    /// Entry-point file name for an application
    pub fn entry_point(&self, app_name: &str) -> String {
        format!("{}.{}", app_name, self.extension())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Bash => "bash",
            Language::Javascript => "javascript",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
