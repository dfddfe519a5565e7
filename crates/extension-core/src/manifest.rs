//! Extension descriptor (package.json) types and parsing
//!
//! Two views of the same file: `ManifestSeed` is the lenient read used to
//! pre-seed metadata from a descriptor that may already exist, and
//! `ExtensionManifest` is the full document the scaffold writes.

use crate::metadata::ProjectMetadata;
use crate::profile::{Linter, ToolingProfile};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

/// Extension manifest JSON schema reference
pub const SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/sourcegraph/sourcegraph/master/shared/src/schema/extension.schema.json";

/// Version placeholder used until the extension is published
pub const DEVELOPMENT_VERSION: &str = "0.0.0-DEVELOPMENT";

/// Repository reference embedded in the descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(rename = "type")]
    pub kind: String,

    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

/// Metadata fields read from a pre-existing package.json
///
/// Every field is optional; unknown fields are ignored. A missing file is
/// not an error, a malformed one is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestSeed {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub publisher: Option<String>,

    #[serde(default)]
    pub license: Option<String>,

    #[serde(default)]
    pub repository: Option<Repository>,
}

/// Read the descriptor seed from `dir`, treating a missing file as empty
pub fn read_seed(dir: &Path) -> Result<ManifestSeed> {
    let path = dir.join("package.json");
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(ManifestSeed::default()),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read {}", path.display()))
        }
    };
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Script command map written into the descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scripts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tslint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eslint: Option<String>,

    pub typecheck: String,

    pub build: String,

    #[serde(rename = "symlink-package")]
    pub symlink_package: String,

    pub serve: String,

    #[serde(rename = "watch:typecheck")]
    pub watch_typecheck: String,

    #[serde(rename = "watch:build")]
    pub watch_build: String,

    #[serde(rename = "sourcegraph:prepublish")]
    pub prepublish: String,
}

/// Contribution points registered by a freshly scaffolded extension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributes {
    pub actions: Vec<serde_json::Value>,
    pub menus: Menus,
    pub configuration: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menus {
    #[serde(rename = "editor/title")]
    pub editor_title: Vec<serde_json::Value>,

    #[serde(rename = "commandPalette")]
    pub command_palette: Vec<serde_json::Value>,
}

impl Contributes {
    /// A new extension contributes nothing yet
    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
            menus: Menus {
                editor_title: Vec::new(),
                command_palette: Vec::new(),
            },
            configuration: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// The full descriptor written by the scaffold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionManifest {
    #[serde(rename = "$schema")]
    pub schema: String,

    pub name: String,

    pub description: String,

    pub publisher: String,

    #[serde(rename = "activationEvents")]
    pub activation_events: Vec<String>,

    pub wip: bool,

    pub categories: Vec<String>,

    pub tags: Vec<String>,

    pub contributes: Contributes,

    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Repository>,

    pub license: String,

    pub main: String,

    pub scripts: Scripts,

    pub browserslist: Vec<String>,
}

impl ExtensionManifest {
    /// Build the descriptor for a resolved project under the given profile
    pub fn new(metadata: &ProjectMetadata, profile: &ToolingProfile) -> Self {
        let name = &metadata.name;
        let run = profile.package_manager.program();
        let lint_command = profile.linter.script_command().to_string();
        let (tslint, eslint) = match profile.linter {
            Linter::Tslint => (Some(lint_command), None),
            Linter::Eslint => (None, Some(lint_command)),
        };

        Self {
            schema: SCHEMA_URL.to_string(),
            name: name.clone(),
            description: metadata.description.clone(),
            publisher: metadata.publisher.clone(),
            activation_events: vec!["*".to_string()],
            wip: true,
            categories: Vec::new(),
            tags: Vec::new(),
            contributes: Contributes::empty(),
            version: DEVELOPMENT_VERSION.to_string(),
            repository: metadata.repository.clone(),
            license: metadata.license.to_string(),
            main: format!("dist/{name}.js"),
            scripts: Scripts {
                tslint,
                eslint,
                typecheck: "tsc -p tsconfig.json".to_string(),
                build: format!("parcel build --out-file dist/{name}.js src/{name}.ts"),
                symlink_package: "node dev/symlinkPackage.js".to_string(),
                serve: format!(
                    "{run} run symlink-package && parcel serve --no-hmr --out-file dist/{name}.js src/{name}.ts"
                ),
                watch_typecheck: "tsc -p tsconfig.json -w".to_string(),
                watch_build: "tsc -p tsconfig.dist.json -w".to_string(),
                prepublish: format!("{run} run build"),
            },
            browserslist: [
                "last 1 Chrome versions",
                "last 1 Firefox versions",
                "last 1 Edge versions",
                "last 1 Safari versions",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }

    /// Serialize with the two-space indentation the descriptor convention uses
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize package.json")
    }
}
