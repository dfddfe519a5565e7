//! The generated-file plan
//!
//! Every file the creator emits, in write order, as a pure function of the
//! resolved metadata and the active tooling profile. The README is built
//! separately because it is only written after the dependency install.

use crate::manifest::ExtensionManifest;
use crate::metadata::ProjectMetadata;
use crate::profile::{Linter, ToolingProfile};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

/// One file the scaffold will write, path relative to the project directory
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl GeneratedFile {
    fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

const EDITORCONFIG: &str = "\
[*]
insert_final_newline = true
end_of_line = lf
charset = utf-8
trim_trailing_whitespace = true
indent_style = space
indent_size = 4

[*.{json,js,yml}]
indent_size = 2

[*.md]
trim_trailing_whitespace = false
";

const GITIGNORE: &str = "\
dist/
node_modules/
.cache/
";

const PRETTIER_CONFIG: &str = "module.exports = require('@sourcegraph/prettierrc')\n";

/// Keeps dist/package.json pointing at the real descriptor during `serve`
const SYMLINK_SCRIPT: &str = "\
const createSymlink = require('create-symlink')
const { existsSync } = require('fs')
const mkdirp = require('mkdirp-promise')
const { resolve } = require('path')

mkdirp('dist').then(async () => {
   if (!existsSync('./dist/package.json')) {
       await createSymlink(resolve('./package.json'), resolve('./dist/package.json'))
   }
   process.exit(0)
}).catch(err => {
   console.error(err)
   process.exit(1)
})";

const STARTER_TEMPLATE: &str = "\
import * as sourcegraph from 'sourcegraph'

export function activate(ctx: sourcegraph.ExtensionContext): void {
   ctx.subscriptions.add(
       sourcegraph.languages.registerHoverProvider(['*'], {
           provideHover: () => ({
               contents: {
                   value: 'Hello world from __NAME__! 🎉🎉🎉',
                   kind: sourcegraph.MarkupKind.Markdown
               }
           }),
        })
    )
}

// Sourcegraph extension documentation: https://docs.sourcegraph.com/extensions/authoring
";

#[derive(Serialize)]
struct TsConfig {
    extends: &'static str,
    #[serde(rename = "compilerOptions")]
    compiler_options: CompilerOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    target: &'static str,
    module: &'static str,
    module_resolution: &'static str,
    source_map: bool,
    declaration: bool,
    out_dir: &'static str,
    root_dir: &'static str,
    es_module_interop: bool,
    allow_synthetic_default_imports: bool,
}

#[derive(Serialize)]
struct TslintConfig {
    extends: [&'static str; 1],
}

#[derive(Serialize)]
struct EslintConfig {
    extends: &'static str,
    #[serde(rename = "parserOptions")]
    parser_options: EslintParserOptions,
}

#[derive(Serialize)]
struct EslintParserOptions {
    project: &'static str,
}

fn to_pretty<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize generated config")
}

fn tsconfig(profile: &ToolingProfile) -> Result<String> {
    to_pretty(&TsConfig {
        extends: "./node_modules/@sourcegraph/tsconfig/tsconfig.json",
        compiler_options: CompilerOptions {
            target: profile.compiler_target,
            module: "esnext",
            module_resolution: "node",
            source_map: true,
            declaration: true,
            out_dir: "dist",
            root_dir: "src",
            es_module_interop: true,
            allow_synthetic_default_imports: true,
        },
    })
}

fn lint_config(linter: Linter) -> Result<String> {
    match linter {
        Linter::Tslint => to_pretty(&TslintConfig {
            extends: ["@sourcegraph/tslint-config"],
        }),
        Linter::Eslint => to_pretty(&EslintConfig {
            extends: "@sourcegraph/eslint-config",
            parser_options: EslintParserOptions {
                project: "tsconfig.json",
            },
        }),
    }
}

/// Path of the starter source file for a project name
pub fn starter_path(name: &str) -> PathBuf {
    PathBuf::from("src").join(format!("{name}.ts"))
}

/// The starter source, greeting included
pub fn starter_source(name: &str) -> String {
    STARTER_TEMPLATE.replace("__NAME__", name)
}

/// Build the ordered plan of files written before the dependency install
pub fn scaffold_files(
    metadata: &ProjectMetadata,
    profile: &ToolingProfile,
) -> Result<Vec<GeneratedFile>> {
    let mut files = vec![
        GeneratedFile::new("tsconfig.json", tsconfig(profile)?),
        GeneratedFile::new(profile.linter.config_path(), lint_config(profile.linter)?),
    ];

    if profile.prettier {
        files.push(GeneratedFile::new(".prettierrc.js", PRETTIER_CONFIG));
    }

    files.push(GeneratedFile::new(".editorconfig", EDITORCONFIG));
    files.push(GeneratedFile::new(".gitignore", GITIGNORE));
    files.push(GeneratedFile::new(
        "package.json",
        ExtensionManifest::new(metadata, profile).to_json()?,
    ));
    files.push(GeneratedFile::new("dev/symlinkPackage.js", SYMLINK_SCRIPT));
    files.push(GeneratedFile::new(
        starter_path(&metadata.name),
        starter_source(&metadata.name),
    ));

    Ok(files)
}

/// Build the README, appending a period to the description when missing
pub fn readme(metadata: &ProjectMetadata) -> GeneratedFile {
    let description = if metadata.description.ends_with('.') {
        metadata.description.clone()
    } else {
        format!("{}.", metadata.description)
    };

    GeneratedFile::new(
        "README.md",
        format!(
            "# {} (Sourcegraph extension)\n\n{}\n",
            metadata.name, description
        ),
    )
}
