//! Tooling profiles
//!
//! The lint, formatter, compiler-target, and package-manager choices that
//! varied across releases of the creator, collapsed into one configuration
//! table. Adding a variant is one more constant here, not a new code path.

use crate::error::UserError;

/// Lint tooling generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linter {
    Tslint,
    Eslint,
}

impl Linter {
    /// Path of the generated lint config
    pub fn config_path(&self) -> &'static str {
        match self {
            Linter::Tslint => "tslint.json",
            Linter::Eslint => ".eslintrc.json",
        }
    }

    /// Name of the lint entry in the descriptor's script map
    pub fn script_name(&self) -> &'static str {
        match self {
            Linter::Tslint => "tslint",
            Linter::Eslint => "eslint",
        }
    }

    /// Command the lint script runs
    pub fn script_command(&self) -> &'static str {
        match self {
            Linter::Tslint => "tslint -p tsconfig.json './src/**/*.ts'",
            Linter::Eslint => "eslint 'src/**/*.ts'",
        }
    }
}

/// Package manager used for the dependency install step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Install subcommand plus the dependencies-only flag
    pub fn dev_install_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["install", "--save-dev"],
            PackageManager::Yarn => &["add", "--dev"],
        }
    }
}

/// One tooling generation of the creator
#[derive(Debug, Clone, Copy)]
pub struct ToolingProfile {
    pub name: &'static str,
    pub compiler_target: &'static str,
    pub linter: Linter,
    /// Whether a prettier config re-exporting the shared base is emitted
    pub prettier: bool,
    pub package_manager: PackageManager,
    /// Dev dependencies passed verbatim to the installer, in order
    pub dev_dependencies: &'static [&'static str],
}

/// The tslint-era file set, installed with npm
pub const TSLINT: ToolingProfile = ToolingProfile {
    name: "tslint",
    compiler_target: "es2016",
    linter: Linter::Tslint,
    prettier: false,
    package_manager: PackageManager::Npm,
    dev_dependencies: &[
        "sourcegraph",
        "typescript",
        "parcel-bundler",
        "tslint",
        "@sourcegraph/tslint-config",
        "@sourcegraph/tsconfig",
        "create-symlink",
        "mkdirp-promise",
    ],
};

/// The eslint-era file set, installed with yarn
pub const ESLINT: ToolingProfile = ToolingProfile {
    name: "eslint",
    compiler_target: "es2019",
    linter: Linter::Eslint,
    prettier: true,
    package_manager: PackageManager::Yarn,
    dev_dependencies: &[
        "sourcegraph",
        "typescript",
        "parcel-bundler",
        "eslint",
        "@sourcegraph/eslint-config",
        "prettier",
        "@sourcegraph/prettierrc",
        "@sourcegraph/tsconfig",
        "create-symlink",
        "mkdirp-promise",
    ],
};

/// All known profiles, oldest first
pub const ALL: &[ToolingProfile] = &[TSLINT, ESLINT];

impl ToolingProfile {
    /// The profile used when none is requested
    pub fn default_profile() -> &'static ToolingProfile {
        &ESLINT
    }

    /// Look up a profile by its name, case-insensitively
    pub fn by_name(name: &str) -> Result<&'static ToolingProfile, UserError> {
        ALL.iter()
            .find(|profile| profile.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                let known = ALL
                    .iter()
                    .map(|profile| profile.name)
                    .collect::<Vec<_>>()
                    .join(", ");
                UserError::UnknownProfile(name.to_string(), known)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_finds_profiles() {
        assert_eq!(ToolingProfile::by_name("tslint").unwrap().name, "tslint");
        assert_eq!(ToolingProfile::by_name("ESLint").unwrap().name, "eslint");
    }

    #[test]
    fn test_by_name_rejects_unknown() {
        let err = ToolingProfile::by_name("standard").unwrap_err();
        assert!(matches!(err, UserError::UnknownProfile(_, _)));
        assert!(err.to_string().contains("tslint, eslint"));
    }

    #[test]
    fn test_dependency_lists_cover_generated_configs() {
        for profile in ALL {
            // The extension API and shared compiler config are always installed
            assert!(profile.dev_dependencies.contains(&"sourcegraph"));
            assert!(profile.dev_dependencies.contains(&"@sourcegraph/tsconfig"));
            // The helper script's own dependencies
            assert!(profile.dev_dependencies.contains(&"create-symlink"));
            assert!(profile.dev_dependencies.contains(&"mkdirp-promise"));
            // The lint tool the generated config extends
            let lint_package = profile.linter.script_name();
            assert!(profile.dev_dependencies.contains(&lint_package));
        }
        assert!(ESLINT.dev_dependencies.contains(&"prettier"));
    }
}
