use std::collections::BTreeSet;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::{Result, StencilError};
use crate::format::TemplateKind;
use crate::locale::{canonical_dirs, FALLBACK_DIR};

/// Result of auditing a built-in asset tree.
pub struct AuditReport {
    /// Number of canonical locale directories present.
    pub locales: usize,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl AuditReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Matcher for the three expected template file names.
fn template_matcher() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for kind in TemplateKind::ALL {
        let pattern = format!("new.{}", kind.extension());
        builder.add(Glob::new(&pattern).map_err(|e| StencilError::GlobPattern {
            pattern: pattern.clone(),
            source: e,
        })?);
    }
    builder.build().map_err(|e| StencilError::GlobPattern {
        pattern: "new.*".into(),
        source: e,
    })
}

/// Verify that `assets_dir` contains a complete built-in template tree.
///
/// Errors are conditions that break resolution at runtime: a missing
/// assets root, a missing fallback directory, or a known locale directory
/// without all three template files. Anything merely unexpected (unknown
/// directories, stray files, locales not installed) is a warning.
pub fn audit_assets(assets_dir: &Path) -> Result<AuditReport> {
    if !assets_dir.is_dir() {
        return Err(StencilError::AssetsDirMissing {
            path: assets_dir.to_path_buf(),
        });
    }

    let matcher = template_matcher()?;
    let known: BTreeSet<&'static str> = canonical_dirs().into_iter().collect();

    let mut present: BTreeSet<&'static str> = BTreeSet::new();
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    for entry in WalkDir::new(assets_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let name = entry.file_name().to_string_lossy().into_owned();

        if !entry.file_type().is_dir() {
            warnings.push(format!("stray file in assets root: {name}"));
            continue;
        }

        match known.get(name.as_str()) {
            Some(&canonical) => {
                present.insert(canonical);
                audit_locale_dir(entry.path(), canonical, &matcher, &mut warnings, &mut errors);
            }
            None => warnings.push(format!("unknown locale directory: {name}")),
        }
    }

    for missing in known.difference(&present) {
        if *missing == FALLBACK_DIR {
            errors.push(format!("fallback locale directory {missing} is missing"));
        } else {
            warnings.push(format!("locale directory not installed: {missing}"));
        }
    }

    Ok(AuditReport {
        locales: present.len(),
        warnings,
        errors,
    })
}

/// Check one locale directory for the three template files.
fn audit_locale_dir(
    dir: &Path,
    label: &str,
    matcher: &GlobSet,
    warnings: &mut Vec<String>,
    errors: &mut Vec<String>,
) {
    let mut found: BTreeSet<String> = BTreeSet::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let name = entry.file_name().to_string_lossy().into_owned();

        if entry.file_type().is_dir() {
            warnings.push(format!("{label}: unexpected directory {name}"));
            continue;
        }

        if matcher.is_match(&name) {
            found.insert(name);
        } else {
            warnings.push(format!("{label}: unexpected file {name}"));
        }
    }

    for kind in TemplateKind::ALL {
        let expected = format!("new.{}", kind.extension());
        if !found.contains(&expected) {
            errors.push(format!("{label}: missing {expected}"));
        }
    }
}
