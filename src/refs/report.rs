use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Number of using files listed per reference
const USED_BY_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefStatus {
    /// The referenced file exists under the public directory
    Ok,
    /// Not found, or a relative path that cannot be resolved from here
    Missing,
}

impl RefStatus {
    pub fn label(self) -> &'static str {
        match self {
            RefStatus::Ok => "OK",
            RefStatus::Missing => "MISSING(?)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefEntry {
    pub reference: String,
    pub status: RefStatus,
    /// Files using the reference, sorted
    pub users: Vec<String>,
}

/// Where a reference would live on disk, if it can be resolved at all.
///
/// Absolute web paths (`/assets/...`) and `assets/...` paths are served from
/// the public directory. Other relative paths depend on the referencing file.
pub fn resolve_reference(reference: &str, public_dir: &Path) -> Option<PathBuf> {
    if let Some(rest) = reference.strip_prefix('/') {
        Some(public_dir.join(rest.trim_start_matches('/')))
    } else if reference.starts_with("assets/") {
        Some(public_dir.join(reference))
    } else {
        None
    }
}

/// Check each reference against the public directory
pub fn build_report(
    refs: &BTreeMap<String, BTreeSet<String>>,
    public_dir: &Path,
) -> Vec<RefEntry> {
    refs.iter()
        .map(|(reference, users)| {
            let exists = resolve_reference(reference, public_dir).is_some_and(|p| p.exists());
            RefEntry {
                reference: reference.clone(),
                status: if exists { RefStatus::Ok } else { RefStatus::Missing },
                users: users.iter().cloned().collect(),
            }
        })
        .collect()
}

/// Render the report as printed by the `refs` command
pub fn format_report(entries: &[RefEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Found {} png refs\n\n", entries.len()));
    for entry in entries {
        out.push_str(&format!("{:<10} {}\n", entry.status.label(), entry.reference));
    }

    out.push_str(&format!("\n--- Used by (top {} per ref) ---\n", USED_BY_LIMIT));
    for entry in entries {
        let users: Vec<&str> = entry
            .users
            .iter()
            .take(USED_BY_LIMIT)
            .map(String::as_str)
            .collect();
        out.push_str(&format!("{}  <=  {}\n", entry.reference, users.join(", ")));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_reference() {
        let public = Path::new("/project/public");
        assert_eq!(
            resolve_reference("/assets/v1/a.png", public),
            Some(PathBuf::from("/project/public/assets/v1/a.png"))
        );
        assert_eq!(
            resolve_reference("assets/v1/a.png", public),
            Some(PathBuf::from("/project/public/assets/v1/a.png"))
        );
        assert_eq!(resolve_reference("../img/a.png", public), None);
    }

    #[test]
    fn test_build_report_statuses() {
        let dir = tempfile::tempdir().unwrap();
        let public = dir.path().join("public");
        fs::create_dir_all(public.join("assets/v1")).unwrap();
        fs::write(public.join("assets/v1/here.png"), b"x").unwrap();

        let mut refs = BTreeMap::new();
        for r in ["/assets/v1/here.png", "/assets/v1/gone.png", "img/rel.png"] {
            refs.insert(r.to_string(), BTreeSet::from(["game.js".to_string()]));
        }

        let report = build_report(&refs, &public);

        let statuses: Vec<(&str, RefStatus)> = report
            .iter()
            .map(|e| (e.reference.as_str(), e.status))
            .collect();
        assert_eq!(
            statuses,
            vec![
                ("/assets/v1/gone.png", RefStatus::Missing),
                ("/assets/v1/here.png", RefStatus::Ok),
                ("img/rel.png", RefStatus::Missing),
            ]
        );
    }

    #[test]
    fn test_format_report() {
        let entries = vec![
            RefEntry {
                reference: "/assets/v1/a.png".to_string(),
                status: RefStatus::Ok,
                users: vec!["a.js".into(), "b.js".into(), "c.css".into(), "d.html".into()],
            },
            RefEntry {
                reference: "x.png".to_string(),
                status: RefStatus::Missing,
                users: vec!["z.md".into()],
            },
        ];

        let text = format_report(&entries);

        let expected = "Found 2 png refs\n\n\
                        OK         /assets/v1/a.png\n\
                        MISSING(?) x.png\n\
                        \n--- Used by (top 3 per ref) ---\n\
                        /assets/v1/a.png  <=  a.js, b.js, c.css\n\
                        x.png  <=  z.md\n";
        assert_eq!(text, expected);
    }
}
