/// Host validation fixture loader
///
/// Loads `hosts.json`: a list of comment strings and test cases.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum FixtureEntry {
    /// A host validation case
    HostCase {
        scheme: String,
        host: String,
        #[serde(default)]
        kind: Option<String>,
        #[serde(default)]
        error: Option<String>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct HostCase {
    pub scheme: String,
    pub host: String,
    pub expected: Expected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Kind(String),
    Error(String),
}

/// Load fixture cases, skipping comments
pub fn load_host_cases(path: &str) -> Result<Vec<HostCase>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let entries: Vec<FixtureEntry> = serde_json::from_str(&content)?;

    let mut cases = Vec::new();
    for entry in entries {
        let FixtureEntry::HostCase {
            scheme,
            host,
            kind,
            error,
        } = entry
        else {
            continue;
        };
        let expected = match (kind, error) {
            (Some(kind), None) => Expected::Kind(kind),
            (None, Some(error)) => Expected::Error(error),
            _ => return Err(format!("case {host:?} needs exactly one of 'kind' or 'error'").into()),
        };
        cases.push(HostCase {
            scheme,
            host,
            expected,
        });
    }
    Ok(cases)
}
