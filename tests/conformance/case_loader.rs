/// Conformance case loader
///
/// Cases live in `tests/fixtures/url_cases.json`: an array mixing section
/// titles (plain strings) with case objects. Absent component fields are
/// expected to be absent from the parsed URL.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A URL test case
    UrlTest(UrlCase),
    /// A section title
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct UrlCase {
    pub input: String,
    #[serde(default)]
    pub lenient: bool,
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub userinfo: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub host_is_ipv6: bool,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub fragment: Option<String>,
    #[serde(default)]
    pub error: Option<ExpectedError>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExpectedError {
    pub kind: String,
    pub offset: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CaseResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CaseFailure>,
}

#[derive(Debug, Clone)]
pub struct CaseFailure {
    pub test_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl CaseResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_cases() -> Vec<TestCase> {
    let data = include_str!("../fixtures/url_cases.json");
    serde_json::from_str(data).expect("Failed to parse conformance cases")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let cases = load_cases();
        let urls = cases
            .iter()
            .filter(|case| matches!(case, TestCase::UrlTest(_)))
            .count();
        assert!(urls > 20);
        assert!(cases.len() > urls);
    }
}
