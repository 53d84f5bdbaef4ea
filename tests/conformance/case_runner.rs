use super::case_loader::{CaseFailure, CaseResult, TestCase, UrlCase};
/// Conformance case runner
///
/// Parses every case and compares each component with the expectation.
use urlspan::{ParseOptions, ParsedUrl};

fn text(bytes: Option<&[u8]>) -> Option<String> {
    bytes.map(|bytes| String::from_utf8_lossy(bytes).into_owned())
}

fn check<T: PartialEq + std::fmt::Debug>(
    failures: &mut Vec<CaseFailure>,
    test_num: usize,
    case: &UrlCase,
    field: &str,
    expected: &T,
    actual: &T,
) {
    if expected != actual {
        failures.push(CaseFailure {
            test_num,
            input: case.input.clone(),
            field: field.to_string(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        });
    }
}

fn check_url(
    failures: &mut Vec<CaseFailure>,
    test_num: usize,
    case: &UrlCase,
    url: &ParsedUrl<'_>,
) {
    let scheme = text(url.scheme().map(urlspan::Scheme::as_bytes));
    check(failures, test_num, case, "scheme", &case.scheme, &scheme);
    check(failures, test_num, case, "userinfo", &case.userinfo, &text(url.userinfo()));
    check(failures, test_num, case, "host", &case.host, &text(url.host()));
    check(failures, test_num, case, "host_is_ipv6", &case.host_is_ipv6, &url.host_is_ipv6());
    check(failures, test_num, case, "port", &case.port, &url.port());
    check(failures, test_num, case, "path", &Some(case.path.clone()), &text(Some(url.path())));
    check(failures, test_num, case, "query", &case.query, &text(url.query()));
    check(failures, test_num, case, "fragment", &case.fragment, &text(url.fragment()));
}

/// Run conformance cases and return results
pub fn run_cases(cases: Vec<TestCase>) -> CaseResult {
    let mut result = CaseResult::default();
    let mut test_num = 0;

    for case in cases {
        let TestCase::UrlTest(case) = case else {
            continue;
        };
        test_num += 1;

        let options = if case.lenient {
            ParseOptions::lenient()
        } else {
            ParseOptions::strict()
        };
        let mut failures = Vec::new();

        match (urlspan::parse_with(&case.input, options), &case.error) {
            (Ok(url), None) => check_url(&mut failures, test_num, &case, &url),
            (Ok(url), Some(expected)) => failures.push(CaseFailure {
                test_num,
                input: case.input.clone(),
                field: "parsing".to_string(),
                expected: format!("{} at byte {}", expected.kind, expected.offset),
                actual: format!("{url:?}"),
            }),
            (Err(err), None) => failures.push(CaseFailure {
                test_num,
                input: case.input.clone(),
                field: "parsing".to_string(),
                expected: "success".to_string(),
                actual: err.to_string(),
            }),
            (Err(err), Some(expected)) => {
                let kind = format!("{:?}", err.kind());
                check(&mut failures, test_num, &case, "error kind", &expected.kind, &kind);
                let offset = err.offset();
                check(&mut failures, test_num, &case, "error offset", &expected.offset, &offset);
            }
        }

        if failures.is_empty() {
            result.passed += 1;
        } else {
            result.failed += 1;
            result.failures.extend(failures);
        }
    }

    result
}
