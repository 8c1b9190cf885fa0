use std::fmt;

use xml_parts_config::{Case, Suite};
use xml_parts_engine::{Mismatch, compile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The parts could not be compiled.
    Compile(String),
    /// A candidate listed under `matches` did not match.
    Unmatched { candidate: String, mismatch: Mismatch },
    /// A candidate listed under `rejects` matched.
    UnexpectedMatch { candidate: String },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Compile(e) => write!(f, "{e}"),
            Failure::Unmatched {
                candidate,
                mismatch,
            } => write!(f, "{candidate:?}: {mismatch}"),
            Failure::UnexpectedMatch { candidate } => {
                write!(f, "{candidate:?}: matched but should not")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// Nothing to check.
    Empty,
    Failed(Vec<Failure>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub name: String,
    pub outcome: Outcome,
}

impl CaseReport {
    pub fn failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteReport {
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn failed(&self) -> usize {
        self.cases.iter().filter(|c| c.failed()).count()
    }

    pub fn passed(&self) -> usize {
        self.cases
            .iter()
            .filter(|c| c.outcome == Outcome::Passed)
            .count()
    }
}

pub fn run_case(case: &Case) -> CaseReport {
    let outcome = match compile(case.parts.iter().map(String::as_str)) {
        Err(e) => Outcome::Failed(vec![Failure::Compile(e.to_string())]),
        Ok(_) if case.is_empty() => Outcome::Empty,
        Ok(pattern) => {
            let mut failures = Vec::new();
            for candidate in &case.matches {
                if let Some(mismatch) = pattern.explain(candidate) {
                    failures.push(Failure::Unmatched {
                        candidate: candidate.clone(),
                        mismatch,
                    });
                }
            }
            for candidate in &case.rejects {
                if pattern.test(candidate) {
                    failures.push(Failure::UnexpectedMatch {
                        candidate: candidate.clone(),
                    });
                }
            }

            if failures.is_empty() {
                Outcome::Passed
            } else {
                Outcome::Failed(failures)
            }
        }
    };

    log::debug!("Case {:?}: {:?}", case.name, outcome);
    CaseReport {
        name: case.name.clone(),
        outcome,
    }
}

pub fn run_suite(suite: &Suite) -> SuiteReport {
    SuiteReport {
        cases: suite.cases.iter().map(run_case).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn make_case(parts: &[&str], matches: &[&str], rejects: &[&str]) -> Case {
        Case {
            name: "case".to_string(),
            parts: owned(parts),
            matches: owned(matches),
            rejects: owned(rejects),
        }
    }

    #[rstest]
    #[case::empty_elements(
        &["<div>", "<br/>", "</div>"],
        &["<div><br/></div>", "<div> <br /> </div>", "<div><br></br></div>"],
        &["<div><span/></div>"]
    )]
    #[case::quotes(
        &[r#"<div class="strong" >"#, "<br/>", "</div>"],
        &[r#"<div class="strong" ><br/></div>"#, "<div class=&quot;strong&quot; ><br/></div>"],
        &[]
    )]
    #[case::text(&["<div>", "Hello", "</div>"], &["<div>Hello</div>"], &["<div>Goodbye</div>"])]
    fn passing_cases(#[case] parts: &[&str], #[case] matches: &[&str], #[case] rejects: &[&str]) {
        let report = run_case(&make_case(parts, matches, rejects));

        assert_eq!(report.outcome, Outcome::Passed);
    }

    #[test]
    fn unmatched_candidate_carries_mismatch() {
        let report = run_case(&make_case(&["<p>", "Hi", "</p>"], &["<p>Hello</p>"], &[]));

        assert_eq!(
            report.outcome,
            Outcome::Failed(vec![Failure::Unmatched {
                candidate: "<p>Hello</p>".to_string(),
                mismatch: Mismatch {
                    index: 1,
                    token: "Hi".to_string(),
                    matched_until: Some(3),
                },
            }])
        );
    }

    #[test]
    fn matching_reject_fails() {
        let report = run_case(&make_case(&["<br/>"], &[], &["<br>"]));

        assert!(report.failed());
        let Outcome::Failed(failures) = report.outcome else {
            panic!("expected failure");
        };
        assert_eq!(failures[0].to_string(), r#""<br>": matched but should not"#);
    }

    #[test]
    fn case_without_candidates_is_empty() {
        let report = run_case(&make_case(&["<p>"], &[], &[]));

        assert_eq!(report.outcome, Outcome::Empty);
        assert!(!report.failed());
    }

    #[test]
    fn suite_report_counts() {
        let suite = Suite {
            cases: vec![
                make_case(&["<p>"], &["<p>"], &[]),
                make_case(&["<p>"], &["<div>"], &[]),
                make_case(&["<p>"], &[], &[]),
            ],
        };

        let report = run_suite(&suite);

        assert_eq!(report.cases.len(), 3);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn bundled_builder_suite_passes() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../suites/builders.toml");
        let suite = Suite::load_from_path(path).unwrap();

        let report = run_suite(&suite);

        assert_eq!(report.failed(), 0, "{report:#?}");
        assert_eq!(report.passed(), suite.cases.len());
    }
}
