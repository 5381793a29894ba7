use std::fmt;

/// Net counters reported by the router at the end of a run.
///
/// The defaults disagree on purpose (`routable_nets != routed_nets` and a
/// non-zero error count) so a log without any summary lines fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteSummary {
    pub routable_nets: i64,
    pub routed_nets: i64,
    pub error_nets: i64,
}

impl Default for RouteSummary {
    fn default() -> Self {
        Self {
            routable_nets: 1,
            routed_nets: 0,
            error_nets: 1,
        }
    }
}

impl RouteSummary {
    pub fn verdict(&self) -> Verdict {
        if self.routable_nets == self.routed_nets && self.error_nets == 0 {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "num_net {} num_routed_net {} num_error {}",
            self.routable_nets, self.routed_nets, self.error_nets
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fail() {
        assert_eq!(RouteSummary::default().verdict(), Verdict::Fail);
    }

    #[test]
    fn all_routed_without_errors_passes() {
        let summary = RouteSummary {
            routable_nets: 42,
            routed_nets: 42,
            error_nets: 0,
        };
        assert_eq!(summary.verdict(), Verdict::Pass);
    }

    #[test]
    fn unrouted_nets_fail() {
        let summary = RouteSummary {
            routable_nets: 42,
            routed_nets: 41,
            error_nets: 0,
        };
        assert_eq!(summary.verdict(), Verdict::Fail);
    }

    #[test]
    fn routing_errors_fail_even_when_counts_match() {
        let summary = RouteSummary {
            routable_nets: 10,
            routed_nets: 10,
            error_nets: 2,
        };
        assert_eq!(summary.verdict(), Verdict::Fail);
    }

    #[test]
    fn summary_line_format() {
        let summary = RouteSummary {
            routable_nets: 10,
            routed_nets: 9,
            error_nets: 0,
        };
        assert_eq!(summary.to_string(), "num_net 10 num_routed_net 9 num_error 0");
        assert_eq!(Verdict::Pass.to_string(), "PASS");
        assert_eq!(Verdict::Fail.as_str(), "FAIL");
    }
}
