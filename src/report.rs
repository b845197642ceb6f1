use std::fmt;

use crate::instance::SsumInstance;

/// Human-readable summary of one solved query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub elements: usize,
    pub target: u64,
    pub outcome: Option<Outcome>,
}

/// The derived values of a feasible target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub subset_count: u64,
    pub minimum_size: usize,
    pub minimum_size_solutions: u64,
    pub witness: Vec<String>,
}

impl Report {
    /// Collects the results of the last `solve` on `ssi`, `None` if it was never solved.
    pub fn new(ssi: &SsumInstance) -> Option<Self> {
        let target = ssi.target()?;
        let outcome = match (
            ssi.subset_count(),
            ssi.minimum_size(),
            ssi.minimum_size_solution_count(),
            ssi.canonical_witness(),
        ) {
            (Some(subset_count), Some(minimum_size), Some(minimum_size_solutions), Some(w)) => {
                Some(Outcome {
                    subset_count,
                    minimum_size,
                    minimum_size_solutions,
                    witness: w.to_vec(),
                })
            }
            _ => None,
        };

        Some(Self {
            elements: ssi.element_count(),
            target,
            outcome,
        })
    }

    pub fn feasible(&self) -> bool {
        self.outcome.is_some()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User inputted {} elements.", self.elements)?;
        writeln!(f)?;
        writeln!(
            f,
            "Target sum of {} is {}FEASIBLE!",
            self.target,
            if self.feasible() { "" } else { "NOT " }
        )?;

        if let Some(o) = &self.outcome {
            writeln!(f)?;
            writeln!(f, "{:<40}{}", "Number of distinct solutions:", o.subset_count)?;
            writeln!(
                f,
                "{:<40}{}",
                "Size of smallest satisfying subset:", o.minimum_size
            )?;
            writeln!(
                f,
                "{:<40}{}",
                "Number of min-sized satisfying subsets:", o.minimum_size_solutions
            )?;
            writeln!(f, "Lexicographically first min-sized solution:")?;
            writeln!(f, "    {{{}}}", o.witness.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    fn solved(target: u64) -> SsumInstance {
        let mut ssi = SsumInstance::default();
        ssi.load_elements(vec![
            Element::new(12, "alice"),
            Element::new(9, "bob"),
            Element::new(22, "cathy"),
            Element::new(12, "doug"),
        ]);
        ssi.solve(target).unwrap();
        ssi
    }

    #[test]
    fn test_feasible_report() {
        let report = Report::new(&solved(21)).unwrap();
        let expected = "\
User inputted 4 elements.

Target sum of 21 is FEASIBLE!

Number of distinct solutions:           2
Size of smallest satisfying subset:     2
Number of min-sized satisfying subsets: 2
Lexicographically first min-sized solution:
    {alice, bob}
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_infeasible_report() {
        let report = Report::new(&solved(20)).unwrap();
        assert!(!report.feasible());
        assert_eq!(
            report.to_string(),
            "User inputted 4 elements.\n\nTarget sum of 20 is NOT FEASIBLE!\n"
        );
    }

    #[test]
    fn test_unsolved_instance_has_no_report() {
        let mut ssi = SsumInstance::default();
        ssi.load_elements(vec![Element::new(3, "x")]);
        assert_eq!(Report::new(&ssi), None);

        ssi.solve(3).unwrap();
        let report = Report::new(&ssi).unwrap();
        assert_eq!(report.target, 3);
        assert!(report.feasible());
    }

    #[test]
    fn test_empty_witness() {
        let report = Report::new(&solved(0)).unwrap();
        let outcome = report.outcome.as_ref().unwrap();
        assert!(outcome.witness.is_empty());
        assert!(report.to_string().ends_with("    {}\n"));
    }
}
