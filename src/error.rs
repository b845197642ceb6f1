use std::io;
use std::process::ExitCode;

use thiserror::Error;

/// Failures of the input adapter while reading `<weight> <name>` pairs.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read elements from {source_name}: {source}")]
    Io {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("pair {pair}: weight '{token}' is not a non-negative integer")]
    MalformedWeight { pair: usize, token: String },

    #[error("pair {pair}: weight {weight} has no name")]
    MissingName { pair: usize, weight: u64 },

    #[error("pair {pair}: name '{name}' is not valid UTF-8")]
    InvalidName { pair: usize, name: String },
}

/// Failures of a single `solve` query. Infeasibility is not one of them.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(
        "tables of {rows}x{cols} cells need {bytes} bytes, over the configured limit of {limit} bytes"
    )]
    ResourceLimitExceeded {
        rows: usize,
        cols: u64,
        bytes: u128,
        limit: u64,
    },

    #[error("{table} table overflowed a 64-bit counter at row {row}, sum {sum}")]
    CountOverflow {
        table: &'static str,
        row: usize,
        sum: usize,
    },

    #[error(transparent)]
    Input(#[from] InputError),
}

impl SolveError {
    /// Process exit status reported by the command line front-end.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SolveError::Input(InputError::Io { .. }) => ExitCode::from(5),
            SolveError::Input(_) => ExitCode::from(3),
            SolveError::ResourceLimitExceeded { .. } => ExitCode::from(4),
            SolveError::CountOverflow { .. } => ExitCode::from(6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            SolveError::Input(InputError::MalformedWeight {
                pair: 1,
                token: "x".to_string(),
            }),
            SolveError::Input(InputError::Io {
                source_name: "<stdin>".to_string(),
                source: io::Error::other("boom"),
            }),
            SolveError::ResourceLimitExceeded {
                rows: 2,
                cols: 2,
                bytes: 96,
                limit: 1,
            },
            SolveError::CountOverflow {
                table: "subset count",
                row: 1,
                sum: 0,
            },
        ];
        let codes: Vec<String> = errors
            .iter()
            .map(|e| format!("{:?}", e.exit_code()))
            .collect();
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_messages_name_the_offending_pair() {
        let e = InputError::MalformedWeight {
            pair: 3,
            token: "twelve".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "pair 3: weight 'twelve' is not a non-negative integer"
        );
    }
}
