//! Processing and output options shared across crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// How the campaign and deduplication pipelines are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Run the pipelines one after the other on the calling thread.
    #[default]
    Sequential,
    /// Run the two pipelines on separate scoped threads.
    Parallel,
}

impl FromStr for ExecutionMode {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            _ => Err(ModelError::InvalidOption {
                option: "execution mode",
                value: value.to_string(),
            }),
        }
    }
}

/// Line terminator used for delimited output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// CRLF, as expected by MS-DOS CSV consumers.
    #[default]
    Dos,
    /// LF only.
    Unix,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dos => "dos",
            Self::Unix => "unix",
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineEnding {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dos" | "crlf" => Ok(Self::Dos),
            "unix" | "lf" => Ok(Self::Unix),
            _ => Err(ModelError::InvalidOption {
                option: "line ending",
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_ending_accepts_aliases() {
        assert_eq!("CRLF".parse::<LineEnding>().unwrap(), LineEnding::Dos);
        assert_eq!(" lf ".parse::<LineEnding>().unwrap(), LineEnding::Unix);
        assert!("mac".parse::<LineEnding>().is_err());
    }

    #[test]
    fn execution_mode_parses() {
        assert_eq!(
            "Parallel".parse::<ExecutionMode>().unwrap(),
            ExecutionMode::Parallel
        );
        let err = "threads".parse::<ExecutionMode>().unwrap_err();
        assert_eq!(err.to_string(), "invalid execution mode value 'threads'");
    }
}
