use crate::domain::tender::{Principal, TenderDraft, TenderRevision};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// One registry operation, as carried on the command stream.
///
/// Mutating operations carry their caller identity and logical time
/// explicitly: both are ambient call context supplied by the environment,
/// never computed by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Command {
    SetOwner {
        principal: Principal,
    },
    SetFee {
        amount: u64,
    },
    Create {
        caller: Principal,
        #[serde(default)]
        at: u64,
        #[serde(flatten)]
        draft: TenderDraft,
    },
    Update {
        caller: Principal,
        #[serde(default)]
        at: u64,
        id: u64,
        #[serde(flatten)]
        revision: TenderRevision,
    },
    Get {
        id: u64,
    },
    GetUpdate {
        id: u64,
    },
    Count,
    Exists {
        description: String,
    },
}

/// Reads commands from a JSON-lines source.
///
/// Wraps any `BufRead` and yields one `Result<Command>` per non-empty
/// line, so large command files stream without loading into memory.
pub struct CommandReader<R: BufRead> {
    source: R,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Returns an iterator that lazily reads and deserializes commands.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.source
            .lines()
            .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
            .map(|line| {
                let line = line?;
                Ok(serde_json::from_str(&line)?)
            })
    }
}
