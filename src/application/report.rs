use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::protocol::kernel::transient_data_hints::TransientDataIndexHints;
use crate::protocol::kernel::transient_data_squashing::SquashedSideEffects;
use crate::protocol::kernel::MAX_NOTE_HASHES_PER_TX;
use crate::protocol::kernel::MAX_NULLIFIERS_PER_TX;

pub type TxHints = TransientDataIndexHints<MAX_NOTE_HASHES_PER_TX, MAX_NULLIFIERS_PER_TX>;

#[derive(Debug, Clone, Serialize)]
pub struct SquashOutcome {
    pub side_effects: SquashedSideEffects,

    /// Hex encoding of the hash of the resulting public data.
    pub tx_hash: String,

    /// In-memory size of the resulting public data, in bytes.
    pub public_data_size: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransactionOutcome {
    Hinted {
        hints: TxHints,
        num_squashed: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        squashed: Option<SquashOutcome>,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionReport {
    /// Position of the transaction in the batch.
    pub index: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(flatten)]
    pub outcome: TransactionOutcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    transactions: Vec<TransactionReport>,
}

impl BatchReport {
    pub fn new(transactions: Vec<TransactionReport>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[TransactionReport] {
        &self.transactions
    }

    pub fn num_failures(&self) -> usize {
        self.transactions
            .iter()
            .filter(|tx| matches!(tx.outcome, TransactionOutcome::Failed { .. }))
            .count()
    }

    /// Write the report as pretty-printed JSON to `path`, or to stdout if no
    /// path is given.
    pub fn write(&self, path: Option<&Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("could not serialize report")?;

        match path {
            Some(path) => {
                fs::write(path, json)
                    .with_context(|| format!("could not write report to {}", path.display()))?;
                info!("Wrote report to {}", path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{json}").context("could not write report to stdout")?;
            }
        }

        Ok(())
    }
}
