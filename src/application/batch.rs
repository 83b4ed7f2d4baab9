//! A batch of transactions whose side effects are to be squashed.
//!
//! Every transaction is processed independently, so a batch is spread over
//! the rayon thread pool. Failures are per transaction: one bad transaction
//! ends up as a failed entry in the report and does not stop the batch.

use std::fs;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use get_size2::GetSize;
use rayon::prelude::*;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::error;

use super::config::cli_args::ProcessingOptions;
use super::report::BatchReport;
use super::report::SquashOutcome;
use super::report::TransactionOutcome;
use super::report::TransactionReport;
use crate::protocol::kernel::claimed_length_array::ClaimedLengthArray;
use crate::protocol::kernel::note_hash_nullifier_linkage::NoteHashNullifierCounterMap;
use crate::protocol::kernel::side_effect::ScopedNoteHash;
use crate::protocol::kernel::side_effect::ScopedNullifier;
use crate::protocol::kernel::side_effect::ScopedReadRequest;
use crate::protocol::kernel::transient_data_hints::build_transient_data_hints;
use crate::protocol::kernel::transient_data_squashing::squash_transient_data;
use crate::protocol::kernel::transient_data_squashing::validate_transient_data_hints;
use crate::protocol::kernel::MAX_NOTE_HASHES_PER_TX;
use crate::protocol::kernel::MAX_NULLIFIERS_PER_TX;
use crate::protocol::transaction::private_kernel_tail_data::PrivateKernelTailData;

/// The side effects one transaction accumulated over its private execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSideEffects {
    /// Free-form name, repeated in the report.
    #[serde(default)]
    pub label: Option<String>,

    pub note_hashes: Vec<ScopedNoteHash>,

    pub nullifiers: Vec<ScopedNullifier>,

    #[serde(default)]
    pub future_note_hash_reads: Vec<ScopedReadRequest>,

    #[serde(default)]
    pub future_nullifier_reads: Vec<ScopedReadRequest>,

    #[serde(default)]
    pub note_hash_nullifier_counter_map: NoteHashNullifierCounterMap,

    #[serde(default)]
    pub gas_used: u64,
}

impl TransactionSideEffects {
    fn process(&self, options: ProcessingOptions) -> Result<TransactionOutcome> {
        let note_hashes = ClaimedLengthArray::<_, MAX_NOTE_HASHES_PER_TX>::from_slice(
            &self.note_hashes,
        )
        .context("too many note hashes")?;
        let nullifiers =
            ClaimedLengthArray::<_, MAX_NULLIFIERS_PER_TX>::from_slice(&self.nullifiers)
                .context("too many nullifiers")?;

        let hints = build_transient_data_hints(
            &note_hashes,
            &nullifiers,
            &self.future_note_hash_reads,
            &self.future_nullifier_reads,
            &self.note_hash_nullifier_counter_map,
        )?;

        if options.validate {
            validate_transient_data_hints(&note_hashes, &nullifiers, &hints)
                .context("built hints do not validate")?;
        }

        let squashed = if options.squash {
            let squashed = squash_transient_data(&note_hashes, &nullifiers, &hints)?;
            let public_data =
                PrivateKernelTailData::from_squashed_side_effects(&squashed, self.gas_used);

            Some(SquashOutcome {
                tx_hash: public_data.hash().to_string(),
                public_data_size: public_data.get_size(),
                side_effects: squashed,
            })
        } else {
            None
        };

        Ok(TransactionOutcome::Hinted {
            num_squashed: hints.num_squashed(),
            hints,
            squashed,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct HintBatch {
    transactions: Vec<TransactionSideEffects>,
}

impl HintBatch {
    pub fn new(transactions: Vec<TransactionSideEffects>) -> Self {
        Self { transactions }
    }

    /// Read a batch from a JSON file holding an array of
    /// [`TransactionSideEffects`].
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("could not read snapshot {}", path.display()))?;
        let transactions = serde_json::from_str(&json)
            .with_context(|| format!("could not parse snapshot {}", path.display()))?;

        Ok(Self::new(transactions))
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> &[TransactionSideEffects] {
        &self.transactions
    }

    /// Build hints for every transaction. The report lists transactions in
    /// batch order, regardless of the order in which they were processed.
    pub fn process(&self, options: ProcessingOptions) -> BatchReport {
        let transactions = self
            .transactions
            .par_iter()
            .enumerate()
            .map(|(index, tx)| {
                let outcome = tx.process(options).unwrap_or_else(|err| {
                    error!("Transaction {index} failed: {err:#}");
                    TransactionOutcome::Failed {
                        error: format!("{err:#}"),
                    }
                });
                debug!("Processed transaction {index}");

                TransactionReport {
                    index,
                    label: tx.label.clone(),
                    outcome,
                }
            })
            .collect::<Vec<_>>();

        BatchReport::new(transactions)
    }
}
