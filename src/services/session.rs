//! Cipher session service
//!
//! A session is one visit to one cipher. It runs the validate → normalize →
//! codec → record pipeline and owns the history of what it produced.

use rand::Rng;

use crate::ciphers::{mlecchita, Cipher, CipherKind, Direction};
use crate::error::{CipherError, CipherResult};
use crate::models::{
    prepare, CipherAlphabet, CipherParams, HistoryBuffer, HistoryEntry, NormalizedText, TextField,
};

/// Service for running one cipher and remembering its results
#[derive(Debug, Clone)]
pub struct CipherSession {
    kind: CipherKind,
    history: HistoryBuffer,
}

impl CipherSession {
    /// Create a new session with an empty history
    pub fn new(kind: CipherKind) -> Self {
        Self {
            kind,
            history: HistoryBuffer::new(),
        }
    }

    pub fn kind(&self) -> CipherKind {
        self.kind
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Validate and normalize a raw message
    pub fn prepare_message(&self, raw_message: &str) -> CipherResult<NormalizedText> {
        prepare(raw_message, TextField::Message).inspect_err(|e| {
            tracing::info!(cipher = %self.kind, error = %e, "message rejected");
        })
    }

    /// Encrypt or decrypt a raw message and record the result
    ///
    /// Nothing is recorded when the message or cipher is refused.
    pub fn process(
        &mut self,
        direction: Direction,
        raw_message: &str,
        cipher: &Cipher,
    ) -> CipherResult<HistoryEntry> {
        if cipher.kind() != self.kind {
            return Err(CipherError::invalid_parameter(format!(
                "{} cannot run in a {} session",
                cipher.kind(),
                self.kind
            )));
        }

        let text = self.prepare_message(raw_message)?;
        let output = cipher.apply(direction, &text);

        tracing::debug!(
            cipher = %self.kind,
            %direction,
            length = text.len(),
            "message processed"
        );

        Ok(self.record(output, cipher.params()))
    }

    /// Encrypt under a freshly generated Mlecchita Vikaalpa alphabet
    ///
    /// Returns the entry (whose parameters carry the alphabet) together with
    /// the alphabet itself so it can be shown to the user.
    pub fn encrypt_random_mlecchita<R: Rng + ?Sized>(
        &mut self,
        raw_message: &str,
        rng: &mut R,
    ) -> CipherResult<(HistoryEntry, CipherAlphabet)> {
        if self.kind != CipherKind::MlecchitaVikaalpa {
            return Err(CipherError::invalid_parameter(format!(
                "{} cannot generate a Mlecchita Vikaalpa alphabet",
                self.kind
            )));
        }

        let text = self.prepare_message(raw_message)?;
        let (output, alphabet) = mlecchita::encrypt_random(&text, rng);

        tracing::debug!(
            cipher = %self.kind,
            direction = %Direction::Encrypt,
            length = text.len(),
            "message processed with generated alphabet"
        );

        let entry = self.record(output, CipherParams::Alphabet(alphabet.to_string()));
        Ok((entry, alphabet))
    }

    fn record(&mut self, output: NormalizedText, params: CipherParams) -> HistoryEntry {
        let entry = HistoryEntry::new(output.into_string(), params);
        self.history.record(entry.clone());
        entry
    }
}
