//! Canned assistant replies.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed placeholder replies, picked uniformly.
pub const CANNED_REPLIES: [&str; 5] = [
    "Entendido! Deixe-me processar isso para você.",
    "Interessante! Posso ajudar com isso.",
    "Claro! Aqui está o que encontrei.",
    "Processando sua solicitação...",
    "Ótima pergunta! Vou verificar isso.",
];

/// Opening assistant line of a fresh session.
pub const GREETING: &str = "Olá! Sou o Jarvis, seu assistente pessoal. Como posso ajudá-lo hoje?";

/// Produces the text of the next assistant reply.
pub trait ReplySource {
    fn next_reply(&mut self) -> String;
}

/// Uniform pick over [`CANNED_REPLIES`].
#[derive(Debug, Clone)]
pub struct CannedReplies<R: Rng = StdRng> {
    rng: R,
}

impl CannedReplies<StdRng> {
    /// Seeds from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic picks for tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for CannedReplies<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CannedReplies<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ReplySource for CannedReplies<R> {
    fn next_reply(&mut self) -> String {
        let index = self.rng.gen_range(0..CANNED_REPLIES.len());
        CANNED_REPLIES[index].to_string()
    }
}
