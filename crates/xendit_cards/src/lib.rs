// --- File: crates/xendit_cards/src/lib.rs ---
//! Credit card charges on the Xendit API: create, retrieve, capture,
//! authorization reversal and refunds.

pub mod cards;
pub mod operations;


pub use cards::Cards;
pub use operations::{CardOperation, OperationSpec, CHARGES_PATH};
