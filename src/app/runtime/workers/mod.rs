/// Movie search worker.
pub mod search;
