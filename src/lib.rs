// Typing-practice engine: passage tokenization, per-word keystroke matching,
// cursor navigation, stats, and a style-free render contract.
pub mod config;
pub mod generator;
pub mod session;
pub mod ui;
