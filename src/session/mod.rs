pub mod input;
pub mod lesson;
pub mod passage;
pub mod render;
pub mod result;
pub mod word;

pub use lesson::TypingSession;
pub use passage::PassageSequence;
pub use render::Segment;
pub use result::{Clock, SessionResult, WordStats};
pub use word::{Entry, WordMatcher, WordState};
