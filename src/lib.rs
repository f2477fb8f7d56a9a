pub mod classify;
pub mod config;
pub mod data;
pub mod dialect;
pub mod error;
pub mod g2p;
pub mod graphemes;
pub mod lexicon;
pub mod postprocess;
pub mod rules;
pub mod token;

pub use config::PhonemizeOptions;
pub use dialect::Dialect;
pub use error::{Error, Result};
pub use g2p::{G2P, phonemize, phonemize_word};
pub use lexicon::Lexicon;
pub use postprocess::post_process;
pub use token::{Source, Token, TokenKind};
