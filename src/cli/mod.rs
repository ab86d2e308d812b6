mod repl;

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use chatdoc::ProviderKind;

pub use repl::*;

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a single question about a document and print the answer
    Ask {
        file: PathBuf,

        question: String,
    },

    /// Start an interactive chat, optionally loading a document first
    Chat {
        file: Option<PathBuf>,
    },

    /// Print a document's name and full content
    Preview {
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    Anthropic,
    Openai,
}

impl From<ProviderArg> for ProviderKind {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Anthropic => ProviderKind::Anthropic,
            ProviderArg::Openai => ProviderKind::OpenAi,
        }
    }
}
