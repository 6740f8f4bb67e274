//! File processing API for the papier format
//!
//! Processing is described by a "stage-format" string such as `token-simple` or
//! `ast-treeviz`. The token stage stops after scanning; the ast stage runs the full
//! builder and can fail with a structural error.
//!
//! ```rust
//! use papier::papier::processor::{process_source, ProcessingSpec};
//!
//! let spec = ProcessingSpec::from_string("ast-treeviz").unwrap();
//! let output = process_source("hello #world\n", &spec).unwrap();
//! ```

use crate::papier::formats::{to_papier, to_treeviz_str_with_width, DEFAULT_LABEL_WIDTH};
use crate::papier::lexing::{tokenize, Token};
use crate::papier::parsing::{build, StructuralError};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Treeviz,
    Papier,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
    /// Label width for the treeviz format.
    pub label_width: usize,
}

/// Stage/format pairs that can be produced.
const AVAILABLE: [(ProcessingStage, OutputFormat); 5] = [
    (ProcessingStage::Token, OutputFormat::Simple),
    (ProcessingStage::Token, OutputFormat::Json),
    (ProcessingStage::Ast, OutputFormat::Treeviz),
    (ProcessingStage::Ast, OutputFormat::Json),
    (ProcessingStage::Ast, OutputFormat::Papier),
];

impl ProcessingStage {
    fn name(self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        }
    }
}

impl OutputFormat {
    fn name(self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Papier => "papier",
        }
    }
}

impl ProcessingSpec {
    pub fn new(stage: ProcessingStage, format: OutputFormat) -> Self {
        Self {
            stage,
            format,
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }

    /// Parse a format string like "token-simple" or "ast-json"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "treeviz" => OutputFormat::Treeviz,
            "papier" => OutputFormat::Papier,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        if !AVAILABLE.contains(&(stage, format)) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "format '{}' is not supported for the {} stage",
                format.name(),
                stage.name()
            )));
        }

        Ok(Self::new(stage, format))
    }

    pub fn with_label_width(mut self, label_width: usize) -> Self {
        self.label_width = label_width;
        self
    }

    pub fn name(&self) -> String {
        format!("{}-{}", self.stage.name(), self.format.name())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Structural(#[from] StructuralError),
}

/// Process papier source text according to the given specification
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => {
            let tokens: Vec<Token> = tokenize(source).into_iter().map(|(t, _)| t).collect();
            format_tokens(&tokens, spec.format)
        }
        ProcessingStage::Ast => {
            let doc = build(source)?;
            match spec.format {
                OutputFormat::Treeviz => Ok(to_treeviz_str_with_width(&doc, spec.label_width)),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&doc)?),
                OutputFormat::Papier => Ok(to_papier(&doc)),
                OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(spec.name())),
            }
        }
    }
}

/// Process a papier file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())?;
    process_source(&content, spec)
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                if token.is_line_break() {
                    result.push('\n');
                }
            }
            Ok(result)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tokens)?),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{} format only works with the ast stage",
            other.name()
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    AVAILABLE
        .iter()
        .map(|&(stage, format)| ProcessingSpec::new(stage, format).name())
        .collect()
}
