//! Command line arguments for docverify.
//!
//! Flags override environment variables, which override the config file.

use crate::config::DocVerifyConfig;
pub use crate::config::OutputFormat;
use crate::error::DocVerifyError;
use crate::intake::IntakeForm;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "docverify")]
#[command(about = "Validate uploaded onboarding documents and score their risk", long_about = None)]
pub struct Cli {
    /// Enable verbose (info-level) logging to stderr.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Enable debug-level logging to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Command to execute
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate one or more documents of the same type.
    Validate(ValidateArgs),

    /// List the checks run for each document type.
    List(ListArgs),

    /// Print version information.
    Version,
}

#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Files to validate.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Document type: bank_statement, payslip, irp, ppsn or tax_record.
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub document_type: String,

    #[arg(long)]
    pub customer_name: Option<String>,

    #[arg(long)]
    pub customer_id: Option<String>,

    /// Extra metadata stored with each document (repeatable).
    #[arg(long = "meta", value_name = "KEY=VALUE")]
    pub meta: Vec<String>,

    /// Seed for reproducible results.
    #[arg(long, env = "DOCVERIFY_SEED")]
    pub seed: Option<u64>,

    #[arg(long, value_enum, env = "DOCVERIFY_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Only print documents that failed validation.
    #[arg(long, short = 'q')]
    pub quiet: bool,

    #[arg(long)]
    pub no_color: bool,

    /// Load configuration from a TOML file.
    #[arg(long, env = "DOCVERIFY_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Copy uploads into this directory before validating.
    #[arg(long, value_name = "DIR")]
    pub upload_dir: Option<PathBuf>,

    /// Reject uploads larger than this many bytes.
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,
}

impl ValidateArgs {
    /// Merge the config file (if any) with command line overrides.
    pub fn effective_config(&self) -> Result<DocVerifyConfig, DocVerifyError> {
        let mut config = match &self.config {
            Some(path) => DocVerifyConfig::load(path)?,
            None => DocVerifyConfig::default(),
        };

        if self.seed.is_some() {
            config.random_seed = self.seed;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.no_color || std::env::var_os("NO_COLOR").is_some() {
            config.color = false;
        }
        if self.upload_dir.is_some() {
            config.upload_dir = self.upload_dir.clone();
        }
        if let Some(max) = self.max_file_size {
            config.max_file_size = max;
        }

        config.validate()?;
        Ok(config)
    }

    /// Build the intake form shared by every file in this run.
    pub fn intake_form(&self) -> Result<IntakeForm, DocVerifyError> {
        let mut form = IntakeForm {
            document_type: self.document_type.clone(),
            customer_name: self.customer_name.clone(),
            customer_id: self.customer_id.clone(),
            ..Default::default()
        };
        for entry in &self.meta {
            form.parse_metadata(entry)?;
        }
        Ok(form)
    }
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Only list checks for this document type.
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub document_type: Option<String>,
}
