use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use std::{fs, fs::File, path::PathBuf};
use tgc_lang::{text, LangTableReader};
use tracing::info;

#[derive(Args)]
pub struct ExportArgs {
    /// An input LANG file
    #[arg(value_name = "BIN")]
    source: PathBuf,

    /// A target text file
    #[arg(value_name = "TXT")]
    target: PathBuf,

    /// Fail when a stored key hash does not match its key
    #[arg(long, default_value_t = false)]
    strict: bool,
}

impl ExportArgs {
    pub fn handle(&self) -> Result<()> {
        let mut f = File::open(&self.source)
            .into_diagnostic()
            .context(format!("path: {}", &self.source.display()))?;

        let lang = if self.strict {
            LangTableReader::verifying(&mut f)?
        } else {
            LangTableReader::new(&mut f)?
        };

        info!("writing {}", self.target.display());
        fs::write(&self.target, text::render(lang.table()))
            .into_diagnostic()
            .context(format!("writing {}", &self.target.display()))?;

        Ok(())
    }
}
