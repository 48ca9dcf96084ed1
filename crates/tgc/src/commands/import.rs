use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use std::{fs, fs::File, path::PathBuf};
use tgc_lang::{text, LangTableWriter};
use tracing::info;

#[derive(Args)]
pub struct ImportArgs {
    /// An input text file
    #[arg(value_name = "TXT")]
    source: PathBuf,

    /// A target LANG file
    #[arg(value_name = "BIN")]
    target: PathBuf,
}

impl ImportArgs {
    pub fn handle(&self) -> Result<()> {
        let input = fs::read_to_string(&self.source)
            .into_diagnostic()
            .context(format!("path: {}", &self.source.display()))?;

        // Parse everything before the target file is created; a malformed line must not
        // leave a partial file behind.
        let table = text::parse(&input)?;

        info!("creating {}", self.target.display());
        let out = File::create(&self.target)
            .into_diagnostic()
            .context(format!("creating {}", &self.target.display()))?;

        let mut writer = LangTableWriter::new(out);
        writer.write_table(&table)?;
        writer.finish().context("finalizing lang file")?;

        Ok(())
    }
}
