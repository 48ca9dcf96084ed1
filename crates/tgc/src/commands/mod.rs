pub mod export;
pub mod import;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Export a binary LANG file into an editable text file
    Export(export::ExportArgs),
    /// Import an editable text file into a binary LANG file
    Import(import::ImportArgs),
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Export(export) => export.handle(),
            Commands::Import(import) => import.handle(),
        }
    }
}
