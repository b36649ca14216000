use clap::Args;
use eyre::Result;

use super::project::{DocumentArgs, Project};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub documents: DocumentArgs,

    /// Print the generated files instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let project = Project::load(&self.documents);
        let generator = project.generator()?;
        let documents = project.documents(&self.documents.paths)?;

        let report = ops::generate(
            &generator,
            &documents,
            ops::generate::GenerateOptions {
                dry_run: self.dry_run,
            },
        );

        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }
}
