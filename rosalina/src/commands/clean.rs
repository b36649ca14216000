use clap::Args;
use eyre::Result;

use super::project::{DocumentArgs, Project};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub documents: DocumentArgs,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let project = Project::load(&self.documents);
        let generator = project.generator()?;
        let documents = project.documents(&self.documents.paths)?;

        let report = ops::clean(
            &generator,
            &documents,
            ops::clean::CleanOptions {
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
