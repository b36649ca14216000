use clap::Args;
use eyre::Result;

use super::project::{DocumentArgs, Project};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub documents: DocumentArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let project = Project::load(&self.documents);
        let generator = project.generator()?;
        let documents = project.documents(&self.documents.paths)?;

        let report = ops::check(&generator, &documents);
        report.render(&mut TerminalOutput::new());

        if !report.is_current() {
            std::process::exit(1);
        }
        Ok(())
    }
}
