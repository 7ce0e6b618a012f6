use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "portfolio-site")]
#[command(about = "Personal portfolio site: serve it, export it, or check its content")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Content document to load instead of CONTENT_PATH
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,

    /// Render every page to static files
    Export {
        /// Output directory, overrides EXPORT_DIR
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Load and validate the content document, then exit
    Check,
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let args = Args::try_parse_from(["portfolio-site"]).unwrap();
        assert_eq!(args.command(), Command::Serve);
    }

    #[test]
    fn export_accepts_output_directory() {
        let args = Args::try_parse_from(["portfolio-site", "export", "--out", "dist"]).unwrap();
        assert_eq!(
            args.command(),
            Command::Export {
                out: Some(PathBuf::from("dist"))
            }
        );
    }

    #[test]
    fn content_override_is_global() {
        let args = Args::try_parse_from(["portfolio-site", "check", "--content", "x.json"]).unwrap();
        assert_eq!(args.command(), Command::Check);
        assert_eq!(args.content, Some(PathBuf::from("x.json")));
    }
}
