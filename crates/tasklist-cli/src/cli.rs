use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskmaster")]
#[command(about = "Stay organized, get things done: a terminal task list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Label config file (defaults to the platform config directory)
    #[arg(short, long, env = "TASKMASTER_CONFIG")]
    pub config: Option<PathBuf>,
}
