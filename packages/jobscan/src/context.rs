//! Application context with shared state and utilities

use console::style;

use crate::config::Config;

/// Application context passed to all commands
pub struct AppContext {
    pub quiet: bool,
    pub config: Config,
}

impl AppContext {
    pub fn new(quiet: bool, config: Config) -> Self {
        Self { quiet, config }
    }

    pub fn print_header(&self, msg: &str) {
        if !self.quiet {
            println!();
            println!("{}", style(msg).bold());
        }
    }

    pub fn print_success(&self, msg: &str) {
        if !self.quiet {
            println!("{}", style(msg).green());
        }
    }

    pub fn print_warning(&self, msg: &str) {
        if !self.quiet {
            println!("{}", style(msg).yellow());
        }
    }

    pub fn print_info(&self, msg: &str) {
        if !self.quiet {
            println!("{}", style(msg).cyan());
        }
    }

    pub fn print_line(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg);
        }
    }
}
