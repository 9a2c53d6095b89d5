use changelog::OutputSink;
use colored::Colorize;

/// Colored stdout sink for the engines' user-facing output.
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn line(&self, text: &str) {
        println!("{}", text.cyan());
    }

    fn success(&self, text: &str) {
        println!("{}", text.green());
    }

    fn warning(&self, text: &str) {
        println!("{}", text.yellow());
    }
}
