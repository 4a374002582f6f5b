use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rematch::{CompileOptions, MatchOptions, Pattern};

#[derive(Parser)]
#[command(name = "rematch")]
#[command(about = "Rematch - match, count and replace with compiled patterns")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PatternFlags {
    /// Case-insensitive matching
    #[arg(short = 'i', long)]
    ignore_case: bool,
    /// ^ and $ match at line boundaries
    #[arg(short = 'm', long)]
    multiline: bool,
    /// . matches line separators too
    #[arg(short = 's', long)]
    dot_all: bool,
    /// Treat the pattern as literal text
    #[arg(long)]
    literal: bool,
    /// Allow comments and whitespace in the pattern
    #[arg(short = 'x', long)]
    extended: bool,
}

impl PatternFlags {
    fn options(&self) -> CompileOptions {
        let mut options = CompileOptions::empty();
        if self.ignore_case {
            options |= CompileOptions::CASE_INSENSITIVE;
        }
        if self.multiline {
            options |= CompileOptions::ANCHORS_MATCH_LINES;
        }
        if self.dot_all {
            options |= CompileOptions::DOT_MATCHES_LINE_SEPARATORS;
        }
        if self.literal {
            options |= CompileOptions::IGNORE_METACHARACTERS;
        }
        if self.extended {
            options |= CompileOptions::ALLOW_COMMENTS_AND_WHITESPACE;
        }
        options
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check if the pattern matches anywhere in the input
    Match {
        /// The pattern
        pattern: String,
        /// The input string
        input: String,
        #[command(flatten)]
        flags: PatternFlags,
    },
    /// Find all matches in the input
    Find {
        /// The pattern
        pattern: String,
        /// The input string
        input: String,
        /// Show capture group details
        #[arg(short, long)]
        verbose: bool,
        #[command(flatten)]
        flags: PatternFlags,
    },
    /// Count the matches in the input
    Count {
        /// The pattern
        pattern: String,
        /// The input string
        input: String,
        #[command(flatten)]
        flags: PatternFlags,
    },
    /// Replace every match with an expanded template
    Replace {
        /// The pattern
        pattern: String,
        /// The input string
        input: String,
        /// Replacement template; \1..\9 and \g{name} substitute groups
        template: String,
        #[command(flatten)]
        flags: PatternFlags,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Match { pattern, input, flags } => {
            cmd_match(&compile(&pattern, &flags), &input)
        }
        Commands::Find { pattern, input, verbose, flags } => {
            cmd_find(&compile(&pattern, &flags), &input, verbose)
        }
        Commands::Count { pattern, input, flags } => {
            cmd_count(&compile(&pattern, &flags), &input)
        }
        Commands::Replace { pattern, input, template, flags } => {
            cmd_replace(&compile(&pattern, &flags), &input, &template)
        }
    }
}

fn compile(pattern: &str, flags: &PatternFlags) -> Pattern {
    match Pattern::new(pattern, flags.options()) {
        Ok(pattern) => pattern,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(2);
        }
    }
}

fn cmd_match(pattern: &Pattern, input: &str) {
    if pattern.is_match(input) {
        println!("{}", "true".green());
        std::process::exit(0);
    } else {
        println!("{}", "false".red());
        std::process::exit(1);
    }
}

fn cmd_find(pattern: &Pattern, input: &str, verbose: bool) {
    let matches = pattern.matches(input);

    if matches.is_empty() {
        println!("{}", "No matches found".red());
        return;
    }

    println!(
        "{} {}",
        "Found".bold(),
        format!("{} match(es)", matches.len()).green()
    );
    println!();

    for (i, m) in matches.iter().enumerate() {
        let range = m.range();
        println!(
            "  [{}] {}..{} = {}",
            i + 1,
            range.start(),
            range.end(),
            m.as_str().green()
        );

        if verbose {
            for group in 1..m.group_count() {
                match (m.range_at(group), m.substring_at(group)) {
                    (Some(range), Some(text)) => println!(
                        "      group {}: {}..{} = {}",
                        group,
                        range.start(),
                        range.end(),
                        text.green()
                    ),
                    _ => println!("      group {}: {}", group, "absent".dimmed()),
                }
            }
        }
    }
}

fn cmd_count(pattern: &Pattern, input: &str) {
    println!(
        "{}",
        pattern.number_of_matches(input, None, MatchOptions::empty())
    );
}

fn cmd_replace(pattern: &Pattern, input: &str, template: &str) {
    let mut subject = input.to_string();
    let count = pattern.replace_matches(&mut subject, None, MatchOptions::empty(), template);
    println!("{subject}");
    eprintln!(
        "{}",
        format!("{count} replacement(s)").green()
    );
}
