use colored::Colorize;

/// Print the one-line outcome of a run.
pub fn report(count: usize) {
    match count {
        0 => println!("No open pull requests found."),
        1 => println!("Posted a reminder about {} open pull request.", "1".bold()),
        n => println!(
            "Posted a reminder about {} open pull requests.",
            n.to_string().bold()
        ),
    }
}

pub fn output_error(err: &anyhow::Error) {
    eprintln!("{}: {:#}", "Error".red().bold(), err);
}
