use console::style;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Print the opening banner.
pub fn print_banner(title: &str) {
    println!("{}", rule());
    println!("{}", style(title).bold());
    println!("{}", rule());
}

/// Print a section heading followed by a rule.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(title).bold().cyan());
    println!("{}", rule());
}

/// Print a sub-heading preceded by a blank line.
pub fn print_heading(title: &str) {
    println!();
    println!("{}", style(title).bold());
}

pub fn print_lines<I, S>(lines: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        println!("{}", line.as_ref());
    }
}

pub fn print_success(msg: &str) {
    println!("  {} {}", style("✅").green(), msg);
}

pub fn print_failure(msg: &str) {
    println!("  {} {}", style("❌").red(), msg);
}
