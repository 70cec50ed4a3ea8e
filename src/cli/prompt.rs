//! Line-based interactive prompts
//!
//! Every prompt re-asks until the answer validates. End of input is an
//! error, so a closed stdin never loops forever.

use std::io::{self, Write};

use crate::error::{ExpenseError, ExpenseResult};

/// Prompt for a single trimmed line
pub fn prompt_string(prompt: &str) -> ExpenseResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(ExpenseError::Io("Unexpected end of input".into()));
    }

    Ok(input.trim().to_string())
}

/// Prompt until `parse` accepts the answer
pub fn prompt_until<T, F>(prompt: &str, parse: F) -> ExpenseResult<T>
where
    F: Fn(&str) -> ExpenseResult<T>,
{
    loop {
        let answer = prompt_string(prompt)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}", e),
        }
    }
}

/// Ask a yes/no question
pub fn confirm(question: &str) -> ExpenseResult<bool> {
    prompt_until(&format!("{} [y/n]: ", question), |answer| {
        match answer.to_lowercase().as_str() {
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            _ => Err(ExpenseError::Validation("Please answer 'y' or 'n'".into())),
        }
    })
}
