//! Prompt/retry input helpers for the interactive menu.

use std::io::{self, Write};

/// Prompt and read one line, trimmed of the trailing newline.
///
/// Fails with `UnexpectedEof` once stdin is closed, so retry loops terminate.
pub fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut buf = String::new();
    let bytes = io::stdin().read_line(&mut buf)?;
    if bytes == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompt until a whole number inside the optional bounds is entered.
pub fn read_int(prompt: &str, min: Option<i64>, max: Option<i64>) -> io::Result<i64> {
    loop {
        match read_line(prompt)?.trim().parse::<i64>() {
            Ok(value) => {
                if let Some(min) = min {
                    if value < min {
                        println!("Value must be at least {min}");
                        continue;
                    }
                }
                if let Some(max) = max {
                    if value > max {
                        println!("Value must be at most {max}");
                        continue;
                    }
                }
                return Ok(value);
            }
            Err(_) => println!("Please enter a whole number"),
        }
    }
}

/// Prompt until a number no smaller than the optional minimum is entered.
pub fn read_float(prompt: &str, min: Option<f64>) -> io::Result<f64> {
    loop {
        match read_line(prompt)?.trim().parse::<f64>() {
            Ok(value) => {
                if let Some(min) = min {
                    if value < min {
                        println!("Value must be at least {min}");
                        continue;
                    }
                }
                return Ok(value);
            }
            Err(_) => println!("Please enter a number"),
        }
    }
}
