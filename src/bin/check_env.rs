//! Prints structural properties of `DATABASE_URL` as written in `.env.local`.

use wamumbi::server::util::env_check::{read_env_file_value, ValueDiagnostics, ENV_FILE};

fn main() {
    match read_env_file_value(ENV_FILE, "DATABASE_URL") {
        Ok(Some(value)) => println!("{}", ValueDiagnostics::inspect(&value)),
        Ok(None) => {
            eprintln!("DATABASE_URL is not set in {}", ENV_FILE);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to read {}: {}", ENV_FILE, e);
            std::process::exit(1);
        }
    }
}
