//! Prints an Argon2id PHC hash for a `static_users` entry in `config.toml`.
//!
//! Reads the password from the first argument, or from the first line of
//! stdin when no argument is given.

use std::io::BufRead;

use tessen_service::auth::password::hash_password;

fn main() {
    let password = match std::env::args().nth(1) {
        Some(password) => password,
        None => {
            let mut line = String::new();
            if let Err(err) = std::io::stdin().lock().read_line(&mut line) {
                eprintln!("Failed to read password from stdin: {err}");
                std::process::exit(1);
            }
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    match hash_password(&password) {
        Ok(hash) => {
            println!("{hash}");
        }
        Err(err) => {
            eprintln!("Failed to hash password: {err}");
            std::process::exit(1);
        }
    }
}
