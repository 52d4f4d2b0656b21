use std::{env, fs::read_to_string, time::Instant};

use brslex::{display_error, errors::errors::scan, lexer::lexer::tokenize};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();
    let tokens = tokenize(&file_contents);
    println!("Tokenized in {:?}", start.elapsed());

    for token in &tokens {
        token.debug();
    }

    let errors = scan(&tokens);
    for error in &errors {
        display_error(error, &file_contents, file_name);
    }

    println!("{} tokens, {} problems", tokens.len(), errors.len());
}
