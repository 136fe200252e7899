/// Tiny program that takes in a pattern and a string. If the string does not
/// fully match the pattern, the program exits with a non-zero status code.
use regexp2::RegExp;
use std::env;
use std::process;

const HELP: &str = "regextest <pattern> <string>";

fn main() {
    let mut args = env::args().skip(1);
    let pattern = match args.next() {
        Some(s) => s,
        None => {
            println!("{}", HELP);
            process::exit(1);
        }
    };
    let string = match args.next() {
        Some(s) => s,
        None => {
            println!("{}", HELP);
            process::exit(1);
        }
    };

    let regexp = RegExp::new(&pattern).expect("invalid pattern");

    let code = if regexp.is_match(&string) { 0 } else { 1 };
    process::exit(code);
}
