//! Interactive word lookup backed by an `OrderedMap`.
//!
//! Asks for a word and prints its stored translation. Unknown words prompt
//! for a translation, which is remembered for the rest of the session. Type
//! `quit` (or close stdin) to leave. Set `RUST_LOG=plain_collections=trace`
//! to watch the tree being restructured.

use std::io::{self, BufRead, Write};

use plain_collections::OrderedMap;

/// Prints `prompt` and reads one trimmed line; `None` on end of input.
fn ask(
    prompt: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn run(mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut dictionary: OrderedMap<String, String> = OrderedMap::new();

    while let Some(question) = ask("Enter the word: ", &mut input, &mut output)? {
        let word = question.to_lowercase();
        if word == "quit" {
            break;
        }

        if let Some(answer) = dictionary.get(word.as_str()) {
            writeln!(output, "Translate: {}", answer)?;
            continue;
        }

        let prompt = format!("Word: {} not found, enter answer =>", question);
        match ask(&prompt, &mut input, &mut output)? {
            Some(answer) => {
                log::debug!("learning {:?} => {:?}", word, answer);
                dictionary.insert(word, answer);
            }
            None => break,
        }
    }

    log::info!("leaving with {} words known", dictionary.len());
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    run(stdin.lock(), io::stdout())
}

#[cfg(test)]
mod tests {
    use super::run;

    fn session(input: &str) -> String {
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_learns_then_translates() {
        let out = session("Cat\nchat\ncat\nquit\n");
        assert!(out.contains("Word: Cat not found, enter answer =>"));
        assert!(out.contains("Translate: chat"));
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        let out = session("QUIT\nnever asked\n");
        assert_eq!("Enter the word: ", out);
    }

    #[test]
    fn test_end_of_input() {
        assert_eq!("Enter the word: ", session(""));
        let out = session("dog\n");
        assert!(out.ends_with("Word: dog not found, enter answer =>"));
    }
}
