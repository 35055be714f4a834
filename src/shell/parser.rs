//! Command parsing
//!
//! Parses raw command lines into the shell's command enum. Batch count
//! validation is deliberately not done here: the declared -n count is
//! passed through so the batch runner can report a mismatch.

/// Command enum to represent shell commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Create(String),
    CreateMany(usize, Vec<String>),
    Write(String, String),
    WriteMany(usize, Vec<(String, String)>),
    Delete(String),
    DeleteMany(usize, Vec<String>),
    Read(String),
    List(bool),
    Benchmark,
    Exit,
    Invalid(String),
    Unknown(String),
}

#[derive(Debug, PartialEq)]
pub enum CommandResult {
    Continue,
    Exit,
}

/// Parse a raw command line into a Command
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match cmd {
        "create" => parse_create(rest),
        "write" => parse_write(rest),
        "delete" => parse_delete(rest),
        "read" => Command::Read(rest.to_string()),
        "ls" => Command::List(rest == "-l"),
        "benchmark" => Command::Benchmark,
        "exit" => Command::Exit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

fn parse_create(rest: &str) -> Command {
    let mut tokens = rest.split_whitespace();
    match tokens.next() {
        Some("-n") => match parse_count(tokens.next()) {
            Ok(count) => Command::CreateMany(count, tokens.map(str::to_string).collect()),
            Err(msg) => Command::Invalid(msg),
        },
        Some(name) => Command::Create(name.to_string()),
        None => Command::Create(String::new()),
    }
}

fn parse_delete(rest: &str) -> Command {
    let mut tokens = rest.split_whitespace();
    match tokens.next() {
        Some("-n") => match parse_count(tokens.next()) {
            Ok(count) => Command::DeleteMany(count, tokens.map(str::to_string).collect()),
            Err(msg) => Command::Invalid(msg),
        },
        Some(name) => Command::Delete(name.to_string()),
        None => Command::Delete(String::new()),
    }
}

fn parse_write(rest: &str) -> Command {
    let mut head = rest.splitn(2, char::is_whitespace);
    if head.next() == Some("-n") {
        let args = head.next().unwrap_or("").trim_start();
        let mut parts = args.splitn(2, char::is_whitespace);
        let count = match parse_count(parts.next().filter(|s| !s.is_empty())) {
            Ok(count) => count,
            Err(msg) => return Command::Invalid(msg),
        };

        let mut remainder = parts.next().unwrap_or("").trim_start();
        let mut entries = Vec::new();
        while !remainder.is_empty() {
            let mut pair = remainder.splitn(2, char::is_whitespace);
            let name = pair.next().unwrap_or("");
            let rest_after_name = pair.next().unwrap_or("").trim_start();
            match take_quoted(rest_after_name) {
                Some((content, rest_after_content)) => {
                    entries.push((name.to_string(), content));
                    remainder = rest_after_content.trim_start();
                }
                None => {
                    return Command::Invalid(format!(
                        "Content for {} must be enclosed in double quotes",
                        name
                    ));
                }
            }
        }

        return Command::WriteMany(count, entries);
    }

    let mut parts = rest.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or("").to_string();
    let after_name = parts.next().unwrap_or("").trim_start();
    match take_quoted(after_name) {
        Some((content, _)) => Command::Write(name, content),
        None => Command::Invalid(format!(
            "Content for {} must be enclosed in double quotes",
            name
        )),
    }
}

/// Parse the positive integer following -n
fn parse_count(token: Option<&str>) -> Result<usize, String> {
    match token {
        Some(token) => match token.parse::<usize>() {
            Ok(count) if count > 0 => Ok(count),
            _ => Err("The number of files (-n) must be a positive integer".to_string()),
        },
        None => Err("The number of files (-n) must be a positive integer".to_string()),
    }
}

/// Extract the text between the first pair of double quotes, returning
/// the content and the remainder after the closing quote
fn take_quoted(input: &str) -> Option<(String, &str)> {
    let open = input.find('"')?;
    let after_open = &input[open + 1..];
    let close = after_open.find('"')?;
    Some((after_open[..close].to_string(), &after_open[close + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("ls"), Command::List(false));
        assert_eq!(parse_command("ls -l"), Command::List(true));
        assert_eq!(parse_command("benchmark"), Command::Benchmark);
        assert_eq!(parse_command("exit"), Command::Exit);
    }

    #[test]
    fn test_parse_single_file_commands() {
        assert_eq!(
            parse_command("create a.txt"),
            Command::Create("a.txt".to_string())
        );
        assert_eq!(
            parse_command("delete a.txt"),
            Command::Delete("a.txt".to_string())
        );
        assert_eq!(
            parse_command("read a.txt"),
            Command::Read("a.txt".to_string())
        );
    }

    #[test]
    fn test_parse_create_without_name() {
        // The store rejects the empty name; the parser passes it through
        assert_eq!(parse_command("create"), Command::Create(String::new()));
    }

    #[test]
    fn test_parse_create_many() {
        assert_eq!(
            parse_command("create -n 3 a b c"),
            Command::CreateMany(3, vec!["a".into(), "b".into(), "c".into()])
        );
        // Mismatched counts are passed through for the batch runner to reject
        assert_eq!(
            parse_command("create -n 3 a b"),
            Command::CreateMany(3, vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_parse_delete_many() {
        assert_eq!(
            parse_command("delete -n 2 a b"),
            Command::DeleteMany(2, vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_parse_bad_count() {
        assert!(matches!(parse_command("create -n 0 a"), Command::Invalid(_)));
        assert!(matches!(
            parse_command("create -n x a b"),
            Command::Invalid(_)
        ));
        assert!(matches!(parse_command("delete -n"), Command::Invalid(_)));
    }

    #[test]
    fn test_parse_write_with_quotes() {
        assert_eq!(
            parse_command("write a.txt \"hello world\""),
            Command::Write("a.txt".to_string(), "hello world".to_string())
        );
        assert_eq!(
            parse_command("write a.txt \"\""),
            Command::Write("a.txt".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_write_without_quotes() {
        assert!(matches!(
            parse_command("write a.txt hello"),
            Command::Invalid(_)
        ));
    }

    #[test]
    fn test_parse_write_many() {
        assert_eq!(
            parse_command("write -n 2 a \"one\" b \"two\""),
            Command::WriteMany(
                2,
                vec![
                    ("a".to_string(), "one".to_string()),
                    ("b".to_string(), "two".to_string())
                ]
            )
        );
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_command("  exit  "), Command::Exit);
        assert_eq!(
            parse_command("create   a.txt  "),
            Command::Create("a.txt".to_string())
        );
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(
            parse_command("INVALID"),
            Command::Unknown("INVALID".to_string())
        );
        assert_eq!(
            parse_command("touch a.txt"),
            Command::Unknown("touch a.txt".to_string())
        );
    }
}
