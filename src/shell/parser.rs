use crate::shell;
use crate::shell::cmds;

/// Splits a raw prompt line into a command word plus tagged arguments, and
/// builds the matching command. The command word is case-insensitive; tag
/// tokens have the literal form `tag/VALUE` and may appear in any order, each
/// at most once.
pub fn parse(line: &str) -> Result<cmds::Command, shell::Error> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };
    if word.is_empty() {
        return Err(shell::Error::EmptyInput);
    }
    let word = word.to_lowercase();

    // The keyword of 'find' is free text, not a tag list.
    if word == "find" {
        return Ok(cmds::Command::Find(cmds::Find::from_keyword(rest)?));
    }
    if !matches!(
        word.as_str(),
        "add" | "list" | "edit" | "delete" | "purge" | "help" | "bye"
    ) {
        return Err(shell::Error::UnknownCommand);
    }

    let mut tags = shell::Tagmap::default();
    for token in rest.split_whitespace() {
        let (prefix, value) = token.split_once('/').ok_or(shell::Error::MalformedTag)?;
        let tag = prefix
            .parse::<shell::Tag>()
            .map_err(|_| shell::Error::UnrecognizedTag)?;
        tags.bind(tag, value)?;
    }

    Ok(match word.as_str() {
        "add" => cmds::Command::Add(cmds::Add::from_tags(&tags)?),
        "list" => cmds::Command::List(cmds::List::from_tags(&tags)?),
        "edit" => cmds::Command::Edit(cmds::Edit::from_tags(&tags)?),
        "delete" => cmds::Command::Delete(cmds::Delete::from_tags(&tags)?),
        "purge" => cmds::Command::Purge(cmds::Purge::from_tags(&tags)?),
        "help" => cmds::Command::Help(cmds::Help::from_tags(&tags)?),
        "bye" => cmds::Command::Bye(cmds::Bye::from_tags(&tags)?),
        _ => unreachable!(),
    })
}
