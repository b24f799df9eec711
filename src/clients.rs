//! Parsing and ordering of the window-manager client list.
//!
//! `hyprctl clients` prints one record per open window: records are separated
//! by a blank line, and each record is a sequence of `key: value` lines.
//! [`parse_clients`] turns that blob into [`Window`] entities and
//! [`sort_by_workspace`] orders them by numeric workspace id.
//!
//! # Input format
//!
//! ```text
//! Window 55e4f66a2080 -> kitty:
//!         title: kitty
//!         id: 4
//!         class: kitty
//!         monitor: eDP-1
//!         floating: 0
//!         workspace: web (3)
//!
//! Window 55e4f66b10c0 -> firefox:
//!         ...
//! ```
//!
//! Lines without a `": "` separator (like the `Window ... ->` header) are
//! formatting artifacts and are ignored. The `workspace` value is a composite
//! `<name> (<id>)` field; a record whose composite is missing or malformed
//! fails the whole parse with a [`ClientParseError`] rather than producing a
//! partially-populated window.

use log::debug;
use std::collections::HashMap;

/// A single open window as reported by the window manager.
///
/// All fields are kept in the textual form the client list reports them in;
/// in particular `floating` stays a string flag and `id` is an opaque
/// identifier. `workspace` holds the numeric workspace id as text and
/// `workspace_name` the human-readable label, both extracted from the
/// composite `workspace` field.
///
/// Windows are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub title: String,
    pub id: String,
    pub class: String,
    pub monitor: String,
    pub floating: String,
    pub workspace: String,
    pub workspace_name: String,
}

/// Errors from parsing the client list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientParseError {
    /// A record carried no `workspace` key at all.
    #[error("client record has no workspace field")]
    MissingWorkspace,

    /// The `workspace` value lacked the parenthesized id,
    /// e.g. `workspace: Main` instead of `workspace: Main (3)`.
    #[error("malformed workspace field {value:?}: expected \"<name> (<id>)\"")]
    MalformedWorkspace { value: String },
}

/// Parse the raw output of the list-clients command into windows.
///
/// Records are split on blank lines; trailing delimiters produce empty
/// blocks, which are skipped. Within a record, duplicate keys are
/// last-write-wins and unrecognized keys are ignored. Missing recognized
/// keys default to the empty string, except `workspace`, whose absence or
/// malformation aborts the parse (see [`ClientParseError`]).
pub fn parse_clients(output: &str) -> Result<Vec<Window>, ClientParseError> {
    let mut windows = Vec::new();
    for block in output.split("\n\n") {
        if block.trim().is_empty() {
            continue;
        }
        windows.push(parse_record(block)?);
    }
    Ok(windows)
}

/// Order windows by ascending numeric workspace id.
///
/// The sort is stable, so windows on the same workspace keep their input
/// order. A `workspace` value that does not parse as a base-10 integer sorts
/// as `0`, sinking toward the front rather than failing the pipeline.
pub fn sort_by_workspace(windows: &mut [Window]) {
    windows.sort_by_key(|w| w.workspace.parse::<i64>().unwrap_or(0));
}

//  Internal

/// Parse one blank-line-delimited record block.
fn parse_record(block: &str) -> Result<Window, ClientParseError> {
    let mut fields: HashMap<&str, &str> = HashMap::new();
    for line in block.lines() {
        // The value is everything after the first ": "; keys may carry
        // arbitrary indentation.
        if let Some((key, value)) = line.split_once(": ") {
            fields.insert(key.trim(), value);
        }
    }
    debug!("client record: {:?}", fields);

    let composite = fields
        .get("workspace")
        .copied()
        .ok_or(ClientParseError::MissingWorkspace)?;
    let (workspace_name, workspace) = split_workspace(composite)?;

    let field = |key: &str| fields.get(key).copied().unwrap_or("").to_string();
    Ok(Window {
        title: field("title"),
        id: field("id"),
        class: field("class"),
        monitor: field("monitor"),
        floating: field("floating"),
        workspace,
        workspace_name,
    })
}

/// Split a composite `<name> (<id>)` workspace value into `(name, id)`.
fn split_workspace(composite: &str) -> Result<(String, String), ClientParseError> {
    let (name, rest) = composite
        .split_once(" (")
        .ok_or_else(|| ClientParseError::MalformedWorkspace {
            value: composite.to_string(),
        })?;
    let id = rest.strip_suffix(')').unwrap_or(rest);
    Ok((name.to_string(), id.to_string()))
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;

    fn record(workspace: &str) -> String {
        format!(
            "Window 55e4f66a2080 -> kitty:\n\
             \ttitle: kitty\n\
             \tid: 4\n\
             \tclass: kitty\n\
             \tmonitor: eDP-1\n\
             \tfloating: 0\n\
             \tworkspace: {}\n",
            workspace
        )
    }

    #[test]
    fn parses_full_record() {
        let windows = parse_clients(&record("web (3)")).unwrap();
        assert_eq!(windows.len(), 1);
        let w = &windows[0];
        assert_eq!(w.title, "kitty");
        assert_eq!(w.id, "4");
        assert_eq!(w.class, "kitty");
        assert_eq!(w.monitor, "eDP-1");
        assert_eq!(w.floating, "0");
        assert_eq!(w.workspace, "3");
        assert_eq!(w.workspace_name, "web");
    }

    #[test]
    fn round_trips_recognized_keys() {
        let original = Window {
            title: "Mail - Inbox".into(),
            id: "0x7f".into(),
            class: "thunderbird".into(),
            monitor: "HDMI-A-1".into(),
            floating: "1".into(),
            workspace: "5".into(),
            workspace_name: "mail".into(),
        };
        // Format the window back through the same key/value grammar.
        let block = format!(
            "title: {}\nid: {}\nclass: {}\nmonitor: {}\nfloating: {}\nworkspace: {} ({})\n",
            original.title,
            original.id,
            original.class,
            original.monitor,
            original.floating,
            original.workspace_name,
            original.workspace,
        );
        let windows = parse_clients(&block).unwrap();
        assert_eq!(windows, vec![original]);
    }

    #[test]
    fn splits_records_on_blank_lines() {
        let blob = format!("{}\n{}", record("web (3)"), record("chat (1)"));
        let windows = parse_clients(&blob).unwrap();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].workspace, "3");
        assert_eq!(windows[1].workspace, "1");
    }

    #[test]
    fn skips_trailing_delimiter_blocks() {
        let blob = format!("{}\n\n\n", record("web (3)"));
        let windows = parse_clients(&blob).unwrap();
        assert_eq!(windows.len(), 1);
    }

    #[test]
    fn empty_input_yields_no_windows() {
        assert_eq!(parse_clients("").unwrap(), vec![]);
        assert_eq!(parse_clients("\n\n").unwrap(), vec![]);
    }

    #[test]
    fn ignores_lines_without_separator() {
        let block = "Window 55e4f66a2080 -> kitty:\n\
                     not a field line\n\
                     title: kitty\n\
                     workspace: web (3)\n";
        let windows = parse_clients(block).unwrap();
        assert_eq!(windows[0].title, "kitty");
    }

    #[test]
    fn value_keeps_text_after_embedded_separator() {
        let block = "title: Rust: The Book\nworkspace: docs (7)\n";
        let windows = parse_clients(block).unwrap();
        assert_eq!(windows[0].title, "Rust: The Book");
    }

    #[test]
    fn duplicate_keys_last_write_wins() {
        let block = "title: first\ntitle: second\nworkspace: web (3)\n";
        let windows = parse_clients(block).unwrap();
        assert_eq!(windows[0].title, "second");
    }

    #[test]
    fn missing_recognized_keys_default_to_empty() {
        let block = "workspace: web (3)\n";
        let w = &parse_clients(block).unwrap()[0];
        assert_eq!(w.title, "");
        assert_eq!(w.id, "");
        assert_eq!(w.class, "");
        assert_eq!(w.monitor, "");
        assert_eq!(w.floating, "");
    }

    #[test]
    fn workspace_name_may_contain_spaces() {
        let w = &parse_clients("workspace: deep work (9)\n").unwrap()[0];
        assert_eq!(w.workspace_name, "deep work");
        assert_eq!(w.workspace, "9");
    }

    #[test]
    fn malformed_workspace_is_a_structured_error() {
        let err = parse_clients("title: kitty\nworkspace: Main\n").unwrap_err();
        assert_eq!(
            err,
            ClientParseError::MalformedWorkspace {
                value: "Main".into()
            }
        );
    }

    #[test]
    fn missing_workspace_is_a_structured_error() {
        let err = parse_clients("title: kitty\n").unwrap_err();
        assert_eq!(err, ClientParseError::MissingWorkspace);
    }

    #[test]
    fn malformed_record_fails_the_whole_parse() {
        let blob = format!("{}\ntitle: bad\nworkspace: Main\n", record("web (3)"));
        assert!(parse_clients(&blob).is_err());
    }

    //  Ordering

    fn window_on(workspace: &str, id: &str) -> Window {
        Window {
            title: String::new(),
            id: id.into(),
            class: String::new(),
            monitor: String::new(),
            floating: String::new(),
            workspace: workspace.into(),
            workspace_name: String::new(),
        }
    }

    #[test]
    fn sorts_by_ascending_workspace() {
        let mut windows = vec![
            window_on("3", "a"),
            window_on("1", "b"),
            window_on("1", "c"),
            window_on("2", "d"),
        ];
        sort_by_workspace(&mut windows);
        let order: Vec<&str> = windows.iter().map(|w| w.workspace.as_str()).collect();
        assert_eq!(order, ["1", "1", "2", "3"]);
        // Stable: the two workspace-1 entries keep their input order.
        assert_eq!(windows[0].id, "b");
        assert_eq!(windows[1].id, "c");
    }

    #[test]
    fn unparseable_workspace_sorts_as_zero() {
        let mut windows = vec![
            window_on("2", "a"),
            window_on("not-a-number", "b"),
            window_on("1", "c"),
        ];
        sort_by_workspace(&mut windows);
        assert_eq!(windows[0].id, "b");
        assert_eq!(windows[1].id, "c");
        assert_eq!(windows[2].id, "a");
    }

    #[test]
    fn negative_workspaces_sort_first() {
        let mut windows = vec![window_on("1", "a"), window_on("-99", "b")];
        sort_by_workspace(&mut windows);
        assert_eq!(windows[0].id, "b");
    }
}
