//! The line protocol shared by server and client.
//!
//! Request: `get <prefix>`. Response: a count line followed by exactly that
//! many result lines (the sentinel entry prints as one blank line). Any
//! request that does not parse, or whose prefix contains a non-alphabetic
//! character, gets the single [`BAD_REQUEST`] marker line instead. The
//! protocol is stateless per request; a connection carries many requests
//! sequentially.

use prompt::Dictionary;

/// Marker line sent in place of a response for malformed requests.
pub const BAD_REQUEST: &str = "%%bad_request%%";

/// Extracts the prefix from a request line. `None` for anything that is not
/// `get <prefix>` with a purely alphabetic (possibly empty) prefix.
pub fn parse_request(line: &str) -> Option<&str> {
    let prefix = line.strip_prefix("get ")?;
    prefix
        .chars()
        .all(|c| c.is_alphabetic())
        .then_some(prefix)
}

/// Produces the full response text (trailing newlines included) for one
/// request line.
pub fn respond(dictionary: &Dictionary, line: &str) -> String {
    let Some(prefix) = parse_request(line) else {
        return format!("{BAD_REQUEST}\n");
    };
    let selection = dictionary.selection(prefix);
    let mut response = format!("{}\n", selection.len());
    for word in &selection {
        response.push_str(word);
        response.push('\n');
    }
    response
}
