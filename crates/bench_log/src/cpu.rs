// Cleanup of CPU model names for chart titles and file names.
//
// `Intel(R) Core(TM) i7-13700K CPU @ 3.40GHz` becomes `Core i7-13700K @ 3.40GHz`,
// or `Core_i7-13700K_@_3.40GHz` in file names.

use std::sync::LazyLock;

use regex::Regex;

/// Raw model name used when a cpuinfo dump has no `model name` line.
pub const UNKNOWN_CPU_MODEL: &str = "Unknown CPU Model";

const MODEL_NAME_KEY: &str = "model name";

static MARKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((?:R|TM)\)|model name").expect("marks pattern"));

// vendor and marketing words, generation markers like `13th`
static WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:AMD|Intel|Threadripper|Processor|CPU|Gen|\d+(?:st|nd|rd|th))\b")
        .expect("words pattern")
});

static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("spaces pattern"));

/// Strips vendor tokens, symbols and non-printable characters from a raw
/// model name and normalizes the spacing.
///
/// Non-ASCII characters are deleted in place. Removed words are replaced by a
/// space and the cleanup is repeated until nothing changes, so sanitizing an
/// already sanitized name is a no-op.
pub fn sanitize_cpu_model(raw: &str) -> String {
    let mut current = cleanup_pass(raw);
    loop {
        let next = cleanup_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn cleanup_pass(name: &str) -> String {
    // colons and whitespace separate words, anything else unprintable is dropped
    let printable: String = name
        .chars()
        .filter_map(|c| match c {
            ':' => Some(' '),
            c if c.is_ascii_whitespace() => Some(' '),
            c if c.is_ascii_graphic() => Some(c),
            _ => None,
        })
        .collect();

    let unmarked = MARKS.replace_all(&printable, " ");
    let stripped = WORDS.replace_all(&unmarked, " ");

    SPACES.replace_all(stripped.trim(), " ").into_owned()
}

/// The sanitized name with spaces turned into underscores.
pub fn filename_safe(sanitized: &str) -> String {
    sanitized.replace(' ', "_")
}

/// Value of the first `model name` line of a `/proc/cpuinfo` style dump.
pub fn raw_cpu_model_from_cpuinfo(cpuinfo: &str) -> String {
    cpuinfo
        .lines()
        .find(|line| line.contains(MODEL_NAME_KEY))
        .and_then(|line| line.split_once(':'))
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_else(|| UNKNOWN_CPU_MODEL.to_string())
}
