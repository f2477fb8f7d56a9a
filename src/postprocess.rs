use std::sync::LazyLock;

use regex::Regex;

pub const PRIMARY_STRESS: char = 'ˈ';
pub const SECONDARY_STRESS: char = 'ˌ';
pub const SYLLABLE_BOUNDARY: char = '.';

static OPTIONAL_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^()]*\)").expect("optional span pattern is valid"));

fn is_prosodic_mark(c: char) -> bool {
    matches!(c, PRIMARY_STRESS | SECONDARY_STRESS | SYLLABLE_BOUNDARY)
}

/// Render a stored transcription according to the retention flags.
///
/// Stress marks and syllable boundaries are deleted unless
/// `keep_stress_marks` is set. Optional phones written as `(x)` keep their
/// content (without the parentheses) when `keep_optional_phones` is set and
/// are dropped whole otherwise.
pub fn post_process(phonemes: &str, keep_stress_marks: bool, keep_optional_phones: bool) -> String {
    let mut out: String = if keep_stress_marks {
        phonemes.to_string()
    } else {
        phonemes.chars().filter(|&c| !is_prosodic_mark(c)).collect()
    };

    if !keep_optional_phones {
        // Innermost spans first so nested parentheses collapse completely.
        while OPTIONAL_SPAN.is_match(&out) {
            out = OPTIONAL_SPAN.replace_all(&out, "").into_owned();
        }
    }
    out.retain(|c| c != '(' && c != ')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_phones() {
        assert_eq!(post_process("a(b)c", false, true), "abc");
        assert_eq!(post_process("a(b)c", false, false), "ac");
        assert_eq!(post_process("(j)a(w)", false, false), "a");
        assert_eq!(post_process("a((b)c)d", false, false), "ad");
    }

    #[test]
    fn test_stress_marks() {
        assert_eq!(post_process("ˈs̺ɔs̺", false, true), "s̺ɔs̺");
        assert_eq!(post_process("ˈs̺ɔs̺", true, true), "ˈs̺ɔs̺");
        assert_eq!(post_process("ˌka.ˈza", false, true), "kaza");
        assert_eq!(post_process("ˌka.ˈza", true, true), "ˌka.ˈza");
    }

    #[test]
    fn test_flags_commute() {
        let stored = "ˈfwo.ɣ(u)";
        assert_eq!(post_process(stored, false, false), "fwoɣ");
        assert_eq!(post_process(stored, true, false), "ˈfwo.ɣ");
        assert_eq!(post_process(stored, true, true), "ˈfwo.ɣu");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["ˈa(b)c", "a)(b", "((x))y", "", "plain"];
        for input in inputs {
            for keep_stress in [false, true] {
                for keep_optional in [false, true] {
                    let once = post_process(input, keep_stress, keep_optional);
                    let twice = post_process(&once, keep_stress, keep_optional);
                    assert_eq!(once, twice, "{input:?} {keep_stress} {keep_optional}");
                }
            }
        }
    }

    #[test]
    fn test_unbalanced_parentheses_are_dropped() {
        assert_eq!(post_process("a)(b", false, false), "ab");
        assert_eq!(post_process("a(b", false, true), "ab");
    }
}
