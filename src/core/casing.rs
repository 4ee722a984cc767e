//! Core-word normalization.

/// Lowercase the whole word, then uppercase its first character.
///
/// Applied once to the full prefix+middle+suffix concatenation, never per
/// fragment: `"AerADadan"` becomes `"Aeradadan"`, not `"AerAdAdan"`.
pub fn capitalize_core(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(lower.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
