/// Split `input` on `sep`, keeping only non-empty tokens.
///
/// Runs of the separator and leading or trailing separators never
/// produce tokens: `",a,,b,"` yields `["a", "b"]`.
pub fn split_tokens(input: &str, sep: char) -> Vec<&str> {
    input.split(sep).filter(|token| !token.is_empty()).collect()
}
