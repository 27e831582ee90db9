use super::ProcessEnvironment;

/// Expand `%NAME%` references against `env`.
///
/// Undefined names are left in place and the closing `%` may open the next
/// reference, so `%1 %2` survives untouched for placeholder substitution.
pub fn expand(input: &str, env: &ProcessEnvironment) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('%') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..end];
        match env.get(name).filter(|_| !name.is_empty()) {
            Some(value) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('%');
                out.push_str(name);
                rest = &after[end..];
            }
        }
    }

    out.push_str(rest);
    out
}
