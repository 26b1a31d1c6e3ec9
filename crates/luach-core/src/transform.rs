//! `translate()` arithmetic for the reposition controls.
//!
//! Moves are relative: each nudge reads the element's current inline
//! transform, extracts any `translate(x, y)` component, adjusts one axis,
//! then rebuilds the transform with the old component stripped and the
//! recomputed one appended. Other components (`scale`, `rotate`, …) ride
//! along untouched.

/// Arrow-pad direction. Up/down affect Y, left/right affect X.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Default nudge distance in pixels.
pub const MOVE_STEP: i32 = 10;

/// Leading-integer parse with `parseInt` semantics: skip whitespace, accept
/// an optional sign, read the decimal digit prefix. Anything unparsable is 0.
fn parse_component(raw: &str) -> i32 {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let digits: &str = &rest[..rest
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit())
        .count()];
    let value: i32 = digits.parse().unwrap_or(0);
    if negative { -value } else { value }
}

/// Extract the first `translate(x, y)` component's offsets.
///
/// A missing component, a single-argument `translate(x)`, or unparsable
/// offsets all fall back to zero rather than failing.
pub fn parse_translate(transform: &str) -> (i32, i32) {
    let Some(start) = transform.find("translate(") else {
        return (0, 0);
    };
    let args = &transform[start + "translate(".len()..];
    let Some(end) = args.find(')') else {
        return (0, 0);
    };
    match args[..end].split_once(',') {
        Some((x, y)) => (parse_component(x), parse_component(y)),
        None => (0, 0),
    }
}

/// Remove the first `translate(…)` component, leaving the rest of the
/// transform string as-is.
pub fn strip_translate(transform: &str) -> String {
    let Some(start) = transform.find("translate(") else {
        return transform.to_string();
    };
    match transform[start..].find(')') {
        Some(end) => {
            let mut out = String::with_capacity(transform.len());
            out.push_str(&transform[..start]);
            out.push_str(&transform[start + end + 1..]);
            out
        }
        None => transform.to_string(),
    }
}

/// Recompute the inline transform for a nudge in `direction` by `amount`
/// pixels. Repeated calls are cumulative.
pub fn nudge(current: &str, direction: MoveDirection, amount: i32) -> String {
    let (mut x, mut y) = parse_translate(current);
    match direction {
        MoveDirection::Up => y -= amount,
        MoveDirection::Down => y += amount,
        MoveDirection::Left => x -= amount,
        MoveDirection::Right => x += amount,
    }
    let stripped = strip_translate(current);
    format!("{stripped} translate({x}px, {y}px)")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_component_has_parse_int_semantics() {
        assert_eq!(parse_component("10px"), 10);
        assert_eq!(parse_component("  -25px"), -25);
        assert_eq!(parse_component("12.7px"), 12);
        assert_eq!(parse_component("abc"), 0);
        assert_eq!(parse_component(""), 0);
    }

    #[test]
    fn test_parse_translate_defaults_to_zero() {
        assert_eq!(parse_translate(""), (0, 0));
        assert_eq!(parse_translate("none"), (0, 0));
        assert_eq!(parse_translate("translate(bogus, values)"), (0, 0));
        assert_eq!(parse_translate("translate(5px)"), (0, 0));
        assert_eq!(parse_translate("translate(10px, -20px)"), (10, -20));
    }

    #[test]
    fn test_parse_translate_ignores_axis_variants() {
        // translateX is not a translate(x, y) component
        assert_eq!(parse_translate("translateX(30px)"), (0, 0));
    }

    #[test]
    fn test_nudge_is_cumulative() {
        let first = nudge("", MoveDirection::Right, 10);
        assert_eq!(first, "translate(10px, 0px)");

        let second = nudge(&first, MoveDirection::Right, 10);
        assert_eq!(second, "translate(20px, 0px)");

        let third = nudge(&second, MoveDirection::Up, 5);
        assert_eq!(third, "translate(20px, -5px)");
    }

    #[test]
    fn test_nudge_affects_one_axis() {
        assert_eq!(nudge("", MoveDirection::Up, 5), "translate(0px, -5px)");
        assert_eq!(nudge("", MoveDirection::Down, 5), "translate(0px, 5px)");
        assert_eq!(nudge("", MoveDirection::Left, 5), "translate(-5px, 0px)");
    }

    #[test]
    fn test_nudge_preserves_other_components() {
        let moved = nudge("scale(2) translate(10px, 0px)", MoveDirection::Right, 10);
        assert!(moved.starts_with("scale(2)"));
        assert!(moved.ends_with("translate(20px, 0px)"));
    }
}
