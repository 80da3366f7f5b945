//! String predicates and argument classification for log analysis.

use syn::Expr;

/// Reports whether the string starts with an uppercase letter.
pub(crate) fn starts_with_uppercase(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return false;
    };
    first.is_alphabetic() && first.is_uppercase()
}

/// Lowercases only the first character, leaving the rest unchanged.
pub(crate) fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reports whether the string contains only ASCII letters.
///
/// Digits, punctuation, and whitespace never trip this check; only
/// letters beyond the ASCII range do (so "café" fails).
pub(crate) fn is_english_only(s: &str) -> bool {
    !s.chars().any(|c| c.is_alphabetic() && !c.is_ascii())
}

/// Letters, digits, whitespace, and '%' (format placeholders) are allowed.
fn is_allowed_char(c: char) -> bool {
    c.is_alphabetic() || c.is_numeric() || c.is_whitespace() || c == '%'
}

/// Reports whether the string contains characters outside the allow-list.
pub(crate) fn has_special_chars(s: &str) -> bool {
    s.chars().any(|c| !is_allowed_char(c))
}

/// Removes every disallowed character, preserving the rest in order.
pub(crate) fn strip_special_chars(s: &str) -> String {
    s.chars().filter(|&c| is_allowed_char(c)).collect()
}

/// The argument shapes the sensitive-data scan distinguishes.
///
/// A closed union: plain identifiers are testable, binary expressions
/// are recursed into (covers `"label: " + secret` concatenation), and
/// everything else is inert: no data-flow tracing through calls,
/// fields, or literals.
pub(crate) enum ArgShape<'a> {
    /// A plain identifier (single-segment path).
    Ident(&'a syn::Ident),
    /// A binary expression; both operands are scanned independently.
    Concat(&'a Expr, &'a Expr),
    /// Anything else never matches.
    Other,
}

/// Classifies an argument expression for the sensitive-data scan.
///
/// Parentheses, groups, and references are syntactically transparent:
/// Rust concatenation spells `"a" + &var`, and the `&` should not hide
/// the identifier.
pub(crate) fn classify_arg(expr: &Expr) -> ArgShape<'_> {
    match expr {
        Expr::Path(path) if path.qself.is_none() => match path.path.get_ident() {
            Some(ident) => ArgShape::Ident(ident),
            None => ArgShape::Other,
        },
        Expr::Binary(bin) => ArgShape::Concat(&bin.left, &bin.right),
        Expr::Paren(inner) => classify_arg(&inner.expr),
        Expr::Group(inner) => classify_arg(&inner.expr),
        Expr::Reference(inner) => classify_arg(&inner.expr),
        _ => ArgShape::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_uppercase_cases() {
        assert!(starts_with_uppercase("Upper"));
        assert!(!starts_with_uppercase("lower"));
        assert!(!starts_with_uppercase("123abc"));
        assert!(!starts_with_uppercase("!hello"));
        assert!(starts_with_uppercase("Привет"));
        assert!(!starts_with_uppercase("привет"));
        assert!(starts_with_uppercase("A"));
        assert!(!starts_with_uppercase("a"));
        assert!(!starts_with_uppercase(""));
        assert!(starts_with_uppercase("École"));
    }

    #[test]
    fn lowercase_first_keeps_remainder() {
        assert_eq!(lowercase_first("Hello World"), "hello World");
        assert_eq!(lowercase_first("École"), "école");
        assert_eq!(lowercase_first("Привет"), "привет");
        assert_eq!(lowercase_first("a"), "a");
        assert_eq!(lowercase_first(""), "");
    }

    #[test]
    fn is_english_only_cases() {
        assert!(is_english_only("HelloWorld"));
        assert!(!is_english_only("HelloПривет"));
        assert!(!is_english_only("Hello世界"));
        assert!(is_english_only("Hello123"));
        assert!(is_english_only("Hello!"));
        assert!(is_english_only(""));
        assert!(is_english_only("   "));
        assert!(!is_english_only("café"));
    }

    #[test]
    fn has_special_chars_cases() {
        assert!(!has_special_chars("HelloWorld"));
        assert!(!has_special_chars("12345"));
        assert!(!has_special_chars("   "));
        assert!(!has_special_chars("Hello %s"));
        assert!(has_special_chars("Hello!"));
        assert!(has_special_chars("Hello?"));
        assert!(has_special_chars("Hello."));
        assert!(has_special_chars("Hello, world"));
        assert!(has_special_chars("hello-world"));
        assert!(has_special_chars("hello_world"));
        assert!(has_special_chars("hello/world"));
        assert!(!has_special_chars("Hello 123 %"));
        assert!(!has_special_chars(""));
        assert!(!has_special_chars("Привет"));
    }

    #[test]
    fn strip_special_chars_preserves_order() {
        assert_eq!(strip_special_chars("hello world!"), "hello world");
        assert_eq!(
            strip_special_chars("warning: something went wrong..."),
            "warning something went wrong"
        );
        assert_eq!(strip_special_chars("%d items (of %d)"), "%d items of %d");
        assert_eq!(strip_special_chars("server started!🚀"), "server started");
    }

    fn parse_expr(code: &str) -> Expr {
        syn::parse_str(code).expect("Failed to parse expression")
    }

    #[test]
    fn classify_plain_identifier() {
        let expr = parse_expr("password");
        assert!(matches!(classify_arg(&expr), ArgShape::Ident(i) if *i == "password"));
    }

    #[test]
    fn classify_binary_as_concat() {
        let expr = parse_expr("\"label: \" + secret");
        assert!(matches!(classify_arg(&expr), ArgShape::Concat(_, _)));
    }

    #[test]
    fn classify_looks_through_reference_and_parens() {
        let expr = parse_expr("&token");
        assert!(matches!(classify_arg(&expr), ArgShape::Ident(i) if *i == "token"));

        let expr = parse_expr("((api_key))");
        assert!(matches!(classify_arg(&expr), ArgShape::Ident(i) if *i == "api_key"));
    }

    #[test]
    fn classify_inert_shapes() {
        assert!(matches!(classify_arg(&parse_expr("\"literal\"")), ArgShape::Other));
        assert!(matches!(classify_arg(&parse_expr("get_password()")), ArgShape::Other));
        assert!(matches!(classify_arg(&parse_expr("user.password")), ArgShape::Other));
        assert!(matches!(classify_arg(&parse_expr("auth::password")), ArgShape::Other));
    }
}
