//! Helpers for locating operators within a span of the expression text.
//! Bracketed blocks, both `(…)` and `[…]`, are treated as indivisible.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Span {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn text<'i>(&self, original: &'i str) -> &'i str {
        &original[self.start..self.end]
    }
}

fn is_open(b: u8) -> bool {
    b == b'(' || b == b'['
}

fn is_close(b: u8) -> bool {
    b == b')' || b == b']'
}

pub fn strip_spaces(text: &str, span: Span) -> Span {
    let bytes = text.as_bytes();
    let mut start = span.start;
    let mut end = span.end;

    while start < end && bytes[start].is_ascii_whitespace() {
        start += 1;
    }
    while end > start && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }

    Span::new(start, end)
}

/// Parentheses within the span never close more than have been opened, and
/// all are closed by the end.
pub fn parentheses_balanced(text: &str, span: Span) -> bool {
    let mut depth: i64 = 0;

    for &b in &text.as_bytes()[span.start..span.end] {
        if b == b'(' {
            depth += 1;
        } else if b == b')' {
            depth -= 1;
        }
        if depth < 0 {
            return false;
        }
    }

    depth == 0
}

/// Remove surrounding whitespace and any number of enclosing parentheses,
/// so `((x+3)*y)` becomes `(x+3)*y`. Parentheses that do not enclose the
/// whole span, as in `(x+3)*(y)`, are left alone.
pub fn strip_parentheses(text: &str, span: Span) -> Span {
    let bytes = text.as_bytes();
    let mut span = strip_spaces(text, span);

    while span.len() > 1
        && bytes[span.start] == b'('
        && bytes[span.end - 1] == b')'
        && parentheses_balanced(text, Span::new(span.start + 1, span.end - 1))
    {
        span = strip_spaces(text, Span::new(span.start + 1, span.end - 1));
    }

    span
}

/// Offset of the bracket closing the block opened at `open`, if it is closed
/// before the end of the span.
pub fn closing_bracket(text: &str, span: Span, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;

    for i in open..span.end {
        let b = bytes[i];
        if is_open(b) {
            depth += 1;
        } else if is_close(b) {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(i);
            }
        }
    }

    None
}

/// Find the first occurrence of `operator` that is not inside a bracketed
/// block. Returns the absolute offset. Running into a block that is never
/// closed means there is no usable operator.
pub fn find_first_operator(text: &str, span: Span, operator: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let pattern = operator.as_bytes();
    let mut depth = 0usize;
    let mut i = span.start;

    while i + pattern.len() <= span.end {
        let b = bytes[i];
        if depth == 0 && &bytes[i..i + pattern.len()] == pattern {
            return Some(i);
        }
        if is_open(b) {
            depth += 1;
        } else if is_close(b) {
            depth = depth.saturating_sub(1);
        }
        i += 1;
    }

    // an operator may still have been shadowed by an unclosed block; either
    // way there is nothing to report
    None
}

/// Find the last occurrence of `operator` outside any bracketed block,
/// scanning leftwards. The first position of the span is never reported,
/// since an operator there has no left operand.
pub fn find_last_operator(text: &str, span: Span, operator: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let pattern = operator.as_bytes();

    if pattern.len() > span.len() {
        return None;
    }

    let mut depth = 0usize;
    let mut i = span.end;

    while i > span.start + 1 {
        i -= 1;
        let b = bytes[i];
        if is_close(b) {
            depth += 1;
            continue;
        }
        if is_open(b) {
            if depth == 0 {
                // opened but never closed within this span
                return None;
            }
            depth -= 1;
            continue;
        }
        if depth == 0 && i + pattern.len() <= span.end && &bytes[i..i + pattern.len()] == pattern {
            return Some(i);
        }
    }

    None
}

/// Decide whether the `+` or `-` at `operator` (with its operand starting at
/// `argument`) is the sign of the exponent in a number like `1.5e-10` rather
/// than an arithmetic operator. This relies on names never starting with a
/// digit.
pub fn is_exponent_sign(text: &str, span: Span, operator: usize, argument: usize) -> bool {
    let bytes = text.as_bytes();
    let offset = operator - span.start;

    if offset < 2 || argument >= span.end {
        return false;
    }
    if !bytes[argument].is_ascii_digit() {
        return false;
    }
    if !bytes[operator - 1].eq_ignore_ascii_case(&b'e') {
        return false;
    }

    bytes[operator - 2].is_ascii_digit()
        || (offset >= 3 && bytes[operator - 2] == b'.' && bytes[operator - 3].is_ascii_digit())
}
