/*!
 * Symbol Demangling
 *
 * Decodes legacy Rust symbol names (`_ZN...E`) into readable paths. Any
 * name that is not in that form, or fails to parse, comes back unchanged.
 */

use std::borrow::Cow;
use tracing::trace;

/// Convert a mangled symbol name into a readable path
///
/// ```
/// use bubbles::demangle;
///
/// assert_eq!(
///     demangle("_ZN4core3ptr13drop_in_place17h2b1f8c9d0e3a4b5cE"),
///     "core::ptr::drop_in_place"
/// );
/// assert_eq!(demangle("main"), "main");
/// ```
pub fn demangle(raw: &str) -> Cow<'_, str> {
    match demangle_legacy(raw) {
        Some(readable) => Cow::Owned(readable),
        None => {
            trace!(symbol = raw, "symbol left mangled");
            Cow::Borrowed(raw)
        }
    }
}

/// Readable name of the type `T`
#[inline]
pub fn demangled_type<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
}

/// Readable name of the static type of `value`
#[inline]
pub fn demangled_type_of<T: ?Sized>(_value: &T) -> &'static str {
    std::any::type_name::<T>()
}

fn demangle_legacy(raw: &str) -> Option<String> {
    let mut rest = raw
        .strip_prefix("_ZN")
        .or_else(|| raw.strip_prefix("__ZN"))
        .or_else(|| raw.strip_prefix("ZN"))?;

    let mut parts = Vec::new();
    loop {
        if let Some(tail) = rest.strip_prefix('E') {
            if !tail.is_empty() {
                return None;
            }
            break;
        }

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let len: usize = rest[..digits].parse().ok()?;
        rest = &rest[digits..];

        let ident = rest.get(..len)?;
        rest = &rest[len..];
        parts.push(ident);
    }

    if parts.len() > 1 && parts.last().is_some_and(|p| is_hash(p)) {
        parts.pop();
    }
    if parts.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(raw.len());
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_str("::");
        }
        decode_ident(part, &mut out)?;
    }
    Some(out)
}

/// `h` followed by 16 hex digits
fn is_hash(part: &str) -> bool {
    part.len() == 17
        && part.starts_with('h')
        && part[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

fn decode_ident(ident: &str, out: &mut String) -> Option<()> {
    let mut rest = if ident.starts_with("_$") {
        &ident[1..]
    } else {
        ident
    };

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix('$') {
            let end = tail.find('$')?;
            out.push(decode_escape(&tail[..end])?);
            rest = &tail[end + 1..];
        } else if let Some(tail) = rest.strip_prefix("..") {
            out.push_str("::");
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix('.') {
            out.push('.');
            rest = tail;
        } else {
            let end = rest.find(|c: char| c == '$' || c == '.').unwrap_or(rest.len());
            out.push_str(&rest[..end]);
            rest = &rest[end..];
        }
    }
    Some(())
}

fn decode_escape(escape: &str) -> Option<char> {
    let ch = match escape {
        "SP" => '@',
        "BP" => '*',
        "RF" => '&',
        "LT" => '<',
        "GT" => '>',
        "LP" => '(',
        "RP" => ')',
        "C" => ',',
        _ => {
            let hex = escape.strip_prefix('u')?;
            char::from_u32(u32::from_str_radix(hex, 16).ok()?)?
        }
    };
    Some(ch)
}
