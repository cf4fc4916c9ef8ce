//! Shared editing primitives for the content panels.
//!
//! Every list edit is index based. An index past the end is a no-op that
//! returns `false`, so a stale UI event can never corrupt the content.

use crate::coerce::{count_or_zero, percent_or_zero, price_or_zero};

/// A structured list entry that can be edited one field at a time from raw
/// text input.
pub trait RowEdit {
    /// Selector for the editable fields of the row.
    type Field: Copy;

    /// Write `raw` into `field`, coercing numbers.
    fn set_field(&mut self, field: Self::Field, raw: &str);
}

/// Append a default row.
pub fn push_row<R: Default>(rows: &mut Vec<R>) -> usize {
    rows.push(R::default());
    rows.len() - 1
}

/// Remove the row at `index`.
pub fn remove_at<T>(rows: &mut Vec<T>, index: usize) -> bool {
    if index < rows.len() {
        rows.remove(index);
        true
    } else {
        false
    }
}

/// Edit one field of the row at `index`.
pub fn update_row<R: RowEdit>(rows: &mut [R], index: usize, field: R::Field, raw: &str) -> bool {
    match rows.get_mut(index) {
        Some(row) => {
            row.set_field(field, raw);
            true
        }
        None => false,
    }
}

/// Append a trimmed text entry. Blank input is ignored.
pub fn push_text(list: &mut Vec<String>, raw: &str) -> bool {
    let value = raw.trim();
    if value.is_empty() {
        return false;
    }
    list.push(value.to_string());
    true
}

/// Replace the text entry at `index`. Blank input is ignored.
pub fn replace_text(list: &mut [String], index: usize, raw: &str) -> bool {
    let value = raw.trim();
    match list.get_mut(index) {
        Some(entry) if !value.is_empty() => {
            *entry = value.to_string();
            true
        }
        _ => false,
    }
}

pub(crate) fn text(raw: &str) -> String {
    raw.to_string()
}

pub(crate) fn price(raw: &str) -> f64 {
    price_or_zero(raw)
}

pub(crate) fn count(raw: &str) -> u32 {
    count_or_zero(raw)
}

pub(crate) fn percent(raw: &str) -> u8 {
    percent_or_zero(raw)
}

pub(crate) fn flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "true" | "1" | "si" | "sí" | "yes" | "on"
    )
}

/// Generate a field selector enum and its [`RowEdit`] impl.
///
/// Each entry names the selector variant, the struct field, and the
/// coercion applied to raw input (`text`, `price`, `count`, `percent` or
/// `flag`).
macro_rules! editable_row {
    ($row:ident, $field:ident { $($variant:ident => $name:ident : $kind:ident),+ $(,)? }) => {
        #[doc = concat!("Editable fields of [`", stringify!($row), "`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $field {
            $($variant),+
        }

        impl $crate::services::panel::RowEdit for $row {
            type Field = $field;

            fn set_field(&mut self, field: $field, raw: &str) {
                match field {
                    $($field::$variant => self.$name = $crate::services::panel::$kind(raw)),+
                }
            }
        }
    };
}
