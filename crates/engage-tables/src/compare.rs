//! Locale-style natural string comparison
//!
//! [`natural_cmp`] mirrors what browsers produce for
//! `a.localeCompare(b, undefined, { numeric: true, sensitivity: "base" })`
//! on the cell values this crate deals with:
//!
//! - runs of ASCII digits are compared by numeric value (`"9" < "10"`),
//! - letters are compared on their base form, so case and accents are ignored
//!   (`"a" == "A" == "á"`); letters with no decomposition fold to their base
//!   spelling (`"ø" == "o"`, `"ß" == "ss"`, `"æ" == "ae"`),
//! - characters are ordered by primary class first: whitespace, then
//!   punctuation and symbols, then digits, then letters.
//!
//! Strings that are equal at this level compare as [`Ordering::Equal`];
//! callers relying on a deterministic order for ties must use a stable sort.

use std::cmp::Ordering;
use std::iter::Peekable;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compares two cell values with numeric, case- and accent-insensitive collation.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use engage_tables::natural_cmp;
///
/// assert_eq!(natural_cmp("9", "10"), Ordering::Less);
/// assert_eq!(natural_cmp("apple", "Apple"), Ordering::Equal);
/// assert_eq!(natural_cmp("résumé", "resume"), Ordering::Equal);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
	let left = fold(a);
	let right = fold(b);
	let mut left = left.chars().peekable();
	let mut right = right.chars().peekable();

	loop {
		let (l, r) = match (left.peek().copied(), right.peek().copied()) {
			(None, None) => return Ordering::Equal,
			(None, Some(_)) => return Ordering::Less,
			(Some(_), None) => return Ordering::Greater,
			(Some(l), Some(r)) => (l, r),
		};

		let ordering = if l.is_ascii_digit() && r.is_ascii_digit() {
			compare_numbers(&take_digits(&mut left), &take_digits(&mut right))
		} else {
			left.next();
			right.next();
			primary_weight(l).cmp(&primary_weight(r))
		};

		if ordering != Ordering::Equal {
			return ordering;
		}
	}
}

/// Reduces a string to its base letters: compatibility decomposition with
/// combining marks dropped, lowercased, then letters without a decomposition
/// spelled out in their base form.
fn fold(value: &str) -> String {
	let mut folded = String::with_capacity(value.len());
	let letters = value
		.nfkd()
		.filter(|c| !is_combining_mark(*c))
		.flat_map(char::to_lowercase);
	for c in letters {
		match base_spelling(c) {
			Some(base) => folded.push_str(base),
			None => folded.push(c),
		}
	}
	folded
}

/// Primary-level equivalents of Latin letters that NFKD leaves intact.
fn base_spelling(c: char) -> Option<&'static str> {
	let base = match c {
		'æ' => "ae",
		'œ' => "oe",
		'ß' => "ss",
		'ø' => "o",
		'ł' => "l",
		'đ' | 'ð' => "d",
		_ => return None,
	};
	Some(base)
}

fn primary_weight(c: char) -> (u8, char) {
	let class = if c.is_whitespace() {
		0
	} else if c.is_ascii_digit() {
		2
	} else if c.is_alphanumeric() {
		3
	} else {
		1
	};
	(class, c)
}

fn take_digits<I>(chars: &mut Peekable<I>) -> String
where
	I: Iterator<Item = char>,
{
	let mut digits = String::new();
	while let Some(c) = chars.next_if(char::is_ascii_digit) {
		digits.push(c);
	}
	digits
}

/// Compares two digit runs by value without parsing, so runs of any length work.
fn compare_numbers(a: &str, b: &str) -> Ordering {
	let a = a.trim_start_matches('0');
	let b = b.trim_start_matches('0');
	a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("2", "10", Ordering::Less)]
	#[case("10", "9", Ordering::Greater)]
	#[case("007", "7", Ordering::Equal)]
	#[case("item 2", "item 10", Ordering::Less)]
	#[case("v1.10", "v1.9", Ordering::Greater)]
	#[case("99999999999999999999999", "100000000000000000000000", Ordering::Less)]
	fn test_numeric_runs(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
		assert_eq!(natural_cmp(a, b), expected);
	}

	#[rstest]
	#[case("a", "A")]
	#[case("a", "á")]
	#[case("Zoë", "zoe")]
	#[case("ÉCOLE", "ecole")]
	#[case("ß", "ss")]
	#[case("Weiß", "WEISS")]
	#[case("æ", "ae")]
	#[case("Ægir", "aegir")]
	#[case("Œuvre", "oeuvre")]
	#[case("Øystein", "oystein")]
	#[case("Łukasz", "lukasz")]
	#[case("Đorđe", "dorde")]
	#[case("ﬁle", "file")]
	fn test_base_sensitivity_ignores_case_and_accents(#[case] a: &str, #[case] b: &str) {
		assert_eq!(natural_cmp(a, b), Ordering::Equal);
	}

	#[rstest]
	fn test_prefix_sorts_first() {
		assert_eq!(natural_cmp("Ann", "Anna"), Ordering::Less);
		assert_eq!(natural_cmp("", "a"), Ordering::Less);
		assert_eq!(natural_cmp("", ""), Ordering::Equal);
	}

	#[rstest]
	#[case(" a", "a")]
	#[case("-", "1")]
	#[case("9", "a")]
	#[case("O'Brien", "Obama")]
	fn test_primary_class_order(#[case] lower: &str, #[case] higher: &str) {
		assert_eq!(natural_cmp(lower, higher), Ordering::Less);
		assert_eq!(natural_cmp(higher, lower), Ordering::Greater);
	}

	#[rstest]
	fn test_letters_compare_alphabetically() {
		assert_eq!(natural_cmp("banana", "Apple"), Ordering::Greater);
		assert_eq!(natural_cmp("Apple", "cherry"), Ordering::Less);
	}
}
