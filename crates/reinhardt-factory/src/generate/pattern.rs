//! Generation of strings matching character-class patterns.
//!
//! Supports a single bracketed class with a quantifier, optionally anchored:
//! `^[-a-zA-Z0-9_]+\z`, `[a-f0-9]{8}`, `^[A-Z]{2,4}$`. Anything else is
//! rejected with [`FactoryError::UnsupportedPattern`].

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{FactoryError, FactoryResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClassPattern {
	source: String,
	alphabet: Vec<char>,
	min: usize,
	max: Option<usize>,
}

impl CharClassPattern {
	/// Parses `pattern`, which must also be a valid regular expression.
	pub fn parse(pattern: &str) -> FactoryResult<Self> {
		regex::Regex::new(pattern)?;
		let unsupported = || FactoryError::UnsupportedPattern(pattern.to_string());

		let body = pattern.strip_prefix('^').unwrap_or(pattern);
		let body = body
			.strip_suffix(r"\z")
			.or_else(|| body.strip_suffix('$'))
			.unwrap_or(body);

		let class = body.strip_prefix('[').ok_or_else(unsupported)?;
		if class.starts_with('^') {
			return Err(unsupported());
		}
		let (alphabet, rest) = parse_class(class).ok_or_else(unsupported)?;
		let (min, max) = parse_quantifier(rest).ok_or_else(unsupported)?;
		if alphabet.is_empty() || max.is_some_and(|max| max < min) {
			return Err(unsupported());
		}

		Ok(Self {
			source: pattern.to_string(),
			alphabet,
			min,
			max,
		})
	}

	/// Generates a matching string no longer than `max_len` characters.
	pub fn generate(&self, rng: &mut StdRng, max_len: usize) -> FactoryResult<String> {
		let upper = self.max.map_or(max_len, |max| max.min(max_len));
		if upper < self.min {
			return Err(FactoryError::UnsupportedPattern(format!(
				"{} cannot fit in {} characters",
				self.source, max_len
			)));
		}

		let len = rng.gen_range(self.min..=upper);
		Ok((0..len)
			.map(|_| self.alphabet[rng.gen_range(0..self.alphabet.len())])
			.collect())
	}
}

// Returns the class members and the text after the closing bracket.
fn parse_class(class: &str) -> Option<(Vec<char>, &str)> {
	let mut members = Vec::new();
	let mut chars = class.char_indices().peekable();

	while let Some((index, c)) = chars.next() {
		let start = match c {
			']' => return Some((members, &class[index + 1..])),
			'\\' => chars.next()?.1,
			other => other,
		};

		let is_range = matches!(chars.peek(), Some((_, '-')))
			&& class[index..].chars().nth(2).is_some_and(|next| next != ']');
		if is_range {
			chars.next();
			let (_, end) = chars.next()?;
			if end < start {
				return None;
			}
			members.extend(start..=end);
		} else {
			members.push(start);
		}
	}
	None
}

fn parse_quantifier(quantifier: &str) -> Option<(usize, Option<usize>)> {
	match quantifier {
		"+" => Some((1, None)),
		"*" => Some((0, None)),
		"" => Some((1, Some(1))),
		_ => {
			let inner = quantifier.strip_prefix('{')?.strip_suffix('}')?;
			match inner.split_once(',') {
				None => {
					let count = inner.trim().parse().ok()?;
					Some((count, Some(count)))
				}
				Some((min, "")) => Some((min.trim().parse().ok()?, None)),
				Some((min, max)) => Some((min.trim().parse().ok()?, Some(max.trim().parse().ok()?))),
			}
		}
	}
}
