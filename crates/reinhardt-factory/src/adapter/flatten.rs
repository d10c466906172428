//! Choice flattening.

use crate::schema::{Choice, ChoiceDeclaration};
use crate::value::FieldValue;

/// Lazily flattens a choice declaration into its raw values.
///
/// Pairs yield their value (never the label), groups yield their nested
/// values in place, and bare values are yielded unchanged. Order and
/// duplicates are preserved.
///
/// # Examples
///
/// ```
/// use reinhardt_factory::adapter::flatten_choices;
/// use reinhardt_factory::schema::{Choice, ChoiceDeclaration};
/// use reinhardt_factory::value::FieldValue;
///
/// let declaration = ChoiceDeclaration::Sequence(vec![
///     Choice::group("Audio", [Choice::pair("vinyl", "Vinyl"), Choice::pair("cd", "CD")]),
///     Choice::pair("unknown", "Unknown"),
/// ]);
/// let values: Vec<FieldValue> = flatten_choices(&declaration).collect();
/// assert_eq!(values, vec!["vinyl".into(), "cd".into(), "unknown".into()]);
/// ```
pub fn flatten_choices(declaration: &ChoiceDeclaration) -> FlattenChoices {
	FlattenChoices {
		stack: vec![declaration.normalize().into_iter()],
	}
}

/// Iterator returned by [`flatten_choices`].
#[derive(Debug)]
pub struct FlattenChoices {
	stack: Vec<std::vec::IntoIter<Choice>>,
}

impl Iterator for FlattenChoices {
	type Item = FieldValue;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let level = self.stack.last_mut()?;
			match level.next() {
				Some(Choice::Value(value)) | Some(Choice::Pair(value, _)) => return Some(value),
				Some(Choice::Group(_, nested)) => self.stack.push(nested.into_iter()),
				None => {
					self.stack.pop();
				}
			}
		}
	}
}
