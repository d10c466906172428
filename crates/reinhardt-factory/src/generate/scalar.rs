//! Generic generation of scalar values under constraints.

use chrono::{DateTime, NaiveDate, Utc};
use fake::Fake;
use fake::faker::lorem::en::Words;
use rand::Rng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;

use super::pattern::CharClassPattern;
use crate::config::FactoryConfig;
use crate::error::FactoryResult;
use crate::meta::{Constraints, ScalarType};
use crate::value::FieldValue;

// Precision and scale used when a decimal field declares neither.
const DEFAULT_DECIMAL_PLACES: u32 = 2;
const DEFAULT_INTEGER_DIGITS: u32 = 8;
const MAX_DECIMAL_DIGITS: u32 = 28;

// 1970-01-01 and 2099-12-31 as days from the common era.
const MIN_DATE_DAYS: i32 = 719_163;
const MAX_DATE_DAYS: i32 = 766_644;

const SECONDS_PER_YEAR: i64 = 31_536_000;

pub(crate) fn generate_scalar(
	scalar: ScalarType,
	constraints: &Constraints,
	config: &FactoryConfig,
	rng: &mut StdRng,
) -> FactoryResult<FieldValue> {
	let value = match scalar {
		ScalarType::Integer => FieldValue::Int(rng.gen_range(0..=i64::from(i32::MAX))),
		ScalarType::SmallInteger => FieldValue::Int(rng.gen_range(0..=i64::from(i16::MAX))),
		ScalarType::Float => FieldValue::Float(rng.gen_range(0.0..1_000_000.0)),
		ScalarType::Decimal => FieldValue::Decimal(decimal(constraints, rng)),
		ScalarType::Boolean => FieldValue::Bool(rng.gen_bool(0.5)),
		ScalarType::Text => {
			let max_len = length_bound(constraints, config);
			match &constraints.pattern {
				Some(pattern) => FieldValue::Text(CharClassPattern::parse(pattern)?.generate(rng, max_len)?),
				None => FieldValue::Text(text(rng, max_len)),
			}
		}
		ScalarType::Bytes => {
			let len = random_len(rng, length_bound(constraints, config));
			let mut bytes = vec![0u8; len];
			rng.fill(bytes.as_mut_slice());
			FieldValue::Bytes(bytes)
		}
		ScalarType::Date => {
			let days = rng.gen_range(MIN_DATE_DAYS..=MAX_DATE_DAYS);
			FieldValue::Date(NaiveDate::from_num_days_from_ce_opt(days).unwrap_or(NaiveDate::MIN))
		}
		ScalarType::DateTime => {
			let seconds = rng.gen_range(0..SECONDS_PER_YEAR * 130);
			FieldValue::DateTime(DateTime::<Utc>::from_timestamp(seconds, 0).unwrap_or_default())
		}
		ScalarType::Duration => {
			FieldValue::Duration(chrono::Duration::seconds(rng.gen_range(0..SECONDS_PER_YEAR)))
		}
	};
	Ok(value)
}

fn length_bound(constraints: &Constraints, config: &FactoryConfig) -> usize {
	constraints
		.max_length
		.map_or(config.max_text_length, |max| {
			(max as usize).min(config.max_text_length)
		})
}

fn random_len(rng: &mut StdRng, max_len: usize) -> usize {
	if max_len == 0 {
		0
	} else {
		rng.gen_range(1..=max_len)
	}
}

// Lorem words cut to a random length within the bound.
fn text(rng: &mut StdRng, max_len: usize) -> String {
	let len = random_len(rng, max_len);
	let mut text = String::with_capacity(len);
	while text.chars().count() < len {
		let words: Vec<String> = Words(1..4).fake_with_rng(rng);
		if !text.is_empty() {
			text.push(' ');
		}
		text.push_str(&words.join(" "));
	}
	text.chars().take(len).collect()
}

// Integer digits stay within `max_digits - decimal_places`.
fn decimal(constraints: &Constraints, rng: &mut StdRng) -> Decimal {
	let max_digits = constraints
		.max_digits
		.unwrap_or_else(|| {
			constraints
				.decimal_places
				.unwrap_or(DEFAULT_DECIMAL_PLACES)
				.saturating_add(DEFAULT_INTEGER_DIGITS)
		})
		.min(MAX_DECIMAL_DIGITS);
	let scale = constraints
		.decimal_places
		.unwrap_or(DEFAULT_DECIMAL_PLACES)
		.min(max_digits);

	let mut mantissa = rng.gen_range(0..10i128.pow(max_digits));
	if rng.gen_bool(0.5) {
		mantissa = -mantissa;
	}
	Decimal::from_i128_with_scale(mantissa, scale)
}
