use crate::{breakpoint::Breakpoint, error::InvalidSpec};
use serde::{Deserialize, Serialize};

/// The loose, object-shaped breakpoint description.
///
/// At most one shape may be populated: either `between`, or any of `above`/`below`.
/// Validation happens when converting into a [`QuerySpec`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Breakpoints {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub above: Option<Breakpoint>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub below: Option<Breakpoint>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub between: Option<(Breakpoint, Breakpoint)>,
}

impl Breakpoints {
	pub fn above(breakpoint: Breakpoint) -> Self {
		Self { above: Some(breakpoint), ..Default::default() }
	}

	pub fn below(breakpoint: Breakpoint) -> Self {
		Self { below: Some(breakpoint), ..Default::default() }
	}

	pub fn between(min: Breakpoint, max: Breakpoint) -> Self {
		Self { between: Some((min, max)), ..Default::default() }
	}

	pub fn and_above(mut self, breakpoint: Breakpoint) -> Self {
		self.above = Some(breakpoint);
		self
	}

	pub fn and_below(mut self, breakpoint: Breakpoint) -> Self {
		self.below = Some(breakpoint);
		self
	}
}

/// Anything a caller can hand to [`build`]: a media query string used verbatim,
/// or a breakpoint description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryInput {
	Literal(String),
	Breakpoints(Breakpoints),
}

impl From<&str> for QueryInput {
	fn from(value: &str) -> Self {
		Self::Literal(value.to_owned())
	}
}

impl From<&String> for QueryInput {
	fn from(value: &String) -> Self {
		Self::Literal(value.clone())
	}
}

impl From<String> for QueryInput {
	fn from(value: String) -> Self {
		Self::Literal(value)
	}
}

impl From<Breakpoints> for QueryInput {
	fn from(value: Breakpoints) -> Self {
		Self::Breakpoints(value)
	}
}

/// A validated query description. Every variant resolves to a media query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySpec {
	Literal(String),
	Above(Breakpoint),
	Below(Breakpoint),
	/// `above` and `below` given together.
	Range(Breakpoint, Breakpoint),
	Between(Breakpoint, Breakpoint),
}

impl TryFrom<Breakpoints> for QuerySpec {
	type Error = InvalidSpec;

	fn try_from(value: Breakpoints) -> Result<Self, Self::Error> {
		match value {
			Breakpoints { between: Some(_), above: Some(_), .. }
			| Breakpoints { between: Some(_), below: Some(_), .. } => Err(InvalidSpec::AmbiguousCombination),
			Breakpoints { between: Some((min, max)), .. } => Ok(Self::Between(min, max)),
			Breakpoints { above: Some(above), below: Some(below), .. } => Ok(Self::Range(above, below)),
			Breakpoints { above: Some(above), .. } => Ok(Self::Above(above)),
			Breakpoints { below: Some(below), .. } => Ok(Self::Below(below)),
			Breakpoints { .. } => Err(InvalidSpec::NoUsableSpecification),
		}
	}
}

impl TryFrom<QueryInput> for QuerySpec {
	type Error = InvalidSpec;

	fn try_from(value: QueryInput) -> Result<Self, Self::Error> {
		match value {
			QueryInput::Literal(query) => Ok(Self::Literal(query)),
			QueryInput::Breakpoints(breakpoints) => Self::try_from(breakpoints),
		}
	}
}

impl std::fmt::Display for QuerySpec {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		// Bounds are never reordered; an inverted range simply never matches.
		match self {
			Self::Literal(query) => write!(f, "{query}"),
			Self::Above(min) => write!(f, "(min-width: {}px)", min.width()),
			Self::Below(max) => write!(f, "(max-width: {}px)", max.width()),
			Self::Range(min, max) | Self::Between(min, max) => {
				write!(f, "(min-width: {}px) and (max-width: {}px)", min.width(), max.width())
			}
		}
	}
}

/// Resolves a query input into the media query string to evaluate against the viewport.
pub fn build(input: impl Into<QueryInput>) -> Result<String, InvalidSpec> {
	let spec = QuerySpec::try_from(input.into())?;
	Ok(spec.to_string())
}
