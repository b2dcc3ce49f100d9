use crate::breakpoint::Breakpoint;
use enumset::EnumSet;

/// A breakpoint description that cannot be turned into a media query.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSpec {
	/// `between` was combined with `above` and/or `below`.
	#[error("ambiguous combination")]
	AmbiguousCombination,
	/// None of `between`, `above`, or `below` were provided.
	#[error("no usable specification")]
	NoUsableSpecification,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub struct UnknownBreakpoint(pub String, pub EnumSet<Breakpoint>);

impl<S> From<S> for UnknownBreakpoint
where
	S: Into<String>,
{
	fn from(value: S) -> Self {
		Self(value.into(), EnumSet::all())
	}
}

impl std::fmt::Display for UnknownBreakpoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let names = self.1.iter().map(|bp| bp.as_str()).collect::<Vec<_>>();
		write!(f, "Invalid breakpoint {:?}, expected one of: {names:?}", self.0)
	}
}
