use crate::error::UnknownBreakpoint;
use enumset::EnumSetType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A named viewport-width threshold.
#[derive(Debug, EnumSetType, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
	Sm,
	Md,
	Lg,
	Xl,
}

impl Breakpoint {
	/// The viewport width in pixels this breakpoint is pinned to.
	pub const fn width(&self) -> u32 {
		match self {
			Self::Sm => 640,
			Self::Md => 768,
			Self::Lg => 1024,
			Self::Xl => 1280,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Sm => "sm",
			Self::Md => "md",
			Self::Lg => "lg",
			Self::Xl => "xl",
		}
	}
}

impl std::fmt::Display for Breakpoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for Breakpoint {
	type Err = UnknownBreakpoint;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"sm" => Ok(Self::Sm),
			"md" => Ok(Self::Md),
			"lg" => Ok(Self::Lg),
			"xl" => Ok(Self::Xl),
			_ => Err(UnknownBreakpoint::from(s)),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use enumset::EnumSet;

	#[test]
	fn widths() {
		assert_eq!(Breakpoint::Sm.width(), 640);
		assert_eq!(Breakpoint::Md.width(), 768);
		assert_eq!(Breakpoint::Lg.width(), 1024);
		assert_eq!(Breakpoint::Xl.width(), 1280);
	}

	#[test]
	fn widths_ascend() {
		let widths = EnumSet::<Breakpoint>::all().iter().map(|bp| bp.width()).collect::<Vec<_>>();
		let mut sorted = widths.clone();
		sorted.sort();
		assert_eq!(widths, sorted);
	}

	#[test]
	fn names_parse_back() {
		for breakpoint in EnumSet::<Breakpoint>::all() {
			assert_eq!(breakpoint.to_string().parse::<Breakpoint>(), Ok(breakpoint));
		}
	}

	#[test]
	fn unknown_name() {
		let err = "2xl".parse::<Breakpoint>().unwrap_err();
		assert_eq!(err.0, "2xl");
		assert_eq!(err.1, EnumSet::all());
		assert_eq!(
			err.to_string(),
			"Invalid breakpoint \"2xl\", expected one of: [\"sm\", \"md\", \"lg\", \"xl\"]"
		);
	}

	#[test]
	fn names_are_case_sensitive() {
		assert!("MD".parse::<Breakpoint>().is_err());
	}

	#[test]
	fn serde_names() -> anyhow::Result<()> {
		assert_eq!(serde_json::to_string(&Breakpoint::Lg)?, "\"lg\"");
		assert_eq!(serde_json::from_str::<Breakpoint>("\"xl\"")?, Breakpoint::Xl);
		Ok(())
	}
}
