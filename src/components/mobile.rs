use crate::{breakpoint::Breakpoint, components::use_media_query, query::Breakpoints};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct MobileProps {
	/// The smallest breakpoint considered a desktop layout.
	pub threshold: Breakpoint,
	#[prop_or_default]
	pub children: Children,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Kind {
	Desktop,
	Mobile,
}

#[function_component]
pub fn Provider(MobileProps { threshold, children }: &MobileProps) -> Html {
	let kind = match use_media_query(Breakpoints::above(*threshold)) {
		Ok(true) => Kind::Desktop,
		_ => Kind::Mobile,
	};
	html! {
		<ContextProvider<Kind> context={kind}>
			{children.clone()}
		</ContextProvider<Kind>>
	}
}

/// The layout published by the nearest [`Provider`], defaulting to mobile-first.
#[hook]
pub fn use_layout_kind() -> Kind {
	use_context::<Kind>().unwrap_or(Kind::Mobile)
}
