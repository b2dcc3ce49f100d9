use yew::Callback;

mod watch;
pub use watch::*;

#[cfg(test)]
pub(crate) mod fake;

/// A host facility which can evaluate media queries against the live viewport
/// and notify when their match state changes.
pub trait MatchMedia {
	/// Held for as long as change notifications should be delivered.
	/// Dropping it must stop notifications.
	type Subscription;

	/// The current match state of `query`, or `None` if the facility is unavailable.
	fn evaluate(&self, query: &str) -> Option<bool>;

	fn subscribe(&self, query: &str, on_change: Callback<bool>) -> Option<Self::Subscription>;

	fn unsubscribe(&self, subscription: Self::Subscription) {
		drop(subscription);
	}
}

/// The browser's `window.matchMedia`.
///
/// Outside of a browser window (web workers, non-wasm targets) this behaves like [`Headless`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Window;

impl Window {
	fn media_query_list(query: &str) -> Option<web_sys::MediaQueryList> {
		#[cfg(target_arch = "wasm32")]
		{
			let window = web_sys::window()?;
			match window.match_media(query) {
				Ok(list) => list,
				Err(err) => {
					log::warn!("Failed to evaluate media query {query:?}: {err:?}");
					None
				}
			}
		}
		#[cfg(not(target_arch = "wasm32"))]
		{
			let _ = query;
			None
		}
	}
}

impl MatchMedia for Window {
	type Subscription = gloo_events::EventListener;

	fn evaluate(&self, query: &str) -> Option<bool> {
		Self::media_query_list(query).map(|list| list.matches())
	}

	fn subscribe(&self, query: &str, on_change: Callback<bool>) -> Option<Self::Subscription> {
		use wasm_bindgen::JsCast;
		let list = Self::media_query_list(query)?;
		Some(gloo_events::EventListener::new(&list, "change", move |event| {
			let Some(event) = event.dyn_ref::<web_sys::MediaQueryListEvent>() else {
				return;
			};
			on_change.emit(event.matches());
		}))
	}
}

/// A host without any media facility, e.g. server-side or test rendering.
/// Nothing ever matches and nothing is ever subscribed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Headless;

impl MatchMedia for Headless {
	type Subscription = ();

	fn evaluate(&self, _query: &str) -> Option<bool> {
		None
	}

	fn subscribe(&self, _query: &str, _on_change: Callback<bool>) -> Option<Self::Subscription> {
		None
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn headless_never_matches() {
		assert_eq!(Headless.evaluate("(min-width: 0px)"), None);
		assert!(Headless.subscribe("(min-width: 0px)", Callback::noop()).is_none());
	}

	#[test]
	fn window_without_browser() {
		assert_eq!(Window.evaluate("(min-width: 640px)"), None);
		assert!(Window.subscribe("(min-width: 640px)", Callback::noop()).is_none());
	}
}
