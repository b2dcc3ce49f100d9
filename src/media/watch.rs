use super::MatchMedia;
use std::{cell::Cell, rc::Rc};
use yew::Callback;

struct Binding<S> {
	query: String,
	/// Written by the subscription before each change is forwarded.
	matches: Rc<Cell<bool>>,
	subscription: Option<S>,
}

/// Keeps exactly one media query subscribed at a time.
///
/// Binding a different query releases the previous subscription before the new one is made.
/// The subscription is released when the watch is dropped.
pub struct MediaQueryWatch<M: MatchMedia> {
	media: M,
	on_change: Callback<bool>,
	binding: Option<Binding<M::Subscription>>,
}

impl<M: MatchMedia> MediaQueryWatch<M> {
	pub fn new(media: M, on_change: Callback<bool>) -> Self {
		Self { media, on_change, binding: None }
	}

	/// The query currently being watched, if any.
	pub fn query(&self) -> Option<&str> {
		self.binding.as_ref().map(|binding| binding.query.as_str())
	}

	pub fn is_subscribed(&self) -> bool {
		matches!(&self.binding, Some(Binding { subscription: Some(_), .. }))
	}

	/// The latest known match state of the watched query, `false` when nothing is bound.
	pub fn matches(&self) -> bool {
		self.binding.as_ref().map(|binding| binding.matches.get()).unwrap_or(false)
	}

	/// Starts watching `query`, returning its current match state.
	///
	/// Rebinding the query that is already watched keeps the existing subscription.
	/// Without a media facility the state is `false` and nothing is subscribed.
	pub fn bind(&mut self, query: &str) -> bool {
		if let Some(binding) = &self.binding {
			if binding.query == query {
				return binding.matches.get();
			}
		}
		self.release();

		log::debug!(target: "media_query", "Watching media query {query:?}");
		let Some(matches) = self.media.evaluate(query) else {
			let matches = Rc::new(Cell::new(false));
			self.binding = Some(Binding { query: query.to_owned(), matches, subscription: None });
			return false;
		};
		let latest = Rc::new(Cell::new(matches));
		let on_change = {
			let latest = latest.clone();
			let on_change = self.on_change.clone();
			Callback::from(move |value: bool| {
				latest.set(value);
				on_change.emit(value);
			})
		};
		let subscription = self.media.subscribe(query, on_change);
		self.binding = Some(Binding { query: query.to_owned(), matches: latest, subscription });
		matches
	}

	pub fn release(&mut self) {
		let Some(binding) = self.binding.take() else {
			return;
		};
		if let Some(subscription) = binding.subscription {
			self.media.unsubscribe(subscription);
		}
	}
}

impl<M: MatchMedia> Drop for MediaQueryWatch<M> {
	fn drop(&mut self) {
		self.release();
	}
}
