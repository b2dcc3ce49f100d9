use crate::{
	error::InvalidSpec,
	media::{MatchMedia, MediaQueryWatch, Window},
	query::{build, QueryInput},
};
use std::{cell::RefCell, rc::Rc};
use yew::prelude::*;

/// Tracks whether the viewport matches `input`, re-rendering whenever that changes.
///
/// `input` is either a media query string or a [`Breakpoints`](crate::query::Breakpoints) description.
/// Outside of a browser window the result is always `false`.
#[hook]
pub fn use_media_query(input: impl Into<QueryInput>) -> Result<bool, InvalidSpec> {
	use_media_query_in(Window, input)
}

/// [`use_media_query`] against a specific media facility.
#[hook]
pub fn use_media_query_in<M>(media: M, input: impl Into<QueryInput>) -> Result<bool, InvalidSpec>
where
	M: MatchMedia + Clone + 'static,
	M::Subscription: 'static,
{
	// Every hook below runs even for invalid input; there is just no query to subscribe to.
	let query = build(input);
	let resolved = query.as_ref().ok().cloned();

	let matches = use_state_eq({
		let media = media.clone();
		let resolved = resolved.clone();
		move || resolved.and_then(|query| media.evaluate(&query)).unwrap_or(false)
	});
	let watch = use_mut_ref({
		let matches = matches.clone();
		move || MediaQueryWatch::new(media, Callback::from(move |value| matches.set(value)))
	});
	use_effect_with(resolved, {
		let matches = matches.clone();
		move |query: &Option<String>| bind_watch(watch, query.as_deref(), &|value: bool| matches.set(value))
	});

	query.map(|_| *matches)
}

/// Binds `watch` to `query` and reports the state it starts with through `set`.
/// The returned teardown releases the binding, on query change and on unmount alike.
fn bind_watch<M>(
	watch: Rc<RefCell<MediaQueryWatch<M>>>,
	query: Option<&str>,
	set: &dyn Fn(bool),
) -> impl FnOnce() + 'static
where
	M: MatchMedia + 'static,
	M::Subscription: 'static,
{
	if let Some(query) = query {
		let matches = watch.borrow_mut().bind(query);
		set(matches);
	}
	move || watch.borrow_mut().release()
}
