use super::MatchMedia;
use std::{
	cell::RefCell,
	rc::Rc,
	sync::{Arc, Mutex},
};
use yew::Callback;

pub type Journal = Arc<Mutex<Vec<String>>>;

/// Records every subscribe/unsubscribe into a shared journal,
/// and can push change notifications to its live listeners.
#[derive(Clone)]
pub struct FakeMedia {
	journal: Journal,
	matches: Option<bool>,
	listeners: Rc<RefCell<Vec<(usize, String, Callback<bool>)>>>,
	next_id: Rc<RefCell<usize>>,
}

pub struct FakeSubscription {
	id: usize,
	query: String,
	journal: Journal,
	listeners: Rc<RefCell<Vec<(usize, String, Callback<bool>)>>>,
}

impl FakeMedia {
	/// `matches` of `None` emulates a host without a media facility.
	pub fn new(journal: Journal, matches: Option<bool>) -> Self {
		Self { journal, matches, listeners: Default::default(), next_id: Default::default() }
	}

	pub fn journal(&self) -> Vec<String> {
		self.journal.lock().unwrap().clone()
	}

	pub fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}

	pub fn change(&self, query: &str, matches: bool) {
		let listeners = self.listeners.borrow().clone();
		for (_, listened, callback) in listeners {
			if listened == query {
				callback.emit(matches);
			}
		}
	}
}

impl MatchMedia for FakeMedia {
	type Subscription = FakeSubscription;

	fn evaluate(&self, query: &str) -> Option<bool> {
		self.journal.lock().unwrap().push(format!("evaluate {query}"));
		self.matches
	}

	fn subscribe(&self, query: &str, on_change: Callback<bool>) -> Option<Self::Subscription> {
		self.matches?;
		let id = {
			let mut next_id = self.next_id.borrow_mut();
			*next_id += 1;
			*next_id
		};
		self.journal.lock().unwrap().push(format!("subscribe {query}"));
		self.listeners.borrow_mut().push((id, query.to_owned(), on_change));
		Some(FakeSubscription {
			id,
			query: query.to_owned(),
			journal: self.journal.clone(),
			listeners: self.listeners.clone(),
		})
	}
}

impl Drop for FakeSubscription {
	fn drop(&mut self) {
		self.listeners.borrow_mut().retain(|(id, _, _)| *id != self.id);
		self.journal.lock().unwrap().push(format!("unsubscribe {}", self.query));
	}
}
