//! Conditional and repeated children.
//!
//! These helpers never touch the tree themselves. They produce
//! `Option<Node>` values, and `body`/`body_list` drop the `None`s.
//!
//! ## Example
//!
//! ```ignore
//! use hax_builder::{div, li, p, show, ul, when, each};
//! use hax_core::Element;
//!
//! let view = div().body((
//!     when(has_errors, p().class("error").text("Invalid input")),
//!     show(logged_in, p().text("Welcome back"), p().text("Please log in")),
//!     ul().body_list(each(items, |_, item| li().text(item))),
//! ));
//! ```

use hax_core::{IntoChild, Node};

/// Returns the child when `condition` holds, or an absent child otherwise.
pub fn when(condition: bool, child: impl IntoChild) -> Option<Node> {
	if condition { child.into_child() } else { None }
}

/// Selects between two children. Either branch may itself be absent.
pub fn show(
	condition: bool,
	then_child: impl IntoChild,
	else_child: impl IntoChild,
) -> Option<Node> {
	if condition {
		then_child.into_child()
	} else {
		else_child.into_child()
	}
}

/// Renders one child per item, passing the item's index.
///
/// The result feeds [`Element::body_list`](hax_core::Element::body_list)
/// directly; items whose render function returns `None` are skipped there.
pub fn each<I, F, C>(items: I, mut render: F) -> Vec<Option<Node>>
where
	I: IntoIterator,
	F: FnMut(usize, I::Item) -> C,
	C: IntoChild,
{
	items
		.into_iter()
		.enumerate()
		.map(|(index, item)| render(index, item).into_child())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::builder::{div, li, p, ul};
	use hax_core::Element;
	use rstest::rstest;

	#[rstest]
	#[case(true, 1)]
	#[case(false, 0)]
	fn test_when(#[case] condition: bool, #[case] expected: usize) {
		let parent = div().body(when(condition, div()));
		assert_eq!(parent.children().len(), expected);
	}

	#[rstest]
	fn test_show_selects_branch() {
		let yes = show(true, p().text("yes"), p().text("no"));
		let no = show(false, p().text("yes"), p().text("no"));
		assert_eq!(yes.map(|n| n.text_content().to_string()).as_deref(), Some("yes"));
		assert_eq!(no.map(|n| n.text_content().to_string()).as_deref(), Some("no"));
	}

	#[rstest]
	fn test_show_with_absent_branch() {
		assert!(show(false, div(), None::<Node>).is_none());
	}

	#[rstest]
	fn test_each_passes_index() {
		let list = ul().body_list(each(["a", "b", "c"], |index, item| {
			li().text(format!("{index}:{item}"))
		}));
		let texts: Vec<_> = list.children().iter().map(Node::text_content).collect();
		assert_eq!(texts, vec!["0:a", "1:b", "2:c"]);
	}

	#[rstest]
	fn test_each_skips_absent() {
		let list = ul().body_list(each(1..=4, |_, n| when(n % 2 == 0, li())));
		assert_eq!(list.children().len(), 2);
	}
}
