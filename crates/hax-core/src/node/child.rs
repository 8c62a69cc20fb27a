//! Conversions accepted as children by `body` and `body_list`.
//!
//! `Option<T>` is the absence marker: `None` never reaches the child list,
//! which is how conditional rendering is expressed without the node model
//! knowing about conditions.

use super::Node;

/// A value that becomes at most one child node.
pub trait IntoChild {
	/// Converts self into a child, or `None` if nothing should be inserted.
	fn into_child(self) -> Option<Node>;
}

impl IntoChild for Node {
	fn into_child(self) -> Option<Node> {
		Some(self)
	}
}

impl<T: IntoChild> IntoChild for Option<T> {
	fn into_child(self) -> Option<Node> {
		self.and_then(IntoChild::into_child)
	}
}

/// A value that becomes an ordered list of children.
///
/// Implemented for single children, `Option`, `Vec`, arrays and tuples of up
/// to eight heterogeneous children.
pub trait IntoChildren {
	/// Appends every present child to `out`, in order.
	fn push_children(self, out: &mut Vec<Node>);
}

impl IntoChildren for Node {
	fn push_children(self, out: &mut Vec<Node>) {
		out.push(self);
	}
}

impl<T: IntoChild> IntoChildren for Option<T> {
	fn push_children(self, out: &mut Vec<Node>) {
		out.extend(self.into_child());
	}
}

impl<T: IntoChild> IntoChildren for Vec<T> {
	fn push_children(self, out: &mut Vec<Node>) {
		out.extend(self.into_iter().filter_map(IntoChild::into_child));
	}
}

impl<T: IntoChild, const N: usize> IntoChildren for [T; N] {
	fn push_children(self, out: &mut Vec<Node>) {
		out.extend(self.into_iter().filter_map(IntoChild::into_child));
	}
}

impl IntoChildren for () {
	fn push_children(self, _out: &mut Vec<Node>) {}
}

macro_rules! impl_into_children_for_tuple {
	($($idx:tt $name:ident),+) => {
		impl<$($name: IntoChild),+> IntoChildren for ($($name,)+) {
			fn push_children(self, out: &mut Vec<Node>) {
				$(out.extend(self.$idx.into_child());)+
			}
		}
	};
}

impl_into_children_for_tuple!(0 A);
impl_into_children_for_tuple!(0 A, 1 B);
impl_into_children_for_tuple!(0 A, 1 B, 2 C);
impl_into_children_for_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_for_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_for_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_into_children_for_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_into_children_for_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn collect(children: impl IntoChildren) -> Vec<Node> {
		let mut out = Vec::new();
		children.push_children(&mut out);
		out
	}

	#[rstest]
	fn test_nested_option_flattens() {
		let child: Option<Option<Node>> = Some(None);
		assert!(child.into_child().is_none());
		assert!(Some(Some(Node::new("p"))).into_child().is_some());
	}

	#[rstest]
	fn test_array_and_vec() {
		assert_eq!(collect([Node::new("li"), Node::new("li")]).len(), 2);
		assert_eq!(collect(vec![None, Some(Node::new("li"))]).len(), 1);
	}

	#[rstest]
	fn test_unit_is_empty() {
		assert!(collect(()).is_empty());
	}

	#[rstest]
	fn test_tuple_keeps_order() {
		let out = collect((Node::new("a"), None::<Node>, Node::new("b"), Node::new("c")));
		let tags: Vec<_> = out.iter().map(Node::tag_name).collect();
		assert_eq!(tags, vec!["a", "b", "c"]);
	}
}
