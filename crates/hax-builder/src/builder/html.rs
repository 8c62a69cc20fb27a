//! HTML Element Constructors
//!
//! Zero-argument factories, one per tag. Constructors for tags with a family
//! wrapper return that wrapper; all others return a plain [`Node`].

use std::borrow::Cow;

use hax_core::{Anchor, Form, Input, Node, TagNameError, TextArea};

/// Creates a node for any tag name.
///
/// Use this for tags that have no dedicated constructor (custom elements,
/// MathML, less common SVG shapes).
///
/// # Panics
///
/// Panics if the tag name is empty or contains whitespace or markup
/// delimiters. See [`try_element`] for the checked form.
///
/// ## Example
///
/// ```ignore
/// let widget = element("my-widget").attr("data-state", "idle");
/// ```
pub fn element(tag: impl Into<Cow<'static, str>>) -> Node {
	Node::new(tag)
}

/// Creates a node for any tag name, validating it first.
///
/// # Errors
///
/// Returns [`TagNameError`] if the tag name cannot appear in an open tag.
pub fn try_element(tag: impl Into<Cow<'static, str>>) -> Result<Node, TagNameError> {
	Node::try_new(tag)
}

/// Macro for defining HTML element creation functions
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name() -> Node {
			Node::new($tag)
		}
	};
}

// ============================================================================
// Family constructors
// ============================================================================

/// Create an `<a>` element (hyperlink)
///
/// ## Example
///
/// ```ignore
/// let link = a().href("https://example.com").text("Visit Example");
/// ```
pub fn a() -> Anchor {
	Anchor::new()
}

/// Create an `<input>` element
///
/// ## Example
///
/// ```ignore
/// let name = input()
///     .input_type("text")
///     .placeholder("Nombre")
///     .id("name-input");
/// ```
pub fn input() -> Input {
	Input::new()
}

/// Create a `<textarea>` element
pub fn textarea() -> TextArea {
	TextArea::new()
}

/// Create a `<form>` element
///
/// ## Example
///
/// ```ignore
/// let login = form().action("/login").method("POST");
/// ```
pub fn form() -> Form {
	Form::new()
}

// ============================================================================
// Document Metadata Elements
// ============================================================================

define_element!(
	/// Create an `<html>` element
	///
	/// The root of a document.
	html, "html"
);

define_element!(
	/// Create a `<head>` element
	head, "head"
);

define_element!(
	/// Create a `<title>` element
	title, "title"
);

define_element!(
	/// Create a `<meta>` element
	///
	/// Void element: serialized as `<meta .../>`.
	///
	/// ## Example
	///
	/// ```ignore
	/// let charset = meta().attr("charset", "utf-8");
	/// ```
	meta, "meta"
);

define_element!(
	/// Create a `<link>` element
	///
	/// Void element.
	link, "link"
);

define_element!(
	/// Create a `<style>` element
	///
	/// Text content is HTML-escaped like any other text.
	style, "style"
);

define_element!(
	/// Create a `<script>` element
	script, "script"
);

define_element!(
	/// Create a `<body>` element
	body, "body"
);

// ============================================================================
// Content Sectioning Elements
// ============================================================================

define_element!(
	/// Create a `<header>` element
	header, "header"
);

define_element!(
	/// Create a `<footer>` element
	footer, "footer"
);

define_element!(
	/// Create a `<main>` element
	///
	/// Represents the dominant content of the body of a document.
	main, "main"
);

define_element!(
	/// Create a `<nav>` element
	nav, "nav"
);

define_element!(
	/// Create a `<section>` element
	section, "section"
);

define_element!(
	/// Create an `<article>` element
	///
	/// Represents a self-contained composition in a document.
	article, "article"
);

define_element!(
	/// Create an `<aside>` element
	aside, "aside"
);

define_element!(
	/// Create a `<h1>` element (heading level 1)
	///
	/// ## Example
	///
	/// ```ignore
	/// let heading = h1().class("title").text("Demo");
	/// ```
	h1, "h1"
);

define_element!(
	/// Create a `<h2>` element (heading level 2)
	h2, "h2"
);

define_element!(
	/// Create a `<h3>` element (heading level 3)
	h3, "h3"
);

define_element!(
	/// Create a `<h4>` element (heading level 4)
	h4, "h4"
);

define_element!(
	/// Create a `<h5>` element (heading level 5)
	h5, "h5"
);

define_element!(
	/// Create a `<h6>` element (heading level 6)
	h6, "h6"
);

// ============================================================================
// Text Content Elements
// ============================================================================

define_element!(
	/// Create a `<div>` element
	///
	/// ## Example
	///
	/// ```ignore
	/// let container = div()
	///     .id("container")
	///     .body(p().text("Content"));
	/// ```
	div, "div"
);

define_element!(
	/// Create a `<p>` element (paragraph)
	p, "p"
);

define_element!(
	/// Create a `<ul>` element (unordered list)
	///
	/// ## Example
	///
	/// ```ignore
	/// let list = ul().body([li().text("Item 1"), li().text("Item 2")]);
	/// ```
	ul, "ul"
);

define_element!(
	/// Create an `<ol>` element (ordered list)
	ol, "ol"
);

define_element!(
	/// Create an `<li>` element (list item)
	li, "li"
);

define_element!(
	/// Create a `<dl>` element (description list)
	dl, "dl"
);

define_element!(
	/// Create a `<dt>` element
	dt, "dt"
);

define_element!(
	/// Create a `<dd>` element
	dd, "dd"
);

define_element!(
	/// Create a `<blockquote>` element
	blockquote, "blockquote"
);

define_element!(
	/// Create a `<figure>` element
	figure, "figure"
);

define_element!(
	/// Create a `<figcaption>` element
	figcaption, "figcaption"
);

define_element!(
	/// Create an `<hr>` element
	///
	/// Void element: a thematic break.
	hr, "hr"
);

define_element!(
	/// Create a `<pre>` element
	///
	/// The serializer never inserts whitespace, so text inside is emitted exactly as given (after escaping).
	pre, "pre"
);

// ============================================================================
// Inline Text Semantics Elements
// ============================================================================

define_element!(
	/// Create a `<span>` element
	span, "span"
);

define_element!(
	/// Create a `<strong>` element
	strong, "strong"
);

define_element!(
	/// Create an `<em>` element
	em, "em"
);

define_element!(
	/// Create a `<small>` element
	small, "small"
);

define_element!(
	/// Create a `<b>` element
	b, "b"
);

define_element!(
	/// Create an `<i>` element
	i, "i"
);

define_element!(
	/// Create a `<u>` element
	u, "u"
);

define_element!(
	/// Create a `<mark>` element
	mark, "mark"
);

define_element!(
	/// Create a `<kbd>` element
	kbd, "kbd"
);

define_element!(
	/// Create a `<code>` element
	code, "code"
);

define_element!(
	/// Create a `<time>` element
	time, "time"
);

define_element!(
	/// Create a `<br>` element
	///
	/// Void element: produces a line break.
	br, "br"
);

define_element!(
	/// Create a `<wbr>` element (line break opportunity)
	wbr, "wbr"
);

// ============================================================================
// Table Content Elements
// ============================================================================

define_element!(
	/// Create a `<table>` element
	table, "table"
);

define_element!(
	/// Create a `<caption>` element
	caption, "caption"
);

define_element!(
	/// Create a `<colgroup>` element
	colgroup, "colgroup"
);

define_element!(
	/// Create a `<col>` element
	///
	/// Void element.
	col, "col"
);

define_element!(
	/// Create a `<thead>` element
	thead, "thead"
);

define_element!(
	/// Create a `<tbody>` element
	tbody, "tbody"
);

define_element!(
	/// Create a `<tfoot>` element
	tfoot, "tfoot"
);

define_element!(
	/// Create a `<tr>` element (table row)
	tr, "tr"
);

define_element!(
	/// Create a `<th>` element (header cell)
	th, "th"
);

define_element!(
	/// Create a `<td>` element (data cell)
	td, "td"
);

// ============================================================================
// Form Elements
// ============================================================================

define_element!(
	/// Create a `<button>` element
	///
	/// ## Example
	///
	/// ```ignore
	/// let button = button()
	///     .classes(["btn", "btn-primary"])
	///     .text("Submit");
	/// ```
	button, "button"
);

define_element!(
	/// Create a `<label>` element
	///
	/// Pair with [`Element::html_for`](hax_core::Element::html_for) to point at a control.
	label, "label"
);

define_element!(
	/// Create a `<select>` element (dropdown)
	select, "select"
);

define_element!(
	/// Create an `<option>` element (for use with `<select>`)
	option, "option"
);

define_element!(
	/// Create an `<output>` element
	output, "output"
);

define_element!(
	/// Create a `<fieldset>` element
	fieldset, "fieldset"
);

define_element!(
	/// Create a `<legend>` element
	legend, "legend"
);

define_element!(
	/// Create a `<datalist>` element
	datalist, "datalist"
);

define_element!(
	/// Create a `<progress>` element
	progress, "progress"
);

// ============================================================================
// Interactive Elements
// ============================================================================

define_element!(
	/// Create a `<details>` element
	details, "details"
);

define_element!(
	/// Create a `<summary>` element
	summary, "summary"
);

// ============================================================================
// Image and Multimedia Elements
// ============================================================================

define_element!(
	/// Create an `<img>` element
	///
	/// Void element.
	///
	/// ## Example
	///
	/// ```ignore
	/// let logo = img().attr("src", "/images/logo.png").attr("alt", "Logo");
	/// ```
	img, "img"
);

define_element!(
	/// Create a `<picture>` element
	picture, "picture"
);

define_element!(
	/// Create a `<video>` element
	video, "video"
);

define_element!(
	/// Create an `<audio>` element
	audio, "audio"
);

define_element!(
	/// Create a `<source>` element
	///
	/// Void element: media resource for `<picture>`, `<audio>` or `<video>`.
	source, "source"
);

define_element!(
	/// Create a `<track>` element
	track, "track"
);

define_element!(
	/// Create an `<area>` element
	area, "area"
);

// ============================================================================
// Embedded Content Elements
// ============================================================================

define_element!(
	/// Create an `<iframe>` element
	iframe, "iframe"
);

define_element!(
	/// Create an `<embed>` element
	embed, "embed"
);

define_element!(
	/// Create a `<canvas>` element
	canvas, "canvas"
);

define_element!(
	/// Create an `<svg>` element
	svg, "svg"
);

define_element!(
	/// Create a `<path>` element (SVG)
	path, "path"
);

// ============================================================================
// Web Components Elements
// ============================================================================

define_element!(
	/// Create a `<template>` element
	template, "template"
);
