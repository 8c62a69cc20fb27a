//! Document Rendering Integration Tests
//!
//! Builds trees through the facade prelude and checks the serialized HTML.
//!
//! Test Categories:
//! 1. Single Nodes - text, attributes, classes, styles, id
//! 2. Nested Documents - forms, family wrappers, mixed children
//! 3. Void Elements - self-closing output and body suppression
//! 4. Escaping - text and value escaping, raw attribute names

use hax::prelude::*;
use rstest::rstest;

/// Removes the indentation used to lay out expected markup in test sources.
fn strip(s: &str) -> String {
	s.chars()
		.filter(|c| !matches!(c, '\t' | '\n' | '\r'))
		.collect()
}

// ============================================================================
// Single Nodes
// ============================================================================

#[rstest]
fn test_one_node() {
	assert_eq!(render_to_string(&div()), "<div></div>");
}

#[rstest]
fn test_one_node_with_text() {
	assert_eq!(render_to_string(&h1().text("Hola")), "<h1>Hola</h1>");
}

#[rstest]
fn test_one_node_with_attributes() {
	let link = a().attr("href", "deltegui.com").text("Go to deltegui.com");
	assert_eq!(
		render_to_string(&link),
		r#"<a href="deltegui.com">Go to deltegui.com</a>"#
	);
}

#[rstest]
fn test_one_node_with_classes() {
	let node = button().classes(["btn", "btn-primary"]).text("I'm a button");
	assert_eq!(
		render_to_string(&node),
		r#"<button class="btn btn-primary">I&#39;m a button</button>"#
	);
}

#[rstest]
fn test_one_node_with_style() {
	let node = button()
		.style("background-color", "green")
		.style("border-radious", "50%")
		.text("Say hello!");
	assert_eq!(
		render_to_string(&node),
		r#"<button style="background-color: green;border-radious: 50%;">Say hello!</button>"#
	);
}

#[rstest]
fn test_one_node_with_id() {
	let node = div().id("container").text("Hola");
	assert_eq!(render_to_string(&node), r#"<div id="container">Hola</div>"#);
}

#[rstest]
fn test_all_sections_in_fixed_order() {
	let node = p()
		.id("intro")
		.attr("data-kind", "lead")
		.attr("title", "Intro")
		.style("margin", "0")
		.class("lead")
		.class("muted");
	assert_eq!(
		render_to_string(&node),
		r#"<p class="lead muted" style="margin: 0;" data-kind="lead" title="Intro" id="intro"></p>"#
	);
}

// ============================================================================
// Nested Documents
// ============================================================================

#[rstest]
fn test_heading_inside_container() {
	let tree = div().id("container").body(h1().class("title").text("Demo"));
	assert_eq!(
		render_to_string(&tree),
		r#"<div id="container"><h1 class="title">Demo</h1></div>"#
	);
}

#[rstest]
fn test_form_document() {
	let tree = div().id("container").body((
		h1().class("title").text("Demo"),
		form()
			.action("/endpoint/to/backend")
			.method("GET")
			.body((
				a().href("www.google.es").text("Go to google"),
				div().class("form-control").body((
					label().text("Name").html_for("name-input"),
					input()
						.value("hola mundo")
						.placeholder("Nombre")
						.id("name-input"),
					output().html_for("name-input"),
				)),
			)),
	));

	let expected = strip(
		r#"
		<div id="container">
			<h1 class="title">Demo</h1>
			<form action="/endpoint/to/backend" method="GET">
				<a href="www.google.es">Go to google</a>
				<div class="form-control">
					<label for="name-input">Name</label>
					<input value="hola mundo" placeholder="Nombre" id="name-input"/>
					<output for="name-input"></output>
				</div>
			</form>
		</div>"#,
	);
	assert_eq!(render_to_string(&tree), expected);
}

#[rstest]
fn test_table_document() {
	let rows = [("Ada", "1815"), ("Grace", "1906")];
	let tree = table().body((
		thead().body(tr().body((th().text("Name"), th().text("Born")))),
		tbody().body_list(
			rows.iter()
				.map(|(name, year)| tr().body((td().text(*name), td().text(*year)))),
		),
	));
	insta::assert_snapshot!(
		render_to_string(&tree),
		@"<table><thead><tr><th>Name</th><th>Born</th></tr></thead><tbody><tr><td>Ada</td><td>1815</td></tr><tr><td>Grace</td><td>1906</td></tr></tbody></table>"
	);
}

#[rstest]
fn test_text_follows_children() {
	let node = p().text(" world").body(strong().text("hello"));
	assert_eq!(
		render_to_string(&node),
		"<p><strong>hello</strong> world</p>"
	);
}

#[rstest]
fn test_second_body_call_replaces_first() {
	let node = ul()
		.body((li().text("a"), li().text("b")))
		.body(li().text("c"));
	assert_eq!(render_to_string(&node), "<ul><li>c</li></ul>");
}

// ============================================================================
// Void Elements
// ============================================================================

#[rstest]
#[case(br(), "<br/>")]
#[case(hr(), "<hr/>")]
#[case(img().attr("src", "/logo.png"), r#"<img src="/logo.png"/>"#)]
#[case(meta().attr("charset", "utf-8"), r#"<meta charset="utf-8"/>"#)]
fn test_void_elements_self_close(#[case] node: Node, #[case] expected: &str) {
	assert_eq!(render_to_string(&node), expected);
}

#[rstest]
fn test_void_element_with_body_renders_no_content() {
	let node = input().body((span().text("child"), div())).text("text");
	let html = render_to_string(&node);
	assert_eq!(html, "<input/>");
	assert!(!html.contains("</input>"));
	assert!(html.ends_with("/>"));
}

#[rstest]
fn test_void_element_nested_in_paragraph() {
	let node = p().body((span().text("line one"), br(), span().text("line two")));
	assert_eq!(
		render_to_string(&node),
		"<p><span>line one</span><br/><span>line two</span></p>"
	);
}

// ============================================================================
// Escaping
// ============================================================================

#[rstest]
fn test_text_apostrophe_escaped() {
	assert_eq!(
		render_to_string(&span().text("O'Brien")),
		"<span>O&#39;Brien</span>"
	);
}

#[rstest]
fn test_class_apostrophe_escaped() {
	assert_eq!(
		render_to_string(&span().class("O'Brien").text("Hola")),
		r#"<span class="O&#39;Brien">Hola</span>"#
	);
}

#[rstest]
fn test_script_injection_in_text_is_inert() {
	let node = div().text("<script>alert('xss')</script>");
	assert_eq!(
		render_to_string(&node),
		"<div>&lt;script&gt;alert(&#39;xss&#39;)&lt;/script&gt;</div>"
	);
}

#[rstest]
fn test_attribute_value_quote_escaped() {
	let node = input().value(r#"" onfocus="alert(1)"#);
	assert_eq!(
		render_to_string(&node),
		r#"<input value="&#34; onfocus=&#34;alert(1)"/>"#
	);
}
