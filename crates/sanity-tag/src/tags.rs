//! Elements with a closing tag.

use sanity_html::Node;

/// Defines one constructor per element.
macro_rules! define_tags {
	($($name:ident => $tag:literal),* $(,)?) => {
		$(
			#[doc = concat!("Creates a `<", $tag, ">` element.")]
			pub fn $name(children: impl IntoIterator<Item = Node>) -> Node {
				Node::tag($tag, children)
			}
		)*
	};
}

define_tags! {
	a => "a",
	abbr => "abbr",
	acronym => "acronym",
	address => "address",
	applet => "applet",
	article => "article",
	aside => "aside",
	audio => "audio",
	b => "b",
	bdi => "bdi",
	bdo => "bdo",
	big => "big",
	blockquote => "blockquote",
	body => "body",
	button => "button",
	canvas => "canvas",
	caption => "caption",
	center => "center",
	cite => "cite",
	code => "code",
	colgroup => "colgroup",
	data => "data",
	datalist => "datalist",
	dd => "dd",
	del => "del",
	details => "details",
	dfn => "dfn",
	dialog => "dialog",
	dir => "dir",
	div => "div",
	dl => "dl",
	dt => "dt",
	em => "em",
	fieldset => "fieldset",
	figcaption => "figcaption",
	figure => "figure",
	font => "font",
	footer => "footer",
	form => "form",
	frame => "frame",
	frameset => "frameset",
	h1 => "h1",
	h2 => "h2",
	h3 => "h3",
	h4 => "h4",
	h5 => "h5",
	h6 => "h6",
	head => "head",
	header => "header",
	hgroup => "hgroup",
	html => "html",
	i => "i",
	iframe => "iframe",
	ins => "ins",
	kbd => "kbd",
	label => "label",
	legend => "legend",
	li => "li",
	main => "main",
	map => "map",
	mark => "mark",
	menu => "menu",
	menuitem => "menuitem",
	meter => "meter",
	nav => "nav",
	noframes => "noframes",
	noscript => "noscript",
	object => "object",
	ol => "ol",
	optgroup => "optgroup",
	option => "option",
	output => "output",
	p => "p",
	picture => "picture",
	pre => "pre",
	progress => "progress",
	q => "q",
	rp => "rp",
	rt => "rt",
	ruby => "ruby",
	s => "s",
	samp => "samp",
	script => "script",
	section => "section",
	select => "select",
	slot => "slot",
	small => "small",
	span => "span",
	strike => "strike",
	strong => "strong",
	style => "style",
	sub => "sub",
	summary => "summary",
	sup => "sup",
	svg => "svg",
	table => "table",
	tbody => "tbody",
	td => "td",
	template => "template",
	textarea => "textarea",
	tfoot => "tfoot",
	th => "th",
	thead => "thead",
	time => "time",
	title => "title",
	tr => "tr",
	tt => "tt",
	u => "u",
	ul => "ul",
	var => "var",
	video => "video",
}
