use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};
use syntaxgen_model::ApiId;

use crate::writer::{SyntaxBlock, SyntaxElement};

/// Supported text projections of a rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
	/// Plain declaration text (default).
	#[default]
	Plain,
	/// Markup interchange form consumed by documentation pipelines.
	Markup,
}

/// Turns reference targets into display text when the generator supplied none.
pub trait ReferenceResolver {
	/// Display text for `target`.
	fn resolve(&self, target: &ApiId) -> String;
}

/// Resolver that displays the short name encoded in the id itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortNameResolver;

impl ReferenceResolver for ShortNameResolver {
	fn resolve(&self, target: &ApiId) -> String {
		target.short_name()
	}
}

impl SyntaxBlock {
	/// Render in the requested format.
	pub fn format(&self, format: RenderFormat, resolver: &dyn ReferenceResolver) -> String {
		match format {
			RenderFormat::Plain => self.to_plain_text(resolver),
			RenderFormat::Markup => self.to_markup(),
		}
	}

	/// Render as plain text.
	pub fn to_plain_text(&self, resolver: &dyn ReferenceResolver) -> String {
		let mut output = String::new();
		plain_elements(&self.elements, resolver, &mut output);
		output
	}

	/// Render as markup, leaving references for the pipeline to resolve.
	pub fn to_markup(&self) -> String {
		let mut output = format!(
			"<div codeLanguage=\"{}\">",
			encode_double_quoted_attribute(&self.language)
		);
		markup_elements(&self.elements, &mut output);
		output.push_str("</div>");
		output
	}
}

fn plain_elements(elements: &[SyntaxElement], resolver: &dyn ReferenceResolver, output: &mut String) {
	for element in elements {
		match element {
			SyntaxElement::Text { text, .. } => output.push_str(text),
			SyntaxElement::LineBreak => output.push('\n'),
			SyntaxElement::Reference { target, text } => match text {
				Some(text) => output.push_str(text),
				None => output.push_str(&resolver.resolve(target)),
			},
			SyntaxElement::Message { key, params } => {
				output.push_str(key);
				if !params.is_empty() {
					let _ = write!(output, "({})", params.join(", "));
				}
			}
			SyntaxElement::SubBlock { elements, .. } => plain_elements(elements, resolver, output),
		}
	}
}

fn markup_elements(elements: &[SyntaxElement], output: &mut String) {
	for element in elements {
		match element {
			SyntaxElement::Text { text, style } => match style.class_name() {
				Some(class) => {
					let _ = write!(output, "<span class=\"{class}\">{}</span>", encode_text(text));
				}
				None => output.push_str(&encode_text(text)),
			},
			SyntaxElement::LineBreak => output.push_str("<br/>"),
			SyntaxElement::Reference { target, text } => {
				let target = encode_double_quoted_attribute(target.as_str());
				match text {
					Some(text) => {
						let _ = write!(
							output,
							"<referenceLink target=\"{target}\">{}</referenceLink>",
							encode_text(text)
						);
					}
					None => {
						let _ = write!(output, "<referenceLink target=\"{target}\"/>");
					}
				}
			}
			SyntaxElement::Message { key, params } => {
				let _ = write!(
					output,
					"<span class=\"message\" key=\"{}\"",
					encode_double_quoted_attribute(key)
				);
				if params.is_empty() {
					output.push_str("/>");
				} else {
					output.push('>');
					for param in params {
						let _ = write!(output, "<parameter>{}</parameter>", encode_text(param));
					}
					output.push_str("</span>");
				}
			}
			SyntaxElement::SubBlock { class, elements } => {
				let _ = write!(
					output,
					"<div class=\"{}\">",
					encode_double_quoted_attribute(class)
				);
				markup_elements(elements, output);
				output.push_str("</div>");
			}
		}
	}
}
