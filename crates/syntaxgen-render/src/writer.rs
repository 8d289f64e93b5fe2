//! Styled text sink used by every generator.
//!
//! Generators never build strings directly. They push runs into a [`SyntaxWriter`],
//! which records style, cross-references and diagnostics and tracks the output
//! column that drives line-wrap decisions.

use syntaxgen_model::ApiId;

/// Width assumed for a reference whose display text is decided downstream.
pub const UNRESOLVED_REFERENCE_WIDTH: usize = 10;

/// Presentation class of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
	/// Unstyled text and punctuation.
	Plain,
	/// Language keyword.
	Keyword,
	/// Parameter name.
	Parameter,
	/// Declared identifier.
	Identifier,
	/// Literal value.
	Literal,
}

impl Style {
	/// Class name used by the markup output.
	pub fn class_name(self) -> Option<&'static str> {
		match self {
			Self::Plain => None,
			Self::Keyword => Some("keyword"),
			Self::Parameter => Some("parameter"),
			Self::Identifier => Some("identifier"),
			Self::Literal => Some("literal"),
		}
	}
}

/// One recorded piece of a syntax block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxElement {
	/// A styled text run.
	Text {
		/// Run text.
		text: String,
		/// Run style.
		style: Style,
	},
	/// A line break.
	LineBreak,
	/// A cross-reference to another entity.
	Reference {
		/// Target entity.
		target: ApiId,
		/// Display text chosen by the generator, if any.
		text: Option<String>,
	},
	/// A diagnostic placeholder shown instead of syntax.
	Message {
		/// Message key, e.g. `UnsupportedUnsafe_CSharp`.
		key: String,
		/// Message parameters.
		params: Vec<String>,
	},
	/// A nested region such as a property accessor line.
	SubBlock {
		/// Region class, e.g. `getter`.
		class: String,
		/// Region content.
		elements: Vec<SyntaxElement>,
	},
}

/// The styled rendering of one entity in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxBlock {
	/// Language id of the generator that wrote the block.
	pub language: String,
	/// Recorded content.
	pub elements: Vec<SyntaxElement>,
}

impl SyntaxBlock {
	/// Whether the generator wrote nothing.
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Message keys recorded anywhere in the block, in order.
	pub fn messages(&self) -> Vec<&str> {
		fn collect<'a>(elements: &'a [SyntaxElement], keys: &mut Vec<&'a str>) {
			for element in elements {
				match element {
					SyntaxElement::Message { key, .. } => keys.push(key),
					SyntaxElement::SubBlock { elements, .. } => collect(elements, keys),
					_ => {}
				}
			}
		}
		let mut keys = Vec::new();
		collect(&self.elements, &mut keys);
		keys
	}
}

/// Sink for styled declaration text.
///
/// Calls are strictly nested: one top-level block per render, optionally
/// containing sub-blocks. The writer is single-threaded state; each concurrent
/// render needs its own instance.
pub trait SyntaxWriter {
	/// Open the top-level block for `language`.
	fn write_start_block(&mut self, language: &str);

	/// Close the top-level block.
	fn write_end_block(&mut self);

	/// Open a nested region; the column counter restarts at zero.
	fn write_start_sub_block(&mut self, class: &str);

	/// Close the innermost nested region.
	fn write_end_sub_block(&mut self);

	/// Append a styled run and advance the column by its length.
	fn write_string_with_style(&mut self, text: &str, style: Style);

	/// Break the line and reset the column.
	fn write_line(&mut self);

	/// Emit a cross-reference, optionally overriding its display text.
	fn write_reference_link_with_text(&mut self, target: &ApiId, text: Option<&str>);

	/// Emit a diagnostic placeholder.
	fn write_message_with_params(&mut self, key: &str, params: &[String]);

	/// Column count since the last line break or block boundary.
	fn position(&self) -> usize;

	/// Append unstyled text.
	fn write_string(&mut self, text: &str) {
		self.write_string_with_style(text, Style::Plain);
	}

	/// Append a keyword.
	fn write_keyword(&mut self, text: &str) {
		self.write_string_with_style(text, Style::Keyword);
	}

	/// Append a parameter name.
	fn write_parameter(&mut self, text: &str) {
		self.write_string_with_style(text, Style::Parameter);
	}

	/// Append a declared identifier.
	fn write_identifier(&mut self, text: &str) {
		self.write_string_with_style(text, Style::Identifier);
	}

	/// Append a literal.
	fn write_literal(&mut self, text: &str) {
		self.write_string_with_style(text, Style::Literal);
	}

	/// Emit a cross-reference whose display text is resolved downstream.
	fn write_reference_link(&mut self, target: &ApiId) {
		self.write_reference_link_with_text(target, None);
	}

	/// Emit a parameterless diagnostic placeholder.
	fn write_message(&mut self, key: &str) {
		self.write_message_with_params(key, &[]);
	}
}

/// Recording writer that produces [`SyntaxBlock`] values.
#[derive(Debug, Default)]
pub struct BlockWriter {
	blocks: Vec<SyntaxBlock>,
	current: Option<SyntaxBlock>,
	/// Open sub-blocks, innermost last.
	open: Vec<(String, Vec<SyntaxElement>)>,
	position: usize,
}

impl BlockWriter {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Finish writing and return every completed block.
	pub fn into_blocks(mut self) -> Vec<SyntaxBlock> {
		if self.current.is_some() {
			tracing::warn!("syntax block left open; closing it");
			self.write_end_block();
		}
		self.blocks
	}

	fn push(&mut self, element: SyntaxElement) {
		if let Some((_, elements)) = self.open.last_mut() {
			elements.push(element);
		} else if let Some(block) = self.current.as_mut() {
			block.elements.push(element);
		} else {
			tracing::warn!(?element, "write outside of a syntax block ignored");
		}
	}
}

impl SyntaxWriter for BlockWriter {
	fn write_start_block(&mut self, language: &str) {
		if self.current.is_some() {
			tracing::warn!(language, "syntax block started while another is open");
			self.write_end_block();
		}
		self.current = Some(SyntaxBlock {
			language: language.to_string(),
			elements: Vec::new(),
		});
		self.position = 0;
	}

	fn write_end_block(&mut self) {
		while !self.open.is_empty() {
			tracing::warn!("sub-block left open at end of block");
			self.write_end_sub_block();
		}
		match self.current.take() {
			Some(block) => self.blocks.push(block),
			None => tracing::warn!("syntax block ended without being started"),
		}
		self.position = 0;
	}

	fn write_start_sub_block(&mut self, class: &str) {
		self.open.push((class.to_string(), Vec::new()));
		self.position = 0;
	}

	fn write_end_sub_block(&mut self) {
		match self.open.pop() {
			Some((class, elements)) => self.push(SyntaxElement::SubBlock { class, elements }),
			None => tracing::warn!("sub-block ended without being started"),
		}
	}

	fn write_string_with_style(&mut self, text: &str, style: Style) {
		if text.is_empty() {
			return;
		}
		self.position += text.chars().count();
		// Adjacent runs of one style are merged.
		let merged = match self.open.last_mut() {
			Some((_, elements)) => elements.last_mut(),
			None => self.current.as_mut().and_then(|block| block.elements.last_mut()),
		};
		if let Some(SyntaxElement::Text {
			text: existing,
			style: existing_style,
		}) = merged
			&& *existing_style == style
		{
			existing.push_str(text);
			return;
		}
		self.push(SyntaxElement::Text {
			text: text.to_string(),
			style,
		});
	}

	fn write_line(&mut self) {
		self.push(SyntaxElement::LineBreak);
		self.position = 0;
	}

	fn write_reference_link_with_text(&mut self, target: &ApiId, text: Option<&str>) {
		self.position += text.map_or(UNRESOLVED_REFERENCE_WIDTH, |text| text.chars().count());
		self.push(SyntaxElement::Reference {
			target: target.clone(),
			text: text.map(str::to_string),
		});
	}

	fn write_message_with_params(&mut self, key: &str, params: &[String]) {
		self.push(SyntaxElement::Message {
			key: key.to_string(),
			params: params.to_vec(),
		});
	}

	fn position(&self) -> usize {
		self.position
	}
}
