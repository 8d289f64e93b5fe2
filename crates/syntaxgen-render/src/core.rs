use syntaxgen_model::{ApiId, EntityNode};

use crate::error::Result;
use crate::generator::SyntaxGenerator;
use crate::languages::csharp::CSharpGenerator;
use crate::languages::jscript::JScriptGenerator;
use crate::languages::visual_basic::VisualBasicGenerator;
use crate::languages::xaml::{DEFAULT_UI_BASE_TYPES, XamlGenerator};
use crate::languages::Language;
use crate::output::{ReferenceResolver, RenderFormat, ShortNameResolver};
use crate::syntax::DEFAULT_WRAP_COLUMN;
use crate::writer::{BlockWriter, SyntaxBlock};

/// The outcome of rendering one entity in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOutput {
	/// Language rendered.
	pub language: Language,
	/// The block, or the error that stopped this language.
	pub result: Result<SyntaxBlock>,
}

/// Configurable renderer that turns entity nodes into declaration syntax.
#[derive(Debug, Clone)]
pub struct Renderer {
	/// Languages rendered by [`Renderer::render`].
	pub languages: Vec<Language>,
	/// Column past which long lists wrap.
	pub wrap_column: usize,
	/// Text projection used by [`Renderer::render_text`].
	pub format: RenderFormat,
	/// Types whose descendants get XAML usage syntax.
	pub xaml_base_types: Vec<ApiId>,
}

impl Default for Renderer {
	fn default() -> Self {
		Self::new()
	}
}

impl Renderer {
	/// Create a renderer for every language with default settings.
	pub fn new() -> Self {
		Self {
			languages: Language::ALL.to_vec(),
			wrap_column: DEFAULT_WRAP_COLUMN,
			format: RenderFormat::Plain,
			xaml_base_types: DEFAULT_UI_BASE_TYPES.iter().copied().map(ApiId::new).collect(),
		}
	}

	/// Restrict rendering to `languages`, in the given order.
	pub fn with_languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
		self.languages = languages.into_iter().collect();
		self
	}

	/// Set the wrap column.
	pub fn with_wrap_column(mut self, wrap_column: usize) -> Self {
		self.wrap_column = wrap_column;
		self
	}

	/// Select the text projection.
	pub fn with_format(mut self, format: RenderFormat) -> Self {
		self.format = format;
		self
	}

	/// Replace the UI base types consulted by the XAML generator.
	pub fn with_xaml_base_types<I, S>(mut self, base_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<ApiId>,
	{
		self.xaml_base_types = base_types.into_iter().map(Into::into).collect();
		self
	}

	/// A generator for `language` carrying this renderer's settings.
	pub fn generator(&self, language: Language) -> Box<dyn SyntaxGenerator> {
		match language {
			Language::CSharp => Box::new(CSharpGenerator::new(self.wrap_column)),
			Language::VisualBasic => Box::new(VisualBasicGenerator::new(self.wrap_column)),
			Language::Xaml => Box::new(
				XamlGenerator::new(self.wrap_column).with_base_types(self.xaml_base_types.clone()),
			),
			Language::JScript => Box::new(JScriptGenerator::new(self.wrap_column)),
		}
	}

	/// Render `entity` in one language with a fresh writer.
	pub fn render_block(&self, entity: &EntityNode, language: Language) -> Result<SyntaxBlock> {
		let mut writer = BlockWriter::new();
		self.generator(language).write_syntax(entity, &mut writer)?;
		Ok(writer.into_blocks().pop().unwrap_or_else(|| SyntaxBlock {
			language: language.id().to_string(),
			elements: Vec::new(),
		}))
	}

	/// Render `entity` in every configured language.
	///
	/// Languages are independent: an error in one is recorded in its slot and
	/// the rest still render.
	pub fn render(&self, entity: &EntityNode) -> Vec<LanguageOutput> {
		self.languages
			.iter()
			.map(|&language| LanguageOutput {
				language,
				result: self.render_block(entity, language),
			})
			.collect()
	}

	/// Render `entity` in one language and project it with the configured format.
	pub fn render_text(&self, entity: &EntityNode, language: Language) -> Result<String> {
		self.render_text_with(entity, language, &ShortNameResolver)
	}

	/// Like [`Renderer::render_text`], resolving references with `resolver`.
	pub fn render_text_with(
		&self,
		entity: &EntityNode,
		language: Language,
		resolver: &dyn ReferenceResolver,
	) -> Result<String> {
		Ok(self
			.render_block(entity, language)?
			.format(self.format, resolver))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use syntaxgen_model::{EntityKind, MemberSubkind, MethodTag, Modifiers, Parameter, TypeReference};

	use super::*;
	use crate::error::RenderError;

	fn add() -> EntityNode {
		let int = TypeReference::named("T:System.Int32");
		EntityNode::new(
			"M:Calc.Add(System.Int32,System.Int32)",
			EntityKind::Member(MemberSubkind::Method(MethodTag::Normal)),
			"Add",
		)
		.with_parameter(Parameter::new("x", int.clone()))
		.with_parameter(Parameter::new("y", int.clone()))
		.with_return_type(int)
	}

	#[test]
	fn rendering_twice_is_identical() {
		let renderer = Renderer::new();
		for language in Language::ALL {
			assert_eq!(
				renderer.render_text(&add(), language),
				renderer.render_text(&add(), language)
			);
		}
	}

	#[test]
	fn failures_stay_in_their_language() {
		let broken = add().with_modifiers(Modifiers::EXPLICIT_IMPLEMENTATION);
		let outputs = Renderer::new().render(&broken);
		let failed: Vec<Language> = outputs
			.iter()
			.filter(|output| output.result.is_err())
			.map(|output| output.language)
			.collect();
		assert_eq!(failed, vec![Language::CSharp, Language::VisualBasic]);
		assert!(matches!(
			outputs[0].result,
			Err(RenderError::MissingImplementedMember { .. })
		));
		let jscript = outputs
			.iter()
			.find(|output| output.language == Language::JScript)
			.and_then(|output| output.result.as_ref().ok())
			.map(SyntaxBlock::messages);
		assert_eq!(
			jscript,
			Some(vec!["UnsupportedExplicitImplementation_JScript"])
		);
	}

	#[test]
	fn markup_format_is_applied() {
		let text = Renderer::new()
			.with_format(RenderFormat::Markup)
			.render_text(&add(), Language::CSharp)
			.unwrap();
		assert!(text.starts_with("<div codeLanguage=\"CSharp\"><span class=\"keyword\">public</span> "));
	}

	#[test]
	fn language_selection_keeps_order() {
		let outputs = Renderer::new()
			.with_languages([Language::JScript, Language::CSharp])
			.render(&add());
		let languages: Vec<Language> = outputs.iter().map(|output| output.language).collect();
		assert_eq!(languages, vec![Language::JScript, Language::CSharp]);
	}
}
