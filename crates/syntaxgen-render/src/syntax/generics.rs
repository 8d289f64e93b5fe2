use syntaxgen_model::{Constraints, GenericParameter, Variance};

use super::Notation;
use super::dialect::ConstraintStyle;
use crate::writer::SyntaxWriter;

impl Notation<'_> {
	/// Render a generic parameter list.
	///
	/// Variance is written only when `with_variance` is set, which callers do for
	/// interfaces and delegates. Inline-constraint languages write constraints here.
	pub fn write_generic_parameters(
		&self,
		parameters: &[GenericParameter],
		with_variance: bool,
		writer: &mut dyn SyntaxWriter,
	) {
		if parameters.is_empty() {
			return;
		}
		let (open, close) = self.dialect.generic_brackets;
		writer.write_string(open);
		for (index, parameter) in parameters.iter().enumerate() {
			if index > 0 {
				self.write_list_separator(writer);
			}
			if with_variance {
				self.write_variance(parameter.variance, writer);
			}
			writer.write_string(&parameter.name);

			if let ConstraintStyle::Inline(keyword) = self.dialect.constraint_style
				&& !parameter.constraints.is_empty()
			{
				writer.write_string(" ");
				writer.write_keyword(keyword);
				writer.write_string(" ");
				let braced = parameter.constraints.len() > 1;
				if braced {
					writer.write_string("{");
				}
				self.write_constraint_list(&parameter.constraints, writer);
				if braced {
					writer.write_string("}");
				}
			}
		}
		writer.write_string(close);
	}

	/// Render constraint clauses that follow the signature, one line each.
	pub fn write_constraint_clauses(
		&self,
		parameters: &[GenericParameter],
		writer: &mut dyn SyntaxWriter,
	) {
		let ConstraintStyle::Clause(keyword) = self.dialect.constraint_style else {
			return;
		};
		for parameter in parameters
			.iter()
			.filter(|parameter| !parameter.constraints.is_empty())
		{
			writer.write_line();
			writer.write_keyword(keyword);
			writer.write_string(" ");
			writer.write_string(&parameter.name);
			writer.write_string(" : ");
			self.write_constraint_list(&parameter.constraints, writer);
		}
	}

	/// Render the constraints of one parameter: the struct/class and constructor
	/// keywords first, then explicit type constraints.
	pub fn write_constraint_list(&self, constraints: &Constraints, writer: &mut dyn SyntaxWriter) {
		let [value_type, reference_type, constructor] = self.dialect.constraint_keywords;
		let mut first = true;
		let mut separate = |writer: &mut dyn SyntaxWriter| {
			if first {
				first = false;
			} else {
				self.write_list_separator(writer);
			}
		};

		if constraints.is_value_type {
			separate(writer);
			writer.write_keyword(value_type);
		} else if constraints.is_reference_type {
			separate(writer);
			writer.write_keyword(reference_type);
		}
		// A value-type constraint already implies a parameterless constructor.
		if constraints.requires_parameterless_constructor && !constraints.is_value_type {
			separate(writer);
			writer.write_keyword(constructor);
		}
		for ty in &constraints.type_constraints {
			separate(writer);
			self.write_type_reference(ty, writer);
		}
	}

	fn write_variance(&self, variance: Variance, writer: &mut dyn SyntaxWriter) {
		let (contravariant, covariant) = self.dialect.variance_keywords;
		let keyword = match variance {
			Variance::None => return,
			Variance::Contravariant => contravariant,
			Variance::Covariant => covariant,
		};
		writer.write_keyword(keyword);
		writer.write_string(" ");
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use syntaxgen_model::TypeReference;

	use super::*;
	use crate::languages::{csharp, visual_basic};
	use crate::output::ShortNameResolver;
	use crate::syntax::{DEFAULT_WRAP_COLUMN, Dialect};
	use crate::writer::BlockWriter;

	fn render(
		dialect: &Dialect,
		wrap: usize,
		prefix: &str,
		parameters: &[GenericParameter],
		with_variance: bool,
	) -> String {
		let notation = Notation::new(dialect, wrap);
		let mut writer = BlockWriter::new();
		writer.write_start_block(dialect.language);
		writer.write_string(prefix);
		notation.write_generic_parameters(parameters, with_variance, &mut writer);
		notation.write_constraint_clauses(parameters, &mut writer);
		writer.write_end_block();
		writer.into_blocks()[0].to_plain_text(&ShortNameResolver)
	}

	fn constrained() -> Vec<GenericParameter> {
		vec![
			GenericParameter::new("TKey").with_constraints(Constraints {
				is_reference_type: true,
				requires_parameterless_constructor: true,
				type_constraints: vec![TypeReference::named("T:System.IComparable")],
				..Constraints::default()
			}),
			GenericParameter::new("TValue").with_variance(Variance::Covariant),
		]
	}

	#[test]
	fn csharp_writes_where_clauses() {
		assert_eq!(
			render(&csharp::DIALECT, DEFAULT_WRAP_COLUMN, "Map", &constrained(), true),
			"Map<TKey, out TValue>\nwhere TKey : class, new(), IComparable"
		);
	}

	#[test]
	fn variance_is_dropped_unless_requested() {
		assert_eq!(
			render(&csharp::DIALECT, DEFAULT_WRAP_COLUMN, "Map", &constrained(), false),
			"Map<TKey, TValue>\nwhere TKey : class, new(), IComparable"
		);
	}

	#[test]
	fn visual_basic_writes_constraints_inline() {
		assert_eq!(
			render(
				&visual_basic::DIALECT,
				DEFAULT_WRAP_COLUMN,
				"Map",
				&constrained(),
				true
			),
			"Map(Of TKey As {Class, New, IComparable}, Out TValue)"
		);
	}

	#[test]
	fn single_inline_constraint_is_not_braced() {
		let parameters = vec![GenericParameter::new("T").with_constraints(Constraints {
			is_value_type: true,
			requires_parameterless_constructor: true,
			..Constraints::default()
		})];
		assert_eq!(
			render(
				&visual_basic::DIALECT,
				DEFAULT_WRAP_COLUMN,
				"Box",
				&parameters,
				false
			),
			"Box(Of T As Structure)"
		);
	}

	#[test]
	fn long_parameter_lists_wrap_with_one_indent() {
		let parameters: Vec<GenericParameter> = (1..=8)
			.map(|index| GenericParameter::new(format!("TArgument{index}")))
			.collect();
		let text = render(
			&csharp::DIALECT,
			DEFAULT_WRAP_COLUMN,
			"public class Tuple",
			&parameters,
			false,
		);
		let lines: Vec<&str> = text.lines().collect();
		assert!(lines.len() > 1);
		assert!(lines[1].starts_with('\t'));
		assert!(!lines[1][1..].starts_with('\t'));
		assert!(lines[0].len() > DEFAULT_WRAP_COLUMN);
		assert!(lines[0].ends_with(','));
	}
}
