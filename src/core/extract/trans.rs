//! Classification of templated elements such as
//! `<Trans i18nKey="key" values={{ name }} count={n} />`.

use crate::core::syntax::{AttributeValue, ObjectShape, TemplatedElement};

use super::record::VariableKnowledge;

const KEY_ATTRIBUTE: &str = "i18nKey";
const VALUES_ATTRIBUTE: &str = "values";
/// `count` becomes an interpolation variable whenever the attribute is present.
const COUNT_ATTRIBUTE: &str = "count";

/// Classify a templated element into its key and variable knowledge.
///
/// Returns `None` when the key is missing, empty, or not a string literal.
/// A `count` attribute is appended to known variables only; when `values` is
/// present but not a plain object literal the result is `Unknown`.
pub fn classify_element(element: &TemplatedElement) -> Option<(String, VariableKnowledge)> {
    let key = match &element.attribute(KEY_ATTRIBUTE)?.value {
        AttributeValue::StringLiteral(key) if !key.is_empty() => key.clone(),
        _ => return None,
    };

    let has_count = element.has_attribute(COUNT_ATTRIBUTE);

    let knowledge = match element.attribute(VALUES_ATTRIBUTE).map(|attr| &attr.value) {
        None => VariableKnowledge::Known(with_count(Vec::new(), has_count)),
        Some(AttributeValue::Object(ObjectShape::Simple(names))) => {
            VariableKnowledge::Known(with_count(names.clone(), has_count))
        }
        Some(_) => VariableKnowledge::Unknown,
    };

    Some((key, knowledge))
}

fn with_count(mut names: Vec<String>, has_count: bool) -> Vec<String> {
    if has_count {
        names.push(COUNT_ATTRIBUTE.to_string());
    }
    names
}
