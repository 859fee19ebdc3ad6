//! Builder for DynamoDB condition and projection expressions.
//!
//! Every attribute name is aliased to a `#nN` placeholder and every value to a `:vN`
//! placeholder, so reserved words such as `group` can be used as attribute names.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("unset parameter: builder has no key condition, filter or projection")]
    UnsetParameter,
    #[error("empty filter condition")]
    EmptyCondition,
    #[error("attribute name must not be empty")]
    EmptyName,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Name(String);

pub fn name(attribute: impl Into<String>) -> Name {
    Name(attribute.into())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Value(AttributeValue);

pub fn value(value: impl Into<Value>) -> Value {
    value.into()
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value(AttributeValue::S(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value(AttributeValue::S(value))
    }
}

impl From<AttributeValue> for Value {
    fn from(value: AttributeValue) -> Self {
        Value(value)
    }
}

impl Name {
    pub fn equal(self, value: impl Into<Value>) -> Condition {
        Condition::Equal(self, value.into())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Equal(Name, Value),
    And(Vec<Condition>),
    Or(Vec<Condition>),
}

impl Condition {
    pub fn and(self, other: Condition) -> Condition {
        match self {
            Condition::And(mut operands) => {
                operands.push(other);
                Condition::And(operands)
            }
            condition => Condition::And(vec![condition, other]),
        }
    }

    pub fn or(self, other: Condition) -> Condition {
        match self {
            Condition::Or(mut operands) => {
                operands.push(other);
                Condition::Or(operands)
            }
            condition => Condition::Or(vec![condition, other]),
        }
    }

    /// Folds `conditions` into a single disjunction. `None` when there is nothing to fold.
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Option<Condition> {
        conditions.into_iter().reduce(Condition::or)
    }
}

/// The rendered expression strings plus the placeholder maps a request needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    pub key_condition: Option<String>,
    pub filter: Option<String>,
    pub projection: Option<String>,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

impl Expression {
    pub fn names(&self) -> Option<HashMap<String, String>> {
        (!self.names.is_empty()).then(|| self.names.clone())
    }

    pub fn values(&self) -> Option<HashMap<String, AttributeValue>> {
        (!self.values.is_empty()).then(|| self.values.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Builder {
    key_condition: Option<Condition>,
    filter: Option<Condition>,
    projection: Option<Vec<Name>>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_condition(mut self, condition: Condition) -> Self {
        self.key_condition = Some(condition);
        self
    }

    pub fn with_filter(mut self, condition: Condition) -> Self {
        self.filter = Some(condition);
        self
    }

    pub fn with_projection(mut self, names: Vec<Name>) -> Self {
        self.projection = Some(names);
        self
    }

    pub fn build(self) -> Result<Expression, ExpressionError> {
        if self.key_condition.is_none() && self.filter.is_none() && self.projection.is_none() {
            return Err(ExpressionError::UnsetParameter);
        }

        let mut aliases = Aliases::default();
        let key_condition = self
            .key_condition
            .map(|condition| aliases.render(&condition))
            .transpose()?;
        let filter = self
            .filter
            .map(|condition| aliases.render(&condition))
            .transpose()?;
        let projection = self
            .projection
            .map(|names| {
                if names.is_empty() {
                    return Err(ExpressionError::EmptyCondition);
                }
                names
                    .iter()
                    .map(|name| aliases.name(name))
                    .collect::<Result<Vec<_>, _>>()
                    .map(|aliased| aliased.join(", "))
            })
            .transpose()?;

        Ok(Expression {
            key_condition,
            filter,
            projection,
            names: aliases.names,
            values: aliases.values,
        })
    }
}

#[derive(Default)]
struct Aliases {
    names: HashMap<String, String>,
    by_attribute: HashMap<String, String>,
    values: HashMap<String, AttributeValue>,
}

impl Aliases {
    fn name(&mut self, name: &Name) -> Result<String, ExpressionError> {
        if name.0.is_empty() {
            return Err(ExpressionError::EmptyName);
        }
        if let Some(alias) = self.by_attribute.get(&name.0) {
            return Ok(alias.clone());
        }
        let alias = format!("#n{}", self.by_attribute.len());
        self.by_attribute.insert(name.0.clone(), alias.clone());
        self.names.insert(alias.clone(), name.0.clone());
        Ok(alias)
    }

    fn value(&mut self, value: &Value) -> String {
        let alias = format!(":v{}", self.values.len());
        self.values.insert(alias.clone(), value.0.clone());
        alias
    }

    fn render(&mut self, condition: &Condition) -> Result<String, ExpressionError> {
        match condition {
            Condition::Equal(name, value) => {
                let name = self.name(name)?;
                let value = self.value(value);
                Ok(format!("{name} = {value}"))
            }
            Condition::And(operands) => self.join(operands, " AND "),
            Condition::Or(operands) => self.join(operands, " OR "),
        }
    }

    fn join(&mut self, operands: &[Condition], separator: &str) -> Result<String, ExpressionError> {
        match operands {
            [] => Err(ExpressionError::EmptyCondition),
            [single] => self.render(single),
            _ => operands
                .iter()
                .map(|operand| self.render(operand).map(|rendered| format!("({rendered})")))
                .collect::<Result<Vec<_>, _>>()
                .map(|rendered| rendered.join(separator)),
        }
    }
}
