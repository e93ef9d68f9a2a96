//! Strategy option schemas and per-call configuration binding.
//!
//! Every strategy declares a static [`StrategySchema`]: the set of options it
//! accepts, which of them are required, and which participate in a shared
//! [`Alias`]. For one comparison call the binder resolves each strategy's
//! options from the caller's flat [`Config`] plus [`AliasValues`], producing
//! a per-strategy [`BoundOptions`] handed to the strategy on every
//! invocation.
//!
//! Resolution order per option: a config key matching the option's name wins;
//! otherwise the option's alias is consulted; otherwise the option stays
//! unbound and the strategy's own default applies. After all strategies of a
//! call are bound, any config key or alias consumed by no strategy fails the
//! call eagerly with [`BindError::UnknownOption`].

use crate::alias::Alias;
use crate::errors::BindError;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{OnceLock, RwLock};

/// One declared configuration option of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    name: &'static str,
    required: bool,
    alias: Option<Alias>,
}

impl OptionSpec {
    /// An option that must be bound from config or alias for the call to run.
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            alias: None,
        }
    }

    /// An option whose strategy-side default applies when unbound.
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            alias: None,
        }
    }

    /// Let this option participate in a shared alias.
    pub const fn with_alias(mut self, alias: Alias) -> Self {
        self.alias = Some(alias);
        self
    }

    /// The option's name, matched against config keys.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True when the option must be bound for the call to run.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The alias this option participates in, if any.
    pub fn alias(&self) -> Option<Alias> {
        self.alias
    }
}

/// Statically declared option schema of one strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategySchema {
    options: Vec<OptionSpec>,
}

impl StrategySchema {
    /// An empty schema: the strategy takes no options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare one more option.
    #[must_use]
    pub fn with_option(mut self, spec: OptionSpec) -> Self {
        self.options.push(spec);
        self
    }

    /// The declared options, in declaration order.
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }
}

/// Flat caller-supplied configuration for one comparison call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config(BTreeMap<String, Value>);

impl Config {
    /// An empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one named value.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// All configured keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// True when no values are configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Caller-supplied values keyed by [`Alias`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasValues(BTreeMap<Alias, Value>);

impl AliasValues {
    /// An empty alias map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one alias value.
    #[must_use]
    pub fn set(mut self, alias: Alias, value: impl Into<Value>) -> Self {
        self.0.insert(alias, value.into());
        self
    }

    /// Look up a value by alias.
    pub fn get(&self, alias: &Alias) -> Option<&Value> {
        self.0.get(alias)
    }

    /// All configured aliases, sorted by name.
    pub fn aliases(&self) -> impl Iterator<Item = &Alias> {
        self.0.keys()
    }

    /// True when no alias values are configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Options resolved for one strategy within one comparison call.
///
/// Required options are guaranteed present; optional options are present only
/// when the caller bound them, so strategies apply their own defaults via the
/// typed accessors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundOptions(BTreeMap<&'static str, Value>);

impl BoundOptions {
    /// The raw bound value, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// The bound value as an `f64`, if bound and numeric.
    pub fn f64(&self, name: &str) -> Option<f64> {
        self.0.get(name).and_then(Value::as_f64)
    }

    /// The bound value as a `u64`, if bound and an unsigned integer.
    pub fn u64(&self, name: &str) -> Option<u64> {
        self.0.get(name).and_then(Value::as_u64)
    }

    /// The bound value as a `bool`, if bound and boolean.
    pub fn bool(&self, name: &str) -> Option<bool> {
        self.0.get(name).and_then(Value::as_bool)
    }

    /// The bound value as a string slice, if bound and a string.
    pub fn str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }
}

/// Process-lifetime memo of strategy names whose schema already validated.
///
/// Validation is pure and schemas are immutable once declared, so entries are
/// never invalidated. Strategy names must be stable and unique per schema.
fn validated_schemas() -> &'static RwLock<BTreeSet<String>> {
    static CACHE: OnceLock<RwLock<BTreeSet<String>>> = OnceLock::new();
    CACHE.get_or_init(|| RwLock::new(BTreeSet::new()))
}

/// Validate a strategy's declared schema, memoized per strategy name.
///
/// The binding contract requires option names to be non-empty and unique
/// within a schema, and forbids two options of one schema from binding the
/// same alias (the binder could not tell which option a single alias value
/// should feed).
pub(crate) fn validate_schema(name: &str, schema: &StrategySchema) -> Result<(), BindError> {
    {
        let seen = validated_schemas()
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if seen.contains(name) {
            return Ok(());
        }
    }

    let invalid = |reason: String| BindError::InvalidSchema {
        strategy: name.to_owned(),
        reason,
    };

    let mut names: BTreeSet<&str> = BTreeSet::new();
    let mut aliases: BTreeSet<Alias> = BTreeSet::new();
    for spec in schema.options() {
        if spec.name().is_empty() {
            return Err(invalid("option name must not be empty".to_owned()));
        }
        if !names.insert(spec.name()) {
            return Err(invalid(format!(
                "option `{}` is declared more than once",
                spec.name()
            )));
        }
        if let Some(alias) = spec.alias() {
            if !aliases.insert(alias) {
                return Err(invalid(format!(
                    "alias `{}` is bound by more than one option",
                    alias
                )));
            }
        }
    }

    validated_schemas()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .insert(name.to_owned());
    Ok(())
}

/// Binds every strategy of one comparison call and tracks which config keys
/// and aliases were actually consumed.
pub(crate) struct CallBinder<'a> {
    config: &'a Config,
    aliases: &'a AliasValues,
    consumed_keys: BTreeSet<&'a str>,
    consumed_aliases: BTreeSet<Alias>,
}

impl<'a> CallBinder<'a> {
    pub(crate) fn new(config: &'a Config, aliases: &'a AliasValues) -> Self {
        Self {
            config,
            aliases,
            consumed_keys: BTreeSet::new(),
            consumed_aliases: BTreeSet::new(),
        }
    }

    /// Validate one strategy's schema and resolve its options for this call.
    pub(crate) fn bind(
        &mut self,
        strategy: &str,
        schema: &StrategySchema,
    ) -> Result<BoundOptions, BindError> {
        validate_schema(strategy, schema)?;

        let mut bound: BTreeMap<&'static str, Value> = BTreeMap::new();
        let mut missing: Vec<String> = Vec::new();
        for spec in schema.options() {
            let value = if let Some((key, value)) = self.config.0.get_key_value(spec.name()) {
                self.consumed_keys.insert(key.as_str());
                Some(value.clone())
            } else if let Some((alias, value)) = spec
                .alias()
                .and_then(|alias| self.aliases.get(&alias).map(|value| (alias, value)))
            {
                self.consumed_aliases.insert(alias);
                Some(value.clone())
            } else {
                None
            };

            match value {
                Some(value) => {
                    bound.insert(spec.name(), value);
                }
                None if spec.is_required() => missing.push(spec.name().to_owned()),
                None => {}
            }
        }

        if !missing.is_empty() {
            return Err(BindError::MissingRequiredOption {
                strategy: strategy.to_owned(),
                options: missing,
            });
        }
        Ok(BoundOptions(bound))
    }

    /// Fail eagerly if any caller-supplied key or alias went unconsumed.
    pub(crate) fn finish(self) -> Result<(), BindError> {
        let unused_keys = self
            .config
            .keys()
            .filter(|key| !self.consumed_keys.contains(key))
            .map(str::to_owned);
        let unused_aliases = self
            .aliases
            .aliases()
            .filter(|alias| !self.consumed_aliases.contains(*alias))
            .map(|alias| format!("alias `{}`", alias));

        let mut unused: Vec<String> = unused_keys.chain(unused_aliases).collect();
        if unused.is_empty() {
            return Ok(());
        }
        unused.sort();
        Err(BindError::UnknownOption { keys: unused })
    }
}
