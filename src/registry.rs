use crate::host::AccountingData;
use crate::value::Value;
use anyhow::{anyhow, Result};
use indexmap::IndexMap;

pub type ComputeFn = fn(&dyn AccountingData, &[Value]) -> Result<Value>;
pub type FormatFn = fn(&dyn AccountingData, &[Value]) -> Option<String>;

/// Argument metadata, surfaced by the host in the formula assistant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub description: &'static str,
}

pub struct Function {
    pub description: &'static str,
    pub args: Vec<ArgSpec>,
    pub compute: ComputeFn,
    /// Display format for the computed value, when the function imposes one.
    pub format: Option<FormatFn>,
}

/// Function registry keyed by uppercase name, iteration follows
/// registration order.
#[derive(Default)]
pub struct FunctionRegistry {
    entries: IndexMap<String, Function>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add(&mut self, name: &str, function: Function) -> Result<()> {
        let key = name.to_uppercase();
        if self.entries.contains_key(&key) {
            return Err(anyhow!(format!("function `{}' is already registered", key)));
        }
        self.entries.insert(key, function);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Function> {
        self.entries.get(&name.to_uppercase())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Evaluates a registered function against the host data layer.
    pub fn compute(
        &self,
        name: &str,
        host: &dyn AccountingData,
        args: &[Value],
    ) -> Result<Value> {
        let function = self
            .get(name)
            .ok_or_else(|| anyhow!(format!("unknown function `{}'", name)))?;
        (function.compute)(host, args)
    }

    /// Display format the function imposes on its result, if any.
    pub fn format(
        &self,
        name: &str,
        host: &dyn AccountingData,
        args: &[Value],
    ) -> Result<Option<String>> {
        let function = self
            .get(name)
            .ok_or_else(|| anyhow!(format!("unknown function `{}'", name)))?;
        Ok(function.format.and_then(|format| format(host, args)))
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::{Function, FunctionRegistry};
    use crate::value::Value;
    use anyhow::Result;

    fn noop() -> Function {
        Function {
            description: "does nothing",
            args: vec![],
            compute: |_, _| Ok(Value::Empty),
            format: None,
        }
    }

    #[test]
    fn lookup_is_case_insensitive() -> Result<()> {
        let mut registry = FunctionRegistry::new();
        registry.add("Odoo.Credit", noop())?;
        assert!(registry.get("ODOO.CREDIT").is_some());
        assert!(registry.get("odoo.credit").is_some());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["ODOO.CREDIT"]);
        Ok(())
    }

    #[test]
    fn duplicate_registration_is_rejected() -> Result<()> {
        let mut registry = FunctionRegistry::new();
        registry.add("ODOO.DEBIT", noop())?;
        assert_eq!(
            format!("{}", registry.add("odoo.debit", noop()).unwrap_err()),
            "function `ODOO.DEBIT' is already registered"
        );
        Ok(())
    }
}
