use crate::host::{AccountingData, CompanyId};
use crate::period::{self, DateRange};
use crate::registry::{ArgSpec, Function, FunctionRegistry};
use crate::serial;
use crate::value::{self, Value};
use anyhow::{anyhow, Result};
use chrono::NaiveDate;

const DEFAULT_CURRENCY_FORMAT: &str = "#,##0.00";
const FISCAL_DATE_FORMAT: &str = "m/d/yyyy";

fn fin_args() -> Vec<ArgSpec> {
    vec![
        ArgSpec {
            name: "account_codes (string)",
            description: "The prefix of the accounts.",
        },
        ArgSpec {
            name: "date_range (string, date)",
            description: "The date range. Supported formats are \"21/12/2022\", \"Q1/2022\", \"12/2022\", and \"2022\".",
        },
        ArgSpec {
            name: "offset (number, default=0)",
            description: "Year offset applied to date_range.",
        },
        ArgSpec {
            name: "company_id (number, optional)",
            description: "The company to target (Advanced).",
        },
        ArgSpec {
            name: "include_unposted (boolean, default=FALSE)",
            description: "Set to TRUE to include unposted entries.",
        },
    ]
}

fn fiscal_args() -> Vec<ArgSpec> {
    vec![
        ArgSpec {
            name: "date (date)",
            description: "Reference date.",
        },
        ArgSpec {
            name: "company_id (number, optional)",
            description: "The company.",
        },
    ]
}

/// An argument the caller actually provided, missing and empty cells
/// both mean "use the default".
fn given(args: &[Value], index: usize) -> Option<&Value> {
    args.get(index).filter(|value| **value != Value::Empty)
}

fn company_arg(args: &[Value], index: usize) -> Result<Option<CompanyId>> {
    match given(args, index) {
        Some(value) => Ok(Some(value::to_number(value)? as CompanyId)),
        None => Ok(None),
    }
}

/// Splits the account codes argument on commas, one prefix per entry,
/// trimmed and sorted.
fn account_codes(value: &Value) -> Vec<String> {
    let mut codes: Vec<String> = value::to_text(value)
        .split(',')
        .map(|code| code.trim().to_string())
        .collect();
    codes.sort();
    codes
}

struct FinArgs {
    codes: Vec<String>,
    range: DateRange,
    offset: i32,
    company: Option<CompanyId>,
    include_unposted: bool,
}

impl FinArgs {
    fn parse(args: &[Value]) -> Result<Self> {
        let codes = args
            .first()
            .ok_or_else(|| anyhow!("missing account_codes argument"))?;
        let range = args
            .get(1)
            .ok_or_else(|| anyhow!("missing date_range argument"))?;

        Ok(FinArgs {
            codes: account_codes(codes),
            range: period::parse_period(range)?,
            offset: match given(args, 2) {
                Some(value) => value::to_number(value)? as i32,
                None => 0,
            },
            company: company_arg(args, 3)?,
            include_unposted: match given(args, 4) {
                Some(value) => value::to_boolean(value)?,
                None => false,
            },
        })
    }
}

fn fiscal_date_args(args: &[Value]) -> Result<(NaiveDate, Option<CompanyId>)> {
    let date_value = args.first().ok_or_else(|| anyhow!("missing date argument"))?;
    let date = serial::coerce_to_date(date_value).ok_or_else(|| {
        anyhow!(format!(
            "`{}' is not a valid date",
            value::to_text(date_value)
        ))
    })?;
    Ok((date, company_arg(args, 1)?))
}

fn date_result(date: NaiveDate) -> Result<Value> {
    serial::date_to_serial(date)
        .map(Value::Number)
        .ok_or_else(|| anyhow!(format!("date {} has no serial representation", date)))
}

fn compute_credit(host: &dyn AccountingData, args: &[Value]) -> Result<Value> {
    let fin = FinArgs::parse(args)?;
    Ok(Value::Number(host.account_prefix_credit(
        &fin.codes,
        &fin.range,
        fin.offset,
        fin.company,
        fin.include_unposted,
    )))
}

fn compute_debit(host: &dyn AccountingData, args: &[Value]) -> Result<Value> {
    let fin = FinArgs::parse(args)?;
    Ok(Value::Number(host.account_prefix_debit(
        &fin.codes,
        &fin.range,
        fin.offset,
        fin.company,
        fin.include_unposted,
    )))
}

fn compute_balance(host: &dyn AccountingData, args: &[Value]) -> Result<Value> {
    let fin = FinArgs::parse(args)?;
    let debit = host.account_prefix_debit(
        &fin.codes,
        &fin.range,
        fin.offset,
        fin.company,
        fin.include_unposted,
    );
    let credit = host.account_prefix_credit(
        &fin.codes,
        &fin.range,
        fin.offset,
        fin.company,
        fin.include_unposted,
    );
    Ok(Value::Number(debit - credit))
}

fn compute_fiscal_start(host: &dyn AccountingData, args: &[Value]) -> Result<Value> {
    let (date, company) = fiscal_date_args(args)?;
    date_result(host.fiscal_start_date(date, company))
}

fn compute_fiscal_end(host: &dyn AccountingData, args: &[Value]) -> Result<Value> {
    let (date, company) = fiscal_date_args(args)?;
    date_result(host.fiscal_end_date(date, company))
}

fn compute_account_group(host: &dyn AccountingData, args: &[Value]) -> Result<Value> {
    let account_type = args.first().ok_or_else(|| anyhow!("missing type argument"))?;
    let codes = host.account_group_codes(&value::to_text(account_type));
    Ok(Value::Text(codes.join(",")))
}

fn currency_format(host: &dyn AccountingData, args: &[Value]) -> Option<String> {
    let company = given(args, 3)
        .and_then(|value| value::to_number(value).ok())
        .map(|number| number as CompanyId);
    Some(
        host.company_currency_format(company)
            .unwrap_or_else(|| DEFAULT_CURRENCY_FORMAT.to_string()),
    )
}

fn fiscal_date_format(_host: &dyn AccountingData, _args: &[Value]) -> Option<String> {
    Some(FISCAL_DATE_FORMAT.to_string())
}

/// Registers the six accounting functions into the host registry.
pub fn register_accounting_functions(registry: &mut FunctionRegistry) -> Result<()> {
    registry.add(
        "ODOO.CREDIT",
        Function {
            description: "Get the total credit for the specified account(s) and period.",
            args: fin_args(),
            compute: compute_credit,
            format: Some(currency_format),
        },
    )?;
    registry.add(
        "ODOO.DEBIT",
        Function {
            description: "Get the total debit for the specified account(s) and period.",
            args: fin_args(),
            compute: compute_debit,
            format: Some(currency_format),
        },
    )?;
    registry.add(
        "ODOO.BALANCE",
        Function {
            description: "Get the total balance for the specified account(s) and period.",
            args: fin_args(),
            compute: compute_balance,
            format: Some(currency_format),
        },
    )?;
    registry.add(
        "ODOO.FISCALYEAR.START",
        Function {
            description: "Returns the starting date of the fiscal year encompassing the provided date.",
            args: fiscal_args(),
            compute: compute_fiscal_start,
            format: Some(fiscal_date_format),
        },
    )?;
    registry.add(
        "ODOO.FISCALYEAR.END",
        Function {
            description: "Returns the ending date of the fiscal year encompassing the provided date.",
            args: fiscal_args(),
            compute: compute_fiscal_end,
            format: Some(fiscal_date_format),
        },
    )?;
    registry.add(
        "ODOO.ACCOUNT.GROUP",
        Function {
            description: "Returns the account codes of a given group.",
            args: vec![ArgSpec {
                name: "type (string)",
                description: "Account type.",
            }],
            compute: compute_account_group,
            format: None,
        },
    )?;

    Ok(())
}
