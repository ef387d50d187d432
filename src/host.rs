use crate::period::DateRange;
use chrono::NaiveDate;

pub type CompanyId = i64;

/// The accounting data layer the sheet functions delegate to. Balance
/// aggregation, fiscal year configuration, and account grouping all live
/// on the host side, this trait is the entire contract.
///
/// `offset` is a year offset the host applies to the date range before
/// aggregating. `company` selects a company, or the active one when
/// `None`.
pub trait AccountingData {
    /// Total credit over the accounts whose code starts with one of the
    /// given prefixes.
    fn account_prefix_credit(
        &self,
        codes: &[String],
        range: &DateRange,
        offset: i32,
        company: Option<CompanyId>,
        include_unposted: bool,
    ) -> f64;

    /// Total debit, same arguments as [`account_prefix_credit`](Self::account_prefix_credit).
    fn account_prefix_debit(
        &self,
        codes: &[String],
        range: &DateRange,
        offset: i32,
        company: Option<CompanyId>,
        include_unposted: bool,
    ) -> f64;

    /// Start of the fiscal year encompassing the given date.
    fn fiscal_start_date(&self, date: NaiveDate, company: Option<CompanyId>) -> NaiveDate;

    /// End of the fiscal year encompassing the given date.
    fn fiscal_end_date(&self, date: NaiveDate, company: Option<CompanyId>) -> NaiveDate;

    /// Account codes belonging to the given account type.
    fn account_group_codes(&self, account_type: &str) -> Vec<String>;

    /// The currency display format configured for a company, if any.
    fn company_currency_format(&self, company: Option<CompanyId>) -> Option<String>;
}
